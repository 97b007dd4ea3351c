//! Bindings for [AAlib](http://aa-project.sourceforge.net/aalib/), an ASCII
//! art library, plus the record layout report used to catch ABI drift
//! between the bindings and the installed `aalib.h`.

pub mod error;
pub mod format;
pub mod layout;
pub mod logging;
pub mod screen;
pub mod settings;

pub use aalib_sys::{Attribute, Dithering, Supported};
pub use error::{Error, ErrorKind};
pub use screen::{Screen, ScreenKind};
pub use settings::{HardwareSettings, RenderSettings};
