//! Raw bindings for [AAlib](http://aa-project.sourceforge.net/aalib/), an
//! ASCII art library.
//!
//! The records in this crate mirror `aalib.h` field for field. Nothing here
//! links against `libaa`: the shared library is opened at runtime through
//! [`Library`], the same way the library's scripting bindings load it.

#[macro_use]
mod macros;
#[cfg(all(test, feature = "header-check"))]
mod helper;
mod library;
mod params;

pub use library::{LoadError, Library, LIBAA_SONAME};
pub use params::{Context, Driver, Font, HardwareParams, RenderParams};

bitflags::bitflags! {
    /// Output modes a driver supports, stored in
    /// [`HardwareParams::supported`].
    #[repr(transparent)]
    pub struct Supported: libc::c_int {
        /// Normal characters.
        const NORMAL = 1;
        /// Dim characters.
        const DIM = 2;
        /// Bright characters.
        const BRIGHT = 4;
        /// Bold characters.
        const BOLD = 8;
        /// Reversed characters.
        const REVERSE = 16;
        /// Use every character the font has, not just printable ASCII.
        const ALL = 128;
        /// Use 8-bit characters.
        const EIGHT_BITS = 256;
    }
}

c_enum! {
    /// Text attribute of a rendered cell, as returned by `aa_attrs`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub enum Attribute: u8 {
        Normal = 0,
        Dim,
        Bright,
        Bold,
        Reverse,
    }
}

c_enum! {
    /// `aa_dithering_mode`.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub enum Dithering: u8 {
        None = 0,
        ErrorDistribution,
        FloydSteinberg,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn attribute_round_trips_through_c() {
        for &attr in Attribute::ALL {
            assert_eq!(Attribute::from_c(attr.to_c()), Some(attr));
        }
        assert_eq!(Attribute::from_c(5), None);
        assert_eq!(Attribute::from_c(-1), None);
    }

    #[test]
    fn dithering_values() {
        assert_eq!(Dithering::None.to_c(), 0);
        assert_eq!(Dithering::ErrorDistribution.to_c(), 1);
        assert_eq!(Dithering::FloydSteinberg.to_c(), 2);
    }

    #[cfg(feature = "header-check")]
    #[test]
    fn supported_masks_match_header() {
        use crate::helper::get_test_val;

        assert_eq!(Supported::NORMAL.bits() as usize, get_test_val("AA_NORMAL_MASK"));
        assert_eq!(Supported::DIM.bits() as usize, get_test_val("AA_DIM_MASK"));
        assert_eq!(Supported::BRIGHT.bits() as usize, get_test_val("AA_BRIGHT_MASK"));
        assert_eq!(Supported::BOLD.bits() as usize, get_test_val("AA_BOLD_MASK"));
        assert_eq!(Supported::REVERSE.bits() as usize, get_test_val("AA_REVERSE_MASK"));
        assert_eq!(Supported::ALL.bits() as usize, get_test_val("AA_ALL"));
        assert_eq!(Supported::EIGHT_BITS.bits() as usize, get_test_val("AA_EIGHT"));
    }
}
