//! Colored `level(target): message` logger shared by the binaries.
//!
//! Every record goes to stderr: stdout belongs to the layout report and to
//! rendered screens.

use log::{Level, LevelFilter};
use std::io::Write as _;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor as _};

static mut APP_LOGGER_LEVEL: LevelFilter = LevelFilter::Warn;
static mut APP_LOGGER_COLOR: ColorChoice = ColorChoice::Auto;

pub struct AppLogger;

impl AppLogger {
    pub fn init() -> &'static AppLogger {
        log::set_max_level(unsafe { Self::instance().level() });
        Self::instance()
    }

    pub fn instance() -> &'static AppLogger {
        static INSTANCE: AppLogger = AppLogger;
        &INSTANCE
    }

    /// # Safety
    ///
    /// Must not race with [`AppLogger::set_level`].
    pub unsafe fn level(&self) -> LevelFilter {
        APP_LOGGER_LEVEL
    }

    /// # Safety
    ///
    /// Must not race with [`AppLogger::set_color_choice`].
    pub unsafe fn color_choice(&self) -> ColorChoice {
        APP_LOGGER_COLOR
    }

    /// # Safety
    ///
    /// Only call this from the main thread before any other thread logs.
    pub unsafe fn set_level(&self, level: LevelFilter) {
        APP_LOGGER_LEVEL = level;
        log::set_max_level(level);
    }

    /// # Safety
    ///
    /// Only call this from the main thread before any other thread logs.
    pub unsafe fn set_color_choice(&self, color: ColorChoice) {
        APP_LOGGER_COLOR = color;
    }

    fn write_log(&self, record: &log::Record) -> std::io::Result<()> {
        let (level, color) = level_style(record.level());

        let mut output = StandardStream::stderr(unsafe { self.color_choice() });

        let mut level_color = ColorSpec::new();
        level_color.set_fg(Some(color)).set_bold(true);
        let mut reset_color = ColorSpec::new();
        reset_color.set_reset(true);

        output.set_color(&level_color)?;
        write!(output, "{:>width$}(", level, width = 7)?;
        output.set_color(&reset_color)?;
        write!(output, "{}", record.target())?;
        output.set_color(&level_color)?;
        write!(output, "): ")?;
        output.set_color(&reset_color)?;
        writeln!(output, "{}", record.args())?;

        Ok(())
    }
}

fn level_style(level: Level) -> (&'static str, Color) {
    match level {
        Level::Error => ("error", Color::Red),
        Level::Warn => ("warning", Color::Yellow),
        Level::Info => ("info", Color::Blue),
        Level::Debug => ("debug", Color::Green),
        Level::Trace => ("trace", Color::Magenta),
    }
}

impl log::Log for AppLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= unsafe { self.level() }
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            // nowhere left to report a failing stderr
            let _ = self.write_log(record);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Maps `-v` counts to a level: none=warning, 1=info, 2=debug, 3+=trace.
/// `quiet` turns logging off entirely.
pub fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }

    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
