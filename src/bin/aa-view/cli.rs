use aalib::ScreenKind;
use clap::Parser;
use std::path::PathBuf;
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "aa-view", version, about = "Render an image as ASCII art with AAlib")]
pub struct Opts {
    /// Path of the image to render.
    pub image: PathBuf,

    /// Width of the output, in characters.
    #[arg(long, default_value_t = 76)]
    pub width: u32,

    /// Height of the output, in characters.
    #[arg(long, default_value_t = 24)]
    pub height: u32,

    /// Screen type: auto, ascii, ansi, or linux. `auto` picks ascii when
    /// stdout is not a terminal, linux on the Linux console, ansi otherwise.
    #[arg(long = "screen", default_value = "auto", value_parser = parse_screen)]
    pub screen: ScreenChoice,

    /// Invert the image before rendering.
    #[arg(long)]
    pub invert: bool,

    /// Sets the log level: (default)=+warning, 1=+info, 2=+debug, 3=+trace
    /// The `quiet` flag can be used to turn off logging completely.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disables logging.
    #[arg(short, long)]
    pub quiet: bool,

    /// Coloring of log messages: auto, always, never, and always-ansi.
    #[arg(long = "color", default_value = "auto", value_parser = parse_colorchoice)]
    pub color_choice: ColorChoice,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenChoice {
    Auto,
    Fixed(ScreenKind),
}

impl ScreenChoice {
    /// Resolves `auto` from whether stdout is a terminal and from `TERM`.
    pub fn resolve(self, stdout_is_tty: bool, term: Option<&str>) -> ScreenKind {
        match self {
            ScreenChoice::Fixed(kind) => kind,
            ScreenChoice::Auto if !stdout_is_tty => ScreenKind::Ascii,
            ScreenChoice::Auto if term == Some("linux") => ScreenKind::Linux,
            ScreenChoice::Auto => ScreenKind::Ansi,
        }
    }
}

pub fn parse_screen(s: &str) -> Result<ScreenChoice, String> {
    if s.eq_ignore_ascii_case("auto") {
        Ok(ScreenChoice::Auto)
    } else if s.eq_ignore_ascii_case("ascii") {
        Ok(ScreenChoice::Fixed(ScreenKind::Ascii))
    } else if s.eq_ignore_ascii_case("ansi") {
        Ok(ScreenChoice::Fixed(ScreenKind::Ansi))
    } else if s.eq_ignore_ascii_case("linux") {
        Ok(ScreenChoice::Fixed(ScreenKind::Linux))
    } else {
        Err(format!("{} is not a valid screen type", s))
    }
}

pub fn parse_colorchoice(s: &str) -> Result<ColorChoice, String> {
    if s.eq_ignore_ascii_case("auto") {
        Ok(ColorChoice::Auto)
    } else if s.eq_ignore_ascii_case("always") {
        Ok(ColorChoice::Always)
    } else if s.eq_ignore_ascii_case("never") {
        Ok(ColorChoice::Never)
    } else if s.eq_ignore_ascii_case("always-ansi") {
        Ok(ColorChoice::AlwaysAnsi)
    } else {
        Err(format!("{} is not a valid color value", s))
    }
}
