mod cli;

use aalib::logging::{self, AppLogger};
use aalib::{HardwareSettings, RenderSettings, Screen};
use anyhow::Context as _;
use clap::Parser as _;
use cli::Opts;
use image::imageops::{self, FilterType};
use std::error::Error;
use termcolor::ColorChoice;

fn main() {
    log::set_logger(AppLogger::init()).expect("failed to set logger");
    let has_err = if let Err(err) = run() {
        log::error!("{}", err);
        let mut last_source: &dyn Error = &*err;
        while let Some(source) = last_source.source() {
            log::error!("  caused by {}", source);
            last_source = source;
        }
        true
    } else {
        false
    };
    log::logger().flush();

    if has_err {
        std::process::exit(-1);
    }
}

fn run() -> anyhow::Result<()> {
    let opts = Opts::parse();

    unsafe { AppLogger::instance().set_level(logging::level_filter(opts.verbose, opts.quiet)) };
    let color_choice = match opts.color_choice {
        ColorChoice::Auto if atty::is(atty::Stream::Stderr) => ColorChoice::Always,
        ColorChoice::Auto => ColorChoice::Never,
        choice => choice,
    };
    unsafe { AppLogger::instance().set_color_choice(color_choice) };

    let term = std::env::var("TERM").ok();
    let kind = opts
        .screen
        .resolve(atty::is(atty::Stream::Stdout), term.as_deref());
    log::debug!("using {:?} screen", kind);

    let mut screen = Screen::new(kind, &HardwareSettings::with_size(opts.width, opts.height))
        .context("failed to create screen")?;

    let mut image = image::open(&opts.image)
        .with_context(|| format!("failed to load image `{}`", opts.image.display()))?
        .into_luma8();
    if opts.invert {
        imageops::invert(&mut image);
    }

    let (width, height) = screen.virtual_size();
    log::debug!(
        "resizing {}x{} image to {}x{}",
        image.width(),
        image.height(),
        width,
        height
    );
    let image = imageops::resize(&image, width as u32, height as u32, FilterType::Triangle);
    screen.put_image((0, 0), &image)?;

    let text = screen
        .render_text(&RenderSettings::default())
        .context("error occurred while rendering")?;
    println!("{}", text);

    Ok(())
}
