mod app;

use aalib::logging::AppLogger;
use std::error::Error;

fn main() {
    log::set_logger(AppLogger::init()).expect("failed to set logger");
    if let Err(err) = app::run() {
        log::error!("{}", err);
        let mut last_source: &dyn Error = &*err;
        while let Some(source) = last_source.source() {
            log::error!("  caused by {}", source);
            last_source = source;
        }
    }
    log::logger().flush();
}
