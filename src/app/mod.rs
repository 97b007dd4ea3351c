mod printer;

use aalib::layout;
use anyhow::Context as _;
use std::io::Write as _;

/// Prints the layout report to stdout. Command line arguments are not
/// looked at.
pub fn run() -> anyhow::Result<()> {
    let ignored = std::env::args_os().skip(1).count();
    if ignored > 0 {
        log::trace!("ignoring {} command line argument(s)", ignored);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    printer::print_layouts(&mut out, layout::RECORDS)
        .context("error occurred while printing the layout report")?;
    out.flush().context("failed to flush stdout")?;

    Ok(())
}
