use std::path::Path;

use seoscan_common::DEFAULT_INPUT_PATH;
use seoscan_common::observability::{LogConfig, init_logging};

mod driver;
mod report;

fn main() {
    // Logging is best effort; the scan runs whether or not it installs.
    let _ = init_logging(LogConfig::default());

    let outcome = driver::scan_path(Path::new(DEFAULT_INPUT_PATH));
    print!("{}", report::render(&outcome));
}
