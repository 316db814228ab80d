use core::error::Error;

use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Installs the stderr logger. `verbosity` counts `-v` flags.
pub fn init(verbosity: usize) -> Result<(), Box<dyn Error>> {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level("index_mask", level)
        .with_utc_timestamps()
        .init()?;

    Ok(())
}
