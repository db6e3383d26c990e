// File: src/logging.rs
// Logging bootstrap. Library code logs through the `log` facade only;
// binaries and tests that want output call `init` once at startup.
use anyhow::Result;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

pub use log::LevelFilter;

pub fn init(level: LevelFilter) -> Result<()> {
    TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;
    Ok(())
}

/// Debug builds default to `debug`, release builds to `info`.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}
