use error_stack::{Report, ResultExt};
use log::LevelFilter;

use crate::error::AdapterError;

/// Install the process-wide logger.
///
/// Library code only talks to the `log` facade; binaries call this once at
/// start-up. Records go to stderr so stdout stays free for command output.
///
/// # Errors
///
/// Returns [`AdapterError::Configuration`] if a logger is already installed.
pub fn init_logging(level: LevelFilter) -> Result<(), Report<AdapterError>> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}  {} [{}] {}",
                chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()
        .change_context(AdapterError::Configuration {
            message: "Failed to initialize logger".to_string(),
        })
}

/// Log level helper to determine if debug logging is enabled
#[must_use]
pub fn is_debug_enabled() -> bool {
    log::log_enabled!(log::Level::Debug)
}
