//! Log subscriber setup.

use semgram_foundation::{Error, ErrorKind, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable holding the default log filter.
pub const LOG_LEVEL_VAR: &str = "LOGLEVEL";

/// Filter used when neither the option nor the variable is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Picks the filter directive: the explicit level, then `LOGLEVEL`, then
/// `info`.
#[must_use]
pub fn log_directive(explicit: Option<&str>, env_value: Option<&str>) -> String {
    explicit
        .or(env_value)
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_LOG_LEVEL)
        .to_lowercase()
}

/// Installs the global `fmt` subscriber writing to stderr.
///
/// # Errors
///
/// Returns a `Config` error for an invalid filter directive or when a
/// subscriber is already installed.
pub fn init_logging(explicit: Option<&str>) -> Result<()> {
    let env_value = std::env::var(LOG_LEVEL_VAR).ok();
    let directive = log_directive(explicit, env_value.as_deref());
    let filter = EnvFilter::try_new(&directive)
        .map_err(|e| Error::new(ErrorKind::Config(format!("invalid log level {directive}: {e}"))))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::new(ErrorKind::Config(e.to_string())))
}
