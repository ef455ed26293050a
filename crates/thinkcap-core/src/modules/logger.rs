//! Logging setup and convenience wrappers.

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber.
///
/// `RUST_LOG` wins over `default_level`. Calling this twice keeps the first
/// subscriber and logs a warning.
pub fn init_logger(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let result = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
    if let Err(e) = result {
        warn!("Logger already initialized: {}", e);
    }
}

/// Log info message.
pub(crate) fn log_info(message: &str) {
    info!("{}", message);
}

/// Log warning message.
pub(crate) fn log_warn(message: &str) {
    warn!("{}", message);
}
