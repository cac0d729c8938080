//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
pub fn init() {
    env_logger::init();
}

/// Initialize the logging system with a fallback level filter
///
/// Uses `RUST_LOG` when set, otherwise the given filter (e.g. `"info"`).
/// Useful for demo binaries that should print without extra setup.
pub fn init_with_default(filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}
