//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Honours `RUST_LOG`; defaults to `info` for this crate when unset.
pub fn init() {
    init_with_filter("abyss_sim=info");
}

/// Initialize the logging system with a default filter such as
/// [`SimulationConfig::log_filter`](crate::core::SimulationConfig::log_filter)
///
/// `RUST_LOG` still takes precedence when set.
pub fn init_with_filter(default_filter: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();
}

/// Initialize logging for tests, ignoring repeated initialization
pub fn init_for_tests() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("abyss_sim=debug"))
        .is_test(true)
        .try_init();
}
