//! Tracing setup for hosts embedding the controller.

use tracing_subscriber::EnvFilter;

use crate::error::LogInitError;

const DEFAULT_LOG_FILTER: &str = "pixar_browse=info";
const VERBOSE_LOG_FILTER: &str = "pixar_browse=debug";

/// Logging configuration
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Log every transition and fetch at debug level
    pub verbose: bool,
    /// Explicit filter directive; wins over `RUST_LOG` and `verbose`
    pub filter: Option<String>,
}

/// Install a stderr fmt subscriber for the whole process
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), LogInitError> {
    let filter = match &config.filter {
        Some(directive) => EnvFilter::new(directive),
        None if config.verbose => EnvFilter::new(VERBOSE_LOG_FILTER),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| LogInitError(e.to_string()))
}
