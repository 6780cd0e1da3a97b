use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

pub use tracing::{debug, error, info, trace, warn};

use crate::consts::LOG_LEVEL_ENV;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogType {
    Tool,
    Test,
}

static LOGGING: Once = Once::new();

/// Installs the global tracing subscriber.
/// Only the first call has any effect, so tests can call it freely.
/// The level can be overriden with the HEXBIN_LOG environment variable.
pub fn setup_logging(level: &str, log_type: LogType) {
    LOGGING.call_once(|| {
        // Bridge `log` records from dependencies, ignore if someone else already did it
        let _ = tracing_log::LogTracer::init();

        let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
            .or_else(|_| EnvFilter::try_new(level))
            .unwrap_or_else(|_| EnvFilter::new("info"));

        let result = match log_type {
            LogType::Tool => tracing::subscriber::set_global_default(
                tracing_subscriber::registry()
                    .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                    .with(filter),
            ),
            LogType::Test => tracing::subscriber::set_global_default(
                tracing_subscriber::registry()
                    .with(fmt::layer().with_test_writer())
                    .with(filter),
            ),
        };
        if let Err(e) = result {
            eprintln!("Logging already initialized: {}", e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice() {
        setup_logging("debug", LogType::Test);
        setup_logging("trace", LogType::Test);
        assert!(LOGGING.is_completed());
        debug!("logging initialized");
    }
}
