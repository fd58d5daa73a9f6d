//! Log output for applications embedding the sign-in flow.

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter};

/// Default verbosity of [init_logging].
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

fn convert_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}

/// Installs a global subscriber writing to stderr.
///
/// `RUST_LOG` directives override `log_level` (default: info). Only the first call installs a
/// subscriber; later calls do nothing.
pub fn init_logging(log_level: Option<LogLevel>) {
    let log_level = convert_level(log_level.unwrap_or(LogLevel::Info));

    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_levels() {
        assert_eq!(convert_level(LogLevel::Trace), Level::TRACE);
        assert_eq!(convert_level(LogLevel::Warn), Level::WARN);
        assert_eq!(convert_level(LogLevel::Error), Level::ERROR);
    }

    #[test]
    fn repeated_initialisation_is_harmless() {
        init_logging(Some(LogLevel::Debug));
        init_logging(None);
        tracing::info!("logging initialised");
    }
}
