//! Tracing subscriber setup: stderr or a daily-rotated file, text or JSON lines.

use crate::config::{Config, LogFormat};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

const LOG_FILE_PREFIX: &str = "claude-relay.log";
const DEFAULT_LOG_DIR: &str = "./logs";

/// `RUST_LOG` wins over the CLI level when it parses.
fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Resolved log destination; `None` means stderr.
fn log_dir(config: &Config) -> Option<&str> {
    config
        .logging_to_file
        .then(|| config.log_dir.as_deref().unwrap_or(DEFAULT_LOG_DIR))
}

/// Install the global subscriber.
///
/// The returned guard flushes the non-blocking file writer on drop, so hold
/// it until the process exits. Stderr logging returns `None`.
pub fn init_logging(level: &str, config: &Config) -> Option<WorkerGuard> {
    let (writer, guard) = match log_dir(config) {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(writer)
        .with_ansi(guard.is_none());

    match config.log_format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_resolution() {
        let mut config = Config::default();
        assert_eq!(log_dir(&config), None);

        config.logging_to_file = true;
        assert_eq!(log_dir(&config), Some("./logs"));

        config.log_dir = Some("/var/log/relay".into());
        assert_eq!(log_dir(&config), Some("/var/log/relay"));

        config.logging_to_file = false;
        assert_eq!(log_dir(&config), None);
    }
}
