//! Tracing subscriber setup for the command-line tool

use std::path::Path;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::{LOG_ENV_VAR, LogConfig};

/// Parse an `EnvFilter` directive string, rejecting malformed directives.
pub fn filter_from_level(level: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(level)
}

/// Build the filter: `SEMVER_VALUE_LOG` wins over the configured level.
pub fn env_filter(config: &LogConfig) -> anyhow::Result<EnvFilter> {
    match std::env::var(LOG_ENV_VAR) {
        Ok(level) => filter_from_level(&level)
            .with_context(|| format!("Invalid {LOG_ENV_VAR} filter '{level}'")),
        Err(_) => filter_from_level(&config.level)
            .with_context(|| format!("Invalid log level '{}' in config", config.level)),
    }
}

/// Install the global subscriber.
///
/// Human-readable logs go to stderr. When `config.file` is set, JSON logs are
/// also appended to `log_path`; keep the returned guard alive until exit so
/// buffered lines are flushed.
pub fn init(config: &LogConfig, log_path: &Path) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = env_filter(config)?;
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = if config.file {
        let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        let file_name = log_path
            .file_name()
            .context("Log path has no file name")?;

        let appender = tracing_appender::rolling::never(dir, file_name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().json().with_ansi(false).with_writer(writer);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tracing_subscriber::filter::LevelFilter;

    #[rstest]
    #[case("debug", Some(LevelFilter::DEBUG))]
    #[case("warn", Some(LevelFilter::WARN))]
    #[case("semver_value=trace,info", Some(LevelFilter::TRACE))]
    fn filter_from_level_parses_directives(
        #[case] level: &str,
        #[case] expected: Option<LevelFilter>,
    ) {
        assert_eq!(filter_from_level(level).unwrap().max_level_hint(), expected);
    }

    #[rstest]
    #[case("debug=,=bogus[")]
    #[case("=bogus[")]
    fn filter_from_level_rejects_malformed_directives(#[case] level: &str) {
        assert!(filter_from_level(level).is_err());
    }
}
