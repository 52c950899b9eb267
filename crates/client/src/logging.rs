//! Tracing setup for the binary.
use std::path::Path;

use anyhow::{Context, Result};
use meal_core::{DomainError, ErrorSeverity};
use meal_runtime::{RepositoryError, RuntimeError};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE: &str = "meal-max.log";

/// Log to stderr and to `log_dir/meal-max.log`.
///
/// `RUST_LOG` overrides the default `info` level. The returned guard flushes
/// the file writer on drop, so keep it alive for the whole run.
pub fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("Failed to create log directory: {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    tracing::debug!("Log file: {}", log_dir.join(LOG_FILE).display());
    Ok(guard)
}

/// Error code and severity of a command failure, when it came from the arena.
pub fn classify(err: &anyhow::Error) -> Option<(&'static str, ErrorSeverity)> {
    if let Some(err) = err.downcast_ref::<RuntimeError>() {
        return Some((err.error_code(), err.severity()));
    }
    err.downcast_ref::<RepositoryError>()
        .map(|err| (err.error_code(), err.severity()))
}

/// Log a failed command before it is reported on exit.
pub fn log_failure(err: &anyhow::Error) {
    match classify(err) {
        Some((code, severity)) => {
            tracing::error!(code, severity = severity.as_str(), "{:#}", err)
        }
        None => tracing::error!("{:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use meal_core::MealId;

    use super::*;

    #[test]
    fn classify_reads_runtime_and_catalog_errors() {
        let err = anyhow::Error::from(RuntimeError::SelfBattle(MealId(1)));
        assert_eq!(
            classify(&err),
            Some(("ARENA_SELF_BATTLE", ErrorSeverity::Validation))
        );

        let err = anyhow::Error::from(RepositoryError::NotFound(MealId(9)));
        assert_eq!(
            classify(&err),
            Some(("CATALOG_MEAL_NOT_FOUND", ErrorSeverity::Validation))
        );

        assert_eq!(classify(&anyhow::anyhow!("clap said no")), None);
    }
}
