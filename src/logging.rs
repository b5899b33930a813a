//! File logging
//!
//! The terminal belongs to the interactive session, so logs only ever go to a
//! file. Logging stays off unless enabled in the config or through the
//! `TIPSTER_LOG` environment variable, whose value is used as the filter.

use crate::config::LogsConfig;
use std::env;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "TIPSTER_LOG";

/// Errors while setting up logging
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Couldn't create the log file {}: {source}", path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Couldn't parse the log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),
}

/// Resolve the log file path and the filter, `None` when logging is disabled
#[must_use]
pub fn resolve_path_and_filter(data_dir: &Path, logs: &LogsConfig) -> (PathBuf, Option<String>) {
    let env_filter = env::var(LOG_ENV).ok();
    let logs_path = data_dir.join("tipster.log");
    let filter = (logs.enabled || env_filter.is_some())
        .then(|| env_filter.unwrap_or_else(|| logs.filter.clone()));
    (logs_path, filter)
}

/// Initialize the tracing subscriber writing to `logs_path`
///
/// Does nothing when `filter` is `None`.
///
/// # Errors
///
/// Returns `LoggingError` if the file cannot be created or the filter is invalid.
pub fn init(logs_path: &Path, filter: Option<String>) -> Result<(), LoggingError> {
    let Some(filter) = filter else {
        return Ok(());
    };

    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .parse(filter)?;

    if let Some(parent) = logs_path.parent() {
        fs::create_dir_all(parent).map_err(|source| LoggingError::File {
            path: logs_path.to_path_buf(),
            source,
        })?;
    }
    let log_file = File::create(logs_path).map_err(|source| LoggingError::File {
        path: logs_path.to_path_buf(),
        source,
    })?;

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(env_filter);
    tracing_subscriber::registry().with(file_layer).init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Logging initialized");
    Ok(())
}
