use std::path::PathBuf;

use thiserror::Error;

use recast_model::SpecError;

/// Errors from loading a mapping config.
///
/// All of these are precondition failures: a batch must never process a row
/// under a config that failed to load.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config not found: {path}")]
    NotFound { path: PathBuf },
    #[error("read config {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse config {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("invalid config {path}: {source}")]
    Invalid { path: PathBuf, source: SpecError },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
