use std::path::PathBuf;

use thiserror::Error;

/// Errors from table discovery and CSV I/O.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("input directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },
    #[error("read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("open table {path}: {source}")]
    Open { path: PathBuf, source: csv::Error },
    #[error("read header of {path}: {source}")]
    Header { path: PathBuf, source: csv::Error },
    #[error("create output {path}: {source}")]
    Create { path: PathBuf, source: csv::Error },
    #[error("write to {path}: {source}")]
    Write { path: PathBuf, source: csv::Error },
    #[error("flush {path}: {source}")]
    Flush {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
