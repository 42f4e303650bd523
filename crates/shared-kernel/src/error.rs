// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum TinylsError {
    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

pub type Result<T> = std::result::Result<T, TinylsError>;

/// Infrastructure-layer errors. Each carries the path that failed.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("cannot access '{path}': {source}")]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot open directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

