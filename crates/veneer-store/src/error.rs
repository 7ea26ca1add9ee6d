use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while persisting or loading a forest.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read forest file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write forest file {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("forest file {path:?} is not a valid surface document: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode forest for {path:?}: {source}")]
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Convenience alias for store results.
pub type StoreResult<T> = Result<T, StoreError>;
