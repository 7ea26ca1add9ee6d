//! Error types for surface extraction.
//!
//! Extraction failures are reported per item with the offending file or
//! dotted location; one bad manifest aborts the run rather than silently
//! producing a partial forest.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building a forest from manifests.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to read manifest {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("manifest {path:?} is not a valid surface description: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("illegal argument at {location}: {reason}")]
    IllegalArg { location: String, reason: String },

    #[error("failed to walk manifest directory {path:?}: {source}")]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

/// Convenience alias for extraction results.
pub type ExtractResult<T> = Result<T, ExtractError>;
