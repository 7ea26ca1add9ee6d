use thiserror::Error;

/// Errors produced by version parsing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VersionError {
    /// The string is not a `MAJOR.MINOR.PATCH` triplet of non-negative
    /// integers.
    #[error("malformed version string {input:?}: {reason}")]
    Malformed { input: String, reason: String },
}
