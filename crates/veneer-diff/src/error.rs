//! Error types for the comparison engine.

use thiserror::Error;

/// Errors that can occur while comparing two forests.
///
/// All of these are precondition violations: the engine never silently skips
/// malformed input, and every error names the offending dotted path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    /// A forest entry violates the node model.
    #[error("malformed forest at {path:?}: {reason}")]
    MalformedForest { path: String, reason: String },

    /// Nesting exceeded the configured recursion-depth limit.
    #[error("nesting at {path:?} exceeds the depth limit of {limit}")]
    DepthExceeded { path: String, limit: usize },
}

/// Convenience alias for engine results.
pub type DiffResult<T> = Result<T, DiffError>;
