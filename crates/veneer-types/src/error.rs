use thiserror::Error;

/// Errors produced by model construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("illegal argument kind bits {bits:#06b}: {reason}")]
    IllegalKind { bits: u8, reason: String },
}
