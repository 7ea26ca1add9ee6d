//! Comparison engine for Veneer.
//!
//! Given two path-keyed API forests (old and new), produce the set of
//! structural differences between them, each classified by kind and graded
//! by severity. The engine is purely functional: no I/O, no shared state,
//! and it never depends on how the forests were extracted.
//!
//! # Key Types
//!
//! - [`compare`] / [`compare_with`] -- The engine entry points
//! - [`CompareOptions`] -- Recursion-depth bound for pathological nesting
//! - [`DiffError`] / [`DiffResult`] -- Precondition violations (malformed forests)
//! - [`max_severity`] -- Aggregate a change set to its worst severity

pub mod compare;
pub mod error;
pub mod validate;

pub use compare::{compare, compare_with, max_severity, CompareOptions};
pub use error::{DiffError, DiffResult};
pub use validate::validate_forest;
