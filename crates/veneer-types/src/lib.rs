//! Foundation types for Veneer.
//!
//! This crate provides the vocabulary shared by every other Veneer crate:
//! the node model describing one public API surface, the severity ordering
//! used to grade differences between two surfaces, and the change records
//! the comparison engine emits.
//!
//! # Key Types
//!
//! - [`Node`] — One API entity: module, class, function, or variable
//! - [`Arg`] / [`ArgKind`] — A function parameter and its calling-convention flag set
//! - [`Forest`] — Mapping from dotted path to the top-level nodes declared there
//! - [`Severity`] — `Patch < Minor < Major`
//! - [`Change`] / [`ChangeKind`] — One classified difference between two forests

pub mod change;
pub mod error;
pub mod forest;
pub mod kind;
pub mod node;
pub mod severity;

pub use change::{Change, ChangeKind};
pub use error::ModelError;
pub use forest::Forest;
pub use kind::ArgKind;
pub use node::{Arg, Node, UNKNOWN};
pub use severity::Severity;
