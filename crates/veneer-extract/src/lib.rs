//! Surface extraction for Veneer.
//!
//! The comparison engine never depends on how nodes were discovered; this
//! crate is the pluggable boundary the engine sits behind. The [`Extractor`]
//! trait emits a canonical [`Forest`] and nothing else. The shipped
//! implementation, [`ManifestExtractor`], reads surface-manifest files: one
//! JSON document per module, naming its members with textual annotations and
//! parameter kinds. Building a module sorts members by name, normalizes
//! every annotation through `veneer-annotate`, and resolves duplicate
//! sibling names last-write-wins, so dumps are deterministic regardless of
//! manifest ordering.

pub mod builder;
pub mod error;
pub mod manifest;

use veneer_types::Forest;

pub use builder::ManifestExtractor;
pub use error::{ExtractError, ExtractResult};
pub use manifest::{ArgManifest, MemberManifest, ModuleManifest, ParamKind};

/// A source of API forests.
///
/// Implementations walk whatever they walk — manifest files here, a live
/// object graph or parsed source elsewhere — and emit node-model values
/// keyed by dotted path.
pub trait Extractor {
    fn extract(&self) -> ExtractResult<Forest>;
}
