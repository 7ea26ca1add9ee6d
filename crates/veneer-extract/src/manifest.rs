//! The surface-manifest document format.
//!
//! One JSON document describes one module: its dotted path, its import
//! table (local name → defining module, the resolution context for
//! annotations), and its members. Annotations are textual and unresolved;
//! the builder canonicalizes them.

use std::collections::BTreeMap;

use serde::Deserialize;
use veneer_types::ArgKind;

use crate::error::ExtractError;

/// Top-level manifest: one module's declared surface.
#[derive(Clone, Debug, Deserialize)]
pub struct ModuleManifest {
    /// Dotted access path, e.g. `pkg.widgets`.
    pub module: String,
    /// Local name → defining module, used to resolve annotations.
    #[serde(default)]
    pub imports: BTreeMap<String, String>,
    #[serde(default)]
    pub members: Vec<MemberManifest>,
}

/// One declared member, possibly nested.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberManifest {
    Module {
        name: String,
        /// Qualified name of the re-exported module; defaults to `name`.
        #[serde(default)]
        qualified_name: Option<String>,
        #[serde(default)]
        members: Vec<MemberManifest>,
    },
    Class {
        name: String,
        #[serde(default)]
        members: Vec<MemberManifest>,
    },
    Function {
        name: String,
        #[serde(default)]
        args: Vec<ArgManifest>,
        /// Textual return annotation; absent means unannotated.
        #[serde(default)]
        returns: Option<String>,
    },
    Variable {
        name: String,
        #[serde(default)]
        annotation: Option<String>,
    },
}

impl MemberManifest {
    pub fn name(&self) -> &str {
        match self {
            MemberManifest::Module { name, .. }
            | MemberManifest::Class { name, .. }
            | MemberManifest::Function { name, .. }
            | MemberManifest::Variable { name, .. } => name,
        }
    }
}

/// One declared parameter.
#[derive(Clone, Debug, Deserialize)]
pub struct ArgManifest {
    pub name: String,
    #[serde(default)]
    pub annotation: Option<String>,
    pub kind: ParamKind,
    /// Whether the parameter carries a default value.
    #[serde(default)]
    pub default: bool,
}

/// Parameter kind as written in manifests.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Positional,
    Keyword,
    PositionalOrKeyword,
    VarPositional,
    VarKeyword,
}

impl ParamKind {
    /// Map onto the model's flag set, rejecting illegal combinations.
    pub fn to_arg_kind(self, default: bool, location: &str) -> Result<ArgKind, ExtractError> {
        let base = match self {
            ParamKind::Positional => ArgKind::POSITIONAL,
            ParamKind::Keyword => ArgKind::KEYWORD,
            ParamKind::PositionalOrKeyword => ArgKind::POSITIONAL | ArgKind::KEYWORD,
            ParamKind::VarPositional => ArgKind::POSITIONAL | ArgKind::VARIADIC,
            ParamKind::VarKeyword => ArgKind::KEYWORD | ArgKind::VARIADIC,
        };
        let bits = if default {
            (base | ArgKind::DEFAULT).bits()
        } else {
            base.bits()
        };
        ArgKind::from_bits(bits).map_err(|err| ExtractError::IllegalArg {
            location: location.to_string(),
            reason: err.to_string(),
        })
    }
}
