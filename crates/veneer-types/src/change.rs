use std::fmt;

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// The fixed taxonomy of structural differences.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// A path or named member exists only in the new surface.
    Added,
    /// A path or named member exists only in the old surface.
    Removed,
    /// An argument exists only in the new signature.
    AddedArg,
    /// An argument exists only in the old signature.
    RemovedArg,
    /// A positional argument changed name at a fixed position.
    RenamedArg,
    /// A concrete type (or node variant) changed to a different one.
    TypeChanged,
    /// Type information appeared where there was none (or vice versa).
    AddedType,
    /// An argument's calling-convention flags changed.
    KindChanged,
}

impl ChangeKind {
    /// The human label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Added => "Added",
            ChangeKind::Removed => "Removed",
            ChangeKind::AddedArg => "Added Arg",
            ChangeKind::RemovedArg => "Removed Arg",
            ChangeKind::RenamedArg => "Renamed Arg",
            ChangeKind::TypeChanged => "Type Changed",
            ChangeKind::AddedType => "Added Type",
            ChangeKind::KindChanged => "Kind Changed",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One classified difference between two API surfaces.
///
/// Changes are plain values: a severity, a kind from the fixed taxonomy, and
/// a detail string locating the difference by dotted path. The engine emits
/// them into a `BTreeSet`, so duplicates collapse and emission order never
/// matters. The derived `Ord` (severity first) makes reports read
/// worst-last when iterated in order.
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Change {
    pub severity: Severity,
    pub kind: ChangeKind,
    /// Dotted location plus a human description, e.g.
    /// `mymod.thing, Was: "int", Now: "str"`.
    pub detail: String,
}

impl Change {
    pub fn new(severity: Severity, kind: ChangeKind, detail: impl Into<String>) -> Self {
        Self {
            severity,
            kind,
            detail: detail.into(),
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.kind, self.detail)
    }
}
