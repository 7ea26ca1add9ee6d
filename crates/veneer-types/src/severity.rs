use std::fmt;

use serde::{Deserialize, Serialize};

/// How badly a change breaks downstream consumers.
///
/// Severities are totally ordered: `Patch < Minor < Major`. The aggregate
/// severity of a change set is the maximum over its members, so `Ord` is
/// derived and `max` does the aggregation.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Invisible to callers: renames at fixed positions, added type info.
    Patch,
    /// Backwards-compatible additions.
    Minor,
    /// Removals and incompatible signature changes.
    Major,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 3] = [Severity::Patch, Severity::Minor, Severity::Major];

    /// The label printed by the CLI (`patch`, `minor`, `major`).
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Patch => "patch",
            Severity::Minor => "minor",
            Severity::Major => "major",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
