use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Calling-convention flag set for one function argument.
///
/// An `ArgKind` is a small bitset over four flags:
///
/// - [`ArgKind::POSITIONAL`] — fillable by position
/// - [`ArgKind::KEYWORD`] — fillable by name
/// - [`ArgKind::VARIADIC`] — collector parameter (`*args` / `**kwargs` style)
/// - [`ArgKind::DEFAULT`] — the argument has a default value
///
/// `POSITIONAL | KEYWORD` is the conventional positional-or-keyword
/// parameter. Legal combinations always name at least one calling mode, and
/// a variadic collector can never carry a default. Construction through
/// [`ArgKind::from_bits`] (and therefore deserialization) enforces this.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct ArgKind(u8);

impl ArgKind {
    pub const POSITIONAL: ArgKind = ArgKind(0b0001);
    pub const KEYWORD: ArgKind = ArgKind(0b0010);
    pub const VARIADIC: ArgKind = ArgKind(0b0100);
    pub const DEFAULT: ArgKind = ArgKind(0b1000);

    const ALL_BITS: u8 = 0b1111;

    /// Build a kind from raw bits, rejecting illegal combinations.
    pub fn from_bits(bits: u8) -> Result<Self, ModelError> {
        if bits & !Self::ALL_BITS != 0 {
            return Err(ModelError::IllegalKind {
                bits,
                reason: "unknown flag bits set".into(),
            });
        }
        let kind = ArgKind(bits);
        kind.check()?;
        Ok(kind)
    }

    /// Validate an already-constructed kind (used by forest validation).
    pub fn check(&self) -> Result<(), ModelError> {
        if !self.is_positional() && !self.is_keyword() {
            return Err(ModelError::IllegalKind {
                bits: self.0,
                reason: "argument must be positional, keyword, or both".into(),
            });
        }
        if self.is_variadic() && self.has_default() {
            return Err(ModelError::IllegalKind {
                bits: self.0,
                reason: "a variadic collector cannot have a default".into(),
            });
        }
        Ok(())
    }

    /// The raw flag bits.
    pub fn bits(&self) -> u8 {
        self.0
    }

    pub fn contains(&self, other: ArgKind) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_positional(&self) -> bool {
        self.contains(Self::POSITIONAL)
    }

    pub fn is_keyword(&self) -> bool {
        self.contains(Self::KEYWORD)
    }

    pub fn is_variadic(&self) -> bool {
        self.contains(Self::VARIADIC)
    }

    pub fn has_default(&self) -> bool {
        self.contains(Self::DEFAULT)
    }

    /// Keyword-only: fillable by name but not by position.
    pub fn is_keyword_only(&self) -> bool {
        self.is_keyword() && !self.is_positional()
    }

    /// Short human label, e.g. `positional|keyword|default`.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if self.is_positional() {
            parts.push("positional");
        }
        if self.is_keyword() {
            parts.push("keyword");
        }
        if self.is_variadic() {
            parts.push("variadic");
        }
        if self.has_default() {
            parts.push("default");
        }
        parts.join("|")
    }
}

// Composition of the flag constants; legality is checked at the validation
// boundaries (deserialization and forest validation), not per `|`.
impl BitOr for ArgKind {
    type Output = ArgKind;

    fn bitor(self, rhs: ArgKind) -> ArgKind {
        ArgKind(self.0 | rhs.0)
    }
}

impl fmt::Debug for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArgKind({})", self.describe())
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl TryFrom<u8> for ArgKind {
    type Error = ModelError;

    fn try_from(bits: u8) -> Result<Self, Self::Error> {
        ArgKind::from_bits(bits)
    }
}

impl From<ArgKind> for u8 {
    fn from(kind: ArgKind) -> u8 {
        kind.0
    }
}
