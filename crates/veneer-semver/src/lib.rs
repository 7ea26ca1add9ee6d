//! Severity/version policy for Veneer.
//!
//! Maps the patch/minor/major change taxonomy onto a semantic-version bump:
//! parse a strict `MAJOR.MINOR.PATCH` triplet, increment the component named
//! by the severity, and zero everything to its right.

pub mod error;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use veneer_types::Severity;

pub use error::VersionError;

/// A strict semantic version triplet.
///
/// Parsing accepts exactly three dot-separated non-negative integers and
/// nothing else: no pre-release tags, no build metadata, no leading `v`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// The version after a release of the given severity.
    ///
    /// The component named by the severity is incremented and every component
    /// to its right is zeroed.
    pub fn bumped(&self, severity: Severity) -> Version {
        match severity {
            Severity::Major => Version::new(self.major + 1, 0, 0),
            Severity::Minor => Version::new(self.major, self.minor + 1, 0),
            Severity::Patch => Version::new(self.major, self.minor, self.patch + 1),
        }
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| VersionError::Malformed {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 3 {
            return Err(malformed("expected exactly three dot-separated components"));
        }
        let mut components = [0u64; 3];
        for (slot, part) in components.iter_mut().zip(&parts) {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed("components must be non-negative integers"));
            }
            *slot = part
                .parse()
                .map_err(|_| malformed("component out of range"))?;
        }
        Ok(Version::new(components[0], components[1], components[2]))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// String-level convenience: parse, bump, render.
pub fn bump(severity: Severity, version: &str) -> Result<String, VersionError> {
    let parsed: Version = version.parse()?;
    Ok(parsed.bumped(severity).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bump_major_zeroes_the_rest() {
        assert_eq!(bump(Severity::Major, "1.2.3").unwrap(), "2.0.0");
    }

    #[test]
    fn bump_minor_zeroes_patch() {
        assert_eq!(bump(Severity::Minor, "1.2.3").unwrap(), "1.3.0");
    }

    #[test]
    fn bump_patch() {
        assert_eq!(bump(Severity::Patch, "1.2.3").unwrap(), "1.2.4");
    }

    #[test]
    fn two_components_are_malformed() {
        let err = bump(Severity::Major, "1.2").unwrap_err();
        assert!(matches!(err, VersionError::Malformed { ref input, .. } if input == "1.2"));
    }

    #[test]
    fn rejects_signs_tags_and_blanks() {
        for bad in ["1.2.3-rc1", "1.-2.3", "v1.2.3", "1.2.", "1..3", "", "a.b.c", "1.2.3.4"] {
            assert!(bad.parse::<Version>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_and_display_round_trip() {
        let v: Version = "10.20.30".parse().unwrap();
        assert_eq!(v, Version::new(10, 20, 30));
        assert_eq!(v.to_string(), "10.20.30");
    }
}
