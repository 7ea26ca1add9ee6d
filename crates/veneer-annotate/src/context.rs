use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Resolution context for annotation normalization.
///
/// Maps a name as written in source (`Widget`) to the dotted path of the
/// module that defines it (`pkg.widgets`). Extractors build one per module
/// from its import table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolveContext(BTreeMap<String, String>);

impl ResolveContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, local: impl Into<String>, module: impl Into<String>) {
        self.0.insert(local.into(), module.into());
    }

    /// The defining module for a local name, if known.
    pub fn lookup(&self, local: &str) -> Option<&str> {
        self.0.get(local).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for ResolveContext {
    fn from(names: BTreeMap<String, String>) -> Self {
        Self(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_after_insert() {
        let mut ctx = ResolveContext::new();
        ctx.insert("Thing", "pkg.things");
        assert_eq!(ctx.lookup("Thing"), Some("pkg.things"));
        assert_eq!(ctx.lookup("Other"), None);
    }
}
