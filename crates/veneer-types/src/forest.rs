use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// A path-keyed API surface: dotted module path → the top-level nodes
/// declared there.
///
/// Forests are built once by an extractor and then consumed read-only by the
/// comparison engine. The underlying map is ordered so that dumps and
/// serialized files are deterministic. A path present in one forest but not
/// another denotes whole-module addition or removal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest(BTreeMap<String, Vec<Node>>);

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the nodes declared at `path`, replacing any previous entry.
    ///
    /// Duplicate sibling names are resolved last-write-wins: the earlier
    /// position is kept, the later payload overwrites it.
    pub fn insert(&mut self, path: impl Into<String>, nodes: Vec<Node>) {
        self.0.insert(path.into(), dedup_siblings(nodes));
    }

    pub fn get(&self, path: &str) -> Option<&[Node]> {
        self.0.get(path).map(Vec::as_slice)
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    /// All dotted paths, in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Node])> {
        self.0.iter().map(|(path, nodes)| (path.as_str(), nodes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, Vec<Node>)> for Forest {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Node>)>>(iter: I) -> Self {
        let mut forest = Forest::new();
        for (path, nodes) in iter {
            forest.insert(path, nodes);
        }
        forest
    }
}

/// Resolve duplicate sibling names: first position, last payload.
pub fn dedup_siblings(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    let mut index: BTreeMap<String, usize> = BTreeMap::new();
    for node in nodes {
        match index.get(node.name()) {
            Some(&at) => out[at] = node,
            None => {
                index.insert(node.name().to_string(), out.len());
                out.push(node);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins_on_duplicate_siblings() {
        let mut forest = Forest::new();
        forest.insert(
            "mymod",
            vec![
                Node::variable("x", "int"),
                Node::variable("y", "str"),
                Node::variable("x", "float"),
            ],
        );
        let nodes = forest.get("mymod").unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0], Node::variable("x", "float"));
        assert_eq!(nodes[1], Node::variable("y", "str"));
    }

    #[test]
    fn paths_are_ordered() {
        let mut forest = Forest::new();
        forest.insert("zeta", vec![]);
        forest.insert("alpha", vec![]);
        let paths: Vec<_> = forest.paths().collect();
        assert_eq!(paths, vec!["alpha", "zeta"]);
    }

    #[test]
    fn serde_round_trip_is_lossless() {
        let mut forest = Forest::new();
        forest.insert(
            "pkg.mod",
            vec![
                Node::variable("count", "int"),
                Node::class("Widget", vec![Node::function("draw", vec![], "None")]),
            ],
        );
        let json = serde_json::to_string_pretty(&forest).unwrap();
        let back: Forest = serde_json::from_str(&json).unwrap();
        assert_eq!(forest, back);
    }
}
