//! Forest persistence for Veneer.
//!
//! A persisted forest is a pretty-printed JSON mapping from dotted path to
//! the ordered node sequence declared there. Save and load round-trip
//! losslessly; both ends of a comparison can therefore be produced at
//! different times, by different extractors, on different machines.

pub mod error;

use std::fs;
use std::path::Path;

use veneer_types::Forest;

pub use error::{StoreError, StoreResult};

/// Write a forest to `path` as pretty-printed JSON.
pub fn save_forest(path: &Path, forest: &Forest) -> StoreResult<()> {
    let json = serde_json::to_string_pretty(forest).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a forest back from `path`.
pub fn load_forest(path: &Path) -> StoreResult<Forest> {
    let data = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&data).map_err(|source| StoreError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_types::{Arg, ArgKind, Node, UNKNOWN};

    fn sample_forest() -> Forest {
        let mut forest = Forest::new();
        forest.insert(
            "pkg.mod",
            vec![
                Node::variable("count", "int"),
                Node::function(
                    "configure",
                    vec![
                        Arg::new("name", "str", ArgKind::POSITIONAL | ArgKind::KEYWORD),
                        Arg::new(
                            "retries",
                            "int",
                            ArgKind::KEYWORD | ArgKind::DEFAULT,
                        ),
                    ],
                    "None",
                ),
                Node::class("Session", vec![Node::variable("token", UNKNOWN)]),
            ],
        );
        forest.insert("pkg.util", vec![]);
        forest
    }

    #[test]
    fn save_load_round_trip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("surface.json");

        let forest = sample_forest();
        save_forest(&file, &forest).unwrap();
        let loaded = load_forest(&file).unwrap();
        assert_eq!(forest, loaded);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("absent.json");
        let err = load_forest(&file).unwrap_err();
        assert!(matches!(err, StoreError::Read { ref path, .. } if path == &file));
    }

    #[test]
    fn corrupt_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("corrupt.json");
        std::fs::write(&file, "{ not json").unwrap();
        let err = load_forest(&file).unwrap_err();
        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[test]
    fn illegal_kind_bits_fail_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("bad_kind.json");
        // kind 8 is DEFAULT with no calling mode, rejected by the model.
        std::fs::write(
            &file,
            r#"{"m": [{"node": "function", "name": "f", "returns": "None",
                      "args": [{"name": "a", "type": "int", "kind": 8}]}]}"#,
        )
        .unwrap();
        assert!(matches!(load_forest(&file), Err(StoreError::Parse { .. })));
    }
}
