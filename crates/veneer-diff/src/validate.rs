//! Forest precondition checks.
//!
//! Run before any comparison: a malformed forest (empty names, illegal
//! argument-kind combinations, nesting past the depth limit) is reported as
//! a descriptive error, never silently skipped.

use veneer_types::{Forest, Node};

use crate::compare::CompareOptions;
use crate::error::{DiffError, DiffResult};

/// Validate every node in the forest against the node model.
///
/// The walk is iterative, so the depth limit in [`CompareOptions`] is
/// enforced here without itself risking stack overflow. Once both inputs
/// pass, the engine's recursive traversal is bounded by the same limit.
pub fn validate_forest(forest: &Forest, options: &CompareOptions) -> DiffResult<()> {
    for (path, nodes) in forest.iter() {
        if path.is_empty() {
            return Err(DiffError::MalformedForest {
                path: path.to_string(),
                reason: "empty forest path".into(),
            });
        }
        let mut stack: Vec<(String, &Node, usize)> = nodes
            .iter()
            .map(|node| (path.to_string(), node, 1))
            .collect();

        while let Some((parent, node, depth)) = stack.pop() {
            if depth > options.max_depth {
                return Err(DiffError::DepthExceeded {
                    path: parent,
                    limit: options.max_depth,
                });
            }
            if node.name().is_empty() {
                return Err(DiffError::MalformedForest {
                    path: parent,
                    reason: format!("{} with an empty name", node.variant()),
                });
            }
            let location = format!("{parent}.{}", node.name());
            if let Node::Function { args, .. } = node {
                for arg in args {
                    if arg.name.is_empty() {
                        return Err(DiffError::MalformedForest {
                            path: location.clone(),
                            reason: "argument with an empty name".into(),
                        });
                    }
                    arg.kind.check().map_err(|err| DiffError::MalformedForest {
                        path: format!("{location}.({})", arg.name),
                        reason: err.to_string(),
                    })?;
                }
            }
            if let Some(children) = node.children() {
                for child in children {
                    stack.push((location.clone(), child, depth + 1));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_types::{Arg, ArgKind, UNKNOWN};

    fn options() -> CompareOptions {
        CompareOptions::default()
    }

    #[test]
    fn well_formed_forest_passes() {
        let mut forest = Forest::new();
        forest.insert(
            "pkg.mod",
            vec![Node::function(
                "f",
                vec![Arg::new("a", "int", ArgKind::POSITIONAL | ArgKind::KEYWORD)],
                UNKNOWN,
            )],
        );
        assert!(validate_forest(&forest, &options()).is_ok());
    }

    #[test]
    fn empty_node_name_is_malformed() {
        let mut forest = Forest::new();
        forest.insert("pkg", vec![Node::variable("", "int")]);
        let err = validate_forest(&forest, &options()).unwrap_err();
        assert!(matches!(err, DiffError::MalformedForest { ref path, .. } if path == "pkg"));
    }

    #[test]
    fn illegal_arg_kind_is_malformed_with_location() {
        // DEFAULT on a variadic collector is illegal; build it through the
        // unchecked bit composition.
        let bad = ArgKind::POSITIONAL | ArgKind::VARIADIC | ArgKind::DEFAULT;
        let mut forest = Forest::new();
        forest.insert(
            "pkg",
            vec![Node::function("f", vec![Arg::new("args", "int", bad)], "int")],
        );
        let err = validate_forest(&forest, &options()).unwrap_err();
        match err {
            DiffError::MalformedForest { path, .. } => assert_eq!(path, "pkg.f.(args)"),
            other => panic!("expected MalformedForest, got {other:?}"),
        }
    }

    #[test]
    fn nesting_past_the_limit_fails_closed() {
        let mut node = Node::class("C0", vec![]);
        for i in 1..10 {
            node = Node::class(format!("C{i}"), vec![node]);
        }
        let mut forest = Forest::new();
        forest.insert("deep", vec![node]);

        let tight = CompareOptions { max_depth: 4 };
        let err = validate_forest(&forest, &tight).unwrap_err();
        assert!(matches!(err, DiffError::DepthExceeded { limit: 4, .. }));

        assert!(validate_forest(&forest, &options()).is_ok());
    }
}
