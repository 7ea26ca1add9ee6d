//! Forest comparison: match two API trees and classify every difference.
//!
//! The top level works over the union of dotted paths; within a path, named
//! siblings are matched by name and recursed into, while function arguments
//! are additionally matched by position so that a rename at a fixed index
//! collapses into a single low-severity event instead of a removal plus an
//! addition.

use std::collections::{BTreeMap, BTreeSet};

use veneer_types::{Arg, ArgKind, Change, ChangeKind, Forest, Node, Severity, UNKNOWN};

use crate::error::DiffResult;
use crate::validate::validate_forest;

/// Tunables for one comparison run.
#[derive(Clone, Copy, Debug)]
pub struct CompareOptions {
    /// Maximum nesting depth accepted before the engine fails closed.
    pub max_depth: usize,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}

/// Compare two forests with default options.
///
/// Returns every classified difference as a set: duplicates collapse and
/// emission order is insignificant. An empty set means the surfaces are
/// structurally identical.
pub fn compare(old: &Forest, new: &Forest) -> DiffResult<BTreeSet<Change>> {
    compare_with(old, new, &CompareOptions::default())
}

/// Compare two forests, validating both against the node model first.
pub fn compare_with(
    old: &Forest,
    new: &Forest,
    options: &CompareOptions,
) -> DiffResult<BTreeSet<Change>> {
    validate_forest(old, options)?;
    validate_forest(new, options)?;

    let mut changes = BTreeSet::new();
    let paths: BTreeSet<&str> = old.paths().chain(new.paths()).collect();
    for path in paths {
        match (old.get(path), new.get(path)) {
            (Some(old_nodes), Some(new_nodes)) => {
                diff_members(path, old_nodes, new_nodes, &mut changes);
            }
            (Some(_), None) => {
                changes.insert(Change::new(Severity::Major, ChangeKind::Removed, path));
            }
            (None, Some(_)) => {
                changes.insert(Change::new(Severity::Minor, ChangeKind::Added, path));
            }
            (None, None) => unreachable!("path came from the union of both forests"),
        }
    }
    Ok(changes)
}

/// Aggregate severity of a change set; `None` when nothing changed.
///
/// The policy layer treats an empty set as a patch-level no-op.
pub fn max_severity(changes: &BTreeSet<Change>) -> Option<Severity> {
    changes.iter().map(|c| c.severity).max()
}

fn name_map(nodes: &[Node]) -> BTreeMap<&str, &Node> {
    // Insertion order makes duplicate sibling names last-write-wins.
    let mut map = BTreeMap::new();
    for node in nodes {
        map.insert(node.name(), node);
    }
    map
}

/// Diff one named-sibling set: module members, class members.
///
/// Recursion depth is bounded because both inputs passed validation against
/// the same depth limit before comparison started.
fn diff_members(path: &str, old: &[Node], new: &[Node], changes: &mut BTreeSet<Change>) {
    let old_map = name_map(old);
    let new_map = name_map(new);

    for (&name, &old_node) in &old_map {
        let location = format!("{path}.{name}");
        match new_map.get(name) {
            Some(&new_node) => diff_node(&location, old_node, new_node, changes),
            None => {
                changes.insert(Change::new(Severity::Major, ChangeKind::Removed, location));
            }
        }
    }
    for &name in new_map.keys() {
        if !old_map.contains_key(name) {
            changes.insert(Change::new(
                Severity::Minor,
                ChangeKind::Added,
                format!("{path}.{name}"),
            ));
        }
    }
}

/// Diff two same-named nodes.
fn diff_node(location: &str, old: &Node, new: &Node, changes: &mut BTreeSet<Change>) {
    match (old, new) {
        (Node::Variable { ty: old_ty, .. }, Node::Variable { ty: new_ty, .. }) => {
            diff_type(location, old_ty, new_ty, changes);
        }
        (
            Node::Function {
                args: old_args,
                returns: old_returns,
                ..
            },
            Node::Function {
                args: new_args,
                returns: new_returns,
                ..
            },
        ) => {
            diff_type(location, old_returns, new_returns, changes);
            diff_args(location, old_args, new_args, changes);
        }
        (Node::Class { children: old_children, .. }, Node::Class { children: new_children, .. })
        | (
            Node::Module { children: old_children, .. },
            Node::Module { children: new_children, .. },
        ) => {
            diff_members(location, old_children, new_children, changes);
        }
        // Variant mismatch: same name now refers to a different species of
        // thing entirely.
        (old, new) => {
            changes.insert(Change::new(
                Severity::Major,
                ChangeKind::TypeChanged,
                was_now(location, old.variant(), new.variant()),
            ));
        }
    }
}

/// Diff two type strings (variable types, argument types, return types).
///
/// UNKNOWN is a weaker signal than any concrete type: gaining or losing type
/// information is a patch-level annotation event, never a breaking change.
fn diff_type(location: &str, old: &str, new: &str, changes: &mut BTreeSet<Change>) {
    if old == new {
        return;
    }
    if old == UNKNOWN || new == UNKNOWN {
        changes.insert(Change::new(Severity::Patch, ChangeKind::AddedType, location));
    } else {
        changes.insert(Change::new(
            Severity::Major,
            ChangeKind::TypeChanged,
            was_now(location, old, new),
        ));
    }
}

/// Diff two calling-convention flag sets for a same-named argument.
///
/// Losing any flag the old kind had narrows what callers may write (a lost
/// mode or a lost default breaks someone); purely gaining flags widens it.
fn diff_kind(location: &str, old: ArgKind, new: ArgKind, changes: &mut BTreeSet<Change>) {
    if old == new {
        return;
    }
    let severity = if old.bits() & !new.bits() != 0 {
        Severity::Major
    } else {
        Severity::Patch
    };
    changes.insert(Change::new(
        severity,
        ChangeKind::KindChanged,
        was_now(location, &old.describe(), &new.describe()),
    ));
}

/// Diff two argument sequences, positionally aware.
fn diff_args(func: &str, old_args: &[Arg], new_args: &[Arg], changes: &mut BTreeSet<Change>) {
    let old_names: BTreeSet<&str> = old_args.iter().map(|a| a.name.as_str()).collect();
    let new_names: BTreeSet<&str> = new_args.iter().map(|a| a.name.as_str()).collect();

    // Same name on both sides: compare type and kind, position shifts alone
    // are not reported.
    for old_arg in old_args {
        if let Some(new_arg) = new_args.iter().find(|a| a.name == old_arg.name) {
            let location = arg_location(func, &old_arg.name);
            diff_type(&location, &old_arg.ty, &new_arg.ty, changes);
            diff_kind(&location, old_arg.kind, new_arg.kind, changes);
        }
    }

    let removed: Vec<(usize, &Arg)> = old_args
        .iter()
        .enumerate()
        .filter(|(_, a)| !new_names.contains(a.name.as_str()))
        .collect();
    let added: Vec<(usize, &Arg)> = new_args
        .iter()
        .enumerate()
        .filter(|(_, a)| !old_names.contains(a.name.as_str()))
        .collect();
    let mut claimed: BTreeSet<usize> = BTreeSet::new();

    for (old_index, old_arg) in &removed {
        let pair = added.iter().enumerate().find(|(slot, (new_index, new_arg))| {
            new_index == old_index && new_arg.kind == old_arg.kind && !claimed.contains(slot)
        });
        match pair {
            Some((slot, (_, new_arg))) if old_arg.kind.is_positional() => {
                // Rename collapse: same position, same kind. Positional
                // callers never notice. A type difference between the pair
                // is layered as its own event on top of the rename.
                claimed.insert(slot);
                let location = arg_location(func, &new_arg.name);
                changes.insert(Change::new(
                    Severity::Patch,
                    ChangeKind::RenamedArg,
                    was_now(&location, &old_arg.name, &new_arg.name),
                ));
                diff_type(&location, &old_arg.ty, &new_arg.ty, changes);
            }
            Some((slot, (_, new_arg))) => {
                // Keyword-only rename: existing keyword callers break, the
                // new name is a compatible addition. Net major.
                claimed.insert(slot);
                changes.insert(Change::new(
                    Severity::Major,
                    ChangeKind::RemovedArg,
                    arg_location(func, &old_arg.name),
                ));
                changes.insert(Change::new(
                    Severity::Minor,
                    ChangeKind::AddedArg,
                    arg_location(func, &new_arg.name),
                ));
            }
            None => {
                changes.insert(Change::new(
                    Severity::Major,
                    ChangeKind::RemovedArg,
                    arg_location(func, &old_arg.name),
                ));
            }
        }
    }

    for (slot, (_, new_arg)) in added.iter().enumerate() {
        if claimed.contains(&slot) {
            continue;
        }
        // A collector or defaulted argument never forces callers to change;
        // a new required argument does.
        let severity = if new_arg.kind.has_default() || new_arg.kind.is_variadic() {
            Severity::Patch
        } else {
            Severity::Major
        };
        changes.insert(Change::new(
            severity,
            ChangeKind::AddedArg,
            arg_location(func, &new_arg.name),
        ));
    }
}

fn arg_location(func: &str, arg: &str) -> String {
    format!("{func}.({arg})")
}

fn was_now(location: &str, old: &str, new: &str) -> String {
    format!("{location}, Was: \"{old}\", Now: \"{new}\"")
}
