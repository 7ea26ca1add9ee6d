use std::fmt::Write;

use colored::{ColoredString, Colorize};
use veneer_types::{Change, Forest, Node, Severity};

/// Render a forest the way `dump` prints it: a `[path]` header per module,
/// members indented one level per nesting step.
pub fn format_forest(forest: &Forest) -> String {
    let mut out = String::new();
    for (path, nodes) in forest.iter() {
        let _ = writeln!(out, "[{path}]");
        for node in nodes {
            write_node(&mut out, node, 1);
        }
    }
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let indent = "    ".repeat(depth);
    let _ = writeln!(out, "{indent}{node}");
    if let Some(children) = node.children() {
        for child in children {
            write_node(out, child, depth + 1);
        }
    }
}

pub fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Major => "major".red().bold(),
        Severity::Minor => "minor".yellow(),
        Severity::Patch => "patch".green(),
    }
}

pub fn format_change(change: &Change) -> String {
    format!(
        "[{}] {}: {}",
        severity_label(change.severity),
        change.kind,
        change.detail
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use veneer_types::{ChangeKind, UNKNOWN};

    #[test]
    fn forest_rendering_nests_members() {
        colored::control::set_override(false);
        let mut forest = Forest::new();
        forest.insert(
            "pkg.mod",
            vec![
                Node::class("Widget", vec![Node::variable("label", "str")]),
                Node::variable("zoom", UNKNOWN),
            ],
        );

        let rendered = format_forest(&forest);
        let expected = "\
[pkg.mod]
    class Widget
        var label: str
    var zoom: ~unknown
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn change_rendering_carries_the_label() {
        colored::control::set_override(false);
        let change = Change::new(Severity::Major, ChangeKind::Removed, "pkg.mod.gone");
        assert_eq!(format_change(&change), "[major] Removed: pkg.mod.gone");
    }
}
