use std::fmt;

use serde::{Deserialize, Serialize};

use crate::kind::ArgKind;

/// Sentinel type string meaning "no type information available".
///
/// UNKNOWN is a valid value, distinct from every concrete type: a transition
/// from UNKNOWN to a concrete type is graded as gained information, never as
/// an incompatible type change.
pub const UNKNOWN: &str = "~unknown";

/// One function parameter.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Arg {
    pub name: String,
    /// Canonical dotted type string, or [`UNKNOWN`].
    #[serde(rename = "type")]
    pub ty: String,
    pub kind: ArgKind,
}

impl Arg {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, kind: ArgKind) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            kind,
        }
    }

    /// Returns `true` if no type information was recorded.
    pub fn is_untyped(&self) -> bool {
        self.ty == UNKNOWN
    }
}

/// One entity on a public API surface.
///
/// Nodes form a tree: modules and classes carry ordered children, functions
/// carry an ordered argument sequence. Equality is structural; two nodes
/// extracted independently compare equal when they describe the same shape.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum Node {
    Module {
        name: String,
        /// Fully qualified dotted name of the module object itself, which can
        /// differ from the access path when a module is re-exported.
        qualified_name: String,
        children: Vec<Node>,
    },
    Class {
        name: String,
        children: Vec<Node>,
    },
    Function {
        name: String,
        args: Vec<Arg>,
        /// Canonical return type string, or [`UNKNOWN`].
        returns: String,
    },
    Variable {
        name: String,
        #[serde(rename = "type")]
        ty: String,
    },
}

impl Node {
    pub fn module(
        name: impl Into<String>,
        qualified_name: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Node::Module {
            name: name.into(),
            qualified_name: qualified_name.into(),
            children,
        }
    }

    pub fn class(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Class {
            name: name.into(),
            children,
        }
    }

    pub fn function(name: impl Into<String>, args: Vec<Arg>, returns: impl Into<String>) -> Self {
        Node::Function {
            name: name.into(),
            args,
            returns: returns.into(),
        }
    }

    pub fn variable(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Node::Variable {
            name: name.into(),
            ty: ty.into(),
        }
    }

    /// The name this node is reachable by among its siblings.
    pub fn name(&self) -> &str {
        match self {
            Node::Module { name, .. }
            | Node::Class { name, .. }
            | Node::Function { name, .. }
            | Node::Variable { name, .. } => name,
        }
    }

    /// The variant label used in change details ("Module", "Class", ...).
    pub fn variant(&self) -> &'static str {
        match self {
            Node::Module { .. } => "Module",
            Node::Class { .. } => "Class",
            Node::Function { .. } => "Function",
            Node::Variable { .. } => "Variable",
        }
    }

    /// Named children, for the variants that have them.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Module { children, .. } | Node::Class { children, .. } => Some(children),
            Node::Function { .. } | Node::Variable { .. } => None,
        }
    }
}

// Compact one-line signature rendering, shared by the CLI formatter.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Module {
                name,
                qualified_name,
                ..
            } => write!(f, "module {name} ({qualified_name})"),
            Node::Class { name, .. } => write!(f, "class {name}"),
            Node::Function {
                name,
                args,
                returns,
            } => {
                write!(f, "def {name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", arg.name, arg.ty)?;
                }
                write!(f, ") -> {returns}")
            }
            Node::Variable { name, ty } => write!(f, "var {name}: {ty}"),
        }
    }
}
