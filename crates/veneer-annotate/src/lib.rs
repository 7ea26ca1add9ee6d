//! Type-annotation normalizer for Veneer.
//!
//! Turns a textual type annotation (`List[Widget]`, `pkg.Thing`, `None`)
//! into a canonical dotted form given a resolution context mapping local
//! names to their defining modules. Anything unparseable becomes the
//! [`UNKNOWN`] sentinel — an unresolved type is a weaker signal, not an
//! error.

pub mod context;
pub mod parse;

use veneer_types::UNKNOWN;

pub use context::ResolveContext;

use parse::TypeExpr;

/// Names from the `typing` vocabulary that qualify to the `typing` namespace
/// even without an explicit import in the context.
pub const TYPING_ATTRS: &[&str] = &[
    "Any", "Callable", "Dict", "FrozenSet", "Generator", "Iterable", "Iterator", "List",
    "Mapping", "Optional", "Sequence", "Set", "Tuple", "Type", "Union",
];

/// Normalize one annotation against a resolution context.
///
/// Bare root names found in the context are prefixed with their defining
/// module; bare typing names are prefixed with `typing`. Names the context
/// knows nothing about are kept as written. Unparseable input yields
/// [`UNKNOWN`].
pub fn normalize(annotation: &str, context: &ResolveContext) -> String {
    match parse::parse(annotation) {
        Ok(expr) => render(&expr, context),
        Err(_) => UNKNOWN.to_string(),
    }
}

fn render(expr: &TypeExpr, context: &ResolveContext) -> String {
    match expr {
        TypeExpr::Name(segments) => {
            let root = &segments[0];
            let qualifier = if segments.len() == 1 && TYPING_ATTRS.contains(&root.as_str()) {
                context.lookup(root).or(Some("typing"))
            } else {
                context.lookup(root)
            };
            match qualifier {
                Some(module) => format!("{module}.{}", segments.join(".")),
                None => segments.join("."),
            }
        }
        TypeExpr::Subscript(base, params) => {
            let rendered: Vec<String> = params.iter().map(|p| render(p, context)).collect();
            format!("{}[{}]", render(base, context), rendered.join(", "))
        }
        TypeExpr::Ellipsis => "...".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> ResolveContext {
        let mut ctx = ResolveContext::new();
        ctx.insert("Widget", "pkg.widgets");
        ctx.insert("helpers", "pkg");
        ctx
    }

    #[test]
    fn bare_name_in_context_is_qualified() {
        assert_eq!(normalize("Widget", &context()), "pkg.widgets.Widget");
    }

    #[test]
    fn typing_names_qualify_without_an_import() {
        assert_eq!(normalize("List[int]", &context()), "typing.List[int]");
        assert_eq!(
            normalize("Dict[str, Widget]", &context()),
            "typing.Dict[str, pkg.widgets.Widget]"
        );
    }

    #[test]
    fn dotted_root_is_qualified_once() {
        // `helpers` was imported from `pkg`, so `helpers.Frame` lives at
        // `pkg.helpers.Frame`.
        assert_eq!(normalize("helpers.Frame", &context()), "pkg.helpers.Frame");
    }

    #[test]
    fn unknown_names_are_kept_as_written() {
        assert_eq!(normalize("Mystery", &context()), "Mystery");
        assert_eq!(normalize("None", &context()), "None");
    }

    #[test]
    fn nested_subscripts_and_ellipsis() {
        assert_eq!(
            normalize("Callable[..., Optional[Widget]]", &context()),
            "typing.Callable[..., typing.Optional[pkg.widgets.Widget]]"
        );
    }

    #[test]
    fn unparseable_input_becomes_unknown() {
        for bad in ["", "List[", "a..b", "foo bar", "~unknown", "[int]"] {
            assert_eq!(normalize(bad, &context()), UNKNOWN, "input {bad:?}");
        }
    }

    #[test]
    fn whitespace_is_canonicalized() {
        assert_eq!(
            normalize("Dict[ str,int ]", &context()),
            "typing.Dict[str, int]"
        );
    }
}
