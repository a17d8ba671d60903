//! Modifier engine
//!
//! Resolves a `WITH …` statement to a [`Modifier`] using an ordered rule table. Applying a
//! modifier wraps the element's current markup and returns a new element, so a run of
//! modifiers nests outward in the order the statements were written:
//!
//! ```text
//! ADD TEXT "hi"
//! WITH BOLD TEXT      →  <b>hi</b>
//! WITH ITALIC TEXT    →  <i><b>hi</b></i>
//! ```

use super::pattern::Pattern;
use crate::error::{CompileError, CompileResult};
use crate::ir::Element;
use crate::lexing::Statement;
use once_cell::sync::Lazy;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modifier {
    Bold,
    Italic,
    Strikethrough,
    Link { href: String },
}

impl Modifier {
    pub fn apply(&self, element: Element) -> Element {
        match self {
            Modifier::Bold => element.wrap("<b>", "</b>"),
            Modifier::Italic => element.wrap("<i>", "</i>"),
            Modifier::Strikethrough => element.wrap("<s>", "</s>"),
            // TODO: validate the URI once there is a policy for rejecting links
            Modifier::Link { href } => element.wrap(&format!("<a href=\"{}\">", href), "</a>"),
        }
    }
}

type BuildModifier = fn(&Statement) -> CompileResult<Modifier>;

pub struct ModifierRule {
    pub name: &'static str,
    pub pattern: Pattern,
    build: BuildModifier,
}

impl ModifierRule {
    fn new(name: &'static str, pattern: Pattern, build: BuildModifier) -> Self {
        ModifierRule {
            name,
            pattern,
            build,
        }
    }
}

/// Modifier rules, tried in declaration order
pub static MODIFIER_RULES: Lazy<Vec<ModifierRule>> = Lazy::new(|| {
    vec![
        ModifierRule::new(
            "bold",
            Pattern::keywords(&["WITH", "BOLD", "TEXT"]),
            |_| Ok(Modifier::Bold),
        ),
        ModifierRule::new(
            "italic",
            Pattern::keywords(&["WITH", "ITALIC", "TEXT"]),
            |_| Ok(Modifier::Italic),
        ),
        ModifierRule::new(
            "strikethrough",
            Pattern::keywords(&["WITH", "STRIKETHROUGH"]),
            |_| Ok(Modifier::Strikethrough),
        ),
        ModifierRule::new(
            "link",
            Pattern::keywords(&["WITH", "LINK", "TO"]).string(".*"),
            |statement| {
                statement
                    .string_at(3)
                    .map(|href| Modifier::Link {
                        href: href.to_string(),
                    })
                    .ok_or_else(|| CompileError::UnknownModifier(statement.clone()))
            },
        ),
    ]
});

/// Resolve a WITH statement to its modifier.
pub fn resolve(statement: &Statement) -> CompileResult<Modifier> {
    let rule = MODIFIER_RULES
        .iter()
        .find(|rule| rule.pattern.matches(statement))
        .ok_or_else(|| CompileError::UnknownModifier(statement.clone()))?;
    log::trace!("modifier {}: {}", rule.name, statement);
    (rule.build)(statement)
}

/// Resolve and apply a run of WITH statements, innermost first.
pub fn apply_all(element: Element, statements: &[Statement]) -> CompileResult<Element> {
    statements.iter().try_fold(element, |element, statement| {
        Ok(resolve(statement)?.apply(element))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexing::tokenize_line;

    fn statement(line: &str) -> Statement {
        tokenize_line(line).unwrap()
    }

    #[test]
    fn test_resolve_simple_modifiers() {
        assert_eq!(resolve(&statement("WITH BOLD TEXT")), Ok(Modifier::Bold));
        assert_eq!(resolve(&statement("with italic text")), Ok(Modifier::Italic));
        assert_eq!(
            resolve(&statement("WITH STRIKETHROUGH")),
            Ok(Modifier::Strikethrough)
        );
    }

    #[test]
    fn test_resolve_link_captures_uri() {
        assert_eq!(
            resolve(&statement(r#"WITH LINK TO "https://example.com/?q=1""#)),
            Ok(Modifier::Link {
                href: "https://example.com/?q=1".to_string()
            })
        );
    }

    #[test]
    fn test_link_uri_cannot_span_lines() {
        let with = statement(r#"WITH LINK TO "a\nb""#);
        assert_eq!(resolve(&with), Err(CompileError::UnknownModifier(with)));
    }

    #[test]
    fn test_unknown_modifier() {
        let with = statement("WITH UNDERLINE");
        assert_eq!(resolve(&with), Err(CompileError::UnknownModifier(with)));
    }

    #[test]
    fn test_apply_all_nests_outward() {
        let element = apply_all(
            Element::text("hi"),
            &[statement("WITH BOLD TEXT"), statement("WITH ITALIC TEXT")],
        )
        .unwrap();
        assert_eq!(element.render().unwrap(), "<i><b>hi</b></i>");
    }

    #[test]
    fn test_link_wraps_current_markup() {
        let element = apply_all(
            Element::image("a.png"),
            &[statement(r#"WITH LINK TO "/home""#)],
        )
        .unwrap();
        assert_eq!(
            element.render().unwrap(),
            "<a href=\"/home\"><img src=\"a.png\"/></a>"
        );
    }

    #[test]
    fn test_apply_all_stops_at_first_unknown() {
        let result = apply_all(
            Element::text("hi"),
            &[statement("WITH BOLD TEXT"), statement("WITH SPARKLES")],
        );
        assert!(matches!(result, Err(CompileError::UnknownModifier(_))));
    }
}
