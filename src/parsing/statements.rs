//! Main statements
//!
//! The statement table, in priority order. Each rule pairs a positional pattern with the
//! element it builds; exactly one rule can match a statement since no two patterns share
//! both arity and keywords.
//!
//! | Statement | Element |
//! |-----------|---------|
//! | `ADD TEXT "…"` | text |
//! | `ADD TITLE "…"` | level 1 header |
//! | `ADD SUBTITLE "…"` | level 2 header |
//! | `ADD IMAGE FROM "…"` | image |
//! | `ADD TABLE` | image of a table |
//! | `ADD DESK` | image of a desk |
//! | `PARSE HTML WITH REGEX` | fixed markup |

use super::pattern::Pattern;
use crate::error::{CompileError, CompileResult};
use crate::ir::Element;
use crate::lexing::Statement;
use once_cell::sync::Lazy;

/// Inline SVG drawing of a table
pub const TABLE_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='96' height='64' viewBox='0 0 96 64'%3E%3Cg fill='%23a0522d'%3E%3Crect x='4' y='12' width='88' height='8'/%3E%3Crect x='10' y='20' width='6' height='40'/%3E%3Crect x='80' y='20' width='6' height='40'/%3E%3C/g%3E%3C/svg%3E";

/// Inline SVG drawing of a desk with a drawer
pub const DESK_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='96' height='64' viewBox='0 0 96 64'%3E%3Cg fill='%238b5a2b'%3E%3Crect x='4' y='10' width='88' height='6'/%3E%3Crect x='8' y='16' width='6' height='44'/%3E%3Crect x='56' y='16' width='32' height='44'/%3E%3C/g%3E%3Cg fill='%23d2b48c'%3E%3Crect x='60' y='22' width='24' height='10'/%3E%3Crect x='60' y='38' width='24' height='10'/%3E%3C/g%3E%3C/svg%3E";

/// What `PARSE HTML WITH REGEX` produces
pub const REGEX_HTML: &str = "<p><b>You can't parse [X]HTML with regex.</b> Because HTML can't be parsed by regex. Regex is not a tool that can be used to correctly parse HTML. <i>The &lt;center&gt; cannot hold.</i></p>";

type BuildElement = fn(&Statement) -> CompileResult<Element>;

pub struct StatementRule {
    pub name: &'static str,
    pub pattern: Pattern,
    build: BuildElement,
}

impl StatementRule {
    fn new(name: &'static str, pattern: Pattern, build: BuildElement) -> Self {
        StatementRule {
            name,
            pattern,
            build,
        }
    }
}

/// String argument at `index` of a statement already matched by a rule
fn argument(statement: &Statement, index: usize) -> CompileResult<&str> {
    statement
        .string_at(index)
        .ok_or_else(|| CompileError::UnknownStatement(statement.clone()))
}

/// Main statement rules, tried in declaration order
pub static STATEMENT_RULES: Lazy<Vec<StatementRule>> = Lazy::new(|| {
    vec![
        StatementRule::new(
            "add_text",
            Pattern::keywords(&["ADD", "TEXT"]).string("(?s).*"),
            |statement| Ok(Element::text(argument(statement, 2)?)),
        ),
        StatementRule::new(
            "add_title",
            Pattern::keywords(&["ADD", "TITLE"]).string("(?s).*"),
            |statement| Element::header(argument(statement, 2)?, 1),
        ),
        StatementRule::new(
            "add_subtitle",
            Pattern::keywords(&["ADD", "SUBTITLE"]).string("(?s).*"),
            |statement| Element::header(argument(statement, 2)?, 2),
        ),
        StatementRule::new(
            "add_image",
            Pattern::keywords(&["ADD", "IMAGE", "FROM"]).string(".*"),
            |statement| Ok(Element::image(argument(statement, 3)?)),
        ),
        StatementRule::new("add_table", Pattern::keywords(&["ADD", "TABLE"]), |_| {
            Ok(Element::image(TABLE_IMAGE))
        }),
        StatementRule::new("add_desk", Pattern::keywords(&["ADD", "DESK"]), |_| {
            Ok(Element::image(DESK_IMAGE))
        }),
        StatementRule::new(
            "parse_html_with_regex",
            Pattern::keywords(&["PARSE", "HTML", "WITH", "REGEX"]),
            |_| Ok(Element::inline(REGEX_HTML)),
        ),
    ]
});

/// Build the element for a main statement.
pub fn classify(statement: &Statement) -> CompileResult<Element> {
    let rule = STATEMENT_RULES
        .iter()
        .find(|rule| rule.pattern.matches(statement))
        .ok_or_else(|| CompileError::UnknownStatement(statement.clone()))?;
    log::trace!("statement {}: {}", rule.name, statement);
    (rule.build)(statement)
}
