//! Atoms, statements and paragraphs
//!
//! These are created once by the tokenizer and segmenter and never mutated afterwards.

use crate::parsing::pattern::Pattern;
use serde::Serialize;
use std::fmt;

/// The keyword that introduces every modifier statement
pub const WITH: &str = "WITH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AtomKind {
    Keyword,
    String,
}

/// A typed token. Keywords are uppercased on creation, strings keep their
/// escape-resolved content verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Atom {
    kind: AtomKind,
    value: String,
}

impl Atom {
    pub fn keyword(value: &str) -> Self {
        Atom {
            kind: AtomKind::Keyword,
            value: value.to_uppercase(),
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Atom {
            kind: AtomKind::String,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> AtomKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_keyword(&self, literal: &str) -> bool {
        self.kind == AtomKind::Keyword && self.value == literal
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            AtomKind::Keyword => write!(f, "{}", self.value),
            AtomKind::String => {
                write!(f, "\"")?;
                for ch in self.value.chars() {
                    match ch {
                        '\n' => write!(f, "\\n")?,
                        '\t' => write!(f, "\\t")?,
                        '\r' => write!(f, "\\r")?,
                        '\\' => write!(f, "\\\\")?,
                        _ => write!(f, "{}", ch)?,
                    }
                }
                write!(f, "\"")
            }
        }
    }
}

/// The atoms of one source line
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Statement {
    atoms: Vec<Atom>,
}

impl Statement {
    pub fn new(atoms: Vec<Atom>) -> Self {
        Statement { atoms }
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Value of the atom at `index` if it is a string atom
    pub fn string_at(&self, index: usize) -> Option<&str> {
        self.atoms
            .get(index)
            .filter(|atom| atom.kind() == AtomKind::String)
            .map(Atom::value)
    }

    /// True when the first atom is the `WITH` keyword
    pub fn is_modifier(&self) -> bool {
        self.atoms.first().is_some_and(|atom| atom.is_keyword(WITH))
    }

    pub fn matches(&self, pattern: &Pattern) -> bool {
        pattern.matches(self)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, atom) in self.atoms.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", atom)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Paragraph {
    statements: Vec<Statement>,
}

impl Paragraph {
    pub fn new(statements: Vec<Statement>) -> Self {
        Paragraph { statements }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_is_uppercased() {
        let atom = Atom::keyword("add");
        assert_eq!(atom.kind(), AtomKind::Keyword);
        assert_eq!(atom.value(), "ADD");
    }

    #[test]
    fn test_string_keeps_case() {
        let atom = Atom::string("Hello");
        assert_eq!(atom.kind(), AtomKind::String);
        assert_eq!(atom.value(), "Hello");
    }

    #[test]
    fn test_equality_is_structural() {
        assert_eq!(Atom::keyword("text"), Atom::keyword("TEXT"));
        assert_ne!(Atom::keyword("TEXT"), Atom::string("TEXT"));
    }

    #[test]
    fn test_is_modifier() {
        let with = Statement::new(vec![Atom::keyword("with"), Atom::keyword("strikethrough")]);
        let quoted = Statement::new(vec![Atom::string("WITH")]);
        assert!(with.is_modifier());
        assert!(!quoted.is_modifier());
        assert!(!Statement::default().is_modifier());
    }

    #[test]
    fn test_string_at() {
        let statement = Statement::new(vec![
            Atom::keyword("ADD"),
            Atom::keyword("TEXT"),
            Atom::string("hi"),
        ]);
        assert_eq!(statement.string_at(2), Some("hi"));
        assert_eq!(statement.string_at(1), None);
        assert_eq!(statement.string_at(3), None);
    }

    #[test]
    fn test_display_reapplies_escapes() {
        let statement = Statement::new(vec![
            Atom::keyword("ADD"),
            Atom::keyword("TEXT"),
            Atom::string("a\nb\t\\"),
        ]);
        assert_eq!(statement.to_string(), r#"ADD TEXT "a\nb\t\\""#);
    }
}
