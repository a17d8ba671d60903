//! Positional statement patterns
//!
//! A pattern is one part per atom. Keyword parts compare the (already uppercased) keyword
//! exactly, string parts must match the whole string value. Arity must be equal.

use crate::lexing::{AtomKind, Statement};
use regex::Regex;

#[derive(Debug, Clone)]
pub enum PatternPart {
    /// Exact, case-sensitive keyword literal
    Keyword(&'static str),
    /// Regex anchored to the whole string value
    String(Regex),
}

impl PatternPart {
    pub fn kind(&self) -> AtomKind {
        match self {
            PatternPart::Keyword(_) => AtomKind::Keyword,
            PatternPart::String(_) => AtomKind::String,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pattern {
    parts: Vec<PatternPart>,
}

impl Pattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pattern made only of keyword literals, e.g. `Pattern::keywords(&["ADD", "TABLE"])`
    pub fn keywords(words: &[&'static str]) -> Self {
        words
            .iter()
            .fold(Pattern::new(), |pattern, &word| pattern.keyword(word))
    }

    pub fn keyword(mut self, literal: &'static str) -> Self {
        self.parts.push(PatternPart::Keyword(literal));
        self
    }

    /// Append a string part. The regex is anchored at both ends.
    ///
    /// Patterns are only built for the static tables, so an invalid regex is a programming
    /// error and panics.
    pub fn string(mut self, regex: &str) -> Self {
        let anchored = Regex::new(&format!("^(?:{})$", regex)).expect("valid pattern regex");
        self.parts.push(PatternPart::String(anchored));
        self
    }

    pub fn parts(&self) -> &[PatternPart] {
        &self.parts
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn matches(&self, statement: &Statement) -> bool {
        let atoms = statement.atoms();
        if atoms.len() != self.parts.len() {
            return false;
        }
        atoms
            .iter()
            .zip(&self.parts)
            .all(|(atom, part)| match (part, atom.kind()) {
                (PatternPart::Keyword(literal), AtomKind::Keyword) => atom.value() == *literal,
                (PatternPart::String(regex), AtomKind::String) => regex.is_match(atom.value()),
                _ => false,
            })
    }
}
