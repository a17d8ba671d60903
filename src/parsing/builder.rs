//! Paragraph builder
//!
//! Walks the statements of one paragraph:
//!
//! 1. A leading run of WITH statements applies to the whole paragraph.
//! 2. Every following statement is a main statement, optionally trailed by its own run of
//!    WITH statements.
//! 3. The main elements are gathered, in order, into one paragraph element, and the leading
//!    modifiers are applied to it.
//!
//! A WITH statement only counts as paragraph level when it comes before every main statement.

use super::modifiers::apply_all;
use super::statements::classify;
use crate::error::CompileResult;
use crate::ir::Element;
use crate::lexing::{Paragraph, Statement};

/// Split off the leading run of WITH statements.
fn split_modifiers(statements: &[Statement]) -> (&[Statement], &[Statement]) {
    let count = statements
        .iter()
        .take_while(|statement| statement.is_modifier())
        .count();
    statements.split_at(count)
}

/// Build the paragraph element for one paragraph.
pub fn build_paragraph(paragraph: &Paragraph) -> CompileResult<Element> {
    let (paragraph_modifiers, mut rest) = split_modifiers(paragraph.statements());

    let mut elements = Vec::new();
    while let Some((main, tail)) = rest.split_first() {
        let (modifiers, next) = split_modifiers(tail);
        elements.push(apply_all(classify(main)?, modifiers)?);
        rest = next;
    }

    apply_all(Element::paragraph(elements), paragraph_modifiers)
}

/// Build every paragraph, stopping at the first error.
pub fn build(paragraphs: &[Paragraph]) -> CompileResult<Vec<Element>> {
    paragraphs.iter().map(build_paragraph).collect()
}
