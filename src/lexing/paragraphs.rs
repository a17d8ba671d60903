//! Paragraph segmentation
//!
//! A line starting with a tab opens a new paragraph (closing the current one if it holds any
//! statement). Every other line joins the current paragraph.
//!
//! Lines end at `\r\n` or at any single Unicode line boundary character (`\n`, `\r`, vertical
//! tab, form feed, `\x1c`..`\x1e`, NEL, LS, PS).

use super::atoms::{Paragraph, Statement};
use super::tokenizer::tokenize_line;
use crate::error::{CompileError, CompileResult};
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_BREAK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|[\n\r\x0B\x0C\x1C-\x1E\x{85}\x{2028}\x{2029}]")
        .expect("valid line break regex")
});

/// Split source text into lines. A terminator at the very end does not open an empty line.
pub fn split_lines(source: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK.split(source).collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

/// Split source text into paragraphs of tokenized statements.
pub fn segment(source: &str) -> CompileResult<Vec<Paragraph>> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<Statement> = Vec::new();

    for (index, line) in split_lines(source).into_iter().enumerate() {
        let body = match line.strip_prefix('\t') {
            Some(rest) => {
                if !current.is_empty() {
                    paragraphs.push(Paragraph::new(std::mem::take(&mut current)));
                }
                rest
            }
            None => line,
        };
        let statement = tokenize_line(body).map_err(|source| CompileError::Lex {
            line: index + 1,
            source,
        })?;
        current.push(statement);
    }

    if !current.is_empty() {
        paragraphs.push(Paragraph::new(current));
    }
    Ok(paragraphs)
}
