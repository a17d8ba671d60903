//! Line tokenizer
//!
//! Scans one line left to right. Outside a string, every whitespace character closes the
//! current bare word as an uppercased keyword, even an empty one, and a double quote at a word
//! boundary opens a string. Inside a
//! string, `"` closes it and `\` starts one of the escapes `\n \t \r \\`.

use super::atoms::{Atom, Statement};
use crate::error::LexError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Bare,
    InString,
    Escape,
}

/// Resolve the character following a backslash inside a string literal
fn resolve_escape(ch: char) -> Result<char, LexError> {
    match ch {
        'n' => Ok('\n'),
        '\\' => Ok('\\'),
        't' => Ok('\t'),
        'r' => Ok('\r'),
        other => Err(LexError::InvalidEscape(other)),
    }
}

/// Tokenize one source line (already stripped of its paragraph tab) into a statement.
pub fn tokenize_line(line: &str) -> Result<Statement, LexError> {
    let mut atoms = Vec::new();
    let mut current = String::new();
    let mut state = State::Bare;

    for ch in line.chars() {
        match state {
            // Every whitespace character closes a keyword, so extra spaces leave empty ones
            State::Bare if ch.is_whitespace() => {
                atoms.push(Atom::keyword(&current));
                current.clear();
            }
            // A quote glued to a word is part of that word
            State::Bare if ch == '"' && current.is_empty() => state = State::InString,
            State::Bare => current.push(ch),
            State::InString => match ch {
                '"' => {
                    atoms.push(Atom::string(std::mem::take(&mut current)));
                    state = State::Bare;
                }
                '\\' => state = State::Escape,
                _ => current.push(ch),
            },
            State::Escape => {
                current.push(resolve_escape(ch)?);
                state = State::InString;
            }
        }
    }

    if state != State::Bare {
        return Err(LexError::UnterminatedString);
    }
    if !current.is_empty() {
        atoms.push(Atom::keyword(&current));
    }
    Ok(Statement::new(atoms))
}
