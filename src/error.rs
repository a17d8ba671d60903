//! Error types for the compilation pipeline
//!
//! Every error is fatal: the first one raised aborts the whole compilation and no
//! partial document is produced.

use crate::lexing::Statement;
use thiserror::Error;

/// Errors raised while tokenizing a single line
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A backslash inside a string was followed by something outside the escape set
    #[error("invalid escape character {0:?}")]
    InvalidEscape(char),
    /// The line ended inside a string literal (or right after its backslash)
    #[error("unterminated string literal")]
    UnterminatedString,
}

/// Errors that can occur anywhere between source text and rendered HTML
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("line {line}: {source}")]
    Lex {
        line: usize,
        #[source]
        source: LexError,
    },

    /// No statement pattern matched
    #[error("unknown statement: {0}")]
    UnknownStatement(Statement),

    /// A WITH statement matched none of the modifier patterns
    #[error("unknown modifier: {0}")]
    UnknownModifier(Statement),

    #[error("header level {0} is not in 1..=6")]
    InvalidHeaderLevel(u8),

    /// A template placeholder had no value at render time
    #[error("unresolved template placeholder {0:?}")]
    UnresolvedPlaceholder(String),
}

pub type CompileResult<T> = Result<T, CompileError>;
