//! Lexing
//!
//! Turns source text into [`Paragraph`]s of [`Statement`]s. Each source line becomes exactly
//! one statement; there is no multi-line construct.
//!
//! - [`atoms`]: the data model (Atom, Statement, Paragraph)
//! - [`tokenizer`]: one line → one Statement
//! - [`paragraphs`]: whole source → Paragraphs, split at tab-prefixed lines

pub mod atoms;
pub mod paragraphs;
pub mod tokenizer;

pub use atoms::{Atom, AtomKind, Paragraph, Statement, WITH};
pub use paragraphs::{segment, split_lines};
pub use tokenizer::tokenize_line;
