//! # peml
//!
//! A compiler for the Plain English Markup Language: one English-like statement per line,
//! compiled to a single HTML document.
//!
//! ```text
//!     ADD TITLE "Shopping"
//!     WITH ITALIC TEXT
//!     ADD TEXT "eggs\nmilk"
//!     	ADD IMAGE FROM "cart.png"
//!     WITH LINK TO "https://example.com"
//! ```
//!
//! Pipeline
//!
//! ```text
//! source text
//!     │  lexing::segment        one Statement per line, tab-prefixed lines open a Paragraph
//!     ▼
//! Vec<Paragraph>
//!     │  parsing::build         statement table + WITH modifiers → one Element per Paragraph
//!     ▼
//! Vec<Element>
//!     │  ir::render             templates resolved, escaped HTML joined into the envelope
//!     ▼
//! <html><body>…</body></html>
//! ```
//!
//! The stages are composed as [`transforms`] so tools can stop at any point; see
//! [`transforms::standard`] for the pre-built pipelines.

pub mod compiler;
pub mod config;
pub mod error;
pub mod ir;
pub mod lexing;
pub mod parsing;
pub mod transforms;

pub use compiler::{compile, compile_paragraphs};
pub use error::{CompileError, LexError};
