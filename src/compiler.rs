//! Compiler driver
//!
//! `compile` runs the whole pipeline: segment → build → render, wrapped in
//! `<html><body>` … `</body></html>`. The first error from any stage is returned as is and no
//! output is produced.

use crate::error::CompileResult;
use crate::ir::render_document;
use crate::lexing::Paragraph;
use crate::parsing::build;
use crate::transforms::standard::COMPILING;

/// Compile source text to an HTML document.
pub fn compile(source: &str) -> CompileResult<String> {
    COMPILING.run(source.to_string())
}

/// Compile paragraphs that were already segmented.
pub fn compile_paragraphs(paragraphs: &[Paragraph]) -> CompileResult<String> {
    render_document(&build(paragraphs)?)
}
