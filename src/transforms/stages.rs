//! Pipeline stages
//!
//! Thin [`Runnable`] wrappers around the lexing, parsing and rendering entry points.

use super::Runnable;
use crate::error::CompileError;
use crate::ir::{render_document, Element};
use crate::lexing::{segment, Paragraph};
use crate::parsing::build;

/// Source text → paragraphs
pub struct Segmentation;

impl Runnable<String, Vec<Paragraph>> for Segmentation {
    fn run(&self, input: String) -> Result<Vec<Paragraph>, CompileError> {
        let paragraphs = segment(&input)?;
        log::debug!(
            "segmented {} bytes into {} paragraphs",
            input.len(),
            paragraphs.len()
        );
        Ok(paragraphs)
    }
}

/// Paragraphs → one paragraph element each
pub struct Building;

impl Runnable<Vec<Paragraph>, Vec<Element>> for Building {
    fn run(&self, input: Vec<Paragraph>) -> Result<Vec<Element>, CompileError> {
        let elements = build(&input)?;
        log::debug!(
            "built {} paragraph elements with {} children",
            elements.len(),
            elements.iter().map(|e| e.children().len()).sum::<usize>()
        );
        Ok(elements)
    }
}

/// Paragraph elements → HTML document
pub struct Rendering;

impl Runnable<Vec<Element>, String> for Rendering {
    fn run(&self, input: Vec<Element>) -> Result<String, CompileError> {
        let html = render_document(&input)?;
        log::debug!("rendered {} bytes of html", html.len());
        Ok(html)
    }
}
