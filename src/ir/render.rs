//! HTML rendering
//!
//! A read-only walk of the element tree. Rendering never changes an element, so the same tree
//! always renders to the same string.

use super::element::{Element, ElementKind, ELEMENTS};
use crate::error::CompileResult;

pub const DOCUMENT_OPEN: &str = "<html><body>";
pub const DOCUMENT_CLOSE: &str = "</body></html>";

/// Render one element (and, for paragraphs, all of its children).
pub fn render(element: &Element) -> CompileResult<String> {
    match element.kind() {
        ElementKind::Paragraph { children } => {
            let inner = children
                .iter()
                .map(render)
                .collect::<CompileResult<Vec<_>>>()?
                .concat();
            let mut params = element.params().clone();
            params.insert(ELEMENTS.to_string(), inner);
            element.template().resolve(&params)
        }
        ElementKind::Text | ElementKind::Header { .. } | ElementKind::Image | ElementKind::Inline => {
            element.template().resolve(element.params())
        }
    }
}

/// Render top-level paragraph elements into the document envelope.
pub fn render_document(paragraphs: &[Element]) -> CompileResult<String> {
    let mut out = String::from(DOCUMENT_OPEN);
    for paragraph in paragraphs {
        out.push_str(&render(paragraph)?);
    }
    out.push_str(DOCUMENT_CLOSE);
    Ok(out)
}
