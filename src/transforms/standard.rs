//! Standard transform definitions
//!
//! Pre-built pipelines, constructed once and shared read-only.

use super::stages::{Building, Rendering, Segmentation};
use super::Transform;
use crate::ir::Element;
use crate::lexing::Paragraph;
use once_cell::sync::Lazy;

/// Source text → paragraphs of tokenized statements
pub static SEGMENTING: Lazy<Transform<String, Vec<Paragraph>>> =
    Lazy::new(|| Transform::from_fn(Ok).then(Segmentation));

/// Source text → paragraph elements, before rendering
pub static BUILDING: Lazy<Transform<String, Vec<Element>>> =
    Lazy::new(|| Transform::from_fn(Ok).then(Segmentation).then(Building));

/// Source text → HTML document
pub static COMPILING: Lazy<Transform<String, String>> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(Segmentation)
        .then(Building)
        .then(Rendering)
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_building_stops_before_rendering() {
        let elements = BUILDING.run("ADD TEXT \"a\"".to_string()).unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].children().len(), 1);
    }

    #[test]
    fn test_compiling() {
        let html = COMPILING.run("ADD SUBTITLE \"s\"".to_string()).unwrap();
        assert_eq!(html, "<html><body><span><h2>s</h2></span></body></html>");
    }
}
