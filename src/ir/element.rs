//! IR elements
//!
//! An element pairs a [`Template`] with the parameters its placeholders resolve to. The
//! paragraph element additionally owns its children, which fill its `elements` placeholder
//! when rendered.

use super::template::{Params, Template};
use crate::error::{CompileError, CompileResult};
use serde::Serialize;

/// Placeholder a paragraph fills with its rendered children
pub const ELEMENTS: &str = "elements";

const HEADER_LEVELS: std::ops::RangeInclusive<u8> = 1..=6;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Header { level: u8 },
    Image,
    /// Fixed markup injected as is
    Inline,
    Paragraph { children: Vec<Element> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    #[serde(flatten)]
    kind: ElementKind,
    template: Template,
    params: Params,
}

/// Escape `&`, `<` and `>` (in that order) and turn newlines into `<br/>`.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\n', "<br/>")
}

impl Element {
    fn new(kind: ElementKind, template: Template) -> Self {
        Element {
            kind,
            template,
            params: Params::new(),
        }
    }

    pub fn text(text: &str) -> Self {
        Element::new(ElementKind::Text, Template::new().literal(escape_text(text)))
    }

    /// Heading of the given level; fails unless `1 <= level <= 6`.
    pub fn header(text: &str, level: u8) -> CompileResult<Self> {
        if !HEADER_LEVELS.contains(&level) {
            return Err(CompileError::InvalidHeaderLevel(level));
        }
        let template = Template::new()
            .literal(escape_text(text))
            .wrap(&format!("<h{}>", level), &format!("</h{}>", level));
        Ok(Element::new(ElementKind::Header { level }, template))
    }

    /// Image pointing at `src`. The URI is not validated or escaped.
    pub fn image(src: &str) -> Self {
        let template = Template::new()
            .literal("<img src=\"")
            .placeholder("src")
            .literal("\"/>");
        Element::new(ElementKind::Image, template).with_param("src", src)
    }

    pub fn inline(html: &str) -> Self {
        Element::new(ElementKind::Inline, Template::new().literal(html))
    }

    pub fn paragraph(children: Vec<Element>) -> Self {
        let template = Template::new()
            .literal("<span>")
            .placeholder(ELEMENTS)
            .literal("</span>");
        Element::new(ElementKind::Paragraph { children }, template)
    }

    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Surround the current markup with `open` and `close`, keeping parameters and children.
    pub fn wrap(self, open: &str, close: &str) -> Self {
        Element {
            template: self.template.wrap(open, close),
            ..self
        }
    }

    pub fn kind(&self) -> &ElementKind {
        &self.kind
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn children(&self) -> &[Element] {
        match &self.kind {
            ElementKind::Paragraph { children } => children,
            _ => &[],
        }
    }

    pub fn render(&self) -> CompileResult<String> {
        super::render::render(self)
    }
}
