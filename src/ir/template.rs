//! Templates
//!
//! A template is an ordered list of literal segments and named placeholders. User content only
//! ever lands in literal segments, so braces or anything else in it is never interpreted.
//! Resolution is strict: a placeholder without a value is an error.

use crate::error::{CompileError, CompileResult};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Placeholder values, keyed by placeholder name
pub type Params = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Segment {
    Literal(String),
    Placeholder(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn literal(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.segments.push(Segment::Literal(text));
        }
        self
    }

    pub fn placeholder(mut self, name: impl Into<String>) -> Self {
        self.segments.push(Segment::Placeholder(name.into()));
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Surround the whole template with two literals, keeping every placeholder.
    pub fn wrap(self, open: &str, close: &str) -> Template {
        Template::new()
            .literal(open)
            .extend(self.segments)
            .literal(close)
    }

    fn extend(mut self, segments: Vec<Segment>) -> Self {
        self.segments.extend(segments);
        self
    }

    /// Substitute every placeholder from `params`.
    pub fn resolve(&self, params: &Params) -> CompileResult<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match params.get(name) {
                    Some(value) => out.push_str(value),
                    None => return Err(CompileError::UnresolvedPlaceholder(name.clone())),
                },
            }
        }
        Ok(out)
    }
}

/// Raw template with placeholders shown as `{name}`
impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => write!(f, "{}", text)?,
                Segment::Placeholder(name) => write!(f, "{{{}}}", name)?,
            }
        }
        Ok(())
    }
}
