//! Intermediate representation
//!
//! Every element is a [`Template`] plus a parameter map resolved at render time. Modifiers
//! wrap the current template of an element and hand back a new element; nothing here is
//! mutated after it is built.
//!
//! | Element | Template |
//! |---------|----------|
//! | Text | escaped literal, newlines as `<br/>` |
//! | Header | `<hN>` escaped literal `</hN>` |
//! | Image | `<img src="{src}"/>` |
//! | Inline | fixed literal markup |
//! | Paragraph | `<span>{elements}</span>` |

pub mod element;
pub mod render;
pub mod template;

pub use element::{escape_text, Element, ElementKind, ELEMENTS};
pub use render::{render, render_document, DOCUMENT_CLOSE, DOCUMENT_OPEN};
pub use template::{Params, Segment, Template};
