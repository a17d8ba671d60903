//! Parsing
//!
//! Classifies statements against fixed pattern tables and builds the IR.
//!
//! The grammar is data, not code: [`statements::STATEMENT_RULES`] and
//! [`modifiers::MODIFIER_RULES`] are ordered tables of positional [`Pattern`]s tried in
//! declaration order, the first match wins.
//!
//! - [`pattern`]: positional statement patterns
//! - [`statements`]: main statements (ADD …) → elements
//! - [`modifiers`]: WITH statements → element transformations
//! - [`builder`]: paragraph → one paragraph element

pub mod builder;
pub mod modifiers;
pub mod pattern;
pub mod statements;

pub use builder::{build, build_paragraph};
pub use modifiers::{resolve, Modifier};
pub use pattern::{Pattern, PatternPart};
pub use statements::classify;
