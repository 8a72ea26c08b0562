//! Symbolic reference resolution.
//!
//! Two engines: package inheritance ([`inherit`]) and theme color
//! placeholders ([`theme`]). Both are pure functions over immutable
//! inputs; neither performs I/O or stores state between calls.

pub mod inherit;
pub mod theme;

pub use inherit::{ResolvedComponentSet, resolve, source_of};
pub use theme::resolve_placeholders;
