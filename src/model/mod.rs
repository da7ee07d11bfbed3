//! Document tree types produced by the structure builder.
//!
//! A [`Document`] is a flat, ordered list of [`SectionNode`]s. Nesting is
//! expressed by [`SectionKind`] rather than by ownership, so the tree can
//! be walked linearly in reading order.

mod document;
mod section;

pub use document::Document;
pub use section::{SectionKind, SectionNode};
