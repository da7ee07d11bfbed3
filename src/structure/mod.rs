//! Line classification and section tree construction.
//!
//! [`LineClassifier`] labels each line of normalized text on its own;
//! [`StructureBuilder`] walks the labels and assembles a
//! [`Document`](crate::model::Document), stopping at the references
//! heading.

mod builder;
mod classifier;
mod label;

pub use builder::{prepare_lines, StructureBuilder, StructureOptions};
pub use classifier::{numbering_depth, LineClassifier};
pub use label::LineLabel;
