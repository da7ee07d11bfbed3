//! Text normalization for raw PDF-extracted text.
//!
//! Strips running headers and footers, page numbers, the reference list,
//! inline citations and hyphenated line wraps, and reports what it found
//! in a [`NormalizationReport`].

mod normalizer;
mod options;
mod report;

pub use normalizer::{Normalized, Normalizer};
pub use options::{NormalizeOptions, NormalizePreset};
pub use report::NormalizationReport;
