//! Rendering module for converting structured documents to output formats.

mod json;
mod markdown;
mod text;

pub use json::{serialize, to_json, HeaderSummary, JsonFormat};
pub use markdown::to_markdown;
pub use text::{to_header_list, to_outline};
