//! JSON rendering for structured documents.

use serde::Serialize;

use crate::error::{Error, Result};
use crate::model::Document;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Header list of one document, as emitted by the header listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderSummary {
    /// Source name
    pub file: String,

    /// Number of headers
    pub total: usize,

    /// Top-level section headers, in order
    pub headers: Vec<String>,
}

impl HeaderSummary {
    /// Summarize the headers of one source.
    pub fn new(file: impl Into<String>, headers: Vec<String>) -> Self {
        Self {
            file: file.into(),
            total: headers.len(),
            headers,
        }
    }
}

/// Convert a document to JSON.
pub fn to_json(doc: &Document, format: JsonFormat) -> Result<String> {
    serialize(doc, format)
}

/// Serialize any serde value with the given format.
pub fn serialize<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
        JsonFormat::Compact => serde_json::to_string(value),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SectionNode;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.title = "a study".to_string();
        doc.authors = vec!["ana perez".to_string()];
        let mut intro = SectionNode::section("1 introduction");
        intro.push_line("hello");
        doc.sections.push(intro);
        doc
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\": \"a study\""));
        assert!(json.contains("\"type\": \"preamble\""));
        assert!(json.contains("\"header\": null"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_header_summary_counts_headers() {
        let summary = HeaderSummary::new("paper.txt", sample().headers());
        let json = serialize(&[summary], JsonFormat::Compact).unwrap();
        assert_eq!(
            json,
            r#"[{"file":"paper.txt","total":1,"headers":["1 introduction"]}]"#
        );
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains("\"authors\":\"ana perez\""));
    }
}
