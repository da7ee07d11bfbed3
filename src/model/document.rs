//! Document-level types.

use super::{SectionKind, SectionNode};
use serde::{Deserialize, Serialize};

/// A structured academic document: title, authors and section tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Title lines joined with single spaces
    pub title: String,

    /// Author lines in reading order (serialized comma-joined)
    #[serde(with = "comma_joined")]
    pub authors: Vec<String>,

    /// Section nodes in document order; the preamble is always first
    pub sections: Vec<SectionNode>,
}

impl Document {
    /// Create a document holding a single empty preamble.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            authors: Vec::new(),
            sections: vec![SectionNode::preamble()],
        }
    }

    /// Authors rendered as a single comma-joined string.
    pub fn authors_line(&self) -> String {
        self.authors.join(", ")
    }

    /// The preamble node.
    pub fn preamble(&self) -> Option<&SectionNode> {
        self.sections
            .first()
            .filter(|node| node.kind == SectionKind::Preamble)
    }

    /// Headers of top-level sections, in document order.
    ///
    /// Subsections and header-less nodes are skipped.
    pub fn headers(&self) -> Vec<String> {
        self.sections
            .iter()
            .filter(|node| node.kind == SectionKind::Section)
            .filter_map(|node| node.header.as_deref())
            .filter(|header| !header.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Number of nodes of the given kind.
    pub fn count(&self, kind: SectionKind) -> usize {
        self.sections.iter().filter(|node| node.kind == kind).count()
    }

    /// Check if no header of any kind was recognized.
    pub fn is_unstructured(&self) -> bool {
        self.sections
            .iter()
            .all(|node| node.kind == SectionKind::Preamble)
    }

    /// Find the first node whose header contains `needle` (case-insensitive).
    pub fn find_section(&self, needle: &str) -> Option<&SectionNode> {
        let needle = needle.to_lowercase();
        self.sections.iter().find(|node| {
            node.header
                .as_deref()
                .is_some_and(|header| header.to_lowercase().contains(&needle))
        })
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

mod comma_joined {
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::ptr_arg)]
    pub fn serialize<S: Serializer>(authors: &Vec<String>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&authors.join(", "))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
        let joined = String::deserialize(deserializer)?;
        Ok(joined
            .split(", ")
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut intro = SectionNode::section("1. introduction");
        intro.push_line("text");
        Document {
            title: "a study".to_string(),
            authors: vec!["ana perez".to_string(), "john smith".to_string()],
            sections: vec![
                SectionNode::preamble(),
                intro,
                SectionNode::subsection("1.1 scope"),
                SectionNode::section("2. methods"),
            ],
        }
    }

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert_eq!(doc.sections.len(), 1);
        assert!(doc.preamble().is_some());
        assert!(doc.is_unstructured());
        assert!(doc.headers().is_empty());
    }

    #[test]
    fn test_headers_skip_subsections() {
        let doc = sample();
        assert_eq!(doc.headers(), vec!["1. introduction", "2. methods"]);
        assert_eq!(doc.count(SectionKind::Subsection), 1);
        assert!(!doc.is_unstructured());
    }

    #[test]
    fn test_find_section() {
        let doc = sample();
        let found = doc.find_section("SCOPE").unwrap();
        assert_eq!(found.kind, SectionKind::Subsection);
        assert!(doc.find_section("results").is_none());
    }

    #[test]
    fn test_authors_serialize_comma_joined() {
        let doc = sample();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains("\"authors\":\"ana perez, john smith\""));

        let back: Document = serde_json::from_str(&json).unwrap();
        assert_eq!(back.authors, doc.authors);
    }
}
