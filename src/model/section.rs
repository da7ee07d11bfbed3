//! Section-level types.

use serde::{Deserialize, Serialize};

/// Kind of a node in the section tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// Everything before the first recognized header
    Preamble,
    /// Top-level section (depth 1 or Roman numbering)
    Section,
    /// Nested section (dotted numbering of depth 2 or more)
    Subsection,
}

impl SectionKind {
    /// Lower-case name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKind::Preamble => "preamble",
            SectionKind::Section => "section",
            SectionKind::Subsection => "subsection",
        }
    }
}

impl std::fmt::Display for SectionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A node of the section tree: a header plus the lines under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionNode {
    /// Node kind
    #[serde(rename = "type")]
    pub kind: SectionKind,

    /// Header line; `None` for the preamble
    pub header: Option<String>,

    /// Content lines in document order
    pub content: Vec<String>,
}

impl SectionNode {
    /// Create the empty preamble node.
    pub fn preamble() -> Self {
        Self {
            kind: SectionKind::Preamble,
            header: None,
            content: Vec::new(),
        }
    }

    /// Create a top-level section node.
    pub fn section(header: impl Into<String>) -> Self {
        Self {
            kind: SectionKind::Section,
            header: Some(header.into()),
            content: Vec::new(),
        }
    }

    /// Create a subsection node.
    pub fn subsection(header: impl Into<String>) -> Self {
        Self {
            kind: SectionKind::Subsection,
            header: Some(header.into()),
            content: Vec::new(),
        }
    }

    /// Append a content line.
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.content.push(line.into());
    }

    /// Header text, or an empty string for the preamble.
    pub fn header_text(&self) -> &str {
        self.header.as_deref().unwrap_or("")
    }

    /// Check if the node has no content lines.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Content lines joined with single spaces.
    pub fn text(&self) -> String {
        self.content.join(" ")
    }
}
