//! Line labels assigned by the classifier.

use serde::{Deserialize, Serialize};

/// Role of a single line of normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineLabel {
    /// References/bibliography heading; structuring stops here
    References,
    /// Caption, equation number, URL or other discardable line
    Noise,
    /// Abstract heading line
    Abstract,
    /// Keywords / index terms line
    Keywords,
    /// A section number printed on its own line
    SectionNumber,
    /// Top-level section heading
    Section,
    /// Nested section heading
    Subsection,
    /// Body text
    Content,
}

impl LineLabel {
    /// Snake-case name of the label.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineLabel::References => "references",
            LineLabel::Noise => "noise",
            LineLabel::Abstract => "abstract",
            LineLabel::Keywords => "keywords",
            LineLabel::SectionNumber => "section_number",
            LineLabel::Section => "section",
            LineLabel::Subsection => "subsection",
            LineLabel::Content => "content",
        }
    }

    /// Check if the label opens a new node.
    pub fn is_header(&self) -> bool {
        matches!(self, LineLabel::Section | LineLabel::Subsection)
    }

    /// Check if a line with this label is kept as node content.
    pub fn is_content(&self) -> bool {
        matches!(
            self,
            LineLabel::Abstract | LineLabel::Keywords | LineLabel::Content
        )
    }
}

impl std::fmt::Display for LineLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
