//! Section tree construction over classified lines.

use log::{debug, trace, warn};

use crate::model::{Document, SectionNode};

use super::{LineClassifier, LineLabel};

/// Options for the structure builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureOptions {
    /// Number of leading lines scanned for title and authors
    pub title_scan_limit: usize,
}

impl StructureOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title/author scan window.
    pub fn with_title_scan_limit(mut self, limit: usize) -> Self {
        self.title_scan_limit = limit;
        self
    }
}

impl Default for StructureOptions {
    fn default() -> Self {
        Self {
            title_scan_limit: 15,
        }
    }
}

/// Rebuilds title, authors and sections from normalized text.
///
/// The builder never fails: text without recognizable headers yields a
/// document holding only the preamble.
pub struct StructureBuilder {
    options: StructureOptions,
    classifier: LineClassifier,
}

impl StructureBuilder {
    /// Create a new builder with the given options.
    pub fn new(options: StructureOptions) -> Self {
        Self {
            options,
            classifier: LineClassifier::new(),
        }
    }

    /// The classifier used for every line.
    pub fn classifier(&self) -> &LineClassifier {
        &self.classifier
    }

    /// Build the document tree for `text`.
    pub fn process(&self, text: &str) -> Document {
        let lines = prepare_lines(text);
        let (title, authors) = self.detect_title_and_authors(&lines);
        let sections = self.build_sections(&lines);

        let document = Document {
            title,
            authors,
            sections,
        };
        if document.is_unstructured() && !lines.is_empty() {
            warn!("no section headers recognized in {} lines", lines.len());
        }
        document
    }

    /// Headers of the top-level sections of `text`, in order.
    pub fn headers(&self, text: &str) -> Vec<String> {
        self.process(text).headers()
    }

    /// Scan the leading window for title and author lines.
    ///
    /// Scanning stops at the first abstract or section line. A short
    /// name-like line counts as an author only once a title line exists.
    pub fn detect_title_and_authors(&self, lines: &[&str]) -> (String, Vec<String>) {
        let mut title_lines: Vec<&str> = Vec::new();
        let mut authors = Vec::new();

        for line in lines.iter().take(self.options.title_scan_limit) {
            let label = self.classifier.classify(line);
            if matches!(label, LineLabel::Abstract | LineLabel::Section) {
                break;
            }

            if !title_lines.is_empty() && self.classifier.is_author_line(line) {
                authors.push(line.to_string());
            } else {
                title_lines.push(*line);
            }
        }

        (title_lines.join(" ").trim().to_string(), authors)
    }

    /// Walk the lines and emit section nodes in document order.
    ///
    /// The preamble node is always emitted first. A section number printed
    /// on its own line is carried to the next section heading; a
    /// subsection heading drops it.
    pub fn build_sections(&self, lines: &[&str]) -> Vec<SectionNode> {
        let mut sections = Vec::new();
        let mut current = SectionNode::preamble();
        let mut pending_number: Option<&str> = None;

        for line in lines {
            let label = self.classifier.classify(line);
            trace!("{:>14} | {}", label.as_str(), line);

            match label {
                LineLabel::References => {
                    debug!("references heading reached, stopping");
                    break;
                }
                LineLabel::SectionNumber => {
                    pending_number = Some(*line);
                }
                label if label.is_header() => {
                    sections.push(current);
                    current = match (label, pending_number.take()) {
                        (LineLabel::Section, Some(number)) => {
                            SectionNode::section(format!("{} {}", number, line))
                        }
                        (LineLabel::Section, None) => SectionNode::section(*line),
                        _ => SectionNode::subsection(*line),
                    };
                }
                label if label.is_content() => current.push_line(*line),
                _ => {}
            }
        }

        if let Some(number) = pending_number {
            debug!("dropping trailing section number '{}'", number);
        }
        sections.push(current);
        sections
    }
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new(StructureOptions::default())
    }
}

/// Split text into trimmed, non-blank lines.
pub fn prepare_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}
