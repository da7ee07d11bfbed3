//! Plain text rendering for structured documents.

use crate::model::{Document, SectionKind};

/// Section headers of a document, one per line.
pub fn to_header_list(doc: &Document) -> String {
    doc.headers().join("\n")
}

/// Indented outline of every node header.
pub fn to_outline(doc: &Document) -> String {
    doc.sections
        .iter()
        .filter_map(|node| {
            let header = node.header.as_deref()?;
            let indent = match node.kind {
                SectionKind::Subsection => "  ",
                _ => "",
            };
            Some(format!("{}{} ({} lines)", indent, header, node.content.len()))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
