//! Markdown rendering for structured documents.

use crate::model::{Document, SectionKind, SectionNode};

/// Convert a document to Markdown.
///
/// The title becomes a level-1 heading, sections level 2 and subsections
/// level 3. Content lines are emitted as paragraphs.
pub fn to_markdown(doc: &Document) -> String {
    let mut output = String::new();

    if !doc.title.is_empty() {
        output.push_str("# ");
        output.push_str(&doc.title);
        output.push_str("\n\n");
    }

    if !doc.authors.is_empty() {
        output.push_str(&format!("*{}*\n\n", doc.authors_line()));
    }

    for node in &doc.sections {
        render_node(&mut output, node);
    }

    output.trim().to_string()
}

fn render_node(output: &mut String, node: &SectionNode) {
    let prefix = match node.kind {
        SectionKind::Preamble => None,
        SectionKind::Section => Some("##"),
        SectionKind::Subsection => Some("###"),
    };

    if let (Some(prefix), Some(header)) = (prefix, node.header.as_deref()) {
        output.push_str(&format!("{} {}\n\n", prefix, header));
    }

    for line in &node.content {
        output.push_str(line);
        output.push_str("\n\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_markdown() {
        let mut doc = Document::new();
        doc.title = "a study".to_string();
        doc.authors = vec!["ana perez".to_string(), "li wei".to_string()];
        doc.sections[0].push_line("preface");
        let mut intro = SectionNode::section("1 introduction");
        intro.push_line("hello");
        doc.sections.push(intro);
        doc.sections.push(SectionNode::subsection("1.1 scope"));

        let md = to_markdown(&doc);
        assert_eq!(
            md,
            "# a study\n\n*ana perez, li wei*\n\npreface\n\n## 1 introduction\n\nhello\n\n### 1.1 scope"
        );
    }

    #[test]
    fn test_to_markdown_empty_document() {
        assert_eq!(to_markdown(&Document::new()), "");
    }
}
