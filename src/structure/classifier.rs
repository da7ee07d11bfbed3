//! Rule cascade assigning a [`LineLabel`] to each line.
//!
//! Rules are checked in a fixed order and the first match wins:
//!
//! 1. references heading → `References`
//! 2. figure/table caption, bare figure/table reference, equation number → `Noise`
//! 3. numbered research question (`3. RQ1: ...`) → `Section`
//! 4. URL → `Noise`
//! 5. abstract marker → `Abstract`
//! 6. keywords marker → `Keywords`
//! 7. lone section number → `SectionNumber`
//! 8. numbered heading → `Noise` if it reads like a caption, else
//!    `Section`/`Subsection` by numbering depth (Roman numerals are
//!    always depth 1)
//! 9. bare heading from the fixed vocabulary → `Section`
//! 10. anything else → `Content`

use regex::Regex;

use super::LineLabel;

/// Words that mark a numbered line as a caption rather than a heading.
const NON_SECTION_KEYWORDS: &[&str] = &[
    "figure",
    "fig",
    "table",
    "equation",
    "eq",
    "algorithm",
    "source",
    "note",
];

/// First words accepted for a bare (unnumbered) heading.
const VALID_SECTION_STARTERS: &[&str] = &[
    "introduction",
    "background",
    "related",
    "method",
    "methods",
    "methodology",
    "experiment",
    "experiments",
    "results",
    "discussion",
    "conclusion",
    "future",
    "dataset",
    "data",
    "materials",
    "evaluation",
    "trabajo",
    "metodología",
    "resultados",
    "discusión",
    "conclusiones",
];

/// Numbered lines with more words than this read as captions.
const MAX_HEADING_WORDS: usize = 10;

/// Stateless line classifier.
///
/// Labeling depends only on the text of the line, so the classifier can
/// be shared freely between threads.
pub struct LineClassifier {
    references: Regex,
    noise: Vec<Regex>,
    research_question: Regex,
    url: Regex,
    abstract_marker: Regex,
    keywords_marker: Regex,
    number_only: Regex,
    numbered: Regex,
    bare_heading: Regex,
    author: Regex,
}

impl LineClassifier {
    /// Create a classifier with the built-in English/Spanish rules.
    pub fn new() -> Self {
        const NUMBER: &str = r"\d+(?:\.\d+)*|[IVXLCDM]+";

        Self {
            references: Regex::new(
                r"(?i)^(?:references|referencias|bibliography|bibliograf[ií]a)\s*$",
            )
            .unwrap(),
            noise: vec![
                // figure caption
                Regex::new(r"(?i)^(?:fig|figure)\.?\s*\d+[.:]?\s+.+").unwrap(),
                // table caption
                Regex::new(r"(?i)^table\s*\d+[.:]?\s+.+").unwrap(),
                // bare figure reference
                Regex::new(r"(?i)^(?:fig|figure)\.?\s*\d+").unwrap(),
                // bare table reference
                Regex::new(r"(?i)^table\s*\d+").unwrap(),
                // equation number
                Regex::new(r"^\(?\d+\)?$").unwrap(),
            ],
            research_question: Regex::new(r"(?i)^(\d+)\.\s+rq\d+\s*:").unwrap(),
            url: Regex::new(r"(?i)https?://|www\.").unwrap(),
            abstract_marker: Regex::new(r"(?i)^(?:abstract|resumen)[\s—:-]").unwrap(),
            keywords_marker: Regex::new(r"(?i)^(?:keywords|index terms|palabras clave)[\s—:-]")
                .unwrap(),
            number_only: Regex::new(&format!(r"(?i)^({NUMBER})[.)]?$")).unwrap(),
            numbered: Regex::new(&format!(r"(?i)^({NUMBER})[.)]?\s+.+")).unwrap(),
            bare_heading: Regex::new(
                r"(?i)^(?:introduction|background|related work|methodology|methods|dataset|data|experiments|results|discussion|conclusion|future work|materials and methods|trabajo relacionado|metodología|resultados|discusión|conclusiones?)$",
            )
            .unwrap(),
            author: Regex::new(r"(?i)^[a-záéíóúñ]+(?:\s+[a-záéíóúñ]+){1,3}$").unwrap(),
        }
    }

    /// Assign a label to a single line.
    pub fn classify(&self, line: &str) -> LineLabel {
        let line = line.trim();

        if self.references.is_match(line) {
            return LineLabel::References;
        }

        if self.noise.iter().any(|re| re.is_match(line)) {
            return LineLabel::Noise;
        }

        // Checked before the caption test below, which would reject it.
        if self.research_question.is_match(line) {
            return LineLabel::Section;
        }

        if self.url.is_match(line) {
            return LineLabel::Noise;
        }

        if self.abstract_marker.is_match(line) {
            return LineLabel::Abstract;
        }

        if self.keywords_marker.is_match(line) {
            return LineLabel::Keywords;
        }

        if self.number_only.is_match(line) {
            return LineLabel::SectionNumber;
        }

        if let Some(caps) = self.numbered.captures(line) {
            if looks_like_caption(line) {
                return LineLabel::Noise;
            }

            let number = &caps[1];
            if number.chars().all(char::is_alphabetic) {
                return LineLabel::Section;
            }

            return match numbering_depth(number) {
                1 => LineLabel::Section,
                _ => LineLabel::Subsection,
            };
        }

        if self.bare_heading.is_match(line) {
            if !has_section_starter(line) {
                return LineLabel::Noise;
            }
            return LineLabel::Section;
        }

        LineLabel::Content
    }

    /// Label every line of a slice.
    pub fn classify_all(&self, lines: &[&str]) -> Vec<LineLabel> {
        lines.iter().map(|line| self.classify(line)).collect()
    }

    /// Check if a line reads as a short list of names (2 to 4 words).
    pub fn is_author_line(&self, line: &str) -> bool {
        self.author.is_match(line.trim())
    }
}

impl Default for LineClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Depth of a dotted section number: `2` → 1, `2.3` → 2, `2.3.1` → 3.
pub fn numbering_depth(number: &str) -> usize {
    number.matches('.').count() + 1
}

fn looks_like_caption(line: &str) -> bool {
    let lowered = line.to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();

    words.len() > MAX_HEADING_WORDS
        || words.iter().any(|w| NON_SECTION_KEYWORDS.contains(w))
        || line.ends_with('.')
}

fn has_section_starter(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .map(|word| VALID_SECTION_STARTERS.contains(&word.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(line: &str) -> LineLabel {
        LineClassifier::new().classify(line)
    }

    #[test]
    fn test_references_heading() {
        assert_eq!(label("references"), LineLabel::References);
        assert_eq!(label("Referencias  "), LineLabel::References);
        assert_eq!(label("Bibliography"), LineLabel::References);
        assert_eq!(label("references cited below"), LineLabel::Content);
    }

    #[test]
    fn test_captions_and_equation_numbers_are_noise() {
        assert_eq!(label("figure 3: architecture overview"), LineLabel::Noise);
        assert_eq!(label("Fig. 2 results per class"), LineLabel::Noise);
        assert_eq!(
            label("Table 2. Dataset statistics showing X Y Z"),
            LineLabel::Noise
        );
        assert_eq!(label("table 4"), LineLabel::Noise);
        assert_eq!(label("(12)"), LineLabel::Noise);
        assert_eq!(label("7"), LineLabel::Noise);
    }

    #[test]
    fn test_research_question_heading() {
        assert_eq!(
            label("3. RQ1: does the model generalize to new domains and tasks?"),
            LineLabel::Section
        );
    }

    #[test]
    fn test_url_is_noise() {
        assert_eq!(label("code at https://github.com/x/y"), LineLabel::Noise);
        assert_eq!(label("see www.example.org"), LineLabel::Noise);
    }

    #[test]
    fn test_abstract_and_keywords_markers() {
        assert_eq!(label("abstract— we study parsing"), LineLabel::Abstract);
        assert_eq!(label("Resumen: este trabajo"), LineLabel::Abstract);
        assert_eq!(label("keywords: nlp, parsing"), LineLabel::Keywords);
        assert_eq!(label("Index Terms—pdf, layout"), LineLabel::Keywords);
        assert_eq!(label("palabras clave: texto"), LineLabel::Keywords);
    }

    #[test]
    fn test_lone_section_numbers() {
        assert_eq!(label("3."), LineLabel::SectionNumber);
        assert_eq!(label("2.1)"), LineLabel::SectionNumber);
        assert_eq!(label("IV"), LineLabel::SectionNumber);
        assert_eq!(label("iv."), LineLabel::SectionNumber);
    }

    #[test]
    fn test_roman_numerals_are_always_sections() {
        assert_eq!(label("II. Related Work"), LineLabel::Section);
        assert_eq!(label("xiv. future work"), LineLabel::Section);
        assert_eq!(label("VIII) Conclusions"), LineLabel::Section);
    }

    #[test]
    fn test_numeric_depth() {
        assert_eq!(label("1 introduction"), LineLabel::Section);
        assert_eq!(label("3. methodology"), LineLabel::Section);
        assert_eq!(label("2.3 Results"), LineLabel::Subsection);
        assert_eq!(label("2.3.1. ablations"), LineLabel::Subsection);
        assert_eq!(numbering_depth("2.3.1"), 3);
        assert_eq!(numbering_depth("4"), 1);
    }

    #[test]
    fn test_numbered_captions_are_noise() {
        // more than ten words
        assert_eq!(
            label("4. we ran eleven experiments across many different datasets and model sizes"),
            LineLabel::Noise
        );
        // trailing period
        assert_eq!(label("5. experimental setup."), LineLabel::Noise);
        // caption keyword
        assert_eq!(label("3 algorithm design"), LineLabel::Noise);
        assert_eq!(label("2.1 source code"), LineLabel::Noise);
    }

    #[test]
    fn test_bare_headings() {
        assert_eq!(label("introduction"), LineLabel::Section);
        assert_eq!(label("Related Work"), LineLabel::Section);
        assert_eq!(label("materials and methods"), LineLabel::Section);
        assert_eq!(label("conclusiones"), LineLabel::Section);
        assert_eq!(label("discusión"), LineLabel::Section);
        assert_eq!(label("the results"), LineLabel::Content);
        assert_eq!(label("results are shown below"), LineLabel::Content);
    }

    #[test]
    fn test_section_starter_guard() {
        for heading in ["introduction", "related work", "future work", "trabajo relacionado"] {
            assert!(has_section_starter(heading), "{heading}");
        }
        assert!(!has_section_starter("overview"));
        assert!(!has_section_starter(""));
    }

    #[test]
    fn test_body_text_is_content() {
        assert_eq!(
            label("we propose a new method for structuring papers."),
            LineLabel::Content
        );
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = LineClassifier::new();
        let lines = ["1. introduction", "body text here", "3.", "methodology", "references"];
        let first = classifier.classify_all(&lines);
        let second = classifier.classify_all(&lines);
        assert_eq!(first, second);
        assert_eq!(
            first,
            vec![
                LineLabel::Section,
                LineLabel::Content,
                LineLabel::SectionNumber,
                LineLabel::Section,
                LineLabel::References
            ]
        );
    }

    #[test]
    fn test_author_lines() {
        let classifier = LineClassifier::new();
        assert!(classifier.is_author_line("maría pérez"));
        assert!(classifier.is_author_line("John Ronald Reuel Tolkien"));
        assert!(!classifier.is_author_line("Single"));
        assert!(!classifier.is_author_line("one two three four five"));
        assert!(!classifier.is_author_line("j. smith"));
    }
}
