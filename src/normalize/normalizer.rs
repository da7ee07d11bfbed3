//! Layout-noise removal for text extracted from academic PDFs.

use std::collections::HashMap;

use log::debug;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::{NormalizationReport, NormalizeOptions, NormalizePreset};

/// Cleaned text together with what the cleanup observed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// The cleaned text
    pub text: String,

    /// Diagnostic flags
    pub report: NormalizationReport,
}

impl Normalized {
    /// Check if cleanup removed everything.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Text normalizer.
///
/// Stages run in a fixed order, each on the previous stage's output:
/// Unicode cleanup, margin removal, section trimming, inline noise
/// removal, paragraph reconstruction and case folding. The normalizer
/// never fails; an input that is entirely noise yields an empty string.
pub struct Normalizer {
    options: NormalizeOptions,
    ligature_map: Vec<(&'static str, &'static str)>,
    digits_only: Regex,
    digit_run: Regex,
    whitespace_run: Regex,
    abstract_token: Regex,
    introduction_token: Regex,
    references_token: Regex,
    email: Regex,
    ieee_citation: Regex,
    apa_citation: Regex,
    float_mention: Regex,
    hyphen_break: Regex,
    lowercase_wrap: Regex,
    blank_lines: Regex,
    space_run: Regex,
}

impl Normalizer {
    /// Create a new normalizer with the given options.
    pub fn new(options: NormalizeOptions) -> Self {
        Self {
            options,
            ligature_map: vec![
                ("\u{FB00}", "ff"),  // ﬀ
                ("\u{FB01}", "fi"),  // ﬁ
                ("\u{FB02}", "fl"),  // ﬂ
                ("\u{FB03}", "ffi"), // ﬃ
                ("\u{FB04}", "ffl"), // ﬄ
                ("\u{FB05}", "st"),  // ﬅ
                ("\u{FB06}", "st"),  // ﬆ
            ],
            digits_only: Regex::new(r"^\d+$").unwrap(),
            digit_run: Regex::new(r"\d+").unwrap(),
            whitespace_run: Regex::new(r"\s+").unwrap(),
            abstract_token: Regex::new(r"(?i)\b(?:abstract|resumen)\b").unwrap(),
            introduction_token: Regex::new(r"(?i)\bintroduction\b").unwrap(),
            references_token: Regex::new(r"(?i)\b(?:references|bibliography)\b").unwrap(),
            email: Regex::new(r"\S+@\S+").unwrap(),
            ieee_citation: Regex::new(r"\[\d+(?:[-,]\d+)*\]").unwrap(),
            apa_citation: Regex::new(r"\([A-Za-z\s,&]+,\s*\d{4}\)").unwrap(),
            float_mention: Regex::new(r"(?i)\b(?:figure|table|equation|fig\.?|tab\.?)\s*\d*")
                .unwrap(),
            hyphen_break: Regex::new(r"-\s*\n").unwrap(),
            lowercase_wrap: Regex::new(r"\n([a-z])").unwrap(),
            blank_lines: Regex::new(r"\n{2,}").unwrap(),
            space_run: Regex::new(r" {2,}").unwrap(),
        }
    }

    /// Create a normalizer from a preset.
    pub fn from_preset(preset: NormalizePreset) -> Self {
        Self::new(NormalizeOptions::from_preset(preset))
    }

    /// Options in effect.
    pub fn options(&self) -> &NormalizeOptions {
        &self.options
    }

    /// Run every enabled stage over `text`.
    pub fn run(&self, text: &str) -> Normalized {
        let mut report = NormalizationReport::new();
        let mut result = text.to_string();

        if self.options.normalize_unicode || self.options.fix_ligatures {
            result = self.clean_unicode(&result);
        }

        if self.options.remove_margins {
            result = self.remove_margins(&result, &mut report);
            debug!("margin removal: {} lines left", line_count(&result));
        }

        if self.options.trim_sections {
            result = self.trim_sections(&result, &mut report);
            debug!("section trimming: {} lines left", line_count(&result));
        }

        if self.options.remove_inline_noise {
            result = self.remove_inline_noise(&result);
        }

        if self.options.rebuild_paragraphs {
            result = self.rebuild_paragraphs(&result);
            debug!("paragraph rebuild: {} lines left", line_count(&result));
        }

        if self.options.fold_case {
            result = result.to_lowercase();
        }

        Normalized {
            text: result,
            report,
        }
    }

    fn clean_unicode(&self, text: &str) -> String {
        let mut result = if self.options.normalize_unicode {
            text.nfc().collect::<String>()
        } else {
            text.to_string()
        };

        if self.options.fix_ligatures {
            for (ligature, replacement) in &self.ligature_map {
                result = result.replace(ligature, replacement);
            }
        }

        if self.options.strip_garbage_chars {
            result = result
                .chars()
                .filter(|c| {
                    let code = *c as u32;
                    *c != '\u{FFFD}'
                        && !(0xE000..=0xF8FF).contains(&code)
                        && !(0xF0000..=0xFFFFD).contains(&code)
                        && !(0x100000..=0x10FFFD).contains(&code)
                })
                .collect();
        }

        result
    }

    /// Key under which a line is counted for repetition: digits masked,
    /// whitespace collapsed, lower-cased.
    fn margin_key(&self, line: &str) -> String {
        let masked = self.digit_run.replace_all(line, "");
        self.whitespace_run
            .replace_all(&masked, " ")
            .to_lowercase()
    }

    fn remove_margins(&self, text: &str, report: &mut NormalizationReport) -> String {
        let mut frequency: HashMap<String, usize> = HashMap::new();
        for line in text.split('\n') {
            let stripped = line.trim();
            if stripped.is_empty() {
                continue;
            }
            *frequency.entry(self.margin_key(stripped)).or_insert(0) += 1;
        }

        let mut kept = Vec::new();
        for line in text.split('\n') {
            let stripped = line.trim();
            if stripped.is_empty() {
                continue;
            }

            if self.digits_only.is_match(stripped) {
                report.page_numbers_removed = true;
                continue;
            }

            let repeats = frequency
                .get(&self.margin_key(stripped))
                .copied()
                .unwrap_or(0);
            if repeats > 1 {
                report.repeated_headers_removed = true;
                continue;
            }

            kept.push(line);
        }

        kept.join("\n").trim().to_string()
    }

    fn trim_sections(&self, text: &str, report: &mut NormalizationReport) -> String {
        let mut text = text;

        if self.abstract_token.is_match(text) {
            report.abstract_detected = true;
        }

        // The body proper starts at the introduction.
        if let Some(intro) = self.introduction_token.find(text) {
            text = &text[intro.start()..];
        }

        if let Some(references) = self.references_token.find(text) {
            text = &text[..references.start()];
            report.references_removed = true;
        }

        text.trim().to_string()
    }

    fn remove_inline_noise(&self, text: &str) -> String {
        let result = self.email.replace_all(text, "");
        let result = self.ieee_citation.replace_all(&result, "");
        let result = self.apa_citation.replace_all(&result, "");
        let result = self.float_mention.replace_all(&result, "");
        result.trim().to_string()
    }

    fn rebuild_paragraphs(&self, text: &str) -> String {
        let result = self.hyphen_break.replace_all(text, "");
        // A line starting in lower case continues the previous sentence.
        let result = self.lowercase_wrap.replace_all(&result, " ${1}");
        let result = self.blank_lines.replace_all(&result, "\n\n");
        let result = self.space_run.replace_all(&result, " ");
        result.trim().to_string()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(NormalizeOptions::default())
    }
}

fn line_count(text: &str) -> usize {
    text.lines().filter(|line| !line.trim().is_empty()).count()
}
