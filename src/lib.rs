//! # paperstruct
//!
//! Turns layout-mangled text extracted from academic PDFs into a clean,
//! hierarchically structured document.
//!
//! Processing runs in two stages:
//!
//! 1. [`Normalizer`] strips running headers and footers, page numbers,
//!    the reference list, inline citations and hyphenated line wraps.
//! 2. [`StructureBuilder`] labels every remaining line and rebuilds the
//!    title, authors and the ordered section/subsection tree, stopping at
//!    the bibliography.
//!
//! ## Quick Start
//!
//! ```
//! let raw = "Journal of Examples 12\n\
//!            Introduction\n\
//!            Parsing papers is hard.\n\
//!            Journal of Examples 13\n\
//!            2. Method\n\
//!            We use rules.\n\
//!            References\n\
//!            [1] Someone. A paper.";
//!
//! let headers = paperstruct::headers(raw);
//! assert_eq!(headers, vec!["introduction", "2. method"]);
//! ```
//!
//! ## Features
//!
//! - **Layout cleanup**: running headers, page numbers, citations, wraps
//! - **Rule-based structuring**: numbered, Roman and bare headings
//! - **English and Spanish** heading vocabularies
//! - **Parallel batches**: independent documents processed with Rayon

pub mod diagnostics;
pub mod error;
pub mod model;
pub mod normalize;
pub mod render;
pub mod source;
pub mod structure;

// Re-export commonly used types
pub use diagnostics::{ErrorResponse, WarningCollector};
pub use error::{Error, Result};
pub use model::{Document, SectionKind, SectionNode};
pub use normalize::{
    NormalizationReport, NormalizeOptions, NormalizePreset, Normalized, Normalizer,
};
pub use render::JsonFormat;
pub use source::{FileSource, StrSource, TextSource};
pub use structure::{LineClassifier, LineLabel, StructureBuilder, StructureOptions};

use log::{debug, info};
use rayon::prelude::*;
use serde::Serialize;

/// Normalize raw extracted text with the standard options.
///
/// # Example
///
/// ```
/// let out = paperstruct::normalize("Intro text [3].\n7\nMore text.");
/// assert_eq!(out.text, "intro text .\nmore text.");
/// assert!(out.report.page_numbers_removed);
/// ```
pub fn normalize(text: &str) -> Normalized {
    Normalizer::default().run(text)
}

/// Build the document tree of already-normalized text.
pub fn structure(text: &str) -> Document {
    StructureBuilder::default().process(text)
}

/// Normalize raw text and return its top-level section headers.
pub fn headers(text: &str) -> Vec<String> {
    Pipeline::default().process_text(text).headers()
}

/// Normalize and structure raw text with default options.
pub fn process_text(text: &str) -> PipelineOutput {
    Pipeline::default().process_text(text)
}

/// Read a source and return its top-level section headers.
///
/// Fails only when the source yields no text; a document without
/// recognizable structure returns an empty list.
///
/// # Example
///
/// ```no_run
/// use paperstruct::{extract_headers, FileSource};
///
/// let headers = extract_headers(&FileSource::new("paper.txt")).unwrap();
/// for header in headers {
///     println!("{}", header);
/// }
/// ```
pub fn extract_headers(source: &dyn TextSource) -> Result<Vec<String>> {
    Pipeline::default().extract_headers(source)
}

/// Builder for a configured [`Pipeline`].
///
/// # Example
///
/// ```
/// use paperstruct::{NormalizePreset, Paperstruct};
///
/// let pipeline = Paperstruct::new()
///     .with_preset(NormalizePreset::Standard)
///     .fold_case(false)
///     .with_title_scan_limit(10)
///     .build();
///
/// let out = pipeline.process_text("Introduction\nDeep Learning works.");
/// assert_eq!(out.document.headers(), vec!["Introduction"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Paperstruct {
    normalize_options: NormalizeOptions,
    structure_options: StructureOptions,
}

impl Paperstruct {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a normalization preset.
    pub fn with_preset(mut self, preset: NormalizePreset) -> Self {
        self.normalize_options = NormalizeOptions::from_preset(preset);
        self
    }

    /// Set normalization options.
    pub fn with_normalize_options(mut self, options: NormalizeOptions) -> Self {
        self.normalize_options = options;
        self
    }

    /// Set structure options.
    pub fn with_structure_options(mut self, options: StructureOptions) -> Self {
        self.structure_options = options;
        self
    }

    /// Enable or disable lower-casing of the cleaned text.
    pub fn fold_case(mut self, enabled: bool) -> Self {
        self.normalize_options = self.normalize_options.fold_case(enabled);
        self
    }

    /// Set the title/author scan window.
    pub fn with_title_scan_limit(mut self, limit: usize) -> Self {
        self.structure_options = self.structure_options.with_title_scan_limit(limit);
        self
    }

    /// Build the pipeline.
    pub fn build(self) -> Pipeline {
        Pipeline::new(self.normalize_options, self.structure_options)
    }
}

/// Result of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineOutput {
    /// Text after normalization
    pub cleaned_text: String,

    /// What normalization found
    pub report: NormalizationReport,

    /// Structured document
    pub document: Document,
}

impl PipelineOutput {
    /// Top-level section headers.
    pub fn headers(&self) -> Vec<String> {
        self.document.headers()
    }

    /// Warnings for the report flags that were not raised.
    pub fn warnings(&self) -> Vec<String> {
        let mut collector = WarningCollector::new();
        collector.check_report(&self.report);
        collector.into_warnings()
    }
}

/// Normalizer followed by structure builder.
///
/// A pipeline holds no per-document state and can be shared across
/// threads.
pub struct Pipeline {
    normalizer: Normalizer,
    builder: StructureBuilder,
}

impl Pipeline {
    /// Create a pipeline with the given options.
    pub fn new(normalize_options: NormalizeOptions, structure_options: StructureOptions) -> Self {
        Self {
            normalizer: Normalizer::new(normalize_options),
            builder: StructureBuilder::new(structure_options),
        }
    }

    /// The normalizer stage.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// The structuring stage.
    pub fn builder(&self) -> &StructureBuilder {
        &self.builder
    }

    /// Normalize and structure raw text. Never fails.
    pub fn process_text(&self, raw: &str) -> PipelineOutput {
        let Normalized { text, report } = self.normalizer.run(raw);
        let document = self.builder.process(&text);
        debug!(
            "structured {} nodes, {} headers",
            document.sections.len(),
            document.headers().len()
        );

        PipelineOutput {
            cleaned_text: text,
            report,
            document,
        }
    }

    /// Read a source, then normalize and structure it.
    ///
    /// Fails only when the source yields no text. Text that cleanup
    /// empties gives a preamble-only document.
    pub fn structure_source(&self, source: &dyn TextSource) -> Result<PipelineOutput> {
        let raw = source.read_text()?;
        info!("processing '{}' ({} bytes)", source.name(), raw.len());
        Ok(self.process_text(&raw))
    }

    /// Like [`structure_source`](Self::structure_source), but also fails
    /// when cleanup removes everything.
    pub fn process_source(&self, source: &dyn TextSource) -> Result<PipelineOutput> {
        let output = self.structure_source(source)?;
        if output.cleaned_text.trim().is_empty() {
            return Err(Error::EmptyAfterCleanup);
        }
        Ok(output)
    }

    /// Read a source and return its top-level section headers.
    pub fn extract_headers(&self, source: &dyn TextSource) -> Result<Vec<String>> {
        Ok(self.structure_source(source)?.headers())
    }

    /// Process independent documents in parallel.
    ///
    /// Output order matches input order.
    pub fn process_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<PipelineOutput> {
        texts
            .par_iter()
            .map(|text| self.process_text(text.as_ref()))
            .collect()
    }

    /// Read and process several sources in parallel.
    pub fn process_sources<T: TextSource>(&self, sources: &[T]) -> Vec<Result<PipelineOutput>> {
        sources
            .par_iter()
            .map(|source| self.process_source(source))
            .collect()
    }

    /// Read and structure several sources in parallel, failing per source
    /// only when it yields no text.
    pub fn structure_sources<T: TextSource>(&self, sources: &[T]) -> Vec<Result<PipelineOutput>> {
        sources
            .par_iter()
            .map(|source| self.structure_source(source))
            .collect()
    }

    /// Headers of several sources, extracted in parallel.
    pub fn extract_headers_batch<T: TextSource>(&self, sources: &[T]) -> Vec<Result<Vec<String>>> {
        sources
            .par_iter()
            .map(|source| self.extract_headers(source))
            .collect()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(NormalizeOptions::default(), StructureOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_options() {
        let builder = Paperstruct::new()
            .with_preset(NormalizePreset::Minimal)
            .with_title_scan_limit(3);
        assert!(!builder.normalize_options.fold_case);
        assert_eq!(builder.structure_options.title_scan_limit, 3);
    }

    #[test]
    fn test_builder_fold_case_overrides_preset() {
        let builder = Paperstruct::new()
            .with_preset(NormalizePreset::Minimal)
            .fold_case(true);
        assert!(builder.normalize_options.fold_case);
    }

    #[test]
    fn test_process_text_no_structure() {
        let out = process_text("Just some words.\nMore words here.");
        assert_eq!(out.document.sections.len(), 1);
        assert!(out.headers().is_empty());
    }

    #[test]
    fn test_process_source_empty_after_cleanup() {
        let source = StrSource::new("numbers", "1\n2\n3");
        let result = Pipeline::default().process_source(&source);
        assert!(matches!(result, Err(Error::EmptyAfterCleanup)));
    }

    #[test]
    fn test_extract_headers_empty_source() {
        let source = StrSource::new("blank", "   ");
        assert!(matches!(
            extract_headers(&source),
            Err(Error::EmptyText(_))
        ));
    }

    #[test]
    fn test_structure_source_keeps_empty_cleanup() {
        let source = StrSource::new("numbers", "1\n2\n3");
        let out = Pipeline::default().structure_source(&source).unwrap();
        assert_eq!(out.cleaned_text, "");
        assert!(out.document.is_unstructured());
    }

    #[test]
    fn test_output_warnings() {
        let out = process_text("Introduction\nText.");
        assert_eq!(out.warnings().len(), 4);
    }

    #[test]
    fn test_process_batch_keeps_order() {
        let texts = vec![
            "Introduction\nAlpha.".to_string(),
            "Plain text only.".to_string(),
            "1. Methods\nBeta.".to_string(),
        ];
        let outputs = Pipeline::default().process_batch(&texts);
        assert_eq!(outputs.len(), 3);
        assert_eq!(outputs[0].headers(), vec!["introduction"]);
        assert!(outputs[1].headers().is_empty());
        assert_eq!(outputs[2].headers(), vec!["1. methods"]);
    }
}
