//! Raw text sources.
//!
//! Decoding PDFs is left to an external tool; a [`TextSource`] hands over
//! the text it produced. Sources fail when the text cannot be obtained or
//! holds nothing but whitespace, before any cleanup runs.
//!
//! # Example
//!
//! ```no_run
//! use paperstruct::source::{FileSource, TextSource};
//!
//! fn main() -> paperstruct::Result<()> {
//!     let source = FileSource::new("paper.txt");
//!     let text = source.read_text()?;
//!     println!("{} bytes", text.len());
//!     Ok(())
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Trait for collaborators that supply the raw extracted text of a document.
pub trait TextSource: Send + Sync {
    /// Name used in error messages and logs.
    fn name(&self) -> &str;

    /// Return the full extracted text.
    fn read_text(&self) -> Result<String>;
}

/// Text dumped to a file by an external PDF extractor.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    /// Accepted file extensions, lowercase without the leading dot.
    pub const SUPPORTED_EXTENSIONS: &'static [&'static str] = &["txt", "text"];

    /// Create a source for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Check if a file extension is accepted.
    pub fn supports_extension(ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        Self::SUPPORTED_EXTENSIONS.iter().any(|e| *e == ext_lower)
    }
}

impl TextSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_text(&self) -> Result<String> {
        let ext = self
            .path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        if !Self::supports_extension(ext) {
            return Err(Error::UnsupportedFormat(format!(
                "'{}' (expected one of: {})",
                self.name,
                Self::SUPPORTED_EXTENSIONS.join(", ")
            )));
        }

        let text = fs::read_to_string(&self.path)?;
        ensure_text(&self.name, text)
    }
}

/// In-memory text, e.g. received from an upload.
#[derive(Debug, Clone)]
pub struct StrSource {
    name: String,
    text: String,
}

impl StrSource {
    /// Create a named in-memory source.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl TextSource for StrSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_text(&self) -> Result<String> {
        ensure_text(&self.name, self.text.clone())
    }
}

fn ensure_text(name: &str, text: String) -> Result<String> {
    if text.trim().is_empty() {
        return Err(Error::EmptyText(name.to_string()));
    }
    Ok(text)
}
