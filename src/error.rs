//! Error types for paperstruct.

use std::io;
use thiserror::Error;

/// Result type alias for paperstruct operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised around the cleaning and structuring core.
///
/// The normalizer, the line classifier and the structure builder never
/// fail; these variants cover obtaining raw text and rendering results.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The source file type is not accepted.
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// The source yielded no extractable text.
    #[error("No extractable text in '{0}'")]
    EmptyText(String),

    /// Cleanup removed every line of the document.
    #[error("Text cleanup removed all content")]
    EmptyAfterCleanup,

    /// Error during rendering (JSON, Markdown).
    #[error("Rendering error: {0}")]
    Render(String),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyAfterCleanup;
        assert_eq!(err.to_string(), "Text cleanup removed all content");

        let err = Error::EmptyText("paper.txt".to_string());
        assert_eq!(err.to_string(), "No extractable text in 'paper.txt'");

        let err = Error::UnsupportedFormat("docx".to_string());
        assert_eq!(err.to_string(), "Unsupported file format: docx");

        let err = Error::Other("2 of 3 files failed".to_string());
        assert_eq!(err.to_string(), "2 of 3 files failed");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
