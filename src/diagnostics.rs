//! User-facing warnings and error records.
//!
//! Callers pair section names with whether they were identified (for
//! instance the flags of a [`NormalizationReport`]) and turn the missing
//! ones into warning strings.

use serde::{Deserialize, Serialize};

use crate::normalize::NormalizationReport;

/// Error record returned to clients when a run cannot complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Always `"error"`
    pub status: String,

    /// Human-readable reason
    pub message: String,
}

impl ErrorResponse {
    /// Create an error record.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Collects warnings for sections that were not identified.
#[derive(Debug, Clone, Default)]
pub struct WarningCollector {
    warnings: Vec<String>,
}

impl WarningCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a warning for every `(name, identified)` pair that is unset.
    pub fn check<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = (S, bool)>,
        S: AsRef<str>,
    {
        for (section, identified) in items {
            if !identified {
                self.warnings.push(format!(
                    "Section '{}' was not identified.",
                    section.as_ref()
                ));
            }
        }
    }

    /// Record warnings for the unset flags of a normalization report.
    pub fn check_report(&mut self, report: &NormalizationReport) {
        self.check(report.flags());
    }

    /// Build an error record.
    pub fn error_response(&self, message: impl Into<String>) -> ErrorResponse {
        ErrorResponse::new(message)
    }

    /// Warnings collected so far, in input order.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Consume the collector and return its warnings.
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_records_missing_sections() {
        let mut collector = WarningCollector::new();
        collector.check([("abstract", true), ("conclusion", false), ("methods", false)]);
        assert_eq!(
            collector.warnings(),
            &[
                "Section 'conclusion' was not identified.".to_string(),
                "Section 'methods' was not identified.".to_string()
            ]
        );
    }

    #[test]
    fn test_check_report() {
        let report = NormalizationReport {
            repeated_headers_removed: true,
            abstract_detected: true,
            references_removed: false,
            page_numbers_removed: true,
        };
        let mut collector = WarningCollector::new();
        collector.check_report(&report);
        assert_eq!(
            collector.into_warnings(),
            vec!["Section 'references_removed' was not identified.".to_string()]
        );
    }

    #[test]
    fn test_error_response_json() {
        let response = WarningCollector::new().error_response("PDF extraction failed");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(
            json,
            r#"{"status":"error","message":"PDF extraction failed"}"#
        );
    }
}
