//! Diagnostic flags raised while normalizing.

use serde::{Deserialize, Serialize};

/// What the normalizer found and removed.
///
/// Each flag is set independently by the stage that observes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationReport {
    /// Running header/footer lines were dropped
    pub repeated_headers_removed: bool,

    /// An "abstract"/"resumen" token was seen
    pub abstract_detected: bool,

    /// A references/bibliography block was cut
    pub references_removed: bool,

    /// Digit-only lines were dropped
    pub page_numbers_removed: bool,
}

impl NormalizationReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// All flags as `(name, value)` pairs, in a fixed order.
    pub fn flags(&self) -> [(&'static str, bool); 4] {
        [
            ("repeated_headers_removed", self.repeated_headers_removed),
            ("abstract_detected", self.abstract_detected),
            ("references_removed", self.references_removed),
            ("page_numbers_removed", self.page_numbers_removed),
        ]
    }

    /// Check if any flag is set.
    pub fn any(&self) -> bool {
        self.flags().iter().any(|(_, set)| *set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_order() {
        let report = NormalizationReport {
            references_removed: true,
            ..Default::default()
        };
        let names: Vec<_> = report.flags().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "repeated_headers_removed",
                "abstract_detected",
                "references_removed",
                "page_numbers_removed"
            ]
        );
        assert!(report.flags()[2].1);
        assert!(report.any());
        assert!(!NormalizationReport::new().any());
    }
}
