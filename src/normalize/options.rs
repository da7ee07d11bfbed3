//! Normalization options and presets.

/// Normalization preset levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NormalizePreset {
    /// Unicode cleanup, margin removal and paragraph rebuild only; case kept
    Minimal,
    /// Full academic pipeline: margins, section trimming, inline noise,
    /// paragraph rebuild and case folding
    #[default]
    Standard,
    /// Standard plus removal of Private Use Area and replacement characters
    Aggressive,
}

/// Options for the text normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Normalize Unicode to NFC form before any other stage
    pub normalize_unicode: bool,

    /// Expand typographic ligatures (ﬁ, ﬂ, ...)
    pub fix_ligatures: bool,

    /// Remove Private Use Area characters and U+FFFD
    pub strip_garbage_chars: bool,

    /// Drop running headers/footers and page-number lines
    pub remove_margins: bool,

    /// Cut text before "introduction" and from "references" onwards
    pub trim_sections: bool,

    /// Remove emails, citation markers and figure/table mentions
    pub remove_inline_noise: bool,

    /// Join wrapped lines and collapse blank lines and spaces
    pub rebuild_paragraphs: bool,

    /// Lower-case the final text
    pub fold_case: bool,
}

impl NormalizeOptions {
    /// Create options with the standard preset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options from a preset.
    pub fn from_preset(preset: NormalizePreset) -> Self {
        match preset {
            NormalizePreset::Minimal => Self::minimal(),
            NormalizePreset::Standard => Self::standard(),
            NormalizePreset::Aggressive => Self::aggressive(),
        }
    }

    /// Minimal normalization options.
    pub fn minimal() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            strip_garbage_chars: false,
            remove_margins: true,
            trim_sections: false,
            remove_inline_noise: false,
            rebuild_paragraphs: true,
            fold_case: false,
        }
    }

    /// Standard normalization options.
    pub fn standard() -> Self {
        Self {
            normalize_unicode: true,
            fix_ligatures: true,
            strip_garbage_chars: false,
            remove_margins: true,
            trim_sections: true,
            remove_inline_noise: true,
            rebuild_paragraphs: true,
            fold_case: true,
        }
    }

    /// Aggressive normalization options.
    pub fn aggressive() -> Self {
        Self {
            strip_garbage_chars: true,
            ..Self::standard()
        }
    }

    /// Enable or disable Unicode NFC normalization.
    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    /// Enable or disable ligature expansion.
    pub fn with_ligature_fix(mut self, enabled: bool) -> Self {
        self.fix_ligatures = enabled;
        self
    }

    /// Enable or disable running header/footer removal.
    pub fn with_margin_removal(mut self, enabled: bool) -> Self {
        self.remove_margins = enabled;
        self
    }

    /// Enable or disable introduction/references trimming.
    pub fn with_section_trimming(mut self, enabled: bool) -> Self {
        self.trim_sections = enabled;
        self
    }

    /// Enable or disable inline noise removal.
    pub fn with_inline_noise_removal(mut self, enabled: bool) -> Self {
        self.remove_inline_noise = enabled;
        self
    }

    /// Enable or disable paragraph reconstruction.
    pub fn with_paragraph_rebuild(mut self, enabled: bool) -> Self {
        self.rebuild_paragraphs = enabled;
        self
    }

    /// Enable or disable lower-casing of the result.
    pub fn fold_case(mut self, enabled: bool) -> Self {
        self.fold_case = enabled;
        self
    }
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_standard() {
        assert_eq!(NormalizeOptions::default(), NormalizeOptions::standard());
        assert_eq!(NormalizePreset::default(), NormalizePreset::Standard);
    }

    #[test]
    fn test_minimal_keeps_case_and_sections() {
        let options = NormalizeOptions::from_preset(NormalizePreset::Minimal);
        assert!(!options.fold_case);
        assert!(!options.trim_sections);
        assert!(!options.remove_inline_noise);
        assert!(options.remove_margins);
    }

    #[test]
    fn test_aggressive_extends_standard() {
        let options = NormalizeOptions::aggressive();
        assert!(options.strip_garbage_chars);
        assert!(options.trim_sections);
        assert!(options.fold_case);
    }

    #[test]
    fn test_builder_chain() {
        let options = NormalizeOptions::new()
            .fold_case(false)
            .with_section_trimming(false)
            .with_ligature_fix(false);
        assert!(!options.fold_case);
        assert!(!options.trim_sections);
        assert!(!options.fix_ligatures);
        assert!(options.remove_margins);
    }
}
