//! Parsing options and configuration.

/// Options for parsing markup text.
///
/// None of these affect escaping, and themes never reach the parser.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Promote lines consisting solely of `**text**` to level-3 headings
    pub promote_bold_lines: bool,

    /// Recognize pipe-delimited runs as tables
    pub detect_tables: bool,

    /// Normalize input to Unicode NFC before parsing (off by default)
    pub normalize_unicode: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable bold-line promotion.
    pub fn with_bold_line_headings(mut self, promote: bool) -> Self {
        self.promote_bold_lines = promote;
        self
    }

    /// Enable or disable table detection.
    pub fn with_tables(mut self, detect: bool) -> Self {
        self.detect_tables = detect;
        self
    }

    /// Enable or disable NFC normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            promote_bold_lines: true,
            detect_tables: true,
            normalize_unicode: false,
        }
    }
}
