//! Rendering result with statistics.

use crate::model::{Block, Document};
use serde::{Deserialize, Serialize};

/// Words read per minute when estimating reading time.
pub const WORDS_PER_MINUTE: u32 = 200;

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content
    pub content: String,

    /// Document statistics
    pub stats: DocumentStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: DocumentStats) -> Self {
        Self { content, stats }
    }
}

/// Word counts and block counts for a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Whitespace-separated tokens in the counted text
    pub word_count: u32,

    /// Estimated reading time in whole minutes, rounded up
    pub reading_minutes: u32,

    /// Number of headings
    pub heading_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of block quotes
    pub quote_count: u32,

    /// Number of lists
    pub list_count: u32,

    /// Number of list items across all lists
    pub list_item_count: u32,

    /// Number of tables
    pub table_count: u32,

    /// Number of display math blocks
    pub math_block_count: u32,

    /// Number of fenced code blocks
    pub code_block_count: u32,

    /// Number of links, cited or not
    pub link_count: u32,
}

impl DocumentStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Word counts from raw input plus block counts from its document.
    pub fn collect(input: &str, doc: &Document) -> Self {
        let mut stats = Self::new();
        stats.count_text(input);
        for block in doc {
            stats.add_block(block);
        }
        stats
    }

    /// Add word counts from text and refresh the reading estimate.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.reading_minutes = self.word_count.div_ceil(WORDS_PER_MINUTE);
    }

    /// Count one block.
    pub fn add_block(&mut self, block: &Block) {
        match block {
            Block::Heading { .. } => self.heading_count += 1,
            Block::Paragraph { .. } => self.paragraph_count += 1,
            Block::BlockQuote { .. } => self.quote_count += 1,
            Block::ListItem(_) => {
                self.list_count += 1;
                self.list_item_count += 1;
            }
            Block::List(list) => {
                self.list_count += 1;
                self.list_item_count += list.len() as u32;
            }
            Block::Table(_) => self.table_count += 1,
            Block::MathBlock { .. } => self.math_block_count += 1,
            Block::CodeBlock { .. } => self.code_block_count += 1,
            Block::Raw { .. } | Block::CoverPage(_) | Block::Bibliography(_) => {}
        }
        self.link_count += block.links().len() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Inline;

    #[test]
    fn test_count_text_reading_time() {
        let mut stats = DocumentStats::new();
        stats.count_text("Hello, world! This is a test.");
        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.reading_minutes, 1);

        let mut stats = DocumentStats::new();
        stats.count_text(&"word ".repeat(401));
        assert_eq!(stats.reading_minutes, 3);
    }

    #[test]
    fn test_empty_text() {
        let mut stats = DocumentStats::new();
        stats.count_text("   \n ");
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.reading_minutes, 0);
    }

    #[test]
    fn test_block_counts() {
        let doc = Document::from_blocks(vec![
            Block::heading(1, vec![Inline::text("Title")]),
            Block::paragraph(vec![Inline::link("a", "u"), Inline::Bold(vec![Inline::link("b", "v")])]),
            Block::MathBlock {
                expression: "x".into(),
            },
        ]);
        let stats = DocumentStats::collect("# Title", &doc);

        assert_eq!(stats.heading_count, 1);
        assert_eq!(stats.paragraph_count, 1);
        assert_eq!(stats.math_block_count, 1);
        assert_eq!(stats.link_count, 2);
        assert_eq!(stats.word_count, 2);
    }
}
