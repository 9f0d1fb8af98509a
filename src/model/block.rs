//! Block-level types.

use super::inline::{links, plain_text, Inline, Link};
use super::{Bibliography, CoverPage, Table};
use crate::parser::escape_html;
use serde::{Deserialize, Serialize};

/// A content block in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading (level 1-3)
    Heading {
        /// Heading level
        level: u8,
        /// Heading content
        content: Vec<Inline>,
    },

    /// A paragraph of inline content
    Paragraph {
        /// Paragraph content
        content: Vec<Inline>,
    },

    /// A fenced code block
    CodeBlock {
        /// Info string from the opening fence (e.g. a language name)
        info: Option<String>,
        /// Code content, verbatim
        code: String,
    },

    /// A block quote
    BlockQuote {
        /// Quoted content
        content: Vec<Inline>,
    },

    /// Display math, without its `$$` delimiters
    MathBlock {
        /// Expression source
        expression: String,
    },

    /// A single list item, before coalescing
    ListItem(ListItem),

    /// A run of same-kind list items
    List(List),

    /// A table
    Table(Table),

    /// Pre-structured markup passed through untouched
    Raw {
        /// Markup content
        content: String,
    },

    /// A title page
    CoverPage(CoverPage),

    /// A generated reference list
    Bibliography(Bibliography),
}

impl Block {
    /// Create a heading block. The level is clamped to 1-3.
    pub fn heading(level: u8, content: Vec<Inline>) -> Self {
        Block::Heading {
            level: level.clamp(1, 3),
            content,
        }
    }

    /// Create a paragraph block.
    pub fn paragraph(content: Vec<Inline>) -> Self {
        Block::Paragraph { content }
    }

    /// Create a paragraph holding plain text.
    pub fn text(text: impl Into<String>) -> Self {
        Block::Paragraph {
            content: vec![Inline::text(text)],
        }
    }

    /// Create a raw markup block.
    pub fn raw(content: impl Into<String>) -> Self {
        Block::Raw {
            content: content.into(),
        }
    }

    /// Inline content carried directly by this block, if any.
    pub fn inlines(&self) -> Option<&[Inline]> {
        match self {
            Block::Heading { content, .. }
            | Block::Paragraph { content }
            | Block::BlockQuote { content } => Some(content),
            Block::ListItem(item) => Some(&item.content),
            _ => None,
        }
    }

    /// Links carried by this block in reading order.
    ///
    /// Table headers come before body rows. Cover pages and bibliographies
    /// carry no links.
    pub fn links(&self) -> Vec<&Link> {
        match self {
            Block::List(list) => list.items.iter().flat_map(|item| links(item)).collect(),
            Block::Table(table) => table
                .headers
                .iter()
                .chain(table.rows.iter().flatten())
                .flat_map(|cell| links(&cell.content))
                .collect(),
            _ => self.inlines().map(links).unwrap_or_default(),
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Get the heading level (1-3) or None.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Block::Heading { level, .. } => Some(*level),
            _ => None,
        }
    }

    /// Get plain text content of the block.
    ///
    /// Cover and reference fields are stored unescaped, so they are escaped
    /// here to match the rest of the model text.
    pub fn plain_text(&self) -> String {
        match self {
            Block::Heading { content, .. }
            | Block::Paragraph { content }
            | Block::BlockQuote { content } => plain_text(content),
            Block::CodeBlock { code, .. } => code.clone(),
            Block::MathBlock { expression } => format!("$${}$$", expression),
            Block::ListItem(item) => plain_text(&item.content),
            Block::List(list) => list.plain_text(),
            Block::Table(table) => table.plain_text(),
            Block::Raw { content } => content.clone(),
            Block::CoverPage(cover) => escape_html(&cover.plain_text()),
            Block::Bibliography(bib) => escape_html(&bib.plain_text()),
        }
    }
}

/// Information about a single list item line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Whether the item belongs to an ordered list
    pub ordered: bool,

    /// Number written in the source for ordered items
    pub number: Option<u32>,

    /// Item content
    pub content: Vec<Inline>,
}

impl ListItem {
    /// Create a new bulleted list item.
    pub fn bullet(content: Vec<Inline>) -> Self {
        Self {
            ordered: false,
            number: None,
            content,
        }
    }

    /// Create a new numbered list item.
    pub fn numbered(number: u32, content: Vec<Inline>) -> Self {
        Self {
            ordered: true,
            number: Some(number),
            content,
        }
    }
}

/// A coalesced list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Ordered (numbered) or unordered (bulleted)
    pub ordered: bool,

    /// Starting number for ordered lists
    pub start: u32,

    /// Item contents in order
    pub items: Vec<Vec<Inline>>,
}

impl List {
    /// Start a list from its first item.
    pub fn from_item(item: ListItem) -> Self {
        Self {
            ordered: item.ordered,
            start: item.number.unwrap_or(1),
            items: vec![item.content],
        }
    }

    /// Whether an item continues this list.
    pub fn accepts(&self, item: &ListItem) -> bool {
        self.ordered == item.ordered
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get plain text representation with markers.
    pub fn plain_text(&self) -> String {
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if self.ordered {
                    format!("{}. {}", self.start as usize + i, plain_text(item))
                } else {
                    format!("- {}", plain_text(item))
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
