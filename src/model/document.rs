//! Document-level types.

use super::{Bibliography, Block, CoverPage, List};
use serde::{Deserialize, Serialize};

/// A parsed document: an ordered sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Content blocks in order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from blocks.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Get the number of blocks.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Insert a block at a position.
    pub fn insert(&mut self, index: usize, block: Block) {
        self.blocks.insert(index.min(self.blocks.len()), block);
    }

    /// Iterate over blocks.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Prepend a cover page.
    pub fn insert_cover_page(&mut self, cover: CoverPage) {
        self.blocks.insert(0, Block::CoverPage(cover));
    }

    /// All bibliography blocks, in document order.
    pub fn bibliographies(&self) -> impl Iterator<Item = &Bibliography> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Bibliography(bib) => Some(bib),
            _ => None,
        })
    }

    /// Group adjacent list items of the same kind into lists.
    ///
    /// A lone item becomes a one-item list; items of the other kind start a
    /// new list. Existing lists are left as they are.
    pub fn coalesce_lists(&mut self) {
        let blocks = std::mem::take(&mut self.blocks);
        let mut out: Vec<Block> = Vec::with_capacity(blocks.len());

        for block in blocks {
            match block {
                Block::ListItem(item) => match out.last_mut() {
                    Some(Block::List(list)) if list.accepts(&item) => {
                        list.items.push(item.content);
                    }
                    _ => out.push(Block::List(List::from_item(item))),
                },
                other => out.push(other),
            }
        }

        self.blocks = out;
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}
