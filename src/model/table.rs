//! Table types.

use super::inline::{plain_text, Inline};
use serde::{Deserialize, Serialize};

/// A table structure.
///
/// Header, alignment, and row lengths are independent of each other: rows
/// may be shorter or longer than the header and nothing is truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column headers
    pub headers: Vec<TableCell>,

    /// Per-column alignment
    pub alignments: Vec<Alignment>,

    /// Body rows
    pub rows: Vec<Vec<TableCell>>,
}

impl Table {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from header cells.
    pub fn with_headers(headers: Vec<TableCell>) -> Self {
        Self {
            headers,
            ..Self::new()
        }
    }

    /// Add a body row to the table.
    pub fn add_row(&mut self, row: Vec<TableCell>) {
        self.rows.push(row);
    }

    /// Get the number of body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of header cells.
    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of columns spanned by the widest row or the header.
    pub fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headers.len()))
            .max()
            .unwrap_or(0)
    }

    /// Alignment for a column, defaulting to left past the alignment row.
    pub fn alignment(&self, column: usize) -> Alignment {
        self.alignments.get(column).copied().unwrap_or_default()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    /// Get plain text representation of the table.
    pub fn plain_text(&self) -> String {
        std::iter::once(&self.headers)
            .chain(self.rows.iter())
            .map(|row| {
                row.iter()
                    .map(TableCell::plain_text)
                    .collect::<Vec<_>>()
                    .join("\t")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content
    pub content: Vec<Inline>,
}

impl TableCell {
    /// Create a new cell with plain text content.
    pub fn text(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::empty();
        }
        Self {
            content: vec![Inline::Text(text)],
        }
    }

    /// Create an empty cell.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a cell with inline content.
    pub fn with_content(content: Vec<Inline>) -> Self {
        Self { content }
    }

    /// Get plain text content.
    pub fn plain_text(&self) -> String {
        plain_text(&self.content)
    }

    /// Check if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() || self.plain_text().trim().is_empty()
    }
}

/// Column alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
}

impl Alignment {
    /// Derive alignment from a separator cell such as `:---:`.
    pub fn from_separator(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.starts_with(':') && cell.ends_with(':') {
            Alignment::Center
        } else if cell.ends_with(':') {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }

    /// CSS keyword for this alignment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}
