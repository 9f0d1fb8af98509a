//! Bibliography types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A generated reference list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bibliography {
    /// References in citation order
    pub references: Vec<Reference>,
}

impl Bibliography {
    /// Create an empty bibliography.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of references.
    pub fn len(&self) -> usize {
        self.references.len()
    }

    /// Check if the bibliography has no references.
    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    /// Get plain text representation, one entry per line.
    pub fn plain_text(&self) -> String {
        let mut lines = vec!["References".to_string()];
        lines.extend(self.references.iter().map(Reference::format_entry));
        lines.join("\n")
    }
}

/// A single numbered reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// 1-based position in the list
    pub index: usize,

    /// Visible label of the cited link
    pub label: String,

    /// Target URL of the cited link
    pub url: String,

    /// Date the reference was generated
    pub accessed: NaiveDate,
}

impl Reference {
    /// Format the entry as `[n] label. Available at: url (Accessed: date).`
    pub fn format_entry(&self) -> String {
        format!(
            "[{}] {}. Available at: {} (Accessed: {}).",
            self.index,
            self.label,
            self.url,
            self.accessed_display()
        )
    }

    /// Accessed date in `YYYY-MM-DD` form.
    pub fn accessed_display(&self) -> String {
        self.accessed.format("%Y-%m-%d").to_string()
    }
}
