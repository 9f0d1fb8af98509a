//! Plain text rendering.

use crate::model::Document;
use crate::parser::unescape_html;

/// Convert a document to plain text with markup escapes undone.
pub fn to_text(doc: &Document) -> String {
    unescape_html(&doc.plain_text()).trim().to_string()
}
