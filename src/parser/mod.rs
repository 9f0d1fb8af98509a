//! Markup parsing module.

mod escape;
mod inline;
mod markup;
mod options;
mod table;

pub use escape::{escape_html, unescape_html};
pub use inline::InlineParser;
pub use markup::MarkupParser;
pub use options::ParseOptions;
pub use table::{extract_table, is_table_row, TableLayout};
