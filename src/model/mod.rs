//! Document model types.
//!
//! This module defines the structured representation that sits between
//! parsing and presentation. Nothing here knows about themes or styling.

mod bibliography;
mod block;
mod cover;
mod document;
mod inline;
mod table;

pub use bibliography::{Bibliography, Reference};
pub use block::{Block, List, ListItem};
pub use cover::CoverPage;
pub use document::Document;
pub use inline::{links, plain_text, Inline, Link};
pub use table::{Alignment, Table, TableCell};
