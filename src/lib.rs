//! # docuflow
//!
//! Lightweight markup rendering for academic-style documents.
//!
//! Plain text written with a small markup dialect (headings, emphasis, math,
//! code, quotes, lists, pipe tables, links) is parsed into a structured
//! [`Document`], presented as themed HTML, plain text, or JSON, and can have
//! a numbered reference list generated from its cited links.
//!
//! ## Quick Start
//!
//! ```
//! use docuflow::{bibliography, parse, render};
//!
//! fn main() -> docuflow::Result<()> {
//!     let mut doc = parse("# Title\n\nSee [the docs](https://docs.rs).\n");
//!
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options)?;
//!     assert!(html.contains("citation-link"));
//!
//!     let refs = bibliography::generate_bibliography(&mut doc)?;
//!     assert_eq!(refs.len(), 1);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Infallible parsing**: malformed markup degrades to literal text
//! - **Structured model**: blocks and inline spans, serializable with serde
//! - **Themes**: presentation profiles that never affect parsing
//! - **Bibliography**: reference lists built from the structured document
//! - **Sessions**: save and restore input text with the selected theme

pub mod bibliography;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod session;

// Re-export commonly used types
pub use bibliography::{collect_citations, generate_bibliography, CitationRef};
pub use error::{Error, Result};
pub use model::{
    Alignment, Bibliography, Block, CoverPage, Document, Inline, Link, List, ListItem, Reference,
    Table, TableCell,
};
pub use parser::{extract_table, MarkupParser, ParseOptions, TableLayout};
pub use render::{DocumentStats, JsonFormat, RenderOptions, StandaloneFormat, Theme};
pub use session::Session;

use std::io::Read;
use std::path::Path;

/// Parse markup text into a structured document.
///
/// Parsing never fails. Empty input yields an empty document.
///
/// # Example
///
/// ```
/// use docuflow::{parse, Block};
///
/// let doc = parse("**Summary**\n\nPlain words.");
/// assert_eq!(doc.blocks[0].heading_level(), Some(3));
/// assert!(matches!(doc.blocks[1], Block::Paragraph { .. }));
/// ```
pub fn parse(text: &str) -> Document {
    MarkupParser::default().parse(text)
}

/// Parse markup text with custom options.
///
/// # Example
///
/// ```
/// use docuflow::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_tables(false);
/// let doc = parse_with_options("| a |\n|---|", &options);
/// assert_eq!(doc.len(), 1);
/// ```
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Document {
    MarkupParser::new(options.clone()).parse(text)
}

/// Read and parse a markup file.
///
/// # Example
///
/// ```no_run
/// use docuflow::parse_file;
///
/// let doc = parse_file("notes.txt").unwrap();
/// println!("Blocks: {}", doc.len());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse(&text))
}

/// Read markup from a reader and parse it.
pub fn parse_reader<R: Read>(mut reader: R) -> Result<Document> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse(&text))
}

/// Render markup text straight to an HTML fragment.
///
/// # Example
///
/// ```
/// use docuflow::{render_html, Theme};
///
/// let html = render_html("<b>not bold</b>", Theme::Modern).unwrap();
/// assert!(html.contains("&lt;b&gt;not bold&lt;/b&gt;"));
/// ```
pub fn render_html(text: &str, theme: Theme) -> Result<String> {
    let options = RenderOptions::new().with_theme(theme);
    render::to_html(&parse(text), &options)
}

/// Builder for parsing and presenting documents.
///
/// # Example
///
/// ```
/// use docuflow::{Docuflow, Theme};
///
/// let html = Docuflow::new()
///     .with_theme(Theme::Creative)
///     .without_bold_line_headings()
///     .parse("**Not a heading**")
///     .to_html()?;
/// assert!(html.starts_with("<p"));
/// # Ok::<(), docuflow::Error>(())
/// ```
pub struct Docuflow {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Docuflow {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the presentation theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.render_options = self.render_options.with_theme(theme);
        self
    }

    /// Keep bold-only lines as bold paragraphs.
    pub fn without_bold_line_headings(mut self) -> Self {
        self.parse_options = self.parse_options.with_bold_line_headings(false);
        self
    }

    /// Treat pipe-delimited lines as plain text.
    pub fn without_tables(mut self) -> Self {
        self.parse_options = self.parse_options.with_tables(false);
        self
    }

    /// Compose input to Unicode NFC before parsing.
    pub fn with_nfc(mut self) -> Self {
        self.parse_options = self.parse_options.with_unicode_normalization(true);
        self
    }

    /// Emit spaces instead of `<br/>` for line breaks.
    pub fn without_line_breaks(mut self) -> Self {
        self.render_options = self.render_options.with_line_breaks(false);
        self
    }

    /// Parse markup text and return a result wrapper.
    pub fn parse(self, text: &str) -> DocuflowResult {
        let document = parse_with_options(text, &self.parse_options);
        DocuflowResult {
            document,
            render_options: self.render_options,
        }
    }

    /// Read and parse a markup file.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<DocuflowResult> {
        let text = std::fs::read_to_string(path)?;
        Ok(self.parse(&text))
    }
}

impl Default for Docuflow {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a document.
pub struct DocuflowResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl DocuflowResult {
    /// Convert to an HTML fragment.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Convert to a complete page.
    pub fn to_standalone(&self, title: &str, format: StandaloneFormat) -> Result<String> {
        render::to_standalone(&self.document, title, format, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Append a bibliography built from the document's cited links.
    pub fn with_bibliography(mut self) -> Result<Self> {
        generate_bibliography(&mut self.document)?;
        Ok(self)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
