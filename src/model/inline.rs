//! Span-level types.

use serde::{Deserialize, Serialize};

/// Inline content within a block.
///
/// Text held here is already escaped for markup output (`&`, `<`, `>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Inline {
    /// Plain text
    Text(String),

    /// Bold span
    Bold(Vec<Inline>),

    /// Italic span
    Italic(Vec<Inline>),

    /// Combined bold and italic span
    BoldItalic(Vec<Inline>),

    /// Inline code, content kept verbatim
    InlineCode(String),

    /// Inline math expression, without its `$` delimiters
    InlineMath(String),

    /// A hyperlink
    Link(Link),

    /// An explicit line break inside a block
    LineBreak,
}

impl Inline {
    /// Create a text span.
    pub fn text(text: impl Into<String>) -> Self {
        Inline::Text(text.into())
    }

    /// Create a bold span holding plain text.
    pub fn bold(text: impl Into<String>) -> Self {
        Inline::Bold(vec![Inline::text(text)])
    }

    /// Create an italic span holding plain text.
    pub fn italic(text: impl Into<String>) -> Self {
        Inline::Italic(vec![Inline::text(text)])
    }

    /// Create a bold+italic span holding plain text.
    pub fn bold_italic(text: impl Into<String>) -> Self {
        Inline::BoldItalic(vec![Inline::text(text)])
    }

    /// Create a citation link.
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Inline::Link(Link::citation(label, url))
    }

    /// Get plain text content of this span.
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text(text) | Inline::InlineCode(text) => text.clone(),
            Inline::InlineMath(expr) => format!("${}$", expr),
            Inline::Bold(children) | Inline::Italic(children) | Inline::BoldItalic(children) => {
                plain_text(children)
            }
            Inline::Link(link) => link.label.clone(),
            Inline::LineBreak => "\n".to_string(),
        }
    }

    /// Child spans of an emphasis span.
    pub fn children(&self) -> Option<&[Inline]> {
        match self {
            Inline::Bold(children) | Inline::Italic(children) | Inline::BoldItalic(children) => {
                Some(children)
            }
            _ => None,
        }
    }
}

/// Concatenate the plain text of a span sequence.
pub fn plain_text(content: &[Inline]) -> String {
    content.iter().map(Inline::plain_text).collect()
}

/// Links in a span sequence, left to right, descending into emphasis.
pub fn links(content: &[Inline]) -> Vec<&Link> {
    let mut out = Vec::new();
    collect_links(content, &mut out);
    out
}

fn collect_links<'a>(content: &'a [Inline], out: &mut Vec<&'a Link>) {
    for span in content {
        match span {
            Inline::Link(link) => out.push(link),
            Inline::Bold(children) | Inline::Italic(children) | Inline::BoldItalic(children) => {
                collect_links(children, out)
            }
            _ => {}
        }
    }
}

/// A hyperlink span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Visible label as plain text
    pub label: String,

    /// Target URL
    pub url: String,

    /// Formatted label spans, empty when the label is plain text
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<Inline>,

    /// Whether the bibliography should pick this link up
    pub citation: bool,
}

impl Link {
    /// Create a link carrying the citation marker.
    pub fn citation(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            content: Vec::new(),
            citation: true,
        }
    }

    /// Create a link the bibliography ignores.
    pub fn plain(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            content: Vec::new(),
            citation: false,
        }
    }

    /// Set formatted label spans.
    pub fn with_content(mut self, content: Vec<Inline>) -> Self {
        self.content = content;
        self
    }
}
