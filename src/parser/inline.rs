//! Inline span recognition.
//!
//! Math and code spans are masked out first so that `*` and `_` inside them
//! are never read as emphasis. Mask marker characters already present in the
//! input are masked as literal text, so they survive unchanged. The masked line is then scanned for links and
//! emphasis with a single leftmost-first alternation whose order encodes the
//! precedence: `***` before `**` before `__` before `*`. Emphasis content is
//! parsed recursively; unterminated delimiters stay literal text.

use regex::{Captures, Regex};

use crate::model::{plain_text, Inline, Link};

/// Marks the start of a masked span index.
const MASK_OPEN: char = '\u{E000}';
/// Marks the end of a masked span index.
const MASK_CLOSE: char = '\u{E001}';

/// Parser for span-level markup within a single line.
#[derive(Debug, Clone)]
pub struct InlineParser {
    protected: Regex,
    spans: Regex,
    mask: Regex,
}

/// A masked span together with its source text.
struct Masked {
    span: Inline,
    source: String,
}

impl InlineParser {
    /// Create a new inline parser.
    pub fn new() -> Self {
        Self {
            protected: Regex::new(
                r"(?P<marker>[\x{E000}\x{E001}])|\$(?P<math>[^$\n]+)\$|`(?P<code>[^`\n]+)`",
            )
            .expect("protected span pattern is valid"),
            spans: Regex::new(concat!(
                r"\[(?P<label>[^\]\n]*)\]\((?P<url>[^)\n]*)\)",
                r"|\*\*\*(?P<bold_italic>[^\n]+?)\*\*\*",
                r"|\*\*(?P<bold>[^\n]+?)\*\*",
                r"|__(?P<strong>[^\n]+?)__",
                r"|\*(?P<italic>[^\n]+?)\*",
            ))
            .expect("span pattern is valid"),
            mask: Regex::new("\u{E000}(?P<index>[0-9]+)\u{E001}").expect("mask pattern is valid"),
        }
    }

    /// Parse one line of escaped text into inline spans.
    pub fn parse(&self, text: &str) -> Vec<Inline> {
        let mut masked: Vec<Masked> = Vec::new();

        let line = self.protected.replace_all(text, |caps: &Captures| {
            let span = match (caps.name("math"), caps.name("code")) {
                (Some(math), _) => Inline::InlineMath(math.as_str().to_string()),
                (None, Some(code)) => Inline::InlineCode(code.as_str().to_string()),
                (None, None) => Inline::text(&caps[0]),
            };
            masked.push(Masked {
                span,
                source: caps[0].to_string(),
            });
            format!("{}{}{}", MASK_OPEN, masked.len() - 1, MASK_CLOSE)
        });

        let spans = self.parse_spans(&line);
        if masked.is_empty() {
            return spans;
        }
        self.unmask(spans, &masked)
    }

    fn parse_spans(&self, text: &str) -> Vec<Inline> {
        let mut out = Vec::new();
        let mut last = 0;

        for caps in self.spans.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            push_text(&mut out, &text[last..whole.start()]);
            out.push(self.span_from(&caps));
            last = whole.end();
        }
        push_text(&mut out, &text[last..]);

        out
    }

    fn span_from(&self, caps: &Captures) -> Inline {
        if let Some(label) = caps.name("label") {
            let url = caps.name("url").map(|m| m.as_str()).unwrap_or_default();
            let content = self.parse_spans(label.as_str());
            let link = Link::citation(plain_text(&content), url.trim());
            // masked spans may still turn a plain label into formatted content
            if is_plain(&content, label.as_str()) && !label.as_str().contains(MASK_OPEN) {
                return Inline::Link(link);
            }
            return Inline::Link(link.with_content(content));
        }
        if let Some(inner) = caps.name("bold_italic") {
            return Inline::BoldItalic(self.parse_spans(inner.as_str()));
        }
        if let Some(inner) = caps.name("bold").or_else(|| caps.name("strong")) {
            return Inline::Bold(self.parse_spans(inner.as_str()));
        }
        if let Some(inner) = caps.name("italic") {
            return Inline::Italic(self.parse_spans(inner.as_str()));
        }
        Inline::text(&caps[0])
    }

    /// Put masked math and code spans back in place.
    fn unmask(&self, spans: Vec<Inline>, masked: &[Masked]) -> Vec<Inline> {
        let mut out = Vec::with_capacity(spans.len());

        for span in spans {
            match span {
                Inline::Text(text) => {
                    let mut last = 0;
                    for caps in self.mask.captures_iter(&text) {
                        let Some(whole) = caps.get(0) else {
                            continue;
                        };
                        push_text(&mut out, &text[last..whole.start()]);
                        match lookup(&caps, masked).map(|m| &m.span) {
                            Some(Inline::Text(literal)) => push_text(&mut out, literal),
                            Some(span) => out.push(span.clone()),
                            None => push_text(&mut out, whole.as_str()),
                        }
                        last = whole.end();
                    }
                    push_text(&mut out, &text[last..]);
                }
                Inline::Bold(children) => out.push(Inline::Bold(self.unmask(children, masked))),
                Inline::Italic(children) => {
                    out.push(Inline::Italic(self.unmask(children, masked)))
                }
                Inline::BoldItalic(children) => {
                    out.push(Inline::BoldItalic(self.unmask(children, masked)))
                }
                Inline::Link(link) => {
                    let content = self.unmask(link.content, masked);
                    let label = if content.is_empty() {
                        self.restore_source(&link.label, masked)
                    } else {
                        plain_text(&content)
                    };
                    let content = if is_plain(&content, &label) {
                        Vec::new()
                    } else {
                        content
                    };
                    out.push(Inline::Link(Link {
                        label,
                        url: self.restore_source(&link.url, masked),
                        content,
                        citation: link.citation,
                    }))
                }
                other => out.push(other),
            }
        }

        out
    }

    /// Replace mask markers with the original span source.
    fn restore_source(&self, text: &str, masked: &[Masked]) -> String {
        self.mask
            .replace_all(text, |caps: &Captures| match lookup(caps, masked) {
                Some(m) => m.source.clone(),
                None => caps[0].to_string(),
            })
            .into_owned()
    }
}

impl Default for InlineParser {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup<'a>(caps: &Captures, masked: &'a [Masked]) -> Option<&'a Masked> {
    caps.name("index")
        .and_then(|m| m.as_str().parse::<usize>().ok())
        .and_then(|i| masked.get(i))
}

/// Check whether spans are nothing but the given text.
fn is_plain(content: &[Inline], text: &str) -> bool {
    match content {
        [] => true,
        [Inline::Text(only)] => only == text,
        _ => false,
    }
}

/// Append text, merging with a preceding text span.
fn push_text(out: &mut Vec<Inline>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(Inline::Text(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(Inline::text(text));
    }
}
