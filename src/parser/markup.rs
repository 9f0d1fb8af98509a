//! Block-level markup parsing.
//!
//! Parsing runs in this order:
//!
//! 1. Reserved characters are escaped.
//! 2. `$$…$$` math blocks and triple-backtick fences are cut out of the text,
//!    whichever opens first; their content is never inline-parsed.
//! 3. The remaining text is classified line by line: pipe-table runs, bold
//!    lines, headings, block quotes, list items, and paragraph text.
//! 4. Adjacent list items of the same kind are coalesced into lists.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use super::escape::escape_html;
use super::inline::InlineParser;
use super::table::{extract_table, is_table_row, TableLayout};
use super::ParseOptions;
use crate::model::{Block, Document, Inline, ListItem, Table, TableCell};

/// A top-level piece of the escaped input.
#[derive(Debug, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Math(&'a str),
    Code(&'a str),
}

/// Parser turning markup text into a [`Document`].
#[derive(Debug, Clone)]
pub struct MarkupParser {
    options: ParseOptions,
    inline: InlineParser,
    fenced: Regex,
    bold_line: Regex,
    heading: Regex,
    quote: Regex,
    bullet: Regex,
    numbered: Regex,
}

impl MarkupParser {
    /// Create a new parser with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            inline: InlineParser::new(),
            fenced: Regex::new(r"(?s)\$\$(?P<math>.+?)\$\$|```(?P<code>.*?)```")
                .expect("fence pattern is valid"),
            bold_line: Regex::new(r"^\s*\*\*(?P<text>[^*].*?)\*\*\s*$")
                .expect("bold line pattern is valid"),
            heading: Regex::new(r"^(?P<marks>#{1,3})\s+(?P<text>\S.*)$")
                .expect("heading pattern is valid"),
            // The quote marker has already been escaped by the time lines are classified
            quote: Regex::new(r"^&gt;\s?(?P<text>.*)$").expect("quote pattern is valid"),
            bullet: Regex::new(r"^\s*[-*]\s+(?P<text>\S.*)$").expect("bullet pattern is valid"),
            numbered: Regex::new(r"^\s*(?P<number>\d+)\.\s+(?P<text>\S.*)$")
                .expect("numbered pattern is valid"),
        }
    }

    /// Get the parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse markup text into a document. Never fails.
    pub fn parse(&self, text: &str) -> Document {
        if text.is_empty() {
            return Document::new();
        }

        let normalized: String = if self.options.normalize_unicode {
            text.nfc().collect()
        } else {
            text.to_string()
        };
        let escaped = escape_html(&normalized.replace("\r\n", "\n"));

        let mut builder = BlockBuilder::new(&self.inline);
        for segment in self.segments(&escaped) {
            match segment {
                Segment::Text(text) => self.parse_text(text, &mut builder),
                Segment::Math(expression) => builder.push(Block::MathBlock {
                    expression: expression.trim().to_string(),
                }),
                Segment::Code(content) => {
                    let (info, code) = split_fence(content);
                    builder.push(Block::CodeBlock {
                        info: info.map(str::to_string),
                        code: code.to_string(),
                    });
                }
            }
        }

        let mut doc = builder.finish();
        doc.coalesce_lists();
        log::debug!("parsed {} bytes into {} blocks", text.len(), doc.len());
        doc
    }

    fn segments<'a>(&self, text: &'a str) -> Vec<Segment<'a>> {
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in self.fenced.captures_iter(text) {
            let Some(whole) = caps.get(0) else {
                continue;
            };
            if whole.start() > last {
                segments.push(Segment::Text(&text[last..whole.start()]));
            }
            match (caps.name("math"), caps.name("code")) {
                (Some(math), _) => segments.push(Segment::Math(math.as_str())),
                (None, Some(code)) => segments.push(Segment::Code(code.as_str())),
                (None, None) => segments.push(Segment::Code("")),
            }
            last = whole.end();
        }
        if last < text.len() {
            segments.push(Segment::Text(&text[last..]));
        }

        segments
    }

    fn parse_text<'a>(&'a self, text: &'a str, builder: &mut BlockBuilder<'a>) {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut i = 0;

        while i < lines.len() {
            let line = lines[i];

            if line.trim().is_empty() {
                builder.break_paragraph();
                i += 1;
                continue;
            }

            if self.options.detect_tables && is_table_row(line) {
                let start = i;
                while i < lines.len() && is_table_row(lines[i]) {
                    i += 1;
                }
                match extract_table(&lines[start..i]) {
                    Some(layout) => builder.push(Block::Table(self.build_table(layout))),
                    None => {
                        for &row in &lines[start..i] {
                            builder.push_line(row);
                        }
                    }
                }
                continue;
            }

            if let Some(caps) = self.quote.captures(line) {
                let content = self.inline.parse(caps["text"].trim());
                builder.push_quote_line(content);
            } else if let Some(block) = self.classify_line(line) {
                builder.push(block);
            } else {
                builder.push_line(line);
            }
            i += 1;
        }
    }

    /// Recognize single-line blocks other than quotes.
    fn classify_line(&self, line: &str) -> Option<Block> {
        if self.options.promote_bold_lines {
            if let Some(caps) = self.bold_line.captures(line) {
                let text = &caps["text"];
                if !text.contains("**") {
                    return Some(Block::heading(3, self.inline.parse(text.trim())));
                }
            }
        }

        if let Some(caps) = self.heading.captures(line) {
            let level = caps["marks"].len() as u8;
            return Some(Block::heading(level, self.inline.parse(caps["text"].trim())));
        }

        if let Some(caps) = self.bullet.captures(line) {
            let content = self.inline.parse(caps["text"].trim_end());
            return Some(Block::ListItem(ListItem::bullet(content)));
        }

        if let Some(caps) = self.numbered.captures(line) {
            let content = self.inline.parse(caps["text"].trim_end());
            let number = caps["number"].parse().unwrap_or(1);
            return Some(Block::ListItem(ListItem::numbered(number, content)));
        }

        None
    }

    fn build_table(&self, layout: TableLayout) -> Table {
        let cell = |text: &String| TableCell::with_content(self.inline.parse(text));
        Table {
            headers: layout.headers.iter().map(cell).collect(),
            alignments: layout.alignments,
            rows: layout
                .rows
                .iter()
                .map(|row| row.iter().map(cell).collect())
                .collect(),
        }
    }
}

impl Default for MarkupParser {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

/// Split a fence body into an optional info string and the code.
fn split_fence(content: &str) -> (Option<&str>, &str) {
    match content.split_once('\n') {
        Some((first, rest)) => {
            let first = first.trim();
            let info = (!first.is_empty() && !first.contains(char::is_whitespace)).then_some(first);
            let code = if info.is_some() || first.is_empty() {
                rest
            } else {
                content
            };
            (info, code.trim_end_matches('\n'))
        }
        None => (None, content.trim()),
    }
}

/// Accumulates blocks and pending paragraph lines.
struct BlockBuilder<'a> {
    inline: &'a InlineParser,
    blocks: Vec<Block>,
    paragraph: Vec<&'a str>,
    in_quote: bool,
}

impl<'a> BlockBuilder<'a> {
    fn new(inline: &'a InlineParser) -> Self {
        Self {
            inline,
            blocks: Vec::new(),
            paragraph: Vec::new(),
            in_quote: false,
        }
    }

    fn push(&mut self, block: Block) {
        self.close_paragraph();
        self.in_quote = false;
        self.blocks.push(block);
    }

    fn push_line(&mut self, line: &'a str) {
        self.in_quote = false;
        self.paragraph.push(line);
    }

    /// Consecutive quote lines join one quote, separated by line breaks.
    fn push_quote_line(&mut self, content: Vec<Inline>) {
        self.close_paragraph();
        if self.in_quote {
            if let Some(Block::BlockQuote { content: quote }) = self.blocks.last_mut() {
                quote.push(Inline::LineBreak);
                quote.extend(content);
                return;
            }
        }
        self.in_quote = true;
        self.blocks.push(Block::BlockQuote { content });
    }

    fn break_paragraph(&mut self) {
        self.close_paragraph();
        self.in_quote = false;
    }

    fn close_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = self.paragraph.join("\n");
        self.paragraph.clear();

        let mut content = Vec::new();
        for (i, line) in text.trim().split('\n').enumerate() {
            if i > 0 {
                content.push(Inline::LineBreak);
            }
            content.extend(self.inline.parse(line));
        }
        self.blocks.push(Block::paragraph(content));
    }

    fn finish(mut self) -> Document {
        self.close_paragraph();
        Document::from_blocks(self.blocks)
    }
}
