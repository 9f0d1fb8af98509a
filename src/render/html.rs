//! HTML fragment rendering.

use crate::error::Result;
use crate::model::{Bibliography, Block, CoverPage, Document, Inline, Link, List, Table, TableCell};

use super::{DocumentStats, RenderOptions, RenderResult, ThemeProfile};

const H1_CLASS: &str = "text-3xl font-bold mt-8 mb-6 pb-2 border-b-2";
const H2_CLASS: &str = "text-2xl font-bold mt-8 mb-4 opacity-90";
const H3_CLASS: &str = "text-xl font-bold mt-6 mb-3";
const PARAGRAPH_CLASS: &str = "mb-4 leading-relaxed opacity-90 text-lg";
const QUOTE_CLASS: &str =
    "border-l-4 border-current pl-4 py-2 my-6 italic opacity-70 bg-opacity-5 bg-slate-500 rounded-r-lg";
const PRE_CLASS: &str =
    "bg-slate-900 text-slate-50 p-4 rounded-lg my-6 font-mono text-sm overflow-x-auto shadow-inner";
const CODE_CLASS: &str =
    "bg-slate-100 px-1.5 py-0.5 rounded text-sm font-mono text-pink-600 border border-slate-200";
const MATH_BLOCK_CLASS: &str = "math-block bg-slate-50 border border-slate-200 p-4 text-center font-mono my-4 rounded text-slate-800 overflow-x-auto";
const MATH_INLINE_CLASS: &str =
    "math-inline bg-slate-100 px-1 rounded font-mono text-sm border border-slate-200 text-slate-700";
const LINK_CLASS: &str = "font-medium underline underline-offset-2";
const LIST_CLASS: &str = "my-4 space-y-1";
const BULLET_ITEM_CLASS: &str = "ml-6 list-disc pl-1 mb-2 marker:opacity-50";
const NUMBERED_ITEM_CLASS: &str = "ml-6 list-decimal pl-1 mb-2 font-medium marker:opacity-80";

/// Class attached to links the bibliography can pick up.
pub const CITATION_CLASS: &str = "citation-link";

/// Convert a document to an HTML fragment.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to an HTML fragment with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = HtmlRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// HTML fragment renderer.
///
/// Model text is already escaped, so it is written out verbatim. Only
/// attribute values get extra quoting.
pub struct HtmlRenderer {
    options: RenderOptions,
    profile: ThemeProfile,
    stats: DocumentStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            profile: options.theme.profile(),
            options,
            stats: DocumentStats::new(),
        }
    }

    /// Render a document to an HTML fragment.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;
        self.stats.count_text(&super::to_text(doc));
        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let mut output = String::new();

        for block in doc {
            if self.options.collect_stats {
                self.stats.add_block(block);
            }
            self.render_block(&mut output, block);
            output.push('\n');
        }

        Ok(output.trim_end().to_string())
    }

    fn render_block(&self, output: &mut String, block: &Block) {
        match block {
            Block::Heading { level, content } => self.render_heading(output, *level, content),
            Block::Paragraph { content } => {
                output.push_str(&format!("<p class=\"{}\">", PARAGRAPH_CLASS));
                self.render_inlines(output, content);
                output.push_str("</p>");
            }
            Block::CodeBlock { info, code } => {
                output.push_str(&format!("<pre class=\"{}\"", PRE_CLASS));
                if let Some(info) = info {
                    output.push_str(&format!(" data-lang=\"{}\"", escape_attr(info)));
                }
                output.push('>');
                output.push_str(code);
                output.push_str("</pre>");
            }
            Block::BlockQuote { content } => {
                output.push_str(&format!("<blockquote class=\"{}\">", QUOTE_CLASS));
                self.render_inlines(output, content);
                output.push_str("</blockquote>");
            }
            Block::MathBlock { expression } => {
                output.push_str(&format!(
                    "<div class=\"{}\">$${}$$</div>",
                    MATH_BLOCK_CLASS, expression
                ));
            }
            Block::ListItem(item) => {
                let list = List::from_item(item.clone());
                self.render_list(output, &list);
            }
            Block::List(list) => self.render_list(output, list),
            Block::Table(table) => self.render_table(output, table),
            Block::Raw { content } => output.push_str(content),
            Block::CoverPage(cover) => render_cover(output, cover),
            Block::Bibliography(bib) => render_bibliography(output, bib),
        }
    }

    fn render_heading(&self, output: &mut String, level: u8, content: &[Inline]) {
        let class = match level {
            1 => format!("{} {}", H1_CLASS, self.profile.heading),
            2 => H2_CLASS.to_string(),
            _ => format!("{} {}", H3_CLASS, self.profile.accent),
        };
        let level = level.clamp(1, 3);
        output.push_str(&format!("<h{} class=\"{}\">", level, class));
        self.render_inlines(output, content);
        output.push_str(&format!("</h{}>", level));
    }

    fn render_list(&self, output: &mut String, list: &List) {
        let (tag, item_class) = if list.ordered {
            ("ol", NUMBERED_ITEM_CLASS)
        } else {
            ("ul", BULLET_ITEM_CLASS)
        };

        output.push_str(&format!("<{} class=\"{}\"", tag, LIST_CLASS));
        if list.ordered && list.start != 1 {
            output.push_str(&format!(" start=\"{}\"", list.start));
        }
        output.push('>');
        for item in &list.items {
            output.push_str(&format!("<li class=\"{}\">", item_class));
            self.render_inlines(output, item);
            output.push_str("</li>");
        }
        output.push_str(&format!("</{}>", tag));
    }

    fn render_table(&self, output: &mut String, table: &Table) {
        if table.is_empty() {
            return;
        }

        output.push_str(
            "<div class=\"overflow-x-auto my-6 border border-current opacity-10 rounded-lg shadow-sm\">",
        );
        output.push_str(
            "<table class=\"w-full text-sm text-left border-collapse opacity-100\">",
        );
        output.push_str(
            "<thead class=\"text-xs uppercase bg-black/5 border-b border-current/10\"><tr>",
        );
        for (i, cell) in table.headers.iter().enumerate() {
            output.push_str(&format!(
                "<th class=\"px-6 py-3 font-bold text-{} border-r border-current/10 last:border-r-0\">",
                table.alignment(i).as_str()
            ));
            self.render_cell(output, Some(cell));
            output.push_str("</th>");
        }
        output.push_str("</tr></thead><tbody>");

        let width = table.header_count();
        for row in &table.rows {
            output.push_str("<tr class=\"border-b border-current/5 hover:bg-black/5 transition-colors\">");
            for i in 0..row.len().max(width) {
                output.push_str(&format!(
                    "<td class=\"px-6 py-3 text-{} border-r border-current/10 last:border-r-0\">",
                    table.alignment(i).as_str()
                ));
                self.render_cell(output, row.get(i));
                output.push_str("</td>");
            }
            output.push_str("</tr>");
        }

        output.push_str("</tbody></table></div>");
    }

    fn render_cell(&self, output: &mut String, cell: Option<&TableCell>) {
        match cell {
            Some(cell) if !cell.is_empty() => self.render_inlines(output, &cell.content),
            _ => output.push_str("&nbsp;"),
        }
    }

    fn render_inlines(&self, output: &mut String, content: &[Inline]) {
        for span in content {
            self.render_inline(output, span);
        }
    }

    fn render_inline(&self, output: &mut String, span: &Inline) {
        match span {
            Inline::Text(text) => output.push_str(text),
            Inline::Bold(children) => {
                output.push_str("<strong class=\"font-bold\">");
                self.render_inlines(output, children);
                output.push_str("</strong>");
            }
            Inline::Italic(children) => {
                output.push_str("<em class=\"opacity-80\">");
                self.render_inlines(output, children);
                output.push_str("</em>");
            }
            Inline::BoldItalic(children) => {
                output.push_str("<strong class=\"font-bold bg-yellow-100/50 px-1 rounded\"><em>");
                self.render_inlines(output, children);
                output.push_str("</em></strong>");
            }
            Inline::InlineCode(code) => {
                output.push_str(&format!("<code class=\"{}\">{}</code>", CODE_CLASS, code));
            }
            Inline::InlineMath(expr) => {
                output.push_str(&format!(
                    "<span class=\"{}\">${}$</span>",
                    MATH_INLINE_CLASS, expr
                ));
            }
            Inline::Link(link) => self.render_link(output, link),
            Inline::LineBreak => {
                if self.options.line_breaks {
                    output.push_str("<br/>");
                } else {
                    output.push(' ');
                }
            }
        }
    }

    fn render_link(&self, output: &mut String, link: &Link) {
        let class = if link.citation {
            format!("{} {} {}", CITATION_CLASS, LINK_CLASS, self.profile.accent)
        } else {
            format!("{} {}", LINK_CLASS, self.profile.accent)
        };
        output.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" class=\"{}\">",
            escape_attr(&link.url),
            class
        ));
        if link.content.is_empty() {
            output.push_str(&link.label);
        } else {
            self.render_inlines(output, &link.content);
        }
        output.push_str("</a>");
    }
}

fn render_cover(output: &mut String, cover: &CoverPage) {
    output.push_str(
        "<div class=\"cover-page mb-16 text-center py-24 border-b-2 border-slate-100\" contenteditable=\"false\">",
    );
    output.push_str(&format!(
        "<h2 class=\"text-xl uppercase tracking-widest mb-2 opacity-60\">{}</h2>",
        escape_text(&cover.institution)
    ));
    output.push_str(&format!(
        "<h3 class=\"text-lg font-medium mb-12 opacity-50\">{}</h3>",
        escape_text(&cover.course)
    ));
    output.push_str(&format!(
        "<h1 class=\"text-5xl font-extrabold mb-8 leading-tight\">{}</h1>",
        escape_text(&cover.title)
    ));
    output.push_str("<div class=\"inline-block border-t border-slate-300 w-24 mb-8\"></div>");
    output.push_str(&format!(
        "<p class=\"text-xl font-medium mb-2\">{}</p>",
        escape_text(&cover.author)
    ));
    output.push_str(&format!(
        "<p class=\"text-slate-500\">{}</p>",
        escape_text(&cover.date)
    ));
    output.push_str("</div>");
}

fn render_bibliography(output: &mut String, bib: &Bibliography) {
    output.push_str(
        "<div class=\"bibliography mt-16 pt-8 border-t border-slate-200 page-break-before\">",
    );
    output.push_str("<h2 class=\"text-2xl font-bold mb-6\">References</h2>");
    output.push_str("<ul class=\"list-none space-y-4\">");
    for reference in &bib.references {
        output.push_str(&format!(
            "<li class=\"pl-8 -indent-8 text-slate-700\">[{}] {}. Available at: <span class=\"italic underline text-blue-600\">{}</span> (Accessed: {}).</li>",
            reference.index,
            escape_text(&reference.label),
            escape_text(&reference.url),
            reference.accessed_display()
        ));
    }
    output.push_str("</ul></div>");
}

/// Cover fields and reference entries hold unescaped text.
fn escape_text(text: &str) -> String {
    crate::parser::escape_html(text)
}

/// Quote an already-escaped value for use inside a double-quoted attribute.
fn escape_attr(value: &str) -> String {
    value.replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, ListItem, Reference};
    use crate::render::Theme;
    use chrono::NaiveDate;

    fn render(doc: &Document) -> String {
        to_html(doc, &RenderOptions::default()).unwrap()
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(render(&Document::new()), "");
    }

    #[test]
    fn test_heading_classes_follow_theme() {
        let doc = Document::from_blocks(vec![Block::heading(3, vec![Inline::text("Sub")])]);
        let modern = to_html(&doc, &RenderOptions::new().with_theme(Theme::Modern)).unwrap();
        let academic = render(&doc);

        assert!(modern.starts_with("<h3 class=\""));
        assert!(modern.contains("text-indigo-600"));
        assert!(academic.contains("text-black italic"));
        assert!(modern.ends_with(">Sub</h3>"));
    }

    #[test]
    fn test_citation_link_marker() {
        let doc = Document::from_blocks(vec![Block::paragraph(vec![
            Inline::link("ref", "http://x.y/?a=1&amp;b=\"2\""),
            Inline::Link(Link::plain("nav", "/home")),
        ])]);
        let html = render(&doc);

        assert_eq!(html.matches(CITATION_CLASS).count(), 1);
        assert!(html.contains("href=\"http://x.y/?a=1&amp;b=&quot;2&quot;\""));
        assert!(html.contains(">ref</a>"));
    }

    #[test]
    fn test_link_label_content() {
        let link = Link::citation("a b", "u").with_content(vec![Inline::bold("a"), Inline::text(" b")]);
        let html = render(&Document::from_blocks(vec![Block::paragraph(vec![Inline::Link(link)])]));
        assert!(html.contains("\"><strong class=\"font-bold\">a</strong> b</a>"));
    }

    #[test]
    fn test_math_keeps_delimiters() {
        let doc = Document::from_blocks(vec![
            Block::MathBlock {
                expression: "E = mc^2".into(),
            },
            Block::paragraph(vec![Inline::InlineMath("x_1".into())]),
        ]);
        let html = render(&doc);
        assert!(html.contains("\">$$E = mc^2$$</div>"));
        assert!(html.contains("math-inline"));
        assert!(html.contains("\">$x_1$</span>"));
    }

    #[test]
    fn test_line_breaks_option() {
        let doc = Document::from_blocks(vec![Block::paragraph(vec![
            Inline::text("a"),
            Inline::LineBreak,
            Inline::text("b"),
        ])]);
        assert!(render(&doc).contains("a<br/>b"));

        let flat = to_html(&doc, &RenderOptions::new().with_line_breaks(false)).unwrap();
        assert!(flat.contains(">a b</p>"));
    }

    #[test]
    fn test_nested_emphasis() {
        let doc = Document::from_blocks(vec![Block::paragraph(vec![
            Inline::bold_italic("both"),
            Inline::Bold(vec![Inline::italic("in")]),
        ])]);
        let html = render(&doc);
        assert!(html.contains("<em>both</em></strong>"));
        assert!(html.contains("<strong class=\"font-bold\"><em class=\"opacity-80\">in</em></strong>"));
    }

    #[test]
    fn test_lists() {
        let doc = Document::from_blocks(vec![
            Block::List(List {
                ordered: true,
                start: 4,
                items: vec![vec![Inline::text("four")]],
            }),
            Block::ListItem(ListItem::bullet(vec![Inline::text("lone")])),
        ]);
        let html = render(&doc);
        assert!(html.contains("<ol class=\"my-4 space-y-1\" start=\"4\">"));
        assert!(html.contains("list-decimal"));
        assert!(html.contains("<ul class=\"my-4 space-y-1\"><li"));
    }

    #[test]
    fn test_table_padding_and_alignment() {
        let mut table = Table::with_headers(vec![TableCell::text("A"), TableCell::text("B")]);
        table.alignments = vec![Alignment::Center, Alignment::Right];
        table.add_row(vec![TableCell::text("1")]);
        table.add_row(vec![TableCell::empty(), TableCell::text("2"), TableCell::text("3")]);

        let html = render(&Document::from_blocks(vec![Block::Table(table)]));
        assert_eq!(html.matches("<td").count(), 5);
        assert_eq!(html.matches("&nbsp;").count(), 2);
        assert!(html.contains("text-center"));
        assert!(html.contains("text-right"));
        assert!(html.contains(">3</td>"));
    }

    #[test]
    fn test_code_block_info() {
        let doc = Document::from_blocks(vec![Block::CodeBlock {
            info: Some("rust".into()),
            code: "let a = &amp;b;".into(),
        }]);
        let html = render(&doc);
        assert!(html.contains("data-lang=\"rust\">let a = &amp;b;</pre>"));
    }

    #[test]
    fn test_bibliography_section() {
        let bib = Bibliography {
            references: vec![Reference {
                index: 1,
                label: "link".into(),
                url: "http://example.com".into(),
                accessed: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            }],
        };
        let html = render(&Document::from_blocks(vec![Block::Bibliography(bib)]));
        assert!(html.contains(">References</h2>"));
        assert!(html.contains("[1] link. Available at: "));
        assert!(html.contains("(Accessed: 2024-01-02).</li>"));
    }

    #[test]
    fn test_cover_fields_escaped() {
        let cover = CoverPage::new().with_title("R&D <Report>");
        let html = render(&Document::from_blocks(vec![Block::CoverPage(cover)]));
        assert!(html.contains("R&amp;D &lt;Report&gt;"));
        assert!(html.starts_with("<div class=\"cover-page"));
    }

    #[test]
    fn test_render_with_stats() {
        let doc = Document::from_blocks(vec![
            Block::heading(1, vec![Inline::text("Title")]),
            Block::text("two words"),
        ]);
        let result = to_html_with_stats(&doc, &RenderOptions::default()).unwrap();
        assert_eq!(result.stats.heading_count, 1);
        assert_eq!(result.stats.paragraph_count, 1);
        assert_eq!(result.stats.word_count, 3);
        assert!(result.content.contains("<h1"));
    }
}
