//! Complete-document wrappers around the HTML fragment.

use std::fmt;

use crate::error::Result;
use crate::model::Document;
use crate::parser::escape_html;

use super::{to_html, RenderOptions};

/// Shell used when exporting a full document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StandaloneFormat {
    /// Minimal HTML5 page
    #[default]
    Html,
    /// HTML with Office namespaces, readable by word processors
    Word,
}

impl fmt::Display for StandaloneFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StandaloneFormat::Html => f.write_str("html"),
            StandaloneFormat::Word => f.write_str("word"),
        }
    }
}

/// Wrap the rendered document in a complete page.
///
/// The title is plain text and is escaped here. The theme's background and
/// container classes go on the page body.
pub fn to_standalone(
    doc: &Document,
    title: &str,
    format: StandaloneFormat,
    options: &RenderOptions,
) -> Result<String> {
    let profile = options.theme.profile();
    let body = format!(
        "<div class=\"{}\">{}</div>",
        profile.container,
        to_html(doc, options)?
    );
    let title = escape_html(title);

    let page = match format {
        StandaloneFormat::Html => format!(
            "<!DOCTYPE html><html><head><title>{}</title><meta charset=\"utf-8\"></head>\
             <body class=\"{}\" style=\"max-width:800px;margin:0 auto;font-family:serif;line-height:1.6\">{}</body></html>",
            title, profile.background, body
        ),
        StandaloneFormat::Word => format!(
            "<html xmlns:o='urn:schemas-microsoft-com:office:office' \
             xmlns:w='urn:schemas-microsoft-com:office:word' \
             xmlns='http://www.w3.org/TR/REC-html40'>\n\
             <head><meta charset=\"utf-8\"><title>{}</title>\n\
             <style>body{{font-family:'Times New Roman',serif;}}</style>\n\
             </head><body class=\"{}\">{}</body></html>",
            title, profile.background, body
        ),
    };

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Inline};
    use crate::render::Theme;

    fn doc() -> Document {
        Document::from_blocks(vec![Block::heading(1, vec![Inline::text("Title")])])
    }

    #[test]
    fn test_html_shell() {
        let page = to_standalone(&doc(), "A <b> title", StandaloneFormat::Html, &RenderOptions::default())
            .unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>A &lt;b&gt; title</title>"));
        assert!(page.contains("<h1 class="));
        assert!(page.ends_with("</div></body></html>"));
    }

    #[test]
    fn test_theme_classes_on_page() {
        let options = RenderOptions::new().with_theme(Theme::Creative);
        let page = to_standalone(&doc(), "T", StandaloneFormat::Html, &options).unwrap();
        let profile = Theme::Creative.profile();

        assert!(page.contains(&format!("<body class=\"{}\"", profile.background)));
        assert!(page.contains(&format!("<div class=\"{}\"><h1", profile.container)));
    }

    #[test]
    fn test_format_display() {
        assert_eq!(StandaloneFormat::Word.to_string(), "word");
        assert_eq!(StandaloneFormat::default(), StandaloneFormat::Html);
    }

    #[test]
    fn test_word_shell() {
        let page = to_standalone(&doc(), "Report", StandaloneFormat::Word, &RenderOptions::default())
            .unwrap();
        assert!(page.contains("urn:schemas-microsoft-com:office:word"));
        assert!(page.contains("body{font-family:'Times New Roman',serif;}"));
    }
}
