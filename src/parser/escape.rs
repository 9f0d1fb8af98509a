//! Reserved-character escaping.
//!
//! Escaping runs before any structural rule so that markup emitted later is
//! never escaped a second time. Only `&`, `<` and `>` are touched.

/// Escape `&`, `<` and `>` as character references.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 10);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Undo [`escape_html`], plus `&nbsp;`, for plain-text output.
pub fn unescape_html(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    // &amp; last so "&amp;lt;" comes back as "&lt;"
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&nbsp;", "\u{a0}")
        .replace("&amp;", "&")
}
