//! Rendering module for presenting documents in various output formats.

mod html;
mod json;
mod options;
mod result;
mod standalone;
mod text;
mod theme;

pub use html::{to_html, to_html_with_stats, HtmlRenderer, CITATION_CLASS};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{DocumentStats, RenderResult, WORDS_PER_MINUTE};
pub use standalone::{to_standalone, StandaloneFormat};
pub use text::to_text;
pub use theme::{Theme, ThemeProfile};
