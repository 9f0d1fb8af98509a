//! Editing session state.
//!
//! A [`Session`] holds the raw input and presentation choices for one
//! document. Rendering never mutates it, so independent sessions can be
//! rendered side by side.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{CoverPage, Document};
use crate::render::{self, DocumentStats, RenderOptions, Theme};

/// One editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    /// Raw markup input
    pub input: String,

    /// Selected presentation profile
    pub theme: Theme,

    /// Optional title page placed before the content
    pub cover: Option<CoverPage>,
}

/// Persisted form of a session: the input text and the theme name.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavedSession {
    input_text: String,
    #[serde(default)]
    theme: Theme,
}

impl Session {
    /// Create an empty session with the default theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set a cover page.
    pub fn with_cover(mut self, cover: CoverPage) -> Self {
        self.cover = Some(cover);
        self
    }

    /// Replace the input text.
    ///
    /// Text produced elsewhere, such as by a rewriting service, goes through
    /// here exactly like typed input.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Clear the input text.
    pub fn clear(&mut self) {
        self.input.clear();
    }

    /// Parse the current input, with the cover page first if one is set.
    pub fn document(&self) -> Document {
        let mut doc = crate::parse(&self.input);
        if let Some(cover) = &self.cover {
            doc.insert_cover_page(cover.clone());
        }
        doc
    }

    /// Render options carrying this session's theme.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::new().with_theme(self.theme)
    }

    /// Render the current input as an HTML fragment.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document(), &self.render_options())
    }

    /// Word count, reading time, and block counts for the current input.
    pub fn stats(&self) -> DocumentStats {
        DocumentStats::collect(&self.input, &crate::parse(&self.input))
    }

    /// Serialize the input text and theme to JSON.
    pub fn save(&self) -> Result<String> {
        let saved = SavedSession {
            input_text: self.input.clone(),
            theme: self.theme,
        };
        Ok(serde_json::to_string(&saved)?)
    }

    /// Restore a session from JSON produced by [`Session::save`].
    pub fn restore(json: &str) -> Result<Self> {
        let saved: SavedSession = serde_json::from_str(json)?;
        Ok(Self {
            input: saved.input_text,
            theme: saved.theme,
            cover: None,
        })
    }

    /// Save the session to a file.
    pub fn save_to_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        fs::write(path, self.save()?)?;
        log::debug!("saved session to {}", path.display());
        Ok(())
    }

    /// Load a session from a file.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        log::debug!("loaded session from {}", path.display());
        Self::restore(&json)
    }
}
