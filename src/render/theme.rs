//! Presentation profiles.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A named presentation profile.
///
/// Themes only select class attributes. They never change how text is
/// parsed into blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Sans-serif, indigo accents
    Modern,
    /// Serif, justified, monochrome
    #[default]
    Academic,
    /// Bold headings, violet accents
    Creative,
}

impl Theme {
    /// All themes in display order.
    pub const ALL: [Theme; 3] = [Theme::Modern, Theme::Academic, Theme::Creative];

    /// Lowercase theme name.
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Modern => "modern",
            Theme::Academic => "academic",
            Theme::Creative => "creative",
        }
    }

    /// Class strings for this theme.
    pub fn profile(&self) -> ThemeProfile {
        match self {
            Theme::Modern => ThemeProfile {
                container: "font-sans text-slate-800",
                heading: "text-slate-900 border-slate-100",
                accent: "text-indigo-600",
                background: "bg-white",
            },
            Theme::Academic => ThemeProfile {
                container: "font-serif text-black leading-loose text-justify",
                heading: "text-black border-black/20 uppercase tracking-widest text-center",
                accent: "text-black italic",
                background: "bg-white",
            },
            Theme::Creative => ThemeProfile {
                container: "font-sans text-slate-900",
                heading: "text-violet-700 border-violet-100 font-black tracking-tight",
                accent: "text-violet-600",
                background: "bg-violet-50/10",
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "modern" => Ok(Theme::Modern),
            "academic" => Ok(Theme::Academic),
            "creative" => Ok(Theme::Creative),
            _ => Err(Error::UnknownTheme(s.to_string())),
        }
    }
}

/// Class attribute values supplied by a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeProfile {
    /// Classes for the page container
    pub container: &'static str,

    /// Extra classes for level-1 headings
    pub heading: &'static str,

    /// Classes for level-3 headings and links
    pub accent: &'static str,

    /// Page background classes
    pub background: &'static str,
}
