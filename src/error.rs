//! Error types for docuflow library.

use std::io;
use thiserror::Error;

/// Result type alias for docuflow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting or exporting documents.
///
/// Parsing itself never fails: malformed tables and unterminated delimiters
/// degrade to literal text instead of producing an error.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error serializing or deserializing JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The document contains no citation links to build a bibliography from.
    #[error("No links found to cite.")]
    NoCitations,

    /// The requested theme name is not one of the known profiles.
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Error during rendering (HTML, text, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Whether this error is an informational notice rather than a failure.
    ///
    /// Callers should surface advisory errors to the user and carry on with
    /// the session.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Error::NoCitations)
    }
}
