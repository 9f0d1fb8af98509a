//! Title page data.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Fields shown on a document's cover page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverPage {
    /// Institution name
    pub institution: String,

    /// Course title
    pub course: String,

    /// Assignment title
    pub title: String,

    /// Author name
    pub author: String,

    /// Display date
    pub date: String,
}

impl CoverPage {
    /// Create a cover page with placeholder fields and today's date.
    pub fn new() -> Self {
        Self {
            institution: "University Name".to_string(),
            course: "Course Title 101".to_string(),
            title: "Assignment Title".to_string(),
            author: "Student Name".to_string(),
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
        }
    }

    /// Set the institution.
    pub fn with_institution(mut self, institution: impl Into<String>) -> Self {
        self.institution = institution.into();
        self
    }

    /// Set the course title.
    pub fn with_course(mut self, course: impl Into<String>) -> Self {
        self.course = course.into();
        self
    }

    /// Set the assignment title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the display date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Get plain text content, one field per line.
    pub fn plain_text(&self) -> String {
        [
            &self.institution,
            &self.course,
            &self.title,
            &self.author,
            &self.date,
        ]
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join("\n")
    }
}

impl Default for CoverPage {
    fn default() -> Self {
        Self::new()
    }
}
