//! Free-form note type.

use chrono::{DateTime, Utc};
use std::fmt;

/// A free-form note whose entire body is a single rich-HTML blob.
#[derive(Debug, Clone, PartialEq)]
pub struct FreeNote {
    id: i64,
    title: String,
    content: String,
    category_id: Option<i64>,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
}

impl FreeNote {
    /// Creates a free note from stored fields.
    pub fn new(
        id: i64,
        title: impl Into<String>,
        content: impl Into<String>,
        category_id: Option<i64>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            category_id,
            created,
            modified,
        }
    }

    /// Returns the note's unique identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the note's HTML content.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the id of the note's category, if any.
    pub fn category_id(&self) -> Option<i64> {
        self.category_id
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the note was last modified.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }
}

impl fmt::Display for FreeNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.title, self.id)
    }
}

/// Fields for creating or updating a free-form note.
#[derive(Debug, Clone, Default)]
pub struct FreeNoteDraft {
    pub title: String,
    pub content: String,
    pub category_id: Option<i64>,
}
