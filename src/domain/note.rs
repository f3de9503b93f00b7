//! Structured note and step types.

use chrono::{DateTime, Utc};
use std::fmt;

/// A structured note: a title and description plus an ordered list of steps.
///
/// Steps are loaded eagerly so search and export never go back to the store
/// for them. `modified` is refreshed on every mutation of the note or any
/// of its steps.
#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    id: i64,
    title: String,
    description: Option<String>,
    category_id: Option<i64>,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
    steps: Vec<Step>,
}

impl Note {
    /// Creates a note from stored fields. Steps must already be in
    /// `(position, id)` order.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        title: impl Into<String>,
        description: Option<String>,
        category_id: Option<i64>,
        created: DateTime<Utc>,
        modified: DateTime<Utc>,
        steps: Vec<Step>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description,
            category_id,
            created,
            modified,
            steps,
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

    /// Returns the note's description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the id of the note's category, if any.
    pub fn category_id(&self) -> Option<i64> {
        self.category_id
    }

    /// Returns when the note was created.
    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns when the note or its steps were last modified.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Returns the note's steps in `(position, id)` order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.title, self.id)
    }
}

/// One step of a structured note.
///
/// Every content field is optional, but a stored step always carries at
/// least one of them (enforced by validation at the store boundary).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    id: i64,
    note_id: i64,
    title: Option<String>,
    description: Option<String>,
    code: Option<String>,
    image: Option<String>,
    position: i64,
}

impl Step {
    /// Creates a step from stored fields.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        note_id: i64,
        title: Option<String>,
        description: Option<String>,
        code: Option<String>,
        image: Option<String>,
        position: i64,
    ) -> Self {
        Self {
            id,
            note_id,
            title,
            description,
            code,
            image,
            position,
        }
    }

    /// Returns the step's unique identifier.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the id of the owning note.
    pub fn note_id(&self) -> i64 {
        self.note_id
    }

    /// Returns the step's title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the step's description, if any.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the step's code block, if any.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Returns the step's image as a web-relative media path, if any.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    /// Returns the step's sort position within its note.
    pub fn position(&self) -> i64 {
        self.position
    }
}

/// Fields for creating or updating a structured note.
#[derive(Debug, Clone, Default)]
pub struct NoteDraft {
    pub title: String,
    pub description: Option<String>,
    pub category_id: Option<i64>,
}

/// Fields for creating or updating a step.
#[derive(Debug, Clone, Default)]
pub struct StepDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub image: Option<String>,
    pub position: i64,
    /// Marks the step for removal during a batch edit. Content validation
    /// is skipped for removed steps.
    pub remove: bool,
}
