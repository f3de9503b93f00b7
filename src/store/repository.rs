//! NoteStore trait and error types.

use crate::domain::{
    Category, FreeNote, FreeNoteDraft, Note, NoteDraft, Step, StepDraft, ValidationError,
};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested structured note does not exist.
    #[error("note not found: {id}")]
    NoteNotFound { id: i64 },

    /// The requested free-form note does not exist.
    #[error("free note not found: {id}")]
    FreeNoteNotFound { id: i64 },

    /// The requested category does not exist.
    #[error("category not found: {key}")]
    CategoryNotFound { key: String },

    /// The requested step does not exist.
    #[error("step not found: {id}")]
    StepNotFound { id: i64 },

    /// Another category already uses this name.
    #[error("category name already in use: {name}")]
    DuplicateName { name: String },

    /// A draft failed validation.
    #[error("invalid draft: {0}")]
    Validation(#[from] ValidationError),

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A stored row could not be decoded.
    #[error("invalid record in database: {0}")]
    InvalidData(String),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// One entry of a batch step edit (the shape of one edit-form row).
///
/// `step_id: None` inserts a new step; `Some` updates or, when the draft is
/// marked `remove`, deletes the existing step. A new row marked `remove` is
/// silently skipped.
#[derive(Debug, Clone, Default)]
pub struct StepEdit {
    pub step_id: Option<i64>,
    pub draft: StepDraft,
}

impl StepEdit {
    /// An edit that inserts a new step.
    pub fn insert(draft: StepDraft) -> Self {
        Self {
            step_id: None,
            draft,
        }
    }

    /// An edit that updates an existing step.
    pub fn update(step_id: i64, draft: StepDraft) -> Self {
        Self {
            step_id: Some(step_id),
            draft,
        }
    }

    /// An edit that removes an existing step.
    pub fn remove(step_id: i64) -> Self {
        Self {
            step_id: Some(step_id),
            draft: StepDraft {
                remove: true,
                ..Default::default()
            },
        }
    }
}

/// Durable store of categories, structured notes with steps, and free notes.
///
/// All reads are point-in-time: search and export build everything they
/// need from one round of queries and never cache across requests.
pub trait NoteStore {
    // Categories

    /// Creates a category, deriving a unique slug from `name`.
    fn create_category(&mut self, name: &str) -> StoreResult<Category>;

    /// Renames a category, re-deriving its slug. The category keeps its
    /// current slug when the new name still produces it.
    fn rename_category(&mut self, id: i64, name: &str) -> StoreResult<Category>;

    /// Looks up a category by id or slug.
    fn get_category(&self, key: &str) -> StoreResult<Option<Category>>;

    /// Lists all categories in name order.
    fn list_categories(&self) -> StoreResult<Vec<Category>>;

    /// Deletes a category. Notes referencing it keep existing with their
    /// category cleared.
    fn remove_category(&mut self, id: i64) -> StoreResult<()>;

    // Structured notes

    /// Creates a structured note with no steps.
    fn create_note(&mut self, draft: &NoteDraft) -> StoreResult<Note>;

    /// Fetches a structured note with its steps, eagerly loaded in
    /// `(position, id)` order.
    fn get_note(&self, id: i64) -> StoreResult<Option<Note>>;

    /// Lists structured notes, most recently modified first, optionally
    /// filtered by category.
    fn list_notes(&self, category: Option<i64>) -> StoreResult<Vec<Note>>;

    /// Updates a note's title, description, and category.
    fn update_note(&mut self, id: i64, draft: &NoteDraft) -> StoreResult<Note>;

    /// Deletes a note and all of its steps.
    fn remove_note(&mut self, id: i64) -> StoreResult<()>;

    // Steps

    /// Applies a batch of step edits to a note and refreshes its modified
    /// timestamp. Returns the updated note.
    fn apply_steps(&mut self, note_id: i64, edits: &[StepEdit]) -> StoreResult<Note>;

    /// Deletes a single step and refreshes the owning note's modified
    /// timestamp.
    fn remove_step(&mut self, step_id: i64) -> StoreResult<()>;

    // Free-form notes

    /// Creates a free-form note.
    fn create_free_note(&mut self, draft: &FreeNoteDraft) -> StoreResult<FreeNote>;

    /// Fetches a free-form note.
    fn get_free_note(&self, id: i64) -> StoreResult<Option<FreeNote>>;

    /// Lists free-form notes, most recently modified first, optionally
    /// filtered by category.
    fn list_free_notes(&self, category: Option<i64>) -> StoreResult<Vec<FreeNote>>;

    /// Updates a free-form note's title, content, and category.
    fn update_free_note(&mut self, id: i64, draft: &FreeNoteDraft) -> StoreResult<FreeNote>;

    /// Deletes a free-form note.
    fn remove_free_note(&mut self, id: i64) -> StoreResult<()>;

    /// Returns a step by id.
    fn get_step(&self, step_id: i64) -> StoreResult<Option<Step>>;
}
