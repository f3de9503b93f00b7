//! Search corpus construction.
//!
//! Flattens structured and free-form notes into a single sequence of
//! uniform records for the ranker. Records are transient: built fresh from
//! the store for every search request and never persisted.

use crate::domain::{FreeNote, Note};
use crate::store::{NoteStore, StoreResult};
use chrono::{DateTime, Utc};

/// Display snippets stop after this many characters. Matching always runs
/// over the full text.
const SNIPPET_CHARS: usize = 200;

/// Which kind of note a search record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Structured,
    Free,
}

impl RecordKind {
    /// Returns the kind as a lowercase label.
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Structured => "structured",
            RecordKind::Free => "free",
        }
    }
}

/// Transient, normalized view of one note used only during ranking.
#[derive(Debug, Clone)]
pub struct SearchRecord {
    kind: RecordKind,
    id: i64,
    title: String,
    text: String,
    category_id: Option<i64>,
    updated: DateTime<Utc>,
}

impl SearchRecord {
    /// Returns the kind of note this record came from.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// Returns the id of the source note.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Returns the source note's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the full searchable text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the id of the source note's category, if any.
    pub fn category_id(&self) -> Option<i64> {
        self.category_id
    }

    /// Returns when the source note was last modified.
    pub fn updated(&self) -> DateTime<Utc> {
        self.updated
    }

    /// Returns a short form of the searchable text for display.
    pub fn snippet(&self) -> String {
        let trimmed = self.text.trim();
        if trimmed.chars().count() <= SNIPPET_CHARS {
            return trimmed.to_string();
        }
        let cut: String = trimmed.chars().take(SNIPPET_CHARS).collect();
        format!("{cut}…")
    }
}

/// Flattens a structured note into a search record.
///
/// The text is the title and description followed by every step's title,
/// description, and code; absent fields contribute empty strings. Step
/// images are not searchable text.
pub fn structured_record(note: &Note) -> SearchRecord {
    let mut text = format!("{} {}", note.title(), note.description().unwrap_or(""));
    for step in note.steps() {
        text.push_str(&format!(
            " {} {} {}",
            step.title().unwrap_or(""),
            step.description().unwrap_or(""),
            step.code().unwrap_or(""),
        ));
    }

    SearchRecord {
        kind: RecordKind::Structured,
        id: note.id(),
        title: note.title().to_string(),
        text,
        category_id: note.category_id(),
        updated: note.modified(),
    }
}

/// Flattens a free-form note into a search record.
///
/// The FULL content is searchable; truncation only ever applies to the
/// display snippet.
pub fn free_record(note: &FreeNote) -> SearchRecord {
    SearchRecord {
        kind: RecordKind::Free,
        id: note.id(),
        title: note.title().to_string(),
        text: format!("{} {}", note.title(), note.content()),
        category_id: note.category_id(),
        updated: note.modified(),
    }
}

/// Builds the corpus from the store, optionally restricted to one note
/// kind and/or one category.
///
/// Read-only over the store; steps arrive eagerly with their notes so
/// scoring never goes back for them. Record order follows the store's
/// listing order, which keeps ranking deterministic.
pub fn build_corpus(
    store: &dyn NoteStore,
    kind: Option<RecordKind>,
    category: Option<i64>,
) -> StoreResult<Vec<SearchRecord>> {
    let mut records = Vec::new();

    if kind != Some(RecordKind::Free) {
        for note in store.list_notes(category)? {
            records.push(structured_record(&note));
        }
    }
    if kind != Some(RecordKind::Structured) {
        for note in store.list_free_notes(category)? {
            records.push(free_record(&note));
        }
    }

    Ok(records)
}
