//! Export document assembly.
//!
//! Builds the flat data structure the document template consumes from the
//! current store state. Assembly is single-use: every export request
//! re-reads the store, so the document always reflects the latest edits.

use super::media::MediaResolver;
use crate::store::{NoteStore, StoreError};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while assembling or rendering an export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The requested note does not exist at assembly time.
    #[error("note not found: {id}")]
    NoteNotFound { id: i64 },

    /// The store failed underneath the assembler.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The document template failed to render.
    #[error("template render failed: {0}")]
    Render(#[from] minijinja::Error),

    /// A custom template file could not be read.
    #[error("failed to read template {path}: {source}")]
    Template {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// One step of a structured note, ready for the document template.
///
/// Optional fields stay optional all the way into the template; a step
/// with no image simply renders without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub code: Option<String>,
    pub image_path: Option<String>,
}

/// The assembled, immutable document handed to the renderer.
#[derive(Debug, Clone)]
pub enum ExportDocument {
    /// A structured note flattened into ordered items.
    Structured {
        title: String,
        items: Vec<ExportItem>,
        generated_at: DateTime<Utc>,
    },
    /// A free-form note with its media references resolved in place.
    Free {
        title: String,
        html: String,
        generated_at: DateTime<Utc>,
    },
}

impl ExportDocument {
    /// Returns the document title.
    pub fn title(&self) -> &str {
        match self {
            ExportDocument::Structured { title, .. } => title,
            ExportDocument::Free { title, .. } => title,
        }
    }
}

/// Assembles the export document for a structured note.
///
/// Walks the note's steps in lifecycle order and resolves each step image
/// through the field-level media path. Missing optional fields are never
/// an error; a missing note is.
pub fn assemble_structured(
    store: &dyn NoteStore,
    id: i64,
    media: &MediaResolver,
) -> ExportResult<ExportDocument> {
    let note = store.get_note(id)?.ok_or(ExportError::NoteNotFound { id })?;

    let items = note
        .steps()
        .iter()
        .map(|step| ExportItem {
            title: step.title().map(str::to_string),
            description: step.description().map(str::to_string),
            code: step.code().map(str::to_string),
            image_path: step.image().map(|rel| media.resolve_field(rel)),
        })
        .collect();

    Ok(ExportDocument::Structured {
        title: note.title().to_string(),
        items,
        generated_at: Utc::now(),
    })
}

/// Assembles the export document for a free-form note.
///
/// Runs the embedded-HTML media pass over a copy of the content; the
/// stored note is untouched.
pub fn assemble_free(
    store: &dyn NoteStore,
    id: i64,
    media: &MediaResolver,
) -> ExportResult<ExportDocument> {
    let note = store
        .get_free_note(id)?
        .ok_or(ExportError::NoteNotFound { id })?;

    Ok(ExportDocument::Free {
        title: note.title().to_string(),
        html: media.rewrite_html(note.content()),
        generated_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FreeNoteDraft, NoteDraft, StepDraft};
    use crate::store::{NoteStore, SqliteStore, StepEdit};

    fn media() -> MediaResolver {
        MediaResolver::new("/data/media", "/media/")
    }

    fn store_with_structured_note() -> (SqliteStore, i64) {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let note = store
            .create_note(&NoteDraft {
                title: "Fix oven".into(),
                ..Default::default()
            })
            .unwrap();
        store
            .apply_steps(
                note.id(),
                &[
                    StepEdit::insert(StepDraft {
                        title: Some("Wiring".into()),
                        image: Some("pasos/img1.png".into()),
                        position: 1,
                        ..Default::default()
                    }),
                    StepEdit::insert(StepDraft {
                        code: Some("preheat 350".into()),
                        position: 0,
                        ..Default::default()
                    }),
                ],
            )
            .unwrap();
        let id = note.id();
        (store, id)
    }

    #[test]
    fn structured_document_resolves_step_images_in_order() {
        let (store, id) = store_with_structured_note();
        let doc = assemble_structured(&store, id, &media()).unwrap();

        let ExportDocument::Structured { title, items, .. } = doc else {
            panic!("expected structured document");
        };
        assert_eq!(title, "Fix oven");
        assert_eq!(items.len(), 2);
        // position 0 (the code step) comes first
        assert_eq!(items[0].code.as_deref(), Some("preheat 350"));
        assert_eq!(items[0].image_path, None);
        assert_eq!(
            items[1].image_path.as_deref(),
            Some("/data/media/pasos/img1.png")
        );
    }

    #[test]
    fn missing_structured_note_is_an_error() {
        let store = SqliteStore::open_in_memory().unwrap();
        let err = assemble_structured(&store, 42, &media()).unwrap_err();
        assert!(matches!(err, ExportError::NoteNotFound { id: 42 }));
    }

    #[test]
    fn free_document_rewrites_embedded_images() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let note = store
            .create_free_note(&FreeNoteDraft {
                title: "Grocery list".into(),
                content: r#"<p>milk</p><img src="/media/x.png" alt="a">"#.into(),
                category_id: None,
            })
            .unwrap();

        let doc = assemble_free(&store, note.id(), &media()).unwrap();
        let ExportDocument::Free { html, .. } = doc else {
            panic!("expected free document");
        };
        assert_eq!(html, r#"<p>milk</p><img src="/data/media/x.png">"#);

        // The stored note keeps its public URL
        let stored = store.get_free_note(note.id()).unwrap().unwrap();
        assert!(stored.content().contains("/media/x.png"));
    }

    #[test]
    fn missing_free_note_is_an_error() {
        let store = SqliteStore::open_in_memory().unwrap();
        let err = assemble_free(&store, 7, &media()).unwrap_err();
        assert!(matches!(err, ExportError::NoteNotFound { id: 7 }));
    }
}
