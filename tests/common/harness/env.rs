//! Isolated test environment with temp directory.

use super::JotCommand;
use jot::domain::{FreeNoteDraft, NoteDraft, StepDraft};
use jot::store::{NoteStore, SqliteStore, StepEdit};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides direct store access for seeding and inspection.
pub struct TestEnv {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the data directory
    data_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let data_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            data_dir,
        }
    }

    /// Returns the path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Returns the path where the SQLite database is stored.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("jot.db")
    }

    /// Returns the default media root for this environment.
    pub fn media_dir(&self) -> PathBuf {
        self.data_dir.join("media")
    }

    /// Opens the store directly for seeding or inspection.
    pub fn store(&self) -> SqliteStore {
        SqliteStore::open(&self.db_path()).expect("Failed to open store")
    }

    /// Seeds a structured note and returns its id.
    pub fn seed_note(&self, title: &str, description: Option<&str>) -> i64 {
        let mut store = self.store();
        let note = store
            .create_note(&NoteDraft {
                title: title.to_string(),
                description: description.map(str::to_string),
                category_id: None,
            })
            .expect("Failed to seed note");
        note.id()
    }

    /// Seeds a code-only step on a note and returns the step id.
    pub fn seed_code_step(&self, note_id: i64, code: &str) -> i64 {
        let mut store = self.store();
        let note = store
            .apply_steps(
                note_id,
                &[StepEdit::insert(StepDraft {
                    code: Some(code.to_string()),
                    ..Default::default()
                })],
            )
            .expect("Failed to seed step");
        note.steps()
            .iter()
            .map(|s| s.id())
            .max()
            .expect("Seeded note has no steps")
    }

    /// Seeds a free-form note and returns its id.
    pub fn seed_free_note(&self, title: &str, content: &str) -> i64 {
        let mut store = self.store();
        let note = store
            .create_free_note(&FreeNoteDraft {
                title: title.to_string(),
                content: content.to_string(),
                category_id: None,
            })
            .expect("Failed to seed free note");
        note.id()
    }

    /// Creates a JotCommand configured for this test environment.
    pub fn cmd(&self) -> JotCommand {
        JotCommand::new().dir(&self.data_dir)
    }

    /// Writes a file into the data directory and returns its path.
    ///
    /// Useful for custom templates and content files.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.data_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
