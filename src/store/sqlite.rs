//! SQLite-backed implementation of the note store.

use super::repository::{NoteStore, StepEdit, StoreError, StoreResult};
use crate::domain::{
    Category, FreeNote, FreeNoteDraft, Note, NoteDraft, Step, validate_step, validate_title,
};
use crate::infra::{dedupe_slug, slugify};
use crate::store::create_schema;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, params};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// A note store persisted in a single SQLite database.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens an in-memory store with the full schema.
    ///
    /// Useful for tests and throwaway sessions that don't need persistence.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Opens or creates a store at the given path.
    ///
    /// Creates parent directories if they don't exist. Initializes the
    /// schema if this is a new database.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        create_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    fn parse_ts(value: &str) -> StoreResult<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| StoreError::InvalidData(format!("invalid timestamp: {e}")))
    }

    fn category_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Category> {
        Ok(Category::new(
            row.get::<_, i64>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    }

    fn existing_slugs(&self, exclude: Option<i64>) -> StoreResult<HashSet<String>> {
        let mut stmt = self.conn.prepare("SELECT id, slug FROM categories")?;
        let slugs = stmt
            .query_map([], |row| {
                Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
            })?
            .filter_map(|r| r.ok())
            .filter(|(id, _)| Some(*id) != exclude)
            .map(|(_, slug)| slug)
            .collect();
        Ok(slugs)
    }

    fn name_in_use(&self, name: &str, exclude: Option<i64>) -> StoreResult<bool> {
        let mut stmt = self
            .conn
            .prepare("SELECT id FROM categories WHERE name = ?")?;
        let hit = match stmt.query_row([name], |row| row.get::<_, i64>(0)) {
            Ok(id) => Some(id),
            Err(rusqlite::Error::QueryReturnedNoRows) => None,
            Err(e) => return Err(StoreError::Database(e)),
        };
        Ok(hit.is_some_and(|id| Some(id) != exclude))
    }

    fn category_exists(&self, id: i64) -> StoreResult<bool> {
        let mut stmt = self.conn.prepare("SELECT 1 FROM categories WHERE id = ?")?;
        match stmt.query_row([id], |_| Ok(())) {
            Ok(()) => Ok(true),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    fn check_category_ref(&self, category_id: Option<i64>) -> StoreResult<()> {
        if let Some(id) = category_id
            && !self.category_exists(id)?
        {
            return Err(StoreError::CategoryNotFound { key: id.to_string() });
        }
        Ok(())
    }

    fn load_steps(&self, note_id: i64) -> StoreResult<Vec<Step>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, note_id, title, description, code, image, position
             FROM steps WHERE note_id = ? ORDER BY position, id",
        )?;
        let steps = stmt
            .query_map([note_id], |row| {
                Ok(Step::new(
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                    row.get(6)?,
                ))
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(steps)
    }

    fn note_from_parts(
        &self,
        id: i64,
        title: String,
        description: Option<String>,
        category_id: Option<i64>,
        created: String,
        modified: String,
    ) -> StoreResult<Note> {
        Ok(Note::new(
            id,
            title,
            description,
            category_id,
            Self::parse_ts(&created)?,
            Self::parse_ts(&modified)?,
            self.load_steps(id)?,
        ))
    }

    /// Refreshes a note's modified timestamp after a step mutation.
    fn touch_note(&self, note_id: i64) -> StoreResult<()> {
        self.conn.execute(
            "UPDATE notes SET modified = ? WHERE id = ?",
            params![Utc::now().to_rfc3339(), note_id],
        )?;
        Ok(())
    }

    fn note_exists(&self, id: i64) -> StoreResult<bool> {
        let mut stmt = self.conn.prepare("SELECT 1 FROM notes WHERE id = ?")?;
        match stmt.query_row([id], |_| Ok(())) {
            Ok(()) => Ok(true),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(false),
            Err(e) => Err(StoreError::Database(e)),
        }
    }
}

impl NoteStore for SqliteStore {
    fn create_category(&mut self, name: &str) -> StoreResult<Category> {
        validate_title(name)?;
        if self.name_in_use(name, None)? {
            return Err(StoreError::DuplicateName {
                name: name.to_string(),
            });
        }

        let slugs = self.existing_slugs(None)?;
        let slug = dedupe_slug(&slugify(name), |s| slugs.contains(s));

        self.conn.execute(
            "INSERT INTO categories (name, slug) VALUES (?, ?)",
            params![name, slug],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(Category::new(id, name, slug))
    }

    fn rename_category(&mut self, id: i64, name: &str) -> StoreResult<Category> {
        validate_title(name)?;
        if !self.category_exists(id)? {
            return Err(StoreError::CategoryNotFound { key: id.to_string() });
        }
        if self.name_in_use(name, Some(id))? {
            return Err(StoreError::DuplicateName {
                name: name.to_string(),
            });
        }

        // Excluding the record's own slug keeps a rename to an equivalent
        // name from picking up a needless suffix.
        let slugs = self.existing_slugs(Some(id))?;
        let slug = dedupe_slug(&slugify(name), |s| slugs.contains(s));

        self.conn.execute(
            "UPDATE categories SET name = ?, slug = ? WHERE id = ?",
            params![name, slug, id],
        )?;
        Ok(Category::new(id, name, slug))
    }

    fn get_category(&self, key: &str) -> StoreResult<Option<Category>> {
        let row = if let Ok(id) = key.parse::<i64>() {
            let mut stmt = self
                .conn
                .prepare("SELECT id, name, slug FROM categories WHERE id = ?")?;
            stmt.query_row([id], Self::category_from_row)
        } else {
            let mut stmt = self
                .conn
                .prepare("SELECT id, name, slug FROM categories WHERE slug = ?")?;
            stmt.query_row([key], Self::category_from_row)
        };

        match row {
            Ok(category) => Ok(Some(category)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    fn list_categories(&self) -> StoreResult<Vec<Category>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, slug FROM categories ORDER BY name")?;
        let categories = stmt
            .query_map([], Self::category_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(categories)
    }

    fn remove_category(&mut self, id: i64) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM categories WHERE id = ?", [id])?;
        if changed == 0 {
            return Err(StoreError::CategoryNotFound { key: id.to_string() });
        }
        Ok(())
    }

    fn create_note(&mut self, draft: &NoteDraft) -> StoreResult<Note> {
        validate_title(&draft.title)?;
        self.check_category_ref(draft.category_id)?;

        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO notes (title, description, category_id, created, modified)
             VALUES (?, ?, ?, ?, ?)",
            params![
                draft.title,
                draft.description,
                draft.category_id,
                now.to_rfc3339(),
                now.to_rfc3339(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(Note::new(
            id,
            draft.title.clone(),
            draft.description.clone(),
            draft.category_id,
            now,
            now,
            Vec::new(),
        ))
    }

    fn get_note(&self, id: i64) -> StoreResult<Option<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, category_id, created, modified
             FROM notes WHERE id = ?",
        )?;
        let row = stmt.query_row([id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<i64>>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        });

        let (id, title, description, category_id, created, modified) = match row {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::Database(e)),
        };

        self.note_from_parts(id, title, description, category_id, created, modified)
            .map(Some)
    }

    fn list_notes(&self, category: Option<i64>) -> StoreResult<Vec<Note>> {
        let sql_all = "SELECT id, title, description, category_id, created, modified
             FROM notes ORDER BY modified DESC, created DESC, id DESC";
        let sql_filtered = "SELECT id, title, description, category_id, created, modified
             FROM notes WHERE category_id = ? ORDER BY modified DESC, created DESC, id DESC";

        let map_row = |row: &rusqlite::Row<'_>| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, Option<String>>(2)?,
                row.get::<_, Option<i64>>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        };

        let rows = match category {
            Some(cid) => {
                let mut stmt = self.conn.prepare(sql_filtered)?;
                let rows = stmt
                    .query_map([cid], map_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows
            }
            None => {
                let mut stmt = self.conn.prepare(sql_all)?;
                let rows = stmt
                    .query_map([], map_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows
            }
        };

        rows.into_iter()
            .map(|(id, title, description, category_id, created, modified)| {
                self.note_from_parts(id, title, description, category_id, created, modified)
            })
            .collect()
    }

    fn update_note(&mut self, id: i64, draft: &NoteDraft) -> StoreResult<Note> {
        validate_title(&draft.title)?;
        self.check_category_ref(draft.category_id)?;

        let changed = self.conn.execute(
            "UPDATE notes SET title = ?, description = ?, category_id = ?, modified = ?
             WHERE id = ?",
            params![
                draft.title,
                draft.description,
                draft.category_id,
                Utc::now().to_rfc3339(),
                id,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::NoteNotFound { id });
        }
        self.get_note(id)?.ok_or(StoreError::NoteNotFound { id })
    }

    fn remove_note(&mut self, id: i64) -> StoreResult<()> {
        let changed = self.conn.execute("DELETE FROM notes WHERE id = ?", [id])?;
        if changed == 0 {
            return Err(StoreError::NoteNotFound { id });
        }
        Ok(())
    }

    fn apply_steps(&mut self, note_id: i64, edits: &[StepEdit]) -> StoreResult<Note> {
        if !self.note_exists(note_id)? {
            return Err(StoreError::NoteNotFound { id: note_id });
        }

        for edit in edits {
            if edit.draft.remove {
                // A brand-new row marked for removal is a no-op
                let Some(step_id) = edit.step_id else {
                    continue;
                };
                let changed = self.conn.execute(
                    "DELETE FROM steps WHERE id = ? AND note_id = ?",
                    params![step_id, note_id],
                )?;
                if changed == 0 {
                    return Err(StoreError::StepNotFound { id: step_id });
                }
                continue;
            }

            validate_step(&edit.draft)?;
            match edit.step_id {
                Some(step_id) => {
                    let changed = self.conn.execute(
                        "UPDATE steps SET title = ?, description = ?, code = ?, image = ?,
                         position = ? WHERE id = ? AND note_id = ?",
                        params![
                            edit.draft.title,
                            edit.draft.description,
                            edit.draft.code,
                            edit.draft.image,
                            edit.draft.position,
                            step_id,
                            note_id,
                        ],
                    )?;
                    if changed == 0 {
                        return Err(StoreError::StepNotFound { id: step_id });
                    }
                }
                None => {
                    self.conn.execute(
                        "INSERT INTO steps (note_id, title, description, code, image, position)
                         VALUES (?, ?, ?, ?, ?, ?)",
                        params![
                            note_id,
                            edit.draft.title,
                            edit.draft.description,
                            edit.draft.code,
                            edit.draft.image,
                            edit.draft.position,
                        ],
                    )?;
                }
            }
        }

        self.touch_note(note_id)?;
        self.get_note(note_id)?
            .ok_or(StoreError::NoteNotFound { id: note_id })
    }

    fn remove_step(&mut self, step_id: i64) -> StoreResult<()> {
        let mut stmt = self.conn.prepare("SELECT note_id FROM steps WHERE id = ?")?;
        let note_id = match stmt.query_row([step_id], |row| row.get::<_, i64>(0)) {
            Ok(id) => id,
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                return Err(StoreError::StepNotFound { id: step_id });
            }
            Err(e) => return Err(StoreError::Database(e)),
        };
        drop(stmt);

        self.conn
            .execute("DELETE FROM steps WHERE id = ?", [step_id])?;
        self.touch_note(note_id)
    }

    fn get_step(&self, step_id: i64) -> StoreResult<Option<Step>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, note_id, title, description, code, image, position
             FROM steps WHERE id = ?",
        )?;
        match stmt.query_row([step_id], |row| {
            Ok(Step::new(
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
            ))
        }) {
            Ok(step) => Ok(Some(step)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(StoreError::Database(e)),
        }
    }

    fn create_free_note(&mut self, draft: &FreeNoteDraft) -> StoreResult<FreeNote> {
        validate_title(&draft.title)?;
        self.check_category_ref(draft.category_id)?;

        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO free_notes (title, content, category_id, created, modified)
             VALUES (?, ?, ?, ?, ?)",
            params![
                draft.title,
                draft.content,
                draft.category_id,
                now.to_rfc3339(),
                now.to_rfc3339(),
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        Ok(FreeNote::new(
            id,
            draft.title.clone(),
            draft.content.clone(),
            draft.category_id,
            now,
            now,
        ))
    }

    fn get_free_note(&self, id: i64) -> StoreResult<Option<FreeNote>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, content, category_id, created, modified
             FROM free_notes WHERE id = ?",
        )?;
        let row = stmt.query_row([id], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<i64>>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        });

        let (id, title, content, category_id, created, modified) = match row {
            Ok(row) => row,
            Err(rusqlite::Error::QueryReturnedNoRows) => return Ok(None),
            Err(e) => return Err(StoreError::Database(e)),
        };

        Ok(Some(FreeNote::new(
            id,
            title,
            content,
            category_id,
            Self::parse_ts(&created)?,
            Self::parse_ts(&modified)?,
        )))
    }

    fn list_free_notes(&self, category: Option<i64>) -> StoreResult<Vec<FreeNote>> {
        let sql_all = "SELECT id, title, content, category_id, created, modified
             FROM free_notes ORDER BY modified DESC, created DESC, id DESC";
        let sql_filtered = "SELECT id, title, content, category_id, created, modified
             FROM free_notes WHERE category_id = ?
             ORDER BY modified DESC, created DESC, id DESC";

        let map_row = |row: &rusqlite::Row<'_>| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, Option<i64>>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, String>(5)?,
            ))
        };

        let rows = match category {
            Some(cid) => {
                let mut stmt = self.conn.prepare(sql_filtered)?;
                let rows = stmt
                    .query_map([cid], map_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows
            }
            None => {
                let mut stmt = self.conn.prepare(sql_all)?;
                let rows = stmt
                    .query_map([], map_row)?
                    .collect::<rusqlite::Result<Vec<_>>>()?;
                rows
            }
        };

        rows.into_iter()
            .map(|(id, title, content, category_id, created, modified)| {
                Ok(FreeNote::new(
                    id,
                    title,
                    content,
                    category_id,
                    Self::parse_ts(&created)?,
                    Self::parse_ts(&modified)?,
                ))
            })
            .collect()
    }

    fn update_free_note(&mut self, id: i64, draft: &FreeNoteDraft) -> StoreResult<FreeNote> {
        validate_title(&draft.title)?;
        self.check_category_ref(draft.category_id)?;

        let changed = self.conn.execute(
            "UPDATE free_notes SET title = ?, content = ?, category_id = ?, modified = ?
             WHERE id = ?",
            params![
                draft.title,
                draft.content,
                draft.category_id,
                Utc::now().to_rfc3339(),
                id,
            ],
        )?;
        if changed == 0 {
            return Err(StoreError::FreeNoteNotFound { id });
        }
        self.get_free_note(id)?
            .ok_or(StoreError::FreeNoteNotFound { id })
    }

    fn remove_free_note(&mut self, id: i64) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM free_notes WHERE id = ?", [id])?;
        if changed == 0 {
            return Err(StoreError::FreeNoteNotFound { id });
        }
        Ok(())
    }
}
