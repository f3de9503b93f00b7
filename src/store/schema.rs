//! Database schema for the note store.

use rusqlite::Connection;

/// SQL statements that create the full schema.
///
/// Referential rules live in the schema itself: steps belong to their note
/// (`ON DELETE CASCADE`), while the note-to-category link is weak
/// (`ON DELETE SET NULL`). Timestamps are RFC3339 TEXT.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS categories (
    id   INTEGER PRIMARY KEY,
    name TEXT NOT NULL UNIQUE,
    slug TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS notes (
    id          INTEGER PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT,
    category_id INTEGER REFERENCES categories(id) ON DELETE SET NULL,
    created     TEXT NOT NULL,
    modified    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS steps (
    id          INTEGER PRIMARY KEY,
    note_id     INTEGER NOT NULL REFERENCES notes(id) ON DELETE CASCADE,
    title       TEXT,
    description TEXT,
    code        TEXT,
    image       TEXT,
    position    INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS free_notes (
    id          INTEGER PRIMARY KEY,
    title       TEXT NOT NULL,
    content     TEXT NOT NULL,
    category_id INTEGER REFERENCES categories(id) ON DELETE SET NULL,
    created     TEXT NOT NULL,
    modified    TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_steps_note ON steps(note_id);
CREATE INDEX IF NOT EXISTS idx_notes_category ON notes(category_id);
CREATE INDEX IF NOT EXISTS idx_free_notes_category ON free_notes(category_id);
"#;

/// Creates all tables and indexes if they don't exist.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA)
}
