//! SQLite-backed note store

mod repository;
mod schema;
mod sqlite;

pub use repository::{NoteStore, StepEdit, StoreError, StoreResult};
pub use schema::create_schema;
pub use sqlite::SqliteStore;
