//! Command handlers.

mod category;
mod export;
mod free;
mod note;
mod search;
mod step;

pub use category::handle_category;
pub use export::handle_export;
pub use free::handle_free;
pub use note::{handle_edit, handle_list, handle_new, handle_rm, handle_show};
pub use search::handle_search;
pub use step::handle_step;

use anyhow::{Context, Result, bail};
use clap::CommandFactory;
use std::path::{Path, PathBuf};

use crate::cli::{Cli, CompletionsArgs};
use crate::store::{NoteStore, SqliteStore};

/// Database filename inside the data directory.
const DB_FILE: &str = "jot.db";

/// Returns the path of the SQLite database inside the data directory.
pub fn store_db_path(data_dir: &Path) -> PathBuf {
    data_dir.join(DB_FILE)
}

/// Opens the store, creating the database on first use.
pub fn open_store(data_dir: &Path) -> Result<SqliteStore> {
    let db_path = store_db_path(data_dir);
    SqliteStore::open(&db_path)
        .with_context(|| format!("failed to open store at {}", db_path.display()))
}

/// Resolves a category argument (id or slug) to its id.
pub fn resolve_category(store: &SqliteStore, key: &str) -> Result<i64> {
    match store.get_category(key)? {
        Some(category) => Ok(category.id()),
        None => bail!("category not found: {key}"),
    }
}

/// Resolves an optional category argument; the literal "none" clears it.
pub fn resolve_category_arg(store: &SqliteStore, key: Option<&str>) -> Result<Option<i64>> {
    match key {
        None | Some("none") => Ok(None),
        Some(key) => resolve_category(store, key).map(Some),
    }
}

/// Looks up a category's name for display, if the id still resolves.
pub fn category_name(store: &SqliteStore, category_id: Option<i64>) -> Result<Option<String>> {
    match category_id {
        Some(id) => Ok(store
            .get_category(&id.to_string())?
            .map(|c| c.name().to_string())),
        None => Ok(None),
    }
}

/// Handle the `completions` command.
pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "jot", &mut std::io::stdout());
    Ok(())
}
