//! Handlers for free-form note commands.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use super::{category_name, open_store, resolve_category, resolve_category_arg};
use crate::cli::output::{FreeNoteListing, Output, OutputFormat};
use crate::cli::{FreeCommand, FreeEditArgs, FreeNewArgs, ListArgs, RmArgs, ShowArgs};
use crate::domain::FreeNoteDraft;
use crate::store::NoteStore;

pub fn handle_free(command: &FreeCommand, data_dir: &Path) -> Result<()> {
    match command {
        FreeCommand::New(args) => handle_new(args, data_dir),
        FreeCommand::List(args) => handle_list(args, data_dir),
        FreeCommand::Show(args) => handle_show(args, data_dir),
        FreeCommand::Edit(args) => handle_edit(args, data_dir),
        FreeCommand::Rm(args) => handle_rm(args, data_dir),
    }
}

fn read_content(
    inline: Option<&String>,
    file: Option<&PathBuf>,
) -> Result<Option<String>> {
    match (inline, file) {
        (Some(content), _) => Ok(Some(content.clone())),
        (None, Some(path)) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read content file {}", path.display()))?;
            Ok(Some(content))
        }
        (None, None) => Ok(None),
    }
}

fn handle_new(args: &FreeNewArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    let category_id = resolve_category_arg(&store, args.category.as_deref())?;
    let content = read_content(args.content.as_ref(), args.content_file.as_ref())?
        .unwrap_or_default();

    let note = store
        .create_free_note(&FreeNoteDraft {
            title: args.title.clone(),
            content,
            category_id,
        })
        .context("failed to create free note")?;

    println!("Created free note #{} '{}'", note.id(), note.title());
    Ok(())
}

fn handle_list(args: &ListArgs, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir)?;
    let category = match &args.category {
        Some(key) => Some(resolve_category(&store, key)?),
        None => None,
    };

    let notes = store.list_free_notes(category)?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No free notes found.");
            } else {
                for note in &notes {
                    match category_name(&store, note.category_id())? {
                        Some(name) => println!("#{} {} [{}]", note.id(), note.title(), name),
                        None => println!("#{} {}", note.id(), note.title()),
                    }
                }
                println!();
                println!("{} note(s)", notes.len());
            }
        }
        OutputFormat::Json => {
            let listings = notes
                .iter()
                .map(|note| {
                    Ok(FreeNoteListing {
                        id: note.id(),
                        title: note.title().to_string(),
                        category: category_name(&store, note.category_id())?,
                        modified: note.modified().to_rfc3339(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}

fn handle_show(args: &ShowArgs, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir)?;
    let Some(note) = store.get_free_note(args.id)? else {
        bail!("free note not found: {}", args.id);
    };

    println!("{}", note.title());
    if let Some(name) = category_name(&store, note.category_id())? {
        println!("Category: {name}");
    }
    println!("Modified: {}", note.modified().format("%Y-%m-%d %H:%M"));
    println!();
    println!("{}", note.content());
    Ok(())
}

fn handle_edit(args: &FreeEditArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    let Some(existing) = store.get_free_note(args.id)? else {
        bail!("free note not found: {}", args.id);
    };

    let category_id = match &args.category {
        Some(key) => resolve_category_arg(&store, Some(key))?,
        None => existing.category_id(),
    };
    let content = read_content(args.content.as_ref(), args.content_file.as_ref())?
        .unwrap_or_else(|| existing.content().to_string());

    let draft = FreeNoteDraft {
        title: args.title.clone().unwrap_or_else(|| existing.title().to_string()),
        content,
        category_id,
    };

    let note = store.update_free_note(args.id, &draft)?;
    println!("Updated free note #{} '{}'", note.id(), note.title());
    Ok(())
}

fn handle_rm(args: &RmArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    store
        .remove_free_note(args.id)
        .with_context(|| format!("failed to delete free note {}", args.id))?;
    println!("Deleted free note #{}", args.id);
    Ok(())
}
