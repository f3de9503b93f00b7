//! Handlers for structured note commands.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::{category_name, open_store, resolve_category_arg};
use crate::cli::output::{NoteListing, Output, OutputFormat};
use crate::cli::{EditArgs, ListArgs, NewArgs, RmArgs, ShowArgs};
use crate::domain::NoteDraft;
use crate::store::NoteStore;

pub fn handle_new(args: &NewArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    let category_id = resolve_category_arg(&store, args.category.as_deref())?;

    let note = store
        .create_note(&NoteDraft {
            title: args.title.clone(),
            description: args.description.clone(),
            category_id,
        })
        .context("failed to create note")?;

    println!("Created note #{} '{}'", note.id(), note.title());
    Ok(())
}

pub fn handle_list(args: &ListArgs, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir)?;
    let category = match &args.category {
        Some(key) => Some(super::resolve_category(&store, key)?),
        None => None,
    };

    let notes = store.list_notes(category)?;

    match args.format {
        OutputFormat::Human => {
            if notes.is_empty() {
                println!("No notes found.");
            } else {
                for note in &notes {
                    let category = category_name(&store, note.category_id())?;
                    match category {
                        Some(name) => println!(
                            "#{} {} ({} steps) [{}]",
                            note.id(),
                            note.title(),
                            note.steps().len(),
                            name
                        ),
                        None => println!(
                            "#{} {} ({} steps)",
                            note.id(),
                            note.title(),
                            note.steps().len()
                        ),
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
                    Ok(NoteListing {
                        id: note.id(),
                        title: note.title().to_string(),
                        category: category_name(&store, note.category_id())?,
                        modified: note.modified().to_rfc3339(),
                        steps: note.steps().len(),
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}

pub fn handle_show(args: &ShowArgs, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir)?;
    let Some(note) = store.get_note(args.id)? else {
        bail!("note not found: {}", args.id);
    };

    println!("{}", note.title());
    if let Some(description) = note.description() {
        println!("{description}");
    }
    if let Some(name) = category_name(&store, note.category_id())? {
        println!("Category: {name}");
    }
    println!("Modified: {}", note.modified().format("%Y-%m-%d %H:%M"));

    for (index, step) in note.steps().iter().enumerate() {
        println!();
        match step.title() {
            Some(title) => println!("{}. {} (step #{})", index + 1, title, step.id()),
            None => println!("{}. (step #{})", index + 1, step.id()),
        }
        if let Some(description) = step.description() {
            println!("   {description}");
        }
        if let Some(code) = step.code() {
            for line in code.lines() {
                println!("   | {line}");
            }
        }
        if let Some(image) = step.image() {
            println!("   image: {image}");
        }
    }
    Ok(())
}

pub fn handle_edit(args: &EditArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    let Some(existing) = store.get_note(args.id)? else {
        bail!("note not found: {}", args.id);
    };

    let category_id = match &args.category {
        Some(key) => resolve_category_arg(&store, Some(key))?,
        None => existing.category_id(),
    };

    let draft = NoteDraft {
        title: args.title.clone().unwrap_or_else(|| existing.title().to_string()),
        description: args
            .description
            .clone()
            .or_else(|| existing.description().map(str::to_string)),
        category_id,
    };

    let note = store.update_note(args.id, &draft)?;
    println!("Updated note #{} '{}'", note.id(), note.title());
    Ok(())
}

pub fn handle_rm(args: &RmArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    store
        .remove_note(args.id)
        .with_context(|| format!("failed to delete note {}", args.id))?;
    println!("Deleted note #{}", args.id);
    Ok(())
}
