//! Handlers for step commands.

use anyhow::{Context, Result, bail};
use std::path::Path;

use super::open_store;
use crate::cli::{StepAddArgs, StepCommand, StepEditArgs, StepRmArgs};
use crate::domain::StepDraft;
use crate::store::{NoteStore, StepEdit};

pub fn handle_step(command: &StepCommand, data_dir: &Path) -> Result<()> {
    match command {
        StepCommand::Add(args) => handle_add(args, data_dir),
        StepCommand::Edit(args) => handle_edit(args, data_dir),
        StepCommand::Rm(args) => handle_rm(args, data_dir),
    }
}

fn handle_add(args: &StepAddArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;

    let draft = StepDraft {
        title: args.title.clone(),
        description: args.description.clone(),
        code: args.code.clone(),
        image: args.image.clone(),
        position: args.position,
        remove: false,
    };

    let note = store
        .apply_steps(args.note_id, &[StepEdit::insert(draft)])
        .context("failed to add step")?;

    // Freshly inserted rows take the highest id
    let step_id = note.steps().iter().map(|s| s.id()).max().unwrap_or(0);
    println!("Added step #{} to note #{}", step_id, note.id());
    Ok(())
}

fn handle_edit(args: &StepEditArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    let Some(existing) = store.get_step(args.step_id)? else {
        bail!("step not found: {}", args.step_id);
    };

    let draft = StepDraft {
        title: args
            .title
            .clone()
            .or_else(|| existing.title().map(str::to_string)),
        description: args
            .description
            .clone()
            .or_else(|| existing.description().map(str::to_string)),
        code: args
            .code
            .clone()
            .or_else(|| existing.code().map(str::to_string)),
        image: args
            .image
            .clone()
            .or_else(|| existing.image().map(str::to_string)),
        position: args.position.unwrap_or_else(|| existing.position()),
        remove: false,
    };

    store
        .apply_steps(
            existing.note_id(),
            &[StepEdit::update(args.step_id, draft)],
        )
        .context("failed to update step")?;

    println!("Updated step #{}", args.step_id);
    Ok(())
}

fn handle_rm(args: &StepRmArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    store
        .remove_step(args.step_id)
        .with_context(|| format!("failed to delete step {}", args.step_id))?;
    println!("Deleted step #{}", args.step_id);
    Ok(())
}
