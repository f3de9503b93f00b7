//! Handlers for category commands.

use anyhow::{Context, Result};
use std::path::Path;

use super::{open_store, resolve_category};
use crate::cli::output::{CategoryListing, Output, OutputFormat};
use crate::cli::{
    CategoryAddArgs, CategoryCommand, CategoryListArgs, CategoryRenameArgs, CategoryRmArgs,
};
use crate::store::NoteStore;

pub fn handle_category(command: &CategoryCommand, data_dir: &Path) -> Result<()> {
    match command {
        CategoryCommand::Add(args) => handle_add(args, data_dir),
        CategoryCommand::List(args) => handle_list(args, data_dir),
        CategoryCommand::Rename(args) => handle_rename(args, data_dir),
        CategoryCommand::Rm(args) => handle_rm(args, data_dir),
    }
}

fn handle_add(args: &CategoryAddArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    let category = store
        .create_category(&args.name)
        .context("failed to create category")?;
    println!(
        "Created category #{} '{}' [{}]",
        category.id(),
        category.name(),
        category.slug()
    );
    Ok(())
}

fn handle_list(args: &CategoryListArgs, data_dir: &Path) -> Result<()> {
    let store = open_store(data_dir)?;
    let categories = store.list_categories()?;

    match args.format {
        OutputFormat::Human => {
            if categories.is_empty() {
                println!("No categories found.");
            } else {
                for category in &categories {
                    println!("#{} {} [{}]", category.id(), category.name(), category.slug());
                }
                println!();
                println!("{} category(ies)", categories.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<CategoryListing> = categories
                .iter()
                .map(|category| CategoryListing {
                    id: category.id(),
                    name: category.name().to_string(),
                    slug: category.slug().to_string(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}

fn handle_rename(args: &CategoryRenameArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    let id = resolve_category(&store, &args.category)?;
    let category = store
        .rename_category(id, &args.name)
        .context("failed to rename category")?;
    println!(
        "Renamed category #{} to '{}' [{}]",
        category.id(),
        category.name(),
        category.slug()
    );
    Ok(())
}

fn handle_rm(args: &CategoryRmArgs, data_dir: &Path) -> Result<()> {
    let mut store = open_store(data_dir)?;
    let id = resolve_category(&store, &args.category)?;
    store
        .remove_category(id)
        .with_context(|| format!("failed to delete category {}", args.category))?;
    println!("Deleted category #{id}; its notes are now uncategorized");
    Ok(())
}
