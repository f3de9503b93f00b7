//! Handler for the `export` command.

use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

use super::open_store;
use crate::cli::config::Config;
use crate::cli::{ExportArgs, NoteKind};
use crate::export::{ExportDocument, MediaResolver, assemble_free, assemble_structured, render_document};

pub fn handle_export(
    args: &ExportArgs,
    data_dir: &Path,
    config: &Config,
    verbose: bool,
) -> Result<()> {
    let store = open_store(data_dir)?;

    let media_root = args
        .media_root
        .clone()
        .unwrap_or_else(|| config.media_root(data_dir));
    let media = MediaResolver::new(media_root, config.media_url());

    let doc = match args.kind {
        NoteKind::Structured => assemble_structured(&store, args.id, &media),
        NoteKind::Free => assemble_free(&store, args.id, &media),
    }?;

    if verbose && let ExportDocument::Structured { items, .. } = &doc {
        let images = items.iter().filter(|i| i.image_path.is_some()).count();
        eprintln!(
            "assembled {} item(s), {} with images",
            items.len(),
            images
        );
    }

    let bytes = render_document(&doc, args.template.as_deref())
        .with_context(|| format!("failed to render document for note {}", args.id))?;

    match &args.output {
        Some(output_path) => {
            if let Some(parent) = output_path.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(output_path, &bytes)
                .with_context(|| format!("failed to write {}", output_path.display()))?;
            println!("Exported '{}' to {}", doc.title(), output_path.display());
        }
        None => {
            std::io::stdout().write_all(&bytes)?;
        }
    }
    Ok(())
}
