//! Search command handler.

use anyhow::Result;
use std::path::Path;

use super::{open_store, resolve_category};
use crate::cli::config::Config;
use crate::cli::output::{Output, OutputFormat, SearchListing};
use crate::cli::{SearchArgs, SearchKind};
use crate::search::{RecordKind, SearchHit, build_corpus, rank};

pub fn handle_search(args: &SearchArgs, data_dir: &Path, config: &Config) -> Result<()> {
    let store = open_store(data_dir)?;

    let category = match &args.category {
        Some(key) => Some(resolve_category(&store, key)?),
        None => None,
    };
    let kind = match args.kind {
        SearchKind::All => None,
        SearchKind::Structured => Some(RecordKind::Structured),
        SearchKind::Free => Some(RecordKind::Free),
    };
    // The unified cross-kind search runs stricter than a single-kind one
    let threshold = args.threshold.unwrap_or_else(|| match args.kind {
        SearchKind::All => config.unified_threshold(),
        SearchKind::Structured | SearchKind::Free => config.search_threshold(),
    });

    let records = build_corpus(&store, kind, category)?;
    let hits = rank(records, &args.query, threshold);

    format_search_output(&hits, args.format)?;
    Ok(())
}

/// Format and print search results.
fn format_search_output(hits: &[SearchHit], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Human => {
            if hits.is_empty() {
                println!("No matching notes found.");
            } else {
                for hit in hits {
                    let record = hit.record();
                    println!(
                        "#{} [{}] {} (score: {})",
                        record.id(),
                        record.kind().as_str(),
                        record.title(),
                        hit.score()
                    );
                    println!("  {}", record.snippet());
                }
                println!();
                println!("{} result(s)", hits.len());
            }
        }
        OutputFormat::Json => {
            let listings: Vec<SearchListing> = hits
                .iter()
                .map(|hit| SearchListing {
                    id: hit.record().id(),
                    kind: hit.record().kind().as_str().to_string(),
                    title: hit.record().title().to_string(),
                    score: hit.score(),
                    snippet: hit.record().snippet(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&Output::new(listings))?);
        }
    }
    Ok(())
}
