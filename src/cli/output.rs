//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A structured note in listing output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub modified: String,
    pub steps: usize,
}

/// A free-form note in listing output.
#[derive(Debug, Serialize)]
pub struct FreeNoteListing {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub modified: String,
}

/// A category in listing output.
#[derive(Debug, Serialize)]
pub struct CategoryListing {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

/// A single search result.
#[derive(Debug, Serialize)]
pub struct SearchListing {
    pub id: i64,
    pub kind: String,
    pub title: String,
    pub score: u8,
    pub snippet: String,
}
