//! CLI command definitions and handlers

pub mod config;
pub mod handlers;
pub mod output;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// jot - structured and free-form notes with fuzzy search and export
#[derive(Parser, Debug)]
#[command(name = "jot", version, about, long_about = None)]
pub struct Cli {
    /// Data directory (overrides config file)
    #[arg(short = 'd', long, global = true)]
    pub dir: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new structured note
    New(NewArgs),

    /// List structured notes, optionally filtered by category
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a note with its steps
    Show(ShowArgs),

    /// Update a note's title, description, or category
    Edit(EditArgs),

    /// Delete a note and all of its steps
    Rm(RmArgs),

    /// Manage the steps of a structured note
    #[command(subcommand)]
    Step(StepCommand),

    /// Manage free-form notes
    #[command(subcommand)]
    Free(FreeCommand),

    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommand),

    /// Fuzzy search across notes
    Search(SearchArgs),

    /// Export a note as a print-ready document
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Which note kinds a search covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SearchKind {
    /// Unified search across both kinds
    #[default]
    All,
    /// Structured notes only
    Structured,
    /// Free-form notes only
    Free,
}

/// Which kind of note an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum NoteKind {
    #[default]
    Structured,
    Free,
}

/// Arguments for the `new` command
#[derive(Parser, Debug)]
pub struct NewArgs {
    /// Note title
    pub title: String,

    /// Note description
    #[arg(short = 'D', long)]
    pub description: Option<String>,

    /// Category (id or slug)
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the `ls` (list) command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Restrict to a category (id or slug)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Note id
    pub id: i64,
}

/// Arguments for the `edit` command
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Note id
    pub id: i64,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New description
    #[arg(short = 'D', long)]
    pub description: Option<String>,

    /// New category (id or slug); pass "none" to clear
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for the `rm` command
#[derive(Parser, Debug)]
pub struct RmArgs {
    /// Note id
    pub id: i64,
}

/// Step management subcommands
#[derive(Subcommand, Debug)]
pub enum StepCommand {
    /// Append a step to a note
    Add(StepAddArgs),

    /// Update an existing step
    Edit(StepEditArgs),

    /// Delete a step
    Rm(StepRmArgs),
}

/// Arguments for `step add`
#[derive(Parser, Debug)]
pub struct StepAddArgs {
    /// Owning note id
    pub note_id: i64,

    /// Step title
    #[arg(short, long)]
    pub title: Option<String>,

    /// Step description
    #[arg(short = 'D', long)]
    pub description: Option<String>,

    /// Step code block
    #[arg(short = 'x', long)]
    pub code: Option<String>,

    /// Step image as a web-relative media path
    #[arg(short, long)]
    pub image: Option<String>,

    /// Sort position within the note
    #[arg(short, long, default_value_t = 0)]
    pub position: i64,
}

/// Arguments for `step edit`
#[derive(Parser, Debug)]
pub struct StepEditArgs {
    /// Step id
    pub step_id: i64,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New description
    #[arg(short = 'D', long)]
    pub description: Option<String>,

    /// New code block
    #[arg(short = 'x', long)]
    pub code: Option<String>,

    /// New image path
    #[arg(short, long)]
    pub image: Option<String>,

    /// New sort position
    #[arg(short, long)]
    pub position: Option<i64>,
}

/// Arguments for `step rm`
#[derive(Parser, Debug)]
pub struct StepRmArgs {
    /// Step id
    pub step_id: i64,
}

/// Free-form note subcommands
#[derive(Subcommand, Debug)]
pub enum FreeCommand {
    /// Create a new free-form note
    New(FreeNewArgs),

    /// List free-form notes
    #[command(name = "ls")]
    List(ListArgs),

    /// Show a free-form note's content
    Show(ShowArgs),

    /// Update a free-form note
    Edit(FreeEditArgs),

    /// Delete a free-form note
    Rm(RmArgs),
}

/// Arguments for `free new`
#[derive(Parser, Debug)]
pub struct FreeNewArgs {
    /// Note title
    pub title: String,

    /// HTML content
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read HTML content from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// Category (id or slug)
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Arguments for `free edit`
#[derive(Parser, Debug)]
pub struct FreeEditArgs {
    /// Note id
    pub id: i64,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New HTML content
    #[arg(long, conflicts_with = "content_file")]
    pub content: Option<String>,

    /// Read new HTML content from a file
    #[arg(long)]
    pub content_file: Option<PathBuf>,

    /// New category (id or slug); pass "none" to clear
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommand {
    /// Create a category
    Add(CategoryAddArgs),

    /// List categories
    #[command(name = "ls")]
    List(CategoryListArgs),

    /// Rename a category (its slug is re-derived)
    Rename(CategoryRenameArgs),

    /// Delete a category; its notes keep existing uncategorized
    Rm(CategoryRmArgs),
}

/// Arguments for `category add`
#[derive(Parser, Debug)]
pub struct CategoryAddArgs {
    /// Category name
    pub name: String,
}

/// Arguments for `category ls`
#[derive(Parser, Debug)]
pub struct CategoryListArgs {
    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for `category rename`
#[derive(Parser, Debug)]
pub struct CategoryRenameArgs {
    /// Category id or slug
    pub category: String,

    /// New name
    pub name: String,
}

/// Arguments for `category rm`
#[derive(Parser, Debug)]
pub struct CategoryRmArgs {
    /// Category id or slug
    pub category: String,
}

/// Arguments for the `search` command
#[derive(Parser, Debug)]
pub struct SearchArgs {
    /// Search query; empty browses everything, newest first
    #[arg(default_value = "")]
    pub query: String,

    /// Which note kinds to search
    #[arg(short, long, value_enum, default_value_t = SearchKind::All)]
    pub kind: SearchKind,

    /// Restrict to a category (id or slug)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Minimum similarity score (0-100); default depends on --kind
    #[arg(short, long)]
    pub threshold: Option<u8>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `export` command
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Note id
    pub id: i64,

    /// Which kind of note the id refers to
    #[arg(short, long, value_enum, default_value_t = NoteKind::Structured)]
    pub kind: NoteKind,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Custom document template
    #[arg(long)]
    pub template: Option<PathBuf>,

    /// Media root directory (overrides config file)
    #[arg(long)]
    pub media_root: Option<PathBuf>,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
