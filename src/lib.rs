//! jot - structured and free-form notes with fuzzy search and document export

pub mod cli;
pub mod domain;
pub mod export;
pub mod infra;
pub mod search;
pub mod store;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_category, handle_completions, handle_edit, handle_export, handle_free,
        handle_list, handle_new, handle_rm, handle_search, handle_show, handle_step,
    },
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let data_dir = config.data_dir(cli.dir.as_ref());
    let verbose = cli.verbose > 0;

    match &cli.command {
        Command::New(args) => handle_new(args, &data_dir),
        Command::List(args) => handle_list(args, &data_dir),
        Command::Show(args) => handle_show(args, &data_dir),
        Command::Edit(args) => handle_edit(args, &data_dir),
        Command::Rm(args) => handle_rm(args, &data_dir),
        Command::Step(command) => handle_step(command, &data_dir),
        Command::Free(command) => handle_free(command, &data_dir),
        Command::Category(command) => handle_category(command, &data_dir),
        Command::Search(args) => handle_search(args, &data_dir, &config),
        Command::Export(args) => handle_export(args, &data_dir, &config, verbose),
        Command::Completions(args) => handle_completions(args),
    }
}
