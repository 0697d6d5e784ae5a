//! kbase CLI - Command-line interface for the kbase notes service
//!
//! Lists, searches and edits notes through the same REST API the web
//! client uses.

mod cli;
mod commands;
mod error;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands::add::run_add;
use crate::commands::categories::run_categories;
use crate::commands::common::connect;
use crate::commands::completions::run_completions;
use crate::commands::delete::run_delete;
use crate::commands::edit::{run_edit, NoteEdits};
use crate::commands::favorite::run_favorite;
use crate::commands::list::run_list;
use crate::commands::search::run_search;
use crate::commands::show::run_show;
use crate::commands::stats::run_stats;
use crate::error::CliError;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

/// Directives added on top of `RUST_LOG`: the `kb` binary and the core client.
const DEFAULT_LOG_DIRECTIVES: [&str; 2] = ["kb=info", "kbase_core=info"];

fn log_filter() -> EnvFilter {
    DEFAULT_LOG_DIRECTIVES
        .iter()
        .filter_map(|directive| directive.parse().ok())
        .fold(EnvFilter::from_default_env(), EnvFilter::add_directive)
}

async fn run() -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so `--json` output stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter())
        .init();

    let cli = Cli::parse();

    if let Commands::Completions { shell, output } = &cli.command {
        return run_completions(*shell, output.as_deref());
    }

    let backend = connect(cli.api_url)?;

    match cli.command {
        Commands::Stats { json } => run_stats(&backend, json).await?,
        Commands::List {
            category,
            favorites,
            json,
        } => run_list(&backend, category, favorites, json).await?,
        Commands::Show { id, json } => run_show(&backend, &id, json).await?,
        Commands::Add {
            title,
            category,
            tags,
            content,
        } => {
            run_add(
                &backend,
                &title,
                &content,
                category.as_deref(),
                tags.as_deref(),
            )
            .await?;
        }
        Commands::Edit {
            id,
            title,
            content,
            category,
            tags,
        } => {
            let edits = NoteEdits {
                title,
                content,
                category,
                tags,
            };
            run_edit(&backend, &id, edits).await?;
        }
        Commands::Delete { id, yes } => run_delete(&backend, &id, yes).await?,
        Commands::Favorite { id } => run_favorite(&backend, &id).await?,
        Commands::Search { query, json } => run_search(&backend, &query, json).await?,
        Commands::Categories { command } => run_categories(&backend, command).await?,
        Commands::Completions { .. } => {}
    }

    Ok(())
}
