use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "kb")]
#[command(about = "Browse and edit your knowledge base from the command line")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Notes API base URL (defaults to KBASE_API_URL, then http://127.0.0.1:8000)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show note and category counters
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// List notes
    #[command(alias = "ls")]
    List {
        /// Only notes in this category
        #[arg(short, long, conflicts_with = "favorites")]
        category: Option<String>,
        /// Only favorite notes
        #[arg(short, long)]
        favorites: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a single note
    Show {
        /// Note ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        #[arg(short, long)]
        title: String,
        /// Category name (defaults to "general")
        #[arg(short, long)]
        category: Option<String>,
        /// Comma-separated tags
        #[arg(long)]
        tags: Option<String>,
        /// Note content; read from stdin or $EDITOR when omitted
        #[arg(trailing_var_arg = true)]
        content: Vec<String>,
    },
    /// Edit an existing note; opens $EDITOR when no field is given
    Edit {
        /// Note ID
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New content
        #[arg(long)]
        content: Option<String>,
        /// New category
        #[arg(short, long)]
        category: Option<String>,
        /// New comma-separated tags
        #[arg(long)]
        tags: Option<String>,
    },
    /// Delete a note
    #[command(alias = "rm")]
    Delete {
        /// Note ID
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Toggle a note's favorite flag
    #[command(alias = "fav")]
    Favorite {
        /// Note ID
        id: String,
    },
    /// Search notes by title and content
    Search {
        /// Search query
        query: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage categories
    #[command(alias = "cat")]
    Categories {
        #[command(subcommand)]
        command: CategoryCommands,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Create a category
    Add {
        /// Category name
        name: String,
        /// Optional description
        #[arg(short, long)]
        description: Option<String>,
        /// Display color, e.g. "#6366f1"
        #[arg(long)]
        color: Option<String>,
    },
    /// Rename a category
    Rename {
        /// Category ID
        id: i64,
        /// New name
        name: String,
    },
    /// Delete a category
    #[command(alias = "rm")]
    Delete {
        /// Category ID
        id: i64,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}
