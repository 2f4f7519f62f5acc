use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cheat")]
#[command(about = "Personal cheat sheet for shell commands", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new command interactively
    Add,

    /// Delete commands matching a query, after confirmation
    Delete {
        /// Substring matched against the command field (case-insensitive)
        query: Option<String>,
    },

    // Catch-all: any bare token (e.g. `cheat grep`) is a search term.
    #[command(external_subcommand)]
    Search(Vec<String>),
}
