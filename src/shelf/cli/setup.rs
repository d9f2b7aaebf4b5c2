use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "A small, file-backed book catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog file to use (overrides SHELF_STORE and config.json)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive menu (default)
    Menu,

    /// Add a book
    #[command(alias = "a")]
    Add {
        title: String,
        author: String,
        #[arg(allow_negative_numbers = true)]
        year: i32,
    },

    /// Remove a book by id
    #[command(alias = "rm")]
    Remove { id: u32 },

    /// Search by title, author or year
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// List all books
    #[command(alias = "ls")]
    List,

    /// Change a book's status (available or checked-out)
    Status { id: u32, status: String },
}
