use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "docshelf", version)]
#[command(about = "Organize articles, theses and books by category", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Storage root (defaults to the configured or platform data directory)
    #[arg(long, global = true, env = "DOCSHELF_ROOT")]
    pub root: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy a file onto the shelf
    #[command(alias = "a")]
    Add {
        /// File to add
        path: PathBuf,

        /// articles, theses or books
        #[arg(short, long)]
        category: String,

        /// Publication year (inferred from the file name if omitted)
        #[arg(short, long)]
        year: Option<i32>,

        #[arg(long)]
        author: Option<String>,

        /// Title (defaults to the file name without extension)
        #[arg(long)]
        title: Option<String>,
    },

    /// Delete a document
    #[command(alias = "remove")]
    Rm {
        filename: String,

        #[arg(short, long)]
        category: String,
    },

    /// Rename a document (the extension is kept)
    #[command(alias = "rename")]
    Mv {
        old_name: String,
        new_name: String,

        #[arg(short, long)]
        category: String,
    },

    /// List documents
    #[command(alias = "ls")]
    List {
        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        year: Option<i32>,
    },

    /// List documents grouped by category
    ByType,

    /// List documents grouped by year
    ByYear,

    /// Search file names, titles and authors
    Search { query: String },

    /// Show shelf statistics
    Stats,

    /// Reconcile the index with the files on disk
    Doctor,

    /// Show categories and accepted formats
    Categories,
}
