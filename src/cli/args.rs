// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// An AI-tagged todo and notes list for the terminal
pub struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Turn debugging information on
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub debug: u8,

    /// Print a default config file to stdout
    #[arg(long = "generate-config")]
    pub generate_config: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add an entry; tags are extracted automatically
    Add {
        text: String,

        #[arg(long = "no-tags", help = "skip tag extraction, save text only")]
        no_tags: bool,
    },
    /// List active entries, newest first
    List {
        #[arg(
            short = 'f',
            long = "filter",
            help = "single tag filter, e.g. person=张三 or todo=true"
        )]
        filter: Option<String>,

        #[arg(long = "json", help = "non-interactive mode, output as json")]
        is_json: bool,
    },
    /// Replace an entry's text; tags are re-extracted
    Edit {
        id: i32,
        text: String,

        #[arg(long = "no-tags", help = "skip tag re-extraction, update text only")]
        no_tags: bool,
    },
    /// Toggle expanded/collapsed display of a long entry
    Toggle { id: i32 },
    /// Show one entry in full
    Show { id: i32 },
    /// Move an entry to the trash
    Delete { id: i32 },
    /// List trashed entries, most recently deleted first
    Trash {
        #[arg(long = "json", help = "non-interactive mode, output as json")]
        is_json: bool,
    },
    /// Restore an entry from the trash
    Restore { id: i32 },
    /// Permanently delete a trashed entry (irreversible)
    Purge {
        id: i32,

        #[arg(short = 'y', long = "yes", help = "skip confirmation")]
        yes: bool,
    },
    /// Run the HTTP API server
    Serve {
        #[arg(long, help = "listen address, e.g. 127.0.0.1:3030")]
        addr: Option<String>,
    },
    /// Initialize the entries database
    CreateDb {
        /// pathname to database file
        path: PathBuf,
    },
}
