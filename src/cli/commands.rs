//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tickmark")]
#[command(about = "Annotate ticket identifiers in markdown notes", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new tickmark directory
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set (base-url, styles, created)
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Manage ticket prefixes
    Prefix {
        #[command(subcommand)]
        action: PrefixAction,
    },

    /// List ticket identifiers found in notes
    Scan {
        /// Note to scan (relative to the root; default: all notes)
        file: Option<String>,

        /// Cursor offset simulating the editor selection
        #[arg(long, requires = "file")]
        cursor: Option<usize>,
    },

    /// Render notes to HTML with ticket links spliced in
    Annotate {
        /// Note to annotate (relative to the root; default: all notes)
        file: Option<String>,

        /// Output path: a file with FILE, a directory without
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Subcommand, Debug)]
pub enum PrefixAction {
    /// Add a ticket prefix (e.g. HD for tickets like HD-1080)
    Add { prefix: String },

    /// Remove a ticket prefix
    Remove { prefix: String },

    /// List configured prefixes
    List,
}
