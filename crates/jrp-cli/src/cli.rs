//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// JRP Template Manager - Keep generated styling and scripts in note types up to date
#[derive(Parser, Debug)]
#[command(name = "jrp")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Check which note types would change
    ///
    /// Previews the synchronization without writing anything. Every managed
    /// note type is reported, including ones missing from the collection.
    ///
    /// Examples:
    ///   jrp check -c collection.json -p prefs.toml
    ///   jrp check -c collection.json -p prefs.toml --diff
    Check {
        /// Path to the collection file
        #[arg(short, long)]
        collection: PathBuf,

        /// Path to the preferences file
        #[arg(short, long)]
        prefs: PathBuf,

        /// Output as JSON for scripting
        #[arg(long, conflicts_with = "diff")]
        json: bool,

        /// Show line diffs for every field that would change
        #[arg(long)]
        diff: bool,
    },

    /// Synchronize managed sections into the collection
    ///
    /// Regenerates the styling and script payloads, updates every managed
    /// field that is out of date, and saves the collection. Fields already
    /// carrying the current generation are left alone.
    ///
    /// Examples:
    ///   jrp sync -c collection.json -p prefs.toml
    ///   jrp sync -c collection.json -p prefs.toml --dry-run
    Sync {
        /// Path to the collection file
        #[arg(short, long)]
        collection: PathBuf,

        /// Path to the preferences file
        #[arg(short, long)]
        prefs: PathBuf,

        /// Preview changes without applying them
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
