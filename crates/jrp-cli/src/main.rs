//! JRP Template Manager CLI
//!
//! The command-line interface for keeping generated note styling and
//! scripts synchronized into a collection.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(Commands::Check {
            collection,
            prefs,
            json,
            diff,
        }) => commands::run_check(&collection, &prefs, json, diff),
        Some(Commands::Sync {
            collection,
            prefs,
            dry_run,
            json,
        }) => commands::run_sync(&collection, &prefs, dry_run, json),
        None => {
            // No command provided - show help hint
            println!("{} JRP Template Manager CLI", "jrp".green().bold());
            println!();
            println!("Run {} for available commands.", "jrp --help".cyan());
            Ok(())
        }
    }
}
