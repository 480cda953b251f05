//! Sync command implementation
//!
//! Applies the synchronization to the collection and saves it. With
//! `--dry-run` nothing is written; the output shows what would change.

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use jrp_prefs::Prefs;
use jrp_templates::{CollectionFile, Error, NoteTypeId, sync_note_type};

use super::check::{EntryStatus, count_changed, entry_value, preview_entries};
use crate::error::Result;

/// Run the sync command
///
/// Synchronizes every note type the preferences manage and saves the
/// collection when anything changed. Note types missing from the collection
/// are reported and skipped.
pub fn run_sync(collection_path: &Path, prefs_path: &Path, dry_run: bool, json: bool) -> Result<()> {
    let prefs = Prefs::load(prefs_path)?;
    let mut collection = CollectionFile::open(collection_path)?;

    let entries = if dry_run {
        preview_entries(&collection, &prefs)?
    } else {
        apply_entries(&mut collection, &prefs)?
    };

    let changed = count_changed(&entries);
    if changed > 0 && !dry_run {
        collection.save()?;
    }

    if json {
        let output = json!({
            "note_types": entries
                .iter()
                .map(|(id, status)| entry_value(*id, status))
                .collect::<Vec<_>>(),
            "changed": changed,
            "dry_run": dry_run,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} Synchronizing note types...", "=>".blue().bold());

    for (id, status) in &entries {
        match status {
            EntryStatus::Report(report) if report.changed() => {
                println!(
                    "   {} {} ({}): {}",
                    "~".yellow(),
                    report.name.cyan(),
                    id,
                    if dry_run { "would update" } else { "updated" }
                );
                for change in &report.changes {
                    println!("       {}", change.field);
                }
            }
            EntryStatus::Report(report) => {
                println!(
                    "   {} {} ({}): up to date",
                    "=".green(),
                    report.name.cyan(),
                    id
                );
            }
            EntryStatus::NotFound => {
                println!("   {} {}: not in the collection", "!".red(), id);
            }
        }
    }

    println!();
    if changed == 0 {
        println!(
            "{} Already synchronized. No changes needed.",
            "OK".green().bold()
        );
    } else if dry_run {
        println!(
            "{} {} of {} note types would change. Nothing was written.",
            "OK".green().bold(),
            changed,
            entries.len()
        );
    } else {
        println!(
            "{} Collection saved. {} of {} note types updated.",
            "OK".green().bold(),
            changed,
            entries.len()
        );
    }

    Ok(())
}

/// Synchronizes every managed note type, collecting per-entry outcomes.
fn apply_entries(
    collection: &mut CollectionFile,
    prefs: &Prefs,
) -> Result<Vec<(NoteTypeId, EntryStatus)>> {
    let mut entries = Vec::new();
    for managed in &prefs.note_types {
        match sync_note_type(collection, managed.id, &managed.options) {
            Ok(report) => entries.push((managed.id, EntryStatus::Report(report))),
            Err(Error::NoteTypeNotFound { .. }) => {
                entries.push((managed.id, EntryStatus::NotFound));
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(entries)
}
