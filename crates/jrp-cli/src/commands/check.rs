//! Check command implementation
//!
//! Previews which note types the synchronizer would rewrite, without
//! touching the collection.

use std::path::Path;

use colored::Colorize;
use serde_json::json;
use similar::{ChangeTag, TextDiff};

use jrp_prefs::Prefs;
use jrp_templates::{CollectionFile, Error, NoteTypeId, NoteTypeSync, preview_note_type};

use crate::error::Result;

/// Outcome of previewing one preferences entry.
pub enum EntryStatus {
    /// The note type exists; the report lists its pending field updates.
    Report(NoteTypeSync),
    /// The preferences reference a note type the collection does not have.
    NotFound,
}

/// Previews every note type the preferences manage, in declaration order.
///
/// A missing note type becomes a [`EntryStatus::NotFound`] entry instead of
/// aborting the run; storage errors still propagate.
pub fn preview_entries(
    collection: &CollectionFile,
    prefs: &Prefs,
) -> Result<Vec<(NoteTypeId, EntryStatus)>> {
    let mut entries = Vec::new();
    for managed in &prefs.note_types {
        match preview_note_type(collection, managed.id, &managed.options) {
            Ok(report) => entries.push((managed.id, EntryStatus::Report(report))),
            Err(Error::NoteTypeNotFound { .. }) => {
                entries.push((managed.id, EntryStatus::NotFound));
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(entries)
}

/// Counts entries with at least one pending field update.
pub fn count_changed(entries: &[(NoteTypeId, EntryStatus)]) -> usize {
    entries
        .iter()
        .filter(|(_, status)| matches!(status, EntryStatus::Report(r) if r.changed()))
        .count()
}

/// Serializes one entry for `--json` output.
pub fn entry_value(id: NoteTypeId, status: &EntryStatus) -> serde_json::Value {
    match status {
        EntryStatus::Report(report) => json!({
            "id": id,
            "name": report.name,
            "changed": report.changed(),
            "fields": report
                .changes
                .iter()
                .map(|c| c.field.to_string())
                .collect::<Vec<_>>(),
        }),
        EntryStatus::NotFound => json!({
            "id": id,
            "error": "not found",
        }),
    }
}

/// Run the check command
///
/// Loads the preferences and the collection, previews the synchronization,
/// and reports per note type. Missing note types are reported, not fatal;
/// the command exits zero either way.
pub fn run_check(collection_path: &Path, prefs_path: &Path, json: bool, diff: bool) -> Result<()> {
    let prefs = Prefs::load(prefs_path)?;
    let collection = CollectionFile::open(collection_path)?;
    let entries = preview_entries(&collection, &prefs)?;

    if json {
        let output = json!({
            "note_types": entries
                .iter()
                .map(|(id, status)| entry_value(*id, status))
                .collect::<Vec<_>>(),
            "changed": count_changed(&entries),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} Checking note types...", "=>".blue().bold());

    for (id, status) in &entries {
        match status {
            EntryStatus::Report(report) if report.changed() => {
                println!(
                    "   {} {} ({}): needs update",
                    "~".yellow(),
                    report.name.cyan(),
                    id
                );
                for change in &report.changes {
                    println!("       {}", change.field);
                    if diff {
                        print_field_diff(&change.old, &change.new);
                    }
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
    let changed = count_changed(&entries);
    if changed == 0 {
        println!(
            "{} Every managed note type is up to date.",
            "OK".green().bold()
        );
    } else {
        println!(
            "{} Updates pending for {} of {} note types.",
            "PENDING".yellow().bold(),
            changed,
            entries.len()
        );
        println!();
        println!("Run {} to apply.", "jrp sync".cyan());
    }

    Ok(())
}

/// Prints the changed lines of one field, diff-style.
fn print_field_diff(old: &str, new: &str) {
    let text_diff = TextDiff::from_lines(old, new);
    for change in text_diff.iter_all_changes() {
        let line = change.value().trim_end_matches('\n');
        match change.tag() {
            ChangeTag::Delete => println!("         {} {}", "-".red(), line.red()),
            ChangeTag::Insert => println!("         {} {}", "+".green(), line.green()),
            ChangeTag::Equal => {}
        }
    }
}
