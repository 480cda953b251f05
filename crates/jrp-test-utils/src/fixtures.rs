//! On-disk collection and preference fixtures.

use std::fs;
use std::path::{Path, PathBuf};

/// Write a one-note-type collection and a matching prefs file into `dir`,
/// returning `(collection_path, prefs_path)`.
///
/// The note type (id 1, "Japanese") carries an unmanaged stylesheet and a
/// single card template, so a first synchronization pass always has all
/// three fields to rewrite.
pub fn write_fixtures(dir: &Path) -> (PathBuf, PathBuf) {
    let collection_path = dir.join("collection.json");
    fs::write(
        &collection_path,
        r#"{
  "note_types": [
    {
      "id": 1,
      "name": "Japanese",
      "stylesheet": ".card {}",
      "templates": [
        {"name": "Card 1", "question_format": "{{Front}}", "answer_format": "{{Back}}"}
      ]
    }
  ]
}"#,
    )
    .unwrap();

    let prefs_path = dir.join("prefs.toml");
    fs::write(&prefs_path, "[[note_types]]\nid = 1\n").unwrap();

    (collection_path, prefs_path)
}
