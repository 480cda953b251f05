//! Workflow tests across multi-note-type collections
//!
//! Exercises option mixes, preview/apply agreement, and how hand-edited
//! sections behave across repeated synchronization runs.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use jrp_prefs::Prefs;
use jrp_templates::{
    CardTemplate, CollectionFile, FieldRef, NoteType, NoteTypeStore, preview_note_type,
    sync_note_type,
};

fn note_type(id: i64, name: &str) -> NoteType {
    NoteType {
        id,
        name: name.to_string(),
        stylesheet: ".card { color: black; }\n".to_string(),
        templates: vec![CardTemplate::new(
            "Card 1",
            "{{Front}}\n",
            "{{FrontSide}}\n{{Back}}\n",
        )],
    }
}

/// Creates a saved collection holding a single note type with id 1.
fn setup_single(dir: &Path) -> PathBuf {
    let path = dir.join("collection.json");
    let mut collection = CollectionFile::create(&path);
    collection.insert(note_type(1, "Vocab"));
    collection.save().unwrap();
    path
}

fn sync_all(collection: &mut CollectionFile, prefs: &Prefs) -> usize {
    let mut changed = 0;
    for managed in &prefs.note_types {
        let report = sync_note_type(collection, managed.id, &managed.options).unwrap();
        if report.changed() {
            changed += 1;
        }
    }
    if changed > 0 {
        collection.save().unwrap();
    }
    changed
}

#[test]
fn test_mixed_options_across_note_types() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("collection.json");

    let mut collection = CollectionFile::create(&path);
    collection.insert(note_type(1, "Vocab"));
    collection.insert(note_type(2, "Kanji"));
    collection.insert(note_type(3, "Sentence"));
    collection.insert(note_type(4, "Untracked"));
    collection.save().unwrap();

    let prefs = Prefs::parse(
        r##"
[[note_types]]
id = 1

[[note_types]]
id = 2
manage_script = false
use_diamond_indicators = true

[note_types.style]
heiban_color = "#2d6bcf"

[[note_types]]
id = 3
manage_style = false
"##,
    )
    .unwrap();

    let mut working = CollectionFile::open(&path).unwrap();
    assert_eq!(sync_all(&mut working, &prefs), 3);

    let reopened = CollectionFile::open(&path).unwrap();

    // Fully managed, default options: bar indicator, scripts on both sides
    let vocab = reopened.note_type(1).unwrap().unwrap();
    assert!(vocab.stylesheet.contains("JRP add-on managed section start"));
    assert!(vocab.stylesheet.contains("--jrp-heiban-color: #611bf8;"));
    assert!(!vocab.stylesheet.contains("rotate(45deg)"));
    assert!(vocab.templates[0].question_format.contains("<script>"));
    assert!(vocab.templates[0].answer_format.contains("<script>"));

    // Style-only management with overridden values and diamond indicators
    let kanji = reopened.note_type(2).unwrap().unwrap();
    assert!(kanji.stylesheet.contains("--jrp-heiban-color: #2d6bcf;"));
    assert!(kanji.stylesheet.contains("rotate(45deg)"));
    assert_eq!(kanji.templates[0].question_format, "{{Front}}\n");
    assert_eq!(kanji.templates[0].answer_format, "{{FrontSide}}\n{{Back}}\n");

    // Script-only management leaves the stylesheet alone
    let sentence = reopened.note_type(3).unwrap().unwrap();
    assert_eq!(sentence.stylesheet, ".card { color: black; }\n");
    assert!(sentence.templates[0].question_format.contains("<script>"));

    // Not in the preferences at all
    assert_eq!(reopened.note_type(4).unwrap().unwrap(), note_type(4, "Untracked"));
}

#[test]
fn test_preview_matches_later_apply() {
    let temp = TempDir::new().unwrap();
    let path = setup_single(temp.path());

    let prefs = Prefs::parse("[[note_types]]\nid = 1\n").unwrap();
    let options = prefs.options_for(1).unwrap();

    let mut collection = CollectionFile::open(&path).unwrap();
    let previewed = preview_note_type(&collection, 1, options).unwrap();
    assert!(previewed.changed());
    assert_eq!(collection.note_type(1).unwrap().unwrap(), note_type(1, "Vocab"));

    let applied = sync_note_type(&mut collection, 1, options).unwrap();
    assert_eq!(applied, previewed);

    // The report's new values are exactly what the store now holds
    let stored = collection.note_type(1).unwrap().unwrap();
    let stylesheet_change = applied
        .changes
        .iter()
        .find(|change| change.field == FieldRef::Stylesheet)
        .unwrap();
    assert_eq!(stylesheet_change.old, note_type(1, "Vocab").stylesheet);
    assert_eq!(stored.stylesheet, stylesheet_change.new);
}

#[test]
fn test_style_edits_wait_for_a_version_bump() {
    let temp = TempDir::new().unwrap();
    let path = setup_single(temp.path());

    let initial = Prefs::parse("[[note_types]]\nid = 1\n").unwrap();
    let mut collection = CollectionFile::open(&path).unwrap();
    assert_eq!(sync_all(&mut collection, &initial), 1);

    // Same payload version, different variable values
    let recolored = Prefs::parse(
        "[[note_types]]\nid = 1\n\n[note_types.style]\nheiban_color = \"#123456\"\n",
    )
    .unwrap();
    let mut collection = CollectionFile::open(&path).unwrap();
    assert_eq!(sync_all(&mut collection, &recolored), 0);

    // A matching version tag wins over payload differences
    let stored = collection.note_type(1).unwrap().unwrap();
    assert!(stored.stylesheet.contains("--jrp-heiban-color: #611bf8;"));
    assert!(!stored.stylesheet.contains("#123456"));
}

#[test]
fn test_downgraded_section_is_rebuilt() {
    let temp = TempDir::new().unwrap();
    let path = setup_single(temp.path());

    let prefs = Prefs::parse("[[note_types]]\nid = 1\n").unwrap();
    let mut collection = CollectionFile::open(&path).unwrap();
    assert_eq!(sync_all(&mut collection, &prefs), 1);

    // Hand-edit the stored section: stamp an old version and add a line
    let mut collection = CollectionFile::open(&path).unwrap();
    let mut tampered = collection.note_type(1).unwrap().unwrap();
    tampered.stylesheet = tampered
        .stylesheet
        .replace("[version:1]", "[version:0]")
        .replace(
            "/* JRP add-on managed section end */",
            "/* my tweak */\n/* JRP add-on managed section end */",
        );
    collection.update_note_type(&tampered).unwrap();
    collection.save().unwrap();

    let mut collection = CollectionFile::open(&path).unwrap();
    assert_eq!(sync_all(&mut collection, &prefs), 1);

    // The whole span is regenerated; edits inside it do not survive
    let rebuilt = collection.note_type(1).unwrap().unwrap().stylesheet;
    assert!(rebuilt.contains("[version:1]"));
    assert!(!rebuilt.contains("[version:0]"));
    assert!(!rebuilt.contains("my tweak"));
    assert_eq!(rebuilt.matches("section start").count(), 1);
    assert_eq!(rebuilt.matches("section end").count(), 1);
}

#[test]
fn test_save_cycles_leave_only_the_collection_file() {
    let temp = TempDir::new().unwrap();
    let path = setup_single(temp.path());

    let prefs = Prefs::parse("[[note_types]]\nid = 1\n").unwrap();
    for _ in 0..3 {
        let mut collection = CollectionFile::open(&path).unwrap();
        sync_all(&mut collection, &prefs);
        collection.save().unwrap();
    }

    let entries: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["collection.json"]);
}
