//! End-to-end integration test for the vertical slice
//!
//! Exercises the complete flow: preferences loading -> collection open ->
//! synchronization -> atomic save -> reopen.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use jrp_assets::{STYLE_VERSION, generate_style};
use jrp_inject::{Domain, enclose};
use jrp_prefs::Prefs;
use jrp_templates::{
    CardTemplate, CollectionFile, NoteType, NoteTypeStore, sync_note_type,
};

/// Builds a collection file with one two-template note type.
fn setup_collection(dir: &Path) -> PathBuf {
    let path = dir.join("collection.json");
    let mut collection = CollectionFile::create(&path);
    collection.insert(NoteType {
        id: 1,
        name: "Japanese".to_string(),
        stylesheet: ".card { font-size: 20px; }\n".to_string(),
        templates: vec![
            CardTemplate::new("Recognition", "{{Front}}\n", "{{FrontSide}}\n{{Back}}\n"),
            CardTemplate::new("Recall", "{{Back}}\n", "{{FrontSide}}\n{{Front}}\n"),
        ],
    });
    collection.save().unwrap();
    path
}

/// Runs one full synchronization pass and saves when anything changed.
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
fn test_full_vertical_slice() {
    let temp = TempDir::new().unwrap();
    let collection_path = setup_collection(temp.path());

    // 1. Load preferences
    let prefs = Prefs::parse("[[note_types]]\nid = 1\n").unwrap();
    assert_eq!(prefs.note_types.len(), 1);

    // 2. Open the collection and synchronize
    let mut collection = CollectionFile::open(&collection_path).unwrap();
    let changed = sync_all(&mut collection, &prefs);
    assert_eq!(changed, 1);

    // 3. Reopen from disk and verify the persisted sections
    let reopened = CollectionFile::open(&collection_path).unwrap();
    let note_type = reopened.note_type(1).unwrap().unwrap();

    let options = prefs.options_for(1).unwrap();
    let expected_style = enclose(
        &generate_style(&options.style, options.use_diamond_indicators),
        Domain::Style,
        STYLE_VERSION,
    );
    assert_eq!(
        note_type.stylesheet,
        format!(".card {{ font-size: 20px; }}\n\n{expected_style}")
    );

    for template in &note_type.templates {
        for format in [&template.question_format, &template.answer_format] {
            assert!(format.contains("<!-- JRP add-on managed section start [version:1] -->"));
            assert!(format.contains("<script>"));
            assert!(format.contains("<!-- JRP add-on managed section end -->"));
        }
    }

    // 4. A second pass over the saved collection changes nothing
    let mut second = CollectionFile::open(&collection_path).unwrap();
    assert_eq!(sync_all(&mut second, &prefs), 0);
    let on_disk = fs::read_to_string(&collection_path).unwrap();
    let third = CollectionFile::open(&collection_path).unwrap();
    assert_eq!(third.note_type(1).unwrap().unwrap(), note_type);
    assert!(on_disk.contains("JRP add-on managed section start"));
}

#[test]
fn test_legacy_markers_removed_when_configured() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("collection.json");

    let mut collection = CollectionFile::create(&path);
    collection.insert(NoteType {
        id: 7,
        name: "Migrated".to_string(),
        stylesheet: "user rules\n\n\
            /*###MIA JAPANESE SUPPORT CSS STARTS###\n\
            Do Not Edit If Using Automatic CSS and JS Management*/\n\
            .mia {}\n\
            /*###MIA JAPANESE SUPPORT CSS ENDS###*/\n"
            .to_string(),
        templates: vec![CardTemplate::new(
            "Card 1",
            "{{Front}}\n\n\
             <!--###MIGAKU JAPANESE SUPPORT JS START###\n\
             Do Not Edit If Using Automatic CSS and JS Management-->\
             <script>old()</script>\
             <!--###MIGAKU JAPANESE SUPPORT JS ENDS###-->\n",
            "{{Back}}\n",
        )],
    });
    collection.save().unwrap();

    let prefs = Prefs::parse("[[note_types]]\nid = 7\nremove_mia_migaku = true\n").unwrap();
    let mut working = CollectionFile::open(&path).unwrap();
    sync_all(&mut working, &prefs);

    let synced = CollectionFile::open(&path)
        .unwrap()
        .note_type(7)
        .unwrap()
        .unwrap();
    assert!(!synced.stylesheet.contains("MIA JAPANESE SUPPORT"));
    assert!(!synced.templates[0].question_format.contains("MIGAKU JAPANESE SUPPORT"));
    assert!(synced.stylesheet.starts_with("user rules\n\n"));
    assert!(synced.templates[0].question_format.starts_with("{{Front}}\n\n"));
    assert!(synced.stylesheet.contains("JRP add-on managed section start"));
    assert!(synced.templates[0].question_format.contains("<script>"));
}

#[test]
fn test_stale_section_replaced_in_place() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("collection.json");

    // A section from an earlier payload generation, with user text around it
    let stale = enclose(".stale {}", Domain::Style, 0);
    let mut collection = CollectionFile::create(&path);
    collection.insert(NoteType {
        id: 2,
        name: "Stale".to_string(),
        stylesheet: format!("before\n\n{stale}\n\nafter\n"),
        templates: Vec::new(),
    });
    collection.save().unwrap();

    let prefs = Prefs::parse("[[note_types]]\nid = 2\n").unwrap();
    let mut working = CollectionFile::open(&path).unwrap();
    assert_eq!(sync_all(&mut working, &prefs), 1);

    let synced = CollectionFile::open(&path)
        .unwrap()
        .note_type(2)
        .unwrap()
        .unwrap();
    assert!(!synced.stylesheet.contains("[version:0]"));
    assert!(synced.stylesheet.contains("[version:1]"));
    assert!(synced.stylesheet.starts_with("before\n"));
    assert!(synced.stylesheet.ends_with("\n\nafter\n"));
    // Still exactly one start and one end tag
    assert_eq!(synced.stylesheet.matches("section start").count(), 1);
    assert_eq!(synced.stylesheet.matches("section end").count(), 1);
}

#[test]
fn test_truncated_section_gets_fresh_append() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("collection.json");

    // A start tag whose end tag was deleted by hand
    let mut collection = CollectionFile::create(&path);
    collection.insert(NoteType {
        id: 3,
        name: "Damaged".to_string(),
        stylesheet: "user\n\n/* JRP add-on managed section start [version:1] */\nleftover\n"
            .to_string(),
        templates: Vec::new(),
    });
    collection.save().unwrap();

    let prefs = Prefs::parse("[[note_types]]\nid = 3\n").unwrap();
    let mut working = CollectionFile::open(&path).unwrap();
    assert_eq!(sync_all(&mut working, &prefs), 1);

    let synced = CollectionFile::open(&path)
        .unwrap()
        .note_type(3)
        .unwrap()
        .unwrap();
    // The dangling tag is preserved verbatim; a complete section follows it
    assert!(synced.stylesheet.starts_with(
        "user\n\n/* JRP add-on managed section start [version:1] */\nleftover\n\n"
    ));
    assert_eq!(synced.stylesheet.matches("section start").count(), 2);
    assert_eq!(synced.stylesheet.matches("section end").count(), 1);
    assert!(synced.stylesheet.ends_with("/* JRP add-on managed section end */"));
}

#[test]
fn test_domains_update_independently() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("collection.json");

    let prefs = Prefs::parse("[[note_types]]\nid = 4\n").unwrap();
    let options = prefs.options_for(4).unwrap();

    // Stylesheet already carries the current generation; the formats do not
    let current_style = enclose(
        &generate_style(&options.style, options.use_diamond_indicators),
        Domain::Style,
        STYLE_VERSION,
    );
    let mut collection = CollectionFile::create(&path);
    collection.insert(NoteType {
        id: 4,
        name: "Partial".to_string(),
        stylesheet: format!("base\n\n{current_style}"),
        templates: vec![CardTemplate::new("Card 1", "{{Front}}\n", "{{Back}}\n")],
    });
    collection.save().unwrap();

    let mut working = CollectionFile::open(&path).unwrap();
    let report = sync_note_type(&mut working, 4, options).unwrap();

    assert!(report.changed());
    assert_eq!(report.changes.len(), 2);
    assert!(
        report
            .changes
            .iter()
            .all(|c| c.field.to_string().contains("format"))
    );
}
