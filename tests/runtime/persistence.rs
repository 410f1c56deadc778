//! Integration tests for the text codec and file persistence.

use lineage::foundation::ErrorKind;
use lineage::runtime::serialize;
use lineage::storage::{FamilyTree, royal_family};

#[test]
fn seed_survives_a_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("royals.dat");

    let tree = royal_family();
    serialize::save_to_file(&tree, &path).unwrap();
    let restored = serialize::load_from_file(&path).unwrap();

    assert_eq!(restored, tree);
}

#[test]
fn edits_survive_a_file_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("edited.dat");

    let mut tree = royal_family();
    let child = tree.add_person("Princess Mary's Child", 1923, None);
    tree.connect(11, child);
    serialize::save_to_file(&tree, &path).unwrap();

    let restored = serialize::load_from_file(&path).unwrap();
    assert_eq!(restored.len(), 18);
    assert!(restored.get(11).unwrap().children().contains(&child));
}

#[test]
fn saving_twice_produces_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.dat");
    let second = dir.path().join("b.dat");

    let tree = royal_family();
    serialize::save_to_file(&tree, &first).unwrap();
    serialize::save_to_file(&tree, &second).unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn loading_garbage_reports_a_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.dat");
    std::fs::write(&path, "one\ntwo\nthree\n").unwrap();

    let err = serialize::load_from_file(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::Format { .. }));
}

#[test]
fn loading_a_truncated_file_reports_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.dat");

    // Keep the count line and first record, drop the rest.
    let full = serialize::to_text(&royal_family());
    let truncated: String = full.lines().take(6).collect::<Vec<_>>().join("\n");
    std::fs::write(&path, truncated).unwrap();

    let err = serialize::load_from_file(&path).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::Format {
            record: Some(1),
            ..
        }
    ));
}

#[test]
fn an_empty_tree_roundtrips() {
    let tree = FamilyTree::new();
    let restored = serialize::from_text(&serialize::to_text(&tree)).unwrap();
    assert!(restored.is_empty());
}
