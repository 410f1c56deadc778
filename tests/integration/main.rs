//! End-to-end tests spanning storage and runtime.

use lineage::foundation::ErrorKind;
use lineage::runtime::serialize;
use lineage::storage::royal_family;

/// Growing the deepest branch and persisting it: the new person appears in
/// a brand-new fifth generation, before and after a disk roundtrip.
#[test]
fn grow_save_and_reload_a_fifth_generation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("family_tree.dat");

    let mut tree = royal_family();
    let child = tree.add_person("Prince Wilhelm of Prussia", 1906, Some(1940));
    tree.connect(15, child);

    let layers = tree.generations(0);
    assert_eq!(layers.len(), 5);
    assert_eq!(layers[4], vec![child]);

    serialize::save_to_file(&tree, &path).unwrap();
    let restored = serialize::load_from_file(&path).unwrap();

    assert_eq!(restored, tree);
    assert_eq!(restored.generations(0).len(), 5);
    assert!(restored.render(0).contains("[Gen 5] Prince Wilhelm of Prussia"));
}

/// A malformed stream never yields a partial tree: the caller keeps its
/// previous tree because `from_text` fails before anything is swapped in.
#[test]
fn a_bad_load_never_replaces_existing_state() {
    let mut current = royal_family();
    current.add_person("Local Edit", 2000, None);
    let snapshot = current.clone();

    // Declares three records, supplies one.
    let bad = "3\nOnly\n1900\n-1\n0\n\n";
    let result = serialize::from_text(bad);

    assert!(matches!(
        result.unwrap_err().kind,
        ErrorKind::Format { record: Some(1), .. }
    ));
    assert_eq!(current, snapshot);
}

/// The rendered seed shows the royal line from Victoria down to the
/// children of George V, with spouses absent.
#[test]
fn the_default_tree_renders_the_royal_line() {
    let rendered = royal_family().render(0);

    assert!(rendered.starts_with(" [Gen 1] Queen Victoria"));
    assert!(rendered.contains("[Gen 2] King Edward VII"));
    assert!(rendered.contains("[Gen 3] King George V"));
    assert!(rendered.contains("[Gen 4] Prince John"));
    assert!(!rendered.contains("Alexandra of Denmark"));
}
