//! Integration tests for the person store and parent/child linkage.

use lineage::storage::{FamilyTree, royal_family};

// =============================================================================
// Store Basics
// =============================================================================

#[test]
fn add_person_returns_sequential_indices() {
    let mut tree = FamilyTree::new();
    assert_eq!(tree.add_person("First", 1900, None), 0);
    assert_eq!(tree.add_person("Second", 1902, Some(1990)), 1);
    assert_eq!(tree.add_person("Third", 1904, None), 2);
    assert_eq!(tree.len(), 3);
}

#[test]
fn get_past_the_end_is_an_error() {
    let tree = royal_family();
    assert!(tree.get(16).is_ok());
    assert!(tree.get(17).is_err());
}

#[test]
fn clear_empties_the_store() {
    let mut tree = royal_family();
    tree.clear();
    assert!(tree.is_empty());
    assert!(tree.get(0).is_err());
}

// =============================================================================
// Linkage
// =============================================================================

#[test]
fn connect_appends_to_the_parent() {
    let mut tree = FamilyTree::new();
    let a = tree.add_person("A", 1900, None);
    let b = tree.add_person("B", 1925, None);
    let c = tree.add_person("C", 1927, None);

    tree.connect(a, b);
    tree.connect(a, c);

    assert_eq!(tree.get(a).unwrap().children(), &[b, c]);
}

#[test]
fn connect_with_invalid_indices_changes_nothing() {
    let mut tree = royal_family();
    let before = tree.clone();

    tree.connect(0, 99);
    tree.connect(99, 0);
    tree.connect(99, 99);

    assert_eq!(tree, before);
}

#[test]
fn co_parents_share_children() {
    let tree = royal_family();

    // Victoria (0) and Albert (1) list the same two children.
    assert_eq!(
        tree.get(0).unwrap().children(),
        tree.get(1).unwrap().children()
    );
}

#[test]
fn newly_added_person_is_connectable_immediately() {
    let mut tree = royal_family();
    let child = tree.add_person("Newest", 1926, None);
    tree.connect(15, child);

    assert!(tree.get(15).unwrap().children().contains(&child));
}
