//! Integration tests for generation layering.

use lineage::storage::{FamilyTree, royal_family};

#[test]
fn seed_layers_have_the_expected_shape() {
    let layers = royal_family().generations(0);
    let sizes: Vec<usize> = layers.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![1, 2, 2, 8]);
}

#[test]
fn layering_starts_at_the_requested_root() {
    let tree = royal_family();

    // Layer from George V (6): himself, then his six children.
    let layers = tree.generations(6);
    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0], vec![6]);
    assert_eq!(layers[1].len(), 6);
}

#[test]
fn invalid_root_yields_no_layers() {
    let tree = royal_family();
    assert!(tree.generations(17).is_empty());
    assert!(FamilyTree::new().generations(0).is_empty());
}

#[test]
fn each_reachable_person_appears_exactly_once() {
    let tree = royal_family();
    let mut seen: Vec<usize> = tree.generations(0).into_iter().flatten().collect();
    let total = seen.len();
    seen.sort_unstable();
    seen.dedup();
    assert_eq!(seen.len(), total);
}

#[test]
fn shared_children_land_in_one_layer_only() {
    // A diamond: two roots-level parents both pointing at one child.
    let mut tree = FamilyTree::new();
    let top = tree.add_person("Top", 1900, None);
    let left = tree.add_person("Left", 1925, None);
    let right = tree.add_person("Right", 1926, None);
    let shared = tree.add_person("Shared", 1950, None);

    tree.connect(top, left);
    tree.connect(top, right);
    tree.connect(left, shared);
    tree.connect(right, shared);

    let layers = tree.generations(top);
    assert_eq!(layers.len(), 3);
    assert_eq!(layers[2], vec![shared]);
}

#[test]
fn attaching_to_the_deepest_layer_grows_the_layering() {
    let mut tree = royal_family();
    assert_eq!(tree.generations(0).len(), 4);

    // Index 15 sits in the fourth generation.
    let child = tree.add_person("Fifth Generation", 1906, None);
    tree.connect(15, child);

    let layers = tree.generations(0);
    assert_eq!(layers.len(), 5);
    assert_eq!(layers[4], vec![child]);
}
