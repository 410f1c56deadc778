//! Integration tests for tree rendering.

use lineage::storage::{FamilyTree, royal_family};

#[test]
fn render_lists_every_reachable_person() {
    let tree = royal_family();
    let rendered = tree.render(0);

    for layer in tree.generations(0) {
        for index in layer {
            let name = tree.get(index).unwrap().name();
            assert!(rendered.contains(name), "{name}");
        }
    }
}

#[test]
fn render_has_one_line_per_reachable_person() {
    let tree = royal_family();
    let reachable: usize = tree.generations(0).iter().map(Vec::len).sum();
    assert_eq!(tree.render(0).lines().count(), reachable);
}

#[test]
fn render_tags_each_line_with_its_generation() {
    let rendered = royal_family().render(0);
    assert!(rendered.contains("[Gen 1] Queen Victoria"));
    assert!(rendered.contains("[Gen 4] King George VI"));
}

#[test]
fn render_omits_unreachable_spouses() {
    let tree = royal_family();
    let rendered = tree.render(0);
    assert!(!rendered.contains("Prince Albert"));
    assert!(!rendered.contains("Queen Mary of Teck"));
}

#[test]
fn render_of_an_invalid_root_is_a_single_diagnostic() {
    let tree = royal_family();
    assert_eq!(tree.render(42), "[invalid root index: 42]\n");
    assert_eq!(FamilyTree::new().render(0), "[invalid root index: 0]\n");
}

#[test]
fn last_child_uses_the_closing_glyph() {
    let mut tree = FamilyTree::new();
    let root = tree.add_person("Root", 1900, None);
    let only = tree.add_person("Only", 1930, None);
    tree.connect(root, only);

    let rendered = tree.render(root);
    assert!(rendered.contains("\\---"));
    assert!(!rendered.contains("|---"));
}

#[test]
fn middle_children_use_the_continuing_glyph() {
    let mut tree = FamilyTree::new();
    let root = tree.add_person("Root", 1900, None);
    let first = tree.add_person("First", 1925, None);
    let second = tree.add_person("Second", 1928, None);
    tree.connect(root, first);
    tree.connect(root, second);

    let rendered = tree.render(root);
    assert!(rendered.contains("|---"));
    assert!(rendered.contains("\\---"));
}
