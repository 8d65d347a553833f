//! Tests covering shallow and deep key/value flattening.

use anyhow::{Result, anyhow};

use crate::tree::ConfigTree;
use crate::value::ConfigValue;

use super::tree_with_defaults;

fn populated_tree() -> Result<ConfigTree> {
    let mut tree = ConfigTree::new();
    let root = tree.root();
    tree.set(root, "a.b", 1)?;
    tree.set(root, "a.c.d", 2)?;
    tree.set(root, "e", 3)?;
    Ok(tree)
}

#[test]
fn shallow_keys_list_direct_children_only() -> Result<()> {
    let tree = populated_tree()?;
    let root = tree.root();
    let keys: Vec<_> = tree.keys(root, false).into_iter().collect();
    assert_eq!(keys, vec!["a".to_owned(), "e".to_owned()]);
    Ok(())
}

#[test]
fn deep_keys_list_descendant_paths_without_duplicates() -> Result<()> {
    let tree = populated_tree()?;
    let root = tree.root();
    let keys: Vec<_> = tree.keys(root, true).into_iter().collect();
    assert_eq!(
        keys,
        vec![
            "a".to_owned(),
            "a.b".to_owned(),
            "a.c".to_owned(),
            "a.c.d".to_owned(),
            "e".to_owned(),
        ]
    );
    Ok(())
}

#[test]
fn keys_are_relative_to_the_originating_section() -> Result<()> {
    let tree = populated_tree()?;
    let root = tree.root();
    let section = tree
        .get(root, "a")
        .and_then(|value| value.as_section())
        .ok_or_else(|| anyhow!("expected a section at 'a'"))?;
    let keys: Vec<_> = tree.keys(section, true).into_iter().collect();
    assert_eq!(
        keys,
        vec!["b".to_owned(), "c".to_owned(), "c.d".to_owned()]
    );
    Ok(())
}

#[test]
fn deep_values_map_paths_to_leaves_and_sections() -> Result<()> {
    let tree = populated_tree()?;
    let root = tree.root();
    let values = tree.values(root, true);
    assert_eq!(values.get("a.b"), Some(&ConfigValue::Int(1)));
    assert_eq!(values.get("a.c.d"), Some(&ConfigValue::Int(2)));
    assert_eq!(values.get("e"), Some(&ConfigValue::Int(3)));
    assert!(values.get("a").is_some_and(|value| value.as_section().is_some()));
    Ok(())
}

#[test]
fn copied_defaults_appear_in_deep_keys() {
    let tree = tree_with_defaults(true);
    let root = tree.root();
    let keys = tree.keys(root, true);
    assert!(keys.contains("x"));
    assert!(keys.contains("x.y"));
}

#[test]
fn defaults_are_hidden_without_copy_defaults() {
    let tree = tree_with_defaults(false);
    let root = tree.root();
    assert!(tree.keys(root, true).is_empty());
    assert!(tree.values(root, true).is_empty());
}

#[test]
fn local_values_overlay_copied_defaults() -> Result<()> {
    let mut tree = tree_with_defaults(true);
    let root = tree.root();
    tree.set(root, "x.y", 9)?;
    let values = tree.values(root, true);
    assert_eq!(values.get("x.y"), Some(&ConfigValue::Int(9)));
    let keys: Vec<_> = tree.keys(root, true).into_iter().collect();
    assert_eq!(keys, vec!["x".to_owned(), "x.y".to_owned()]);
    Ok(())
}

#[test]
fn default_values_fill_gaps_in_enumeration() -> Result<()> {
    let mut tree = tree_with_defaults(true);
    let root = tree.root();
    tree.set(root, "z", 1)?;
    let values = tree.values(root, true);
    assert_eq!(values.get("x.y"), Some(&ConfigValue::Int(5)));
    assert_eq!(values.get("z"), Some(&ConfigValue::Int(1)));
    Ok(())
}
