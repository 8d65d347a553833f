//! Tests covering defaults delegation, materialisation, and `is_set`.

use anyhow::{Result, anyhow};
use rstest::rstest;

use crate::tree::ConfigTree;
use crate::value::ConfigValue;

use super::tree_with_defaults;

#[test]
fn get_falls_back_to_defaults() {
    let tree = tree_with_defaults(true);
    let root = tree.root();
    assert_eq!(tree.get(root, "x.y"), Some(ConfigValue::Int(5)));
    assert_eq!(tree.get_i32(root, "x.y"), 5);
}

#[test]
fn local_values_shadow_defaults() -> Result<()> {
    let mut tree = tree_with_defaults(true);
    let root = tree.root();
    tree.set(root, "x.y", 9)?;
    assert_eq!(tree.get_i32(root, "x.y"), 9);
    tree.remove(root, "x.y")?;
    assert_eq!(tree.get_i32(root, "x.y"), 5);
    Ok(())
}

#[test]
fn get_local_never_consults_defaults() {
    let tree = tree_with_defaults(true);
    let root = tree.root();
    assert_eq!(tree.get_local(root, "x.y"), None);
    assert_eq!(tree.get_local(root, "x.y").map_or(-1, |_| 0), -1);
}

#[rstest]
#[case::copying(true, true)]
#[case::not_copying(false, false)]
fn is_set_honours_copy_defaults(#[case] copy_defaults: bool, #[case] expected: bool) {
    let tree = tree_with_defaults(copy_defaults);
    let root = tree.root();
    assert!(tree.contains(root, "x.y"));
    assert_eq!(tree.is_set(root, "x.y"), expected);
}

#[test]
fn default_value_requires_a_defaults_tree() {
    let tree = ConfigTree::new();
    let root = tree.root();
    assert_eq!(tree.default_value(root, "x.y"), None);
}

#[test]
fn sections_materialise_from_defaults() -> Result<()> {
    let mut tree = tree_with_defaults(false);
    let root = tree.root();
    assert_eq!(tree.get_local(root, "x"), None);

    let section = tree
        .section(root, "x")
        .ok_or_else(|| anyhow!("expected section to materialise"))?;
    assert!(tree.get_local(root, "x").is_some());
    assert!(tree.keys(section, false).is_empty());

    tree.set(section, "y", 1)?;
    assert_eq!(tree.get_i32(root, "x.y"), 1);
    let defaults = tree
        .defaults()
        .ok_or_else(|| anyhow!("expected a defaults tree"))?;
    assert_eq!(defaults.get_i32(defaults.root(), "x.y"), 5);
    Ok(())
}

#[test]
fn local_non_section_values_block_materialisation() -> Result<()> {
    let mut tree = tree_with_defaults(false);
    let root = tree.root();
    tree.set(root, "x", "scalar")?;
    assert_eq!(tree.section(root, "x"), None);
    Ok(())
}

#[test]
fn is_section_sees_default_sections_without_materialising() {
    let tree = tree_with_defaults(false);
    let root = tree.root();
    assert!(tree.is_section(root, "x"));
    assert!(tree.get_local(root, "x").is_none());
}

#[test]
fn add_default_uses_the_absolute_path() -> Result<()> {
    let mut tree = ConfigTree::new();
    let root = tree.root();
    let nested = tree.create_section(root, "a.b")?;
    tree.add_default(nested, "k", 7)?;
    assert_eq!(tree.get_i32(nested, "k"), 7);
    assert_eq!(tree.get_i32(root, "a.b.k"), 7);
    let defaults = tree
        .defaults()
        .ok_or_else(|| anyhow!("expected a defaults tree"))?;
    assert_eq!(defaults.get_i32(defaults.root(), "a.b.k"), 7);
    Ok(())
}

#[test]
fn add_defaults_registers_each_path() -> Result<()> {
    let mut tree = ConfigTree::new();
    let root = tree.root();
    let mut values = indexmap::IndexMap::new();
    values.insert("a.b".to_owned(), ConfigValue::from(1));
    values.insert("c".to_owned(), ConfigValue::from("two"));
    tree.add_defaults(root, values)?;
    assert_eq!(tree.get_i32(root, "a.b"), 1);
    assert_eq!(tree.get_string(root, "c").as_deref(), Some("two"));
    Ok(())
}

#[test]
fn typed_defaults_must_be_type_compatible() -> Result<()> {
    let mut tree = ConfigTree::new();
    let root = tree.root();
    tree.add_default(root, "n", "not a number")?;
    assert_eq!(tree.get_i32(root, "n"), 0);
    assert_eq!(tree.get_string(root, "n").as_deref(), Some("not a number"));
    tree.add_default(root, "f", 2.5)?;
    assert_eq!(tree.get_i32(root, "f"), 2);
    Ok(())
}
