//! Tests covering typed scalar access, coercion, and typed lists.

use anyhow::Result;
use indexmap::IndexMap;
use rstest::rstest;

use crate::tree::ConfigTree;
use crate::value::ConfigValue;

fn tree_with(path: &str, value: impl Into<ConfigValue>) -> ConfigTree {
    let mut tree = ConfigTree::new();
    let root = tree.root();
    if let Err(error) = tree.set(root, path, value) {
        panic!("seeding tree: {error}");
    }
    tree
}

#[test]
fn strings_convert_from_any_scalar() {
    let tree = tree_with("n", 5);
    let root = tree.root();
    assert_eq!(tree.get_string(root, "n").as_deref(), Some("5"));
    assert_eq!(tree.get_string_or(root, "n", "fallback"), "5");
    assert_eq!(tree.get_string_or(root, "missing", "fallback"), "fallback");
    assert!(!tree.is_string(root, "n"));
    assert!(tree.is_int(root, "n"));
}

#[test]
fn lists_are_not_stringifiable() {
    let tree = tree_with("l", vec![1, 2]);
    let root = tree.root();
    assert_eq!(tree.get_string(root, "l"), None);
    assert_eq!(tree.get_string_or(root, "l", "fallback"), "fallback");
}

#[rstest]
#[case(3.9_f64, 3)]
#[case(-3.9_f64, -3)]
fn integers_truncate_floats(#[case] stored: f64, #[case] expected: i32) {
    let tree = tree_with("n", stored);
    let root = tree.root();
    assert_eq!(tree.get_i32(root, "n"), expected);
    assert_eq!(tree.get_i64(root, "n"), i64::from(expected));
}

#[test]
fn numeric_strings_do_not_coerce_as_scalars() {
    let tree = tree_with("n", "5");
    let root = tree.root();
    assert_eq!(tree.get_i32(root, "n"), 0);
    assert_eq!(tree.get_i32_or(root, "n", -1), -1);
    assert_eq!(tree.get_f64_or(root, "n", -1.0), -1.0);
}

#[test]
fn floats_widen_from_integers() {
    let tree = tree_with("n", 2);
    let root = tree.root();
    assert_eq!(tree.get_f64(root, "n"), 2.0);
    assert!(tree.is_int(root, "n"));
    assert!(!tree.is_float(root, "n"));
}

#[test]
fn booleans_never_coerce() {
    let tree = tree_with("flag", true);
    let root = tree.root();
    assert!(tree.get_bool(root, "flag"));
    assert!(tree.is_bool(root, "flag"));

    let tree = tree_with("flag", "true");
    let root = tree.root();
    assert!(!tree.get_bool(root, "flag"));
    assert!(tree.get_bool_or(root, "flag", true));
}

#[test]
fn integer_lists_follow_the_coercion_rules() {
    let tree = tree_with(
        "n",
        vec![
            ConfigValue::from("1"),
            ConfigValue::from(2),
            ConfigValue::from("bad"),
            ConfigValue::from(3.9),
        ],
    );
    let root = tree.root();
    assert_eq!(tree.typed_list::<i32>(root, "n"), vec![1, 2, 3]);
    assert_eq!(tree.typed_list::<i64>(root, "n"), vec![1, 2, 3]);
    assert_eq!(tree.typed_list::<f64>(root, "n"), vec![1.0, 2.0, 3.9]);
}

#[test]
fn string_lists_accept_scalar_wrappers() {
    let tree = tree_with(
        "mixed",
        vec![
            ConfigValue::from("a"),
            ConfigValue::from(1),
            ConfigValue::from(true),
            ConfigValue::List(vec![]),
        ],
    );
    let root = tree.root();
    assert_eq!(
        tree.typed_list::<String>(root, "mixed"),
        vec!["a".to_owned(), "1".to_owned(), "true".to_owned()]
    );
}

#[test]
fn map_lists_keep_maps_only() {
    let mut entries = IndexMap::new();
    entries.insert("k".to_owned(), ConfigValue::from(1));
    let tree = tree_with(
        "maps",
        vec![ConfigValue::Map(entries.clone()), ConfigValue::from(1)],
    );
    let root = tree.root();
    assert_eq!(
        tree.typed_list::<IndexMap<String, ConfigValue>>(root, "maps"),
        vec![entries]
    );
}

#[test]
fn typed_lists_are_always_concrete() {
    let tree = tree_with("scalar", 1);
    let root = tree.root();
    assert!(tree.typed_list::<i32>(root, "missing").is_empty());
    assert!(tree.typed_list::<i32>(root, "scalar").is_empty());
}

#[test]
fn lists_fall_back_to_defaults() -> Result<()> {
    let mut tree = ConfigTree::new();
    let root = tree.root();
    tree.add_default(root, "l", vec![1, 2])?;
    assert_eq!(
        tree.get_list(root, "l"),
        Some(vec![ConfigValue::Int(1), ConfigValue::Int(2)])
    );
    assert_eq!(tree.typed_list::<i32>(root, "l"), vec![1, 2]);
    assert!(tree.is_list(root, "l"));
    assert_eq!(tree.get_list_or(root, "l", vec![]), vec![]);
    Ok(())
}
