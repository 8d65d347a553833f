//! Unit tests for path resolution, defaults delegation, typed access, and
//! flattening.

mod defaults;
mod flatten;
mod typed;

use super::{ConfigTree, TreeOptions};

/// A tree with `copy_defaults` enabled and a defaults tree containing
/// `x.y = 5`.
fn tree_with_defaults(copy_defaults: bool) -> ConfigTree {
    let mut tree = ConfigTree::with_options(TreeOptions {
        copy_defaults,
        ..TreeOptions::default()
    });
    let root = tree.root();
    if let Err(error) = tree.add_default(root, "x.y", 5) {
        panic!("registering default: {error}");
    }
    tree
}
