//! An in-memory, hierarchical key-value store addressed by
//! separator-delimited paths.
//!
//! A [`ConfigTree`] is an arena of sections, each holding an ordered map
//! from local keys to [`ConfigValue`]s: scalars, lists, maps, or nested
//! sections. Path-based operations split on the root's separator, walk or
//! materialise intermediate sections, and act on the leaf. Typed accessors
//! layer coercion and default-fallback semantics on top of the generic
//! [`get`](ConfigTree::get)/[`set`](ConfigTree::set) primitives, consulting
//! an optional defaults tree when a path is absent.
//!
//! The tree is a plain single-threaded structure: no operation blocks, and
//! callers needing concurrent access wrap the whole tree in their own lock.
//! Missing paths and mistyped values are not errors; they degrade to
//! defaults or empty results. Only precondition violations (such as an
//! empty path passed to a write operation) surface as [`TreeError`].
//!
//! # Examples
//!
//! ```rust
//! use conftree::{ConfigTree, TreeOptions};
//!
//! # fn main() -> conftree::TreeResult<()> {
//! let mut tree = ConfigTree::with_options(TreeOptions {
//!     copy_defaults: true,
//!     ..TreeOptions::default()
//! });
//! let root = tree.root();
//!
//! tree.add_default(root, "server.port", 8080)?;
//! tree.set(root, "server.host", "localhost")?;
//!
//! assert_eq!(tree.get_i32(root, "server.port"), 8080);
//! assert_eq!(tree.get_string(root, "server.host").as_deref(), Some("localhost"));
//! assert!(tree.keys(root, true).contains("server.port"));
//! # Ok(())
//! # }
//! ```

mod error;
#[cfg(feature = "json")]
mod json;
mod tree;
mod value;

pub use error::{TreeError, TreeResult};
pub use tree::{ConfigTree, SectionDisplay, SectionId, TreeOptions};
pub use value::{Coerce, ConfigValue};
