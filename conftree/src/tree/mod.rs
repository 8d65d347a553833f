//! The section tree: arena storage, options, and introspection.

mod defaults;
mod flatten;
mod resolve;
#[cfg(test)]
mod tests;
mod typed;

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::value::ConfigValue;

/// Identifier of a section within its owning [`ConfigTree`] arena.
///
/// Ids stay valid for the lifetime of the tree: overwriting the entry that
/// holds a section leaves the arena slot in place, merely unreachable.
/// Passing an id minted by a different tree is a logic error; it addresses
/// an arbitrary section of that tree, or panics when out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SectionId(u32);

impl SectionId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// Options owned by the root of a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeOptions {
    /// Character separating path segments. Defaults to `'.'`.
    pub path_separator: char,
    /// Whether key/value enumeration and [`ConfigTree::is_set`] treat
    /// entries that exist only in the defaults tree as present. Defaults to
    /// `false`.
    pub copy_defaults: bool,
}

impl Default for TreeOptions {
    fn default() -> Self {
        Self {
            path_separator: '.',
            copy_defaults: false,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SectionNode {
    pub(crate) entries: IndexMap<String, ConfigValue>,
    pub(crate) parent: Option<SectionId>,
    pub(crate) name: String,
    pub(crate) full_path: String,
}

/// An in-memory hierarchical key-value store addressed by
/// separator-delimited paths.
///
/// The tree owns an arena of sections; the owning direction is strictly
/// parent to child through each section's entries map, while parent links
/// are plain back-references. Every operation takes the [`SectionId`] to
/// resolve from, so paths behave identically whether addressed from the
/// root or from a nested section.
///
/// A tree may carry a second, read-only *defaults* tree consulted for
/// fallback values when the primary tree lacks a path; see
/// [`ConfigTree::set_defaults`] and [`ConfigTree::add_default`].
///
/// # Examples
///
/// ```rust
/// use conftree::ConfigTree;
///
/// # fn main() -> conftree::TreeResult<()> {
/// let mut tree = ConfigTree::new();
/// let root = tree.root();
/// tree.set(root, "server.port", 8080)?;
/// assert_eq!(tree.get_i32(root, "server.port"), 8080);
/// assert!(tree.is_section(root, "server"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigTree {
    arena: Vec<SectionNode>,
    root: SectionId,
    options: TreeOptions,
    defaults: Option<Box<ConfigTree>>,
}

impl ConfigTree {
    /// Creates an empty tree with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(TreeOptions::default())
    }

    /// Creates an empty tree with the given options.
    #[must_use]
    pub fn with_options(options: TreeOptions) -> Self {
        Self {
            arena: vec![SectionNode {
                entries: IndexMap::new(),
                parent: None,
                name: String::new(),
                full_path: String::new(),
            }],
            root: SectionId(0),
            options,
            defaults: None,
        }
    }

    /// The root section of this tree.
    #[must_use]
    pub fn root(&self) -> SectionId {
        self.root
    }

    /// The options owned by this tree's root.
    #[must_use]
    pub fn options(&self) -> &TreeOptions {
        &self.options
    }

    /// Mutable access to the root options.
    ///
    /// Changing the separator after sections exist leaves their cached full
    /// paths unchanged; reconfigure options before populating the tree.
    pub fn options_mut(&mut self) -> &mut TreeOptions {
        &mut self.options
    }

    /// The local key this section occupies within its parent; empty for the
    /// root.
    #[must_use]
    pub fn name(&self, section: SectionId) -> &str {
        &self.node(section).name
    }

    /// The parent of `section`, or `None` for the root.
    #[must_use]
    pub fn parent(&self, section: SectionId) -> Option<SectionId> {
        self.node(section).parent
    }

    /// The full path of `section` from the root, cached at creation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftree::ConfigTree;
    ///
    /// # fn main() -> conftree::TreeResult<()> {
    /// let mut tree = ConfigTree::new();
    /// let root = tree.root();
    /// let inner = tree.create_section(root, "a.b.c")?;
    /// assert_eq!(tree.current_path(inner), "a.b.c");
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn current_path(&self, section: SectionId) -> &str {
        &self.node(section).full_path
    }

    /// Debug rendering of a section, in the form
    /// `Section[path='a.b', root='ConfigTree']`.
    #[must_use]
    pub fn display(&self, section: SectionId) -> SectionDisplay<'_> {
        SectionDisplay {
            tree: self,
            section,
        }
    }

    pub(crate) fn node(&self, section: SectionId) -> &SectionNode {
        &self.arena[section.index()]
    }

    pub(crate) fn node_mut(&mut self, section: SectionId) -> &mut SectionNode {
        &mut self.arena[section.index()]
    }
}

impl Default for ConfigTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper returned by [`ConfigTree::display`].
#[derive(Debug, Clone, Copy)]
pub struct SectionDisplay<'a> {
    tree: &'a ConfigTree,
    section: SectionId,
}

impl fmt::Display for SectionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Section[path='{}', root='ConfigTree']",
            self.tree.current_path(self.section)
        )
    }
}
