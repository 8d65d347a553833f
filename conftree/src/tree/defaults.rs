//! Defaults-tree attachment and per-path fallback delegation.
//!
//! The defaults tree is a second, independent [`ConfigTree`] consulted when
//! the primary tree lacks a path. Scalar defaults are never copied into the
//! live tree; sections found only in defaults are materialised on first
//! access through [`ConfigTree::section`].

use indexmap::IndexMap;

use crate::error::TreeResult;
use crate::value::ConfigValue;

use super::{ConfigTree, SectionId};

impl ConfigTree {
    /// Attaches `defaults` as this tree's defaults tree, replacing any
    /// previous one. The defaults tree should use the same path separator
    /// as this tree for absolute paths to line up.
    pub fn set_defaults(&mut self, defaults: Self) {
        self.defaults = Some(Box::new(defaults));
    }

    /// The attached defaults tree, if any.
    #[must_use]
    pub fn defaults(&self) -> Option<&Self> {
        self.defaults.as_deref()
    }

    /// Registers a single default at the absolute path derived from
    /// `from`'s full path joined with `path`, creating the defaults tree on
    /// first use.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyPath`](crate::TreeError::EmptyPath) when
    /// the derived absolute path is empty.
    pub fn add_default(
        &mut self,
        from: SectionId,
        path: &str,
        value: impl Into<ConfigValue>,
    ) -> TreeResult<()> {
        let absolute = self.absolute_path(from, path);
        let options = self.options.clone();
        let defaults = self
            .defaults
            .get_or_insert_with(|| Box::new(Self::with_options(options)));
        let root = defaults.root;
        defaults.set(root, &absolute, value)
    }

    /// Registers several defaults at once; keys are paths relative to
    /// `from`.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyPath`](crate::TreeError::EmptyPath) when a
    /// derived absolute path is empty.
    pub fn add_defaults(
        &mut self,
        from: SectionId,
        values: IndexMap<String, ConfigValue>,
    ) -> TreeResult<()> {
        for (path, value) in values {
            self.add_default(from, &path, value)?;
        }
        Ok(())
    }

    /// The default registered for `path`: absent without a defaults tree,
    /// otherwise the value at the same absolute path inside it.
    #[must_use]
    pub fn default_value(&self, from: SectionId, path: &str) -> Option<ConfigValue> {
        let defaults = self.defaults.as_deref()?;
        let absolute = self.absolute_path(from, path);
        defaults.get(defaults.root, &absolute)
    }

    /// The defaults-tree section mirroring `from`'s full path, read-only.
    #[must_use]
    pub fn default_section(&self, from: SectionId) -> Option<(&Self, SectionId)> {
        let defaults = self.defaults.as_deref()?;
        let full_path = self.node(from).full_path.clone();
        if full_path.is_empty() {
            return Some((defaults, defaults.root));
        }
        match defaults.resolve_ref(defaults.root, &full_path)? {
            ConfigValue::Section(section) => Some((defaults, *section)),
            _ => None,
        }
    }

    /// Whether `path` resolves to a value in this tree or its defaults.
    #[must_use]
    pub fn contains(&self, from: SectionId, path: &str) -> bool {
        path.is_empty() || self.lookup_ref(from, path).is_some()
    }

    /// Whether `path` is set. With `copy_defaults` enabled this matches
    /// [`ConfigTree::contains`]; otherwise only the local tree counts.
    #[must_use]
    pub fn is_set(&self, from: SectionId, path: &str) -> bool {
        if self.options.copy_defaults {
            self.contains(from, path)
        } else {
            path.is_empty() || self.resolve_ref(from, path).is_some()
        }
    }

    /// The section at `path`, materialising it from defaults on demand.
    ///
    /// A section already present locally is returned directly. A local
    /// non-section value yields `None` without consulting defaults. When the
    /// defaults tree holds a section at the absolute path, an empty section
    /// is created in this tree at `path` and returned; subsequent writes
    /// into it persist independently of the defaults tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftree::ConfigTree;
    ///
    /// # fn main() -> conftree::TreeResult<()> {
    /// let mut tree = ConfigTree::new();
    /// let root = tree.root();
    /// tree.add_default(root, "net.timeout", 30)?;
    /// let net = tree.section(root, "net").expect("section exists in defaults");
    /// tree.set(net, "retries", 3)?;
    /// assert_eq!(tree.get_i32(root, "net.timeout"), 30);
    /// assert_eq!(tree.get_i32(root, "net.retries"), 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn section(&mut self, from: SectionId, path: &str) -> Option<SectionId> {
        if path.is_empty() {
            return Some(from);
        }
        if let Some(value) = self.resolve_ref(from, path) {
            return value.as_section();
        }
        let default_is_section = self
            .default_value(from, path)
            .is_some_and(|value| value.as_section().is_some());
        if default_is_section {
            tracing::trace!(path, "materialising a section found only in defaults");
            self.create_section(from, path).ok()
        } else {
            None
        }
    }

    /// Whether the raw value at `path` (local or default) is a section.
    #[must_use]
    pub fn is_section(&self, from: SectionId, path: &str) -> bool {
        path.is_empty()
            || self
                .lookup_ref(from, path)
                .is_some_and(|value| matches!(value, ConfigValue::Section(_)))
    }
}
