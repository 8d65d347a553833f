//! Path resolution and the generic get/set primitives.
//!
//! Paths are split on the root's separator and walked left to right. Reads
//! walk only existing local sections and fail to `None` on any miss; writes
//! materialise missing intermediates, silently replacing any non-section
//! value that occupies an intermediate slot.

use indexmap::IndexMap;

use crate::error::{TreeError, TreeResult};
use crate::value::ConfigValue;

use super::{ConfigTree, SectionId, SectionNode};

impl ConfigTree {
    /// Default-aware read: the local value at `path`, or the value at the
    /// same absolute path in the defaults tree, or `None`.
    ///
    /// The empty path resolves to the section itself. `Section` values that
    /// originate from the defaults overlay carry ids belonging to the
    /// defaults tree; use [`ConfigTree::section`] to obtain a live section
    /// in this tree instead.
    #[must_use]
    pub fn get(&self, from: SectionId, path: &str) -> Option<ConfigValue> {
        if path.is_empty() {
            return Some(ConfigValue::Section(from));
        }
        self.lookup_ref(from, path).cloned()
    }

    /// Local-only read: the value at `path` in this tree, never consulting
    /// the defaults tree.
    ///
    /// This is the explicit-fallback counterpart of [`ConfigTree::get`];
    /// combine with [`Option::unwrap_or`] to supply a caller-side fallback.
    /// The typed `*_or` accessors are built on this variant, which is what
    /// keeps their default-propagation behaviour distinct from the
    /// default-aware single-path forms.
    #[must_use]
    pub fn get_local(&self, from: SectionId, path: &str) -> Option<ConfigValue> {
        if path.is_empty() {
            return Some(ConfigValue::Section(from));
        }
        self.resolve_ref(from, path).cloned()
    }

    /// Stores `value` at `path`, creating intermediate sections as needed.
    ///
    /// A non-section value sitting on an intermediate segment is replaced by
    /// a fresh empty section. Storing over an existing section unlinks it.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyPath`] when `path` is empty.
    pub fn set(
        &mut self,
        from: SectionId,
        path: &str,
        value: impl Into<ConfigValue>,
    ) -> TreeResult<()> {
        self.store(from, path, Some(value.into()), "set a value")
    }

    /// Removes the entry at `path`, leaving intact sections untouched when
    /// the path is absent. Intermediate sections are still materialised, as
    /// with [`ConfigTree::set`].
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyPath`] when `path` is empty.
    pub fn remove(&mut self, from: SectionId, path: &str) -> TreeResult<()> {
        self.store(from, path, None, "remove a value")
    }

    /// Creates a new empty section at `path`, replacing whatever occupied
    /// that slot. Creating over an existing section discards its contents.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyPath`] when `path` is empty.
    pub fn create_section(&mut self, from: SectionId, path: &str) -> TreeResult<SectionId> {
        let (target, key) = self.resolve_for_write(from, path, "create a section")?;
        Ok(self.insert_child(target, &key))
    }

    /// Creates a section at `path` seeded from a nested-map literal: map
    /// values become sub-sections recursively, everything else is stored
    /// with [`ConfigTree::set`].
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyPath`] when `path` or any seed key is
    /// empty.
    pub fn create_section_with(
        &mut self,
        from: SectionId,
        path: &str,
        seed: IndexMap<String, ConfigValue>,
    ) -> TreeResult<SectionId> {
        let section = self.create_section(from, path)?;
        for (key, value) in seed {
            match value {
                ConfigValue::Map(nested) => {
                    self.create_section_with(section, &key, nested)?;
                }
                other => self.set(section, &key, other)?,
            }
        }
        Ok(section)
    }

    /// Read walk over local entries only; every intermediate segment must
    /// already resolve to a section.
    pub(crate) fn resolve_ref(&self, from: SectionId, path: &str) -> Option<&ConfigValue> {
        let separator = self.options.path_separator;
        let mut segments = path.split(separator);
        let key = segments.next_back()?;
        let mut section = from;
        for segment in segments {
            match self.node(section).entries.get(segment) {
                Some(ConfigValue::Section(child)) => section = *child,
                _ => return None,
            }
        }
        self.node(section).entries.get(key)
    }

    /// Local lookup falling back to the defaults tree at the same absolute
    /// path.
    pub(super) fn lookup_ref(&self, from: SectionId, path: &str) -> Option<&ConfigValue> {
        self.resolve_ref(from, path).or_else(|| {
            let defaults = self.defaults.as_deref()?;
            let absolute = self.absolute_path(from, path);
            defaults.lookup_ref(defaults.root, &absolute)
        })
    }

    /// `path` re-anchored at the root: the section's cached full path joined
    /// with `path`.
    pub(super) fn absolute_path(&self, from: SectionId, path: &str) -> String {
        self.join_path(self.node(from).full_path.as_str(), path)
    }

    pub(super) fn join_path(&self, base: &str, key: &str) -> String {
        if base.is_empty() {
            key.to_owned()
        } else if key.is_empty() {
            base.to_owned()
        } else {
            let mut joined = String::with_capacity(base.len() + key.len() + 1);
            joined.push_str(base);
            joined.push(self.options.path_separator);
            joined.push_str(key);
            joined
        }
    }

    fn store(
        &mut self,
        from: SectionId,
        path: &str,
        value: Option<ConfigValue>,
        operation: &'static str,
    ) -> TreeResult<()> {
        let (target, key) = self.resolve_for_write(from, path, operation)?;
        match value {
            Some(value) => {
                self.node_mut(target).entries.insert(key, value);
            }
            None => {
                self.node_mut(target).entries.shift_remove(&key);
            }
        }
        Ok(())
    }

    /// Write walk: materialises missing intermediates and returns the target
    /// section together with the local key.
    fn resolve_for_write(
        &mut self,
        from: SectionId,
        path: &str,
        operation: &'static str,
    ) -> TreeResult<(SectionId, String)> {
        if path.is_empty() {
            return Err(TreeError::EmptyPath { operation });
        }
        let separator = self.options.path_separator;
        let mut segments: Vec<&str> = path.split(separator).collect();
        let key = segments.pop().map_or_else(String::new, str::to_owned);
        let mut section = from;
        for segment in segments {
            let existing = match self.node(section).entries.get(segment) {
                Some(ConfigValue::Section(child)) => Some(*child),
                Some(_) => {
                    tracing::debug!(segment, "replacing non-section value while materialising a path");
                    None
                }
                None => None,
            };
            section = match existing {
                Some(child) => child,
                None => self.insert_child(section, segment),
            };
        }
        Ok((section, key))
    }

    fn insert_child(&mut self, parent: SectionId, name: &str) -> SectionId {
        let full_path = self.join_path(self.node(parent).full_path.as_str(), name);
        let child = SectionId(self.arena.len() as u32);
        self.arena.push(SectionNode {
            entries: IndexMap::new(),
            parent: Some(parent),
            name: name.to_owned(),
            full_path,
        });
        self.node_mut(parent)
            .entries
            .insert(name.to_owned(), ConfigValue::Section(child));
        child
    }
}
