//! Ordered-unique flattening of sections into deep key and value views.

use indexmap::{IndexMap, IndexSet};

use crate::value::ConfigValue;

use super::{ConfigTree, SectionId};

impl ConfigTree {
    /// The keys under `from`, in insertion order, joined with the separator
    /// relative to `from`. When `deep` is set, descends into child sections;
    /// otherwise only direct children are listed.
    ///
    /// With `copy_defaults` enabled, keys from the mirrored defaults section
    /// are imported first; a key present in both trees appears once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftree::ConfigTree;
    ///
    /// # fn main() -> conftree::TreeResult<()> {
    /// let mut tree = ConfigTree::new();
    /// let root = tree.root();
    /// tree.set(root, "a.b", 1)?;
    /// tree.set(root, "c", 2)?;
    /// let shallow: Vec<_> = tree.keys(root, false).into_iter().collect();
    /// assert_eq!(shallow, vec!["a".to_owned(), "c".to_owned()]);
    /// let deep: Vec<_> = tree.keys(root, true).into_iter().collect();
    /// assert_eq!(deep, vec!["a".to_owned(), "a.b".to_owned(), "c".to_owned()]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn keys(&self, from: SectionId, deep: bool) -> IndexSet<String> {
        let mut keys = IndexSet::new();
        if self.options.copy_defaults {
            if let Some((defaults, section)) = self.default_section(from) {
                keys.extend(defaults.keys(section, deep));
            }
        }
        self.collect_keys(from, "", deep, &mut keys);
        keys
    }

    /// The key/value pairs under `from`, with the same path and defaults
    /// semantics as [`ConfigTree::keys`]. On key collision the local value
    /// wins while keeping the position of the first insertion.
    ///
    /// `Section` values imported from the defaults overlay carry ids
    /// belonging to the defaults tree.
    #[must_use]
    pub fn values(&self, from: SectionId, deep: bool) -> IndexMap<String, ConfigValue> {
        let mut values = IndexMap::new();
        if self.options.copy_defaults {
            if let Some((defaults, section)) = self.default_section(from) {
                values.extend(defaults.values(section, deep));
            }
        }
        self.collect_values(from, "", deep, &mut values);
        values
    }

    fn collect_keys(
        &self,
        section: SectionId,
        prefix: &str,
        deep: bool,
        output: &mut IndexSet<String>,
    ) {
        for (key, value) in &self.node(section).entries {
            let path = self.join_path(prefix, key);
            if deep {
                if let ConfigValue::Section(child) = value {
                    output.insert(path.clone());
                    self.collect_keys(*child, &path, deep, output);
                    continue;
                }
            }
            output.insert(path);
        }
    }

    fn collect_values(
        &self,
        section: SectionId,
        prefix: &str,
        deep: bool,
        output: &mut IndexMap<String, ConfigValue>,
    ) {
        for (key, value) in &self.node(section).entries {
            let path = self.join_path(prefix, key);
            if deep {
                if let ConfigValue::Section(child) = value {
                    output.insert(path.clone(), value.clone());
                    self.collect_values(*child, &path, deep, output);
                    continue;
                }
            }
            output.insert(path, value.clone());
        }
    }
}
