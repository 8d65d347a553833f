//! Typed scalar and list accessors layered over the generic primitives.
//!
//! Single-path forms are default-aware: the raw default is fetched from the
//! defaults tree, used when type-compatible, and the kind's zero value
//! otherwise. The `*_or` forms read the local tree only and fall back to
//! the caller's value. Numeric coercion is C-style: integers truncate low
//! bits when narrowing, floats saturate to the target integer range.

use crate::value::{Coerce, ConfigValue};

use super::{ConfigTree, SectionId};

impl ConfigTree {
    /// The scalar at `path` as text, consulting defaults; `None` when
    /// neither tree holds a scalar there.
    #[must_use]
    pub fn get_string(&self, from: SectionId, path: &str) -> Option<String> {
        self.resolve_ref(from, path)
            .and_then(ConfigValue::to_text)
            .or_else(|| {
                self.default_value(from, path)
                    .and_then(|value| value.to_text())
            })
    }

    /// The local scalar at `path` as text, or `default`.
    #[must_use]
    pub fn get_string_or(&self, from: SectionId, path: &str, default: &str) -> String {
        self.resolve_ref(from, path)
            .and_then(ConfigValue::to_text)
            .unwrap_or_else(|| default.to_owned())
    }

    /// Whether the raw value at `path` (local or default) is a string.
    #[must_use]
    pub fn is_string(&self, from: SectionId, path: &str) -> bool {
        self.lookup_ref(from, path)
            .is_some_and(|value| matches!(value, ConfigValue::String(_)))
    }

    /// The boolean at `path`, using a compatible default or `false`.
    #[must_use]
    pub fn get_bool(&self, from: SectionId, path: &str) -> bool {
        let default = self
            .default_value(from, path)
            .and_then(|value| value.as_bool())
            .unwrap_or(false);
        self.get_bool_or(from, path, default)
    }

    /// The local boolean at `path`, or `default`. No coercion: only a
    /// stored `Bool` matches.
    #[must_use]
    pub fn get_bool_or(&self, from: SectionId, path: &str, default: bool) -> bool {
        self.resolve_ref(from, path)
            .and_then(ConfigValue::as_bool)
            .unwrap_or(default)
    }

    /// Whether the raw value at `path` (local or default) is a boolean.
    #[must_use]
    pub fn is_bool(&self, from: SectionId, path: &str) -> bool {
        self.lookup_ref(from, path)
            .is_some_and(|value| matches!(value, ConfigValue::Bool(_)))
    }

    /// The number at `path` as `i32`, using a compatible default or `0`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftree::ConfigTree;
    ///
    /// # fn main() -> conftree::TreeResult<()> {
    /// let mut tree = ConfigTree::new();
    /// let root = tree.root();
    /// tree.set(root, "ratio", 3.9)?;
    /// assert_eq!(tree.get_i32(root, "ratio"), 3);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn get_i32(&self, from: SectionId, path: &str) -> i32 {
        let default = match self.default_value(from, path) {
            Some(ConfigValue::Int(number)) => number as i32,
            Some(ConfigValue::Float(number)) => number as i32,
            _ => 0,
        };
        self.get_i32_or(from, path, default)
    }

    /// The local number at `path` as `i32`, or `default`.
    #[must_use]
    pub fn get_i32_or(&self, from: SectionId, path: &str, default: i32) -> i32 {
        match self.resolve_ref(from, path) {
            Some(ConfigValue::Int(number)) => *number as i32,
            Some(ConfigValue::Float(number)) => *number as i32,
            _ => default,
        }
    }

    /// The number at `path` as `i64`, using a compatible default or `0`.
    #[must_use]
    pub fn get_i64(&self, from: SectionId, path: &str) -> i64 {
        let default = self
            .default_value(from, path)
            .and_then(|value| value.to_i64())
            .unwrap_or(0);
        self.get_i64_or(from, path, default)
    }

    /// The local number at `path` as `i64`, or `default`.
    #[must_use]
    pub fn get_i64_or(&self, from: SectionId, path: &str, default: i64) -> i64 {
        self.resolve_ref(from, path)
            .and_then(ConfigValue::to_i64)
            .unwrap_or(default)
    }

    /// Whether the raw value at `path` (local or default) is an integer.
    #[must_use]
    pub fn is_int(&self, from: SectionId, path: &str) -> bool {
        self.lookup_ref(from, path)
            .is_some_and(|value| matches!(value, ConfigValue::Int(_)))
    }

    /// The number at `path` as `f64`, using a compatible default or `0.0`.
    #[must_use]
    pub fn get_f64(&self, from: SectionId, path: &str) -> f64 {
        let default = self
            .default_value(from, path)
            .and_then(|value| value.to_f64())
            .unwrap_or(0.0);
        self.get_f64_or(from, path, default)
    }

    /// The local number at `path` as `f64`, or `default`.
    #[must_use]
    pub fn get_f64_or(&self, from: SectionId, path: &str, default: f64) -> f64 {
        self.resolve_ref(from, path)
            .and_then(ConfigValue::to_f64)
            .unwrap_or(default)
    }

    /// Whether the raw value at `path` (local or default) is floating-point.
    #[must_use]
    pub fn is_float(&self, from: SectionId, path: &str) -> bool {
        self.lookup_ref(from, path)
            .is_some_and(|value| matches!(value, ConfigValue::Float(_)))
    }

    /// The raw list at `path`, consulting defaults when the local tree has
    /// no list there.
    #[must_use]
    pub fn get_list(&self, from: SectionId, path: &str) -> Option<Vec<ConfigValue>> {
        self.resolve_ref(from, path)
            .and_then(ConfigValue::as_list)
            .map(<[ConfigValue]>::to_vec)
            .or_else(|| match self.default_value(from, path) {
                Some(ConfigValue::List(items)) => Some(items),
                _ => None,
            })
    }

    /// The local list at `path`, or `default`.
    #[must_use]
    pub fn get_list_or(
        &self,
        from: SectionId,
        path: &str,
        default: Vec<ConfigValue>,
    ) -> Vec<ConfigValue> {
        self.resolve_ref(from, path)
            .and_then(ConfigValue::as_list)
            .map_or(default, <[ConfigValue]>::to_vec)
    }

    /// Whether the raw value at `path` (local or default) is a list.
    #[must_use]
    pub fn is_list(&self, from: SectionId, path: &str) -> bool {
        self.lookup_ref(from, path)
            .is_some_and(|value| matches!(value, ConfigValue::List(_)))
    }

    /// The list at `path` converted element-wise to `T`, dropping elements
    /// that do not convert. Always concrete: an absent or non-list value
    /// yields an empty vector.
    ///
    /// Supported targets are the [`Coerce`] implementors: `String`, `bool`,
    /// the integer and float widths, `char`, and
    /// `IndexMap<String, ConfigValue>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use conftree::{ConfigTree, ConfigValue};
    ///
    /// # fn main() -> conftree::TreeResult<()> {
    /// let mut tree = ConfigTree::new();
    /// let root = tree.root();
    /// let mixed = vec![
    ///     ConfigValue::from("1"),
    ///     ConfigValue::from(2),
    ///     ConfigValue::from("bad"),
    ///     ConfigValue::from(3.9),
    /// ];
    /// tree.set(root, "numbers", mixed)?;
    /// assert_eq!(tree.typed_list::<i32>(root, "numbers"), vec![1, 2, 3]);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn typed_list<T: Coerce>(&self, from: SectionId, path: &str) -> Vec<T> {
        self.get_list(from, path)
            .map(|items| items.iter().filter_map(T::coerce).collect())
            .unwrap_or_default()
    }
}
