//! The polymorphic value cell stored at each key of a section.

mod coerce;
mod serde_impls;

pub use coerce::Coerce;

use indexmap::IndexMap;

use crate::tree::SectionId;

/// A value held at one key of a section.
///
/// Scalars are stored at the widest width (`i64` for integers, `f64` for
/// floating-point); the typed accessors on
/// [`ConfigTree`](crate::ConfigTree) narrow on read. Lists and maps nest
/// arbitrarily. A `Section` value is a live link into the owning tree's
/// arena rather than inline data, so cloning it clones the link, not the
/// section.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigValue {
    /// A text scalar.
    String(String),
    /// A boolean scalar.
    Bool(bool),
    /// An integer scalar.
    Int(i64),
    /// A floating-point scalar.
    Float(f64),
    /// An ordered list of values.
    List(Vec<ConfigValue>),
    /// An ordered mapping from string keys to values.
    Map(IndexMap<String, ConfigValue>),
    /// A nested section, identified within its owning tree.
    Section(SectionId),
}

impl ConfigValue {
    /// Returns the text when this is a `String` value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the boolean when this is a `Bool` value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer when this is an `Int` value, without coercion.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the float when this is a `Float` value, without coercion.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the elements when this is a `List` value.
    #[must_use]
    pub fn as_list(&self) -> Option<&[Self]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the entries when this is a `Map` value.
    #[must_use]
    pub fn as_map(&self) -> Option<&IndexMap<String, Self>> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the section id when this is a `Section` value.
    #[must_use]
    pub fn as_section(&self) -> Option<SectionId> {
        match self {
            Self::Section(section) => Some(*section),
            _ => None,
        }
    }

    /// Whether this value is an integer or floating-point scalar.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    /// Numeric view as `i64`, truncating floating-point values towards the
    /// representable range. Non-numeric values have no numeric view.
    #[must_use]
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Float(value) => Some(*value as i64),
            _ => None,
        }
    }

    /// Numeric view as `f64`, widening integer values.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Self::Int(value) => Some(*value as f64),
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Canonical text representation of a scalar. Lists, maps, and sections
    /// have no text representation.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::String(value) => Some(value.clone()),
            Self::Bool(value) => Some(value.to_string()),
            Self::Int(value) => Some(value.to_string()),
            Self::Float(value) => Some(value.to_string()),
            _ => None,
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i8> for ConfigValue {
    fn from(value: i8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i16> for ConfigValue {
    fn from(value: i16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u8> for ConfigValue {
    fn from(value: u8) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u16> for ConfigValue {
    fn from(value: u16) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for ConfigValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f32> for ConfigValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<char> for ConfigValue {
    fn from(value: char) -> Self {
        Self::String(value.to_string())
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ConfigValue>> From<IndexMap<String, T>> for ConfigValue {
    fn from(entries: IndexMap<String, T>) -> Self {
        Self::Map(entries.into_iter().map(|(key, value)| (key, value.into())).collect())
    }
}
