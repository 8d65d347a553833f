//! Per-element conversion rules used by the typed list accessors.

use indexmap::IndexMap;

use super::ConfigValue;

/// Conversion applied to each element of a stored list by
/// [`ConfigTree::typed_list`](crate::ConfigTree::typed_list).
///
/// Elements that do not convert are silently dropped from the result rather
/// than failing the call. Strings convert to numeric targets only when they
/// parse as the target's textual numeral, and to `bool` only when they are
/// exactly `"true"` or `"false"`.
pub trait Coerce: Sized {
    /// Converts a single stored value, or returns `None` when the value is
    /// not convertible to `Self`.
    fn coerce(value: &ConfigValue) -> Option<Self>;
}

impl Coerce for String {
    fn coerce(value: &ConfigValue) -> Option<Self> {
        value.to_text()
    }
}

impl Coerce for bool {
    fn coerce(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::Bool(flag) => Some(*flag),
            ConfigValue::String(text) if text == "true" => Some(true),
            ConfigValue::String(text) if text == "false" => Some(false),
            _ => None,
        }
    }
}

macro_rules! coerce_numeric {
    ($($target:ty),+ $(,)?) => {$(
        impl Coerce for $target {
            fn coerce(value: &ConfigValue) -> Option<Self> {
                match value {
                    ConfigValue::Int(number) => Some(*number as $target),
                    ConfigValue::Float(number) => Some(*number as $target),
                    ConfigValue::String(text) => text.parse().ok(),
                    _ => None,
                }
            }
        }
    )+};
}

coerce_numeric!(i8, i16, i32, i64, f32, f64);

impl Coerce for char {
    fn coerce(value: &ConfigValue) -> Option<Self> {
        match value {
            ConfigValue::String(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(only), None) => Some(only),
                    _ => None,
                }
            }
            ConfigValue::Int(number) => u32::try_from(*number).ok().and_then(char::from_u32),
            ConfigValue::Float(number) => {
                u32::try_from(*number as i64).ok().and_then(char::from_u32)
            }
            _ => None,
        }
    }
}

impl Coerce for IndexMap<String, ConfigValue> {
    fn coerce(value: &ConfigValue) -> Option<Self> {
        value.as_map().cloned()
    }
}
