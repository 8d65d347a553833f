//! JSON codec boundary built on `serde_json`.
//!
//! External codecs encode domain values into generic scalars, lists, and
//! maps; these helpers translate between that JSON representation and the
//! tree's value model. JSON `null` maps to the absent value and is dropped
//! from lists and objects on import.

use indexmap::IndexMap;
use serde_json::{Map as JsonMap, Number, Value as Json};

use crate::error::TreeResult;
use crate::tree::{ConfigTree, SectionId};
use crate::value::ConfigValue;

impl ConfigValue {
    /// Converts a JSON value into a tree value; `None` for `null`.
    ///
    /// Numbers that fit `i64` become `Int`, everything else `Float`.
    /// Objects become `Map` values; route them through
    /// [`ConfigTree::import_json`] to turn nesting into sub-sections.
    #[must_use]
    pub fn from_json(json: &Json) -> Option<Self> {
        match json {
            Json::Null => None,
            Json::Bool(value) => Some(Self::Bool(*value)),
            Json::Number(number) => Some(number_to_value(number)),
            Json::String(text) => Some(Self::String(text.clone())),
            Json::Array(items) => Some(Self::List(
                items.iter().filter_map(Self::from_json).collect(),
            )),
            Json::Object(entries) => Some(Self::Map(map_from_object(entries))),
        }
    }
}

impl ConfigTree {
    /// Exports the section at `from` as a JSON object, resolving nested
    /// sections through the arena. Non-finite floats export as `null`.
    #[must_use]
    pub fn to_json(&self, from: SectionId) -> Json {
        let mut object = JsonMap::new();
        for (key, value) in &self.node(from).entries {
            object.insert(key.clone(), self.value_to_json(value));
        }
        Json::Object(object)
    }

    /// Imports a nested JSON object at `path` as a section, recursing into
    /// nested objects the way
    /// [`ConfigTree::create_section_with`] does for maps.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::EmptyPath`](crate::TreeError::EmptyPath) when
    /// `path` or any object key is empty.
    pub fn import_json(
        &mut self,
        from: SectionId,
        path: &str,
        object: &JsonMap<String, Json>,
    ) -> TreeResult<SectionId> {
        self.create_section_with(from, path, map_from_object(object))
    }

    fn value_to_json(&self, value: &ConfigValue) -> Json {
        match value {
            ConfigValue::String(text) => Json::String(text.clone()),
            ConfigValue::Bool(flag) => Json::Bool(*flag),
            ConfigValue::Int(number) => Json::from(*number),
            ConfigValue::Float(number) => Number::from_f64(*number).map_or(Json::Null, Json::Number),
            ConfigValue::List(items) => {
                Json::Array(items.iter().map(|item| self.value_to_json(item)).collect())
            }
            ConfigValue::Map(entries) => {
                let mut object = JsonMap::new();
                for (key, value) in entries {
                    object.insert(key.clone(), self.value_to_json(value));
                }
                Json::Object(object)
            }
            ConfigValue::Section(section) => self.to_json(*section),
        }
    }
}

fn number_to_value(number: &Number) -> ConfigValue {
    if let Some(integer) = number.as_i64() {
        ConfigValue::Int(integer)
    } else {
        ConfigValue::Float(number.as_f64().unwrap_or(0.0))
    }
}

fn map_from_object(entries: &JsonMap<String, Json>) -> IndexMap<String, ConfigValue> {
    entries
        .iter()
        .filter_map(|(key, json)| ConfigValue::from_json(json).map(|value| (key.clone(), value)))
        .collect()
}
