//! Canonical configuration value model.
//!
//! Every loader normalizes its parser output into [`ConfigValue`], and every
//! emitter reads from it. Mappings keep insertion order.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Ordered mapping level of the canonical configuration
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// A node of the canonical configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Sequence(Vec<ConfigValue>),
    Map(ConfigMap),
}

impl ConfigValue {
    /// An empty mapping, the state of a freshly created store
    pub fn empty_map() -> Self {
        ConfigValue::Map(ConfigMap::new())
    }

    /// Build a mapping from key/value pairs, keeping their order
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<ConfigValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        ConfigValue::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn is_map(&self) -> bool {
        matches!(self, ConfigValue::Map(_))
    }

    pub fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a key when this value is a mapping
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Human-readable name of the variant, used in type errors
    pub fn type_name(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "boolean",
            ConfigValue::Number(_) => "number",
            ConfigValue::String(_) => "string",
            ConfigValue::Sequence(_) => "sequence",
            ConfigValue::Map(_) => "mapping",
        }
    }

    /// Text form used by the flattener and the environment emitters.
    ///
    /// Strings are verbatim, numbers use their JSON text, booleans are
    /// `true`/`false`, null is the empty string, and sequences or mappings
    /// are rendered as compact JSON.
    pub fn to_text(&self) -> String {
        match self {
            ConfigValue::Null => String::new(),
            ConfigValue::Bool(b) => b.to_string(),
            ConfigValue::Number(n) => n.to_string(),
            ConfigValue::String(s) => s.clone(),
            ConfigValue::Sequence(_) | ConfigValue::Map(_) => {
                // String keys and finite numbers only, so this never fails
                serde_json::to_string(self).unwrap_or_default()
            },
        }
    }
}

impl Default for ConfigValue {
    fn default() -> Self {
        ConfigValue::empty_map()
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::String(s.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::String(s)
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Bool(b)
    }
}

impl From<i64> for ConfigValue {
    fn from(n: i64) -> Self {
        ConfigValue::Number(n.into())
    }
}

impl From<i32> for ConfigValue {
    fn from(n: i32) -> Self {
        ConfigValue::Number(n.into())
    }
}

impl From<u64> for ConfigValue {
    fn from(n: u64) -> Self {
        ConfigValue::Number(n.into())
    }
}

impl From<f64> for ConfigValue {
    /// Non-finite floats have no JSON form and are kept as text
    fn from(n: f64) -> Self {
        match serde_json::Number::from_f64(n) {
            Some(num) => ConfigValue::Number(num),
            None => ConfigValue::String(n.to_string()),
        }
    }
}

impl From<Vec<ConfigValue>> for ConfigValue {
    fn from(items: Vec<ConfigValue>) -> Self {
        ConfigValue::Sequence(items)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(map: ConfigMap) -> Self {
        ConfigValue::Map(map)
    }
}
