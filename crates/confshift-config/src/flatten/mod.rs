//! Flattening of nested configuration into single-level key/value pairs.
//!
//! Nested keys are joined onto their parent path with a separator. Every
//! non-mapping value is terminal and rendered with
//! [`ConfigValue::to_text`]. Traversal is depth-first in mapping order.
//!
//! Two distinct paths can join to the same key (`{a_b: 1}` and
//! `{a: {b: 2}}` both give `a_b`). By default the later path silently
//! overwrites the value and the key keeps its first-seen position;
//! [`CollisionPolicy::Error`] turns this into a [`ConfShiftError::KeyCollision`].

use confshift_core::{ConfShiftError, ConfigMap, ConfigValue};
use indexmap::IndexMap;
use tracing::error;

use crate::ConfigResult;

/// Flattened configuration: joined key to text value, in traversal order
pub type FlatConfig = IndexMap<String, String>;

/// Default separator between parent and child keys
pub const DEFAULT_SEPARATOR: &str = "_";

/// What to do when two paths flatten to the same key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Later value wins, first position is kept
    #[default]
    Overwrite,
    /// Fail with `KeyCollision`
    Error,
}

/// Flattening parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenOptions {
    pub prefix: String,
    pub separator: String,
    pub collision: CollisionPolicy,
}

impl FlattenOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_collision(mut self, collision: CollisionPolicy) -> Self {
        self.collision = collision;
        self
    }
}

impl Default for FlattenOptions {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            collision: CollisionPolicy::Overwrite,
        }
    }
}

/// Flatten a mapping into joined keys and text values.
///
/// Fails with a type error when `value` is not a mapping.
pub fn flatten(value: &ConfigValue, options: &FlattenOptions) -> ConfigResult<FlatConfig> {
    let map = value.as_map().ok_or_else(|| {
        let err = ConfShiftError::not_a_mapping("flatten", value.type_name());
        error!("Error flattening configuration: {}", err);
        err
    })?;

    let mut out = FlatConfig::new();
    flatten_into(map, &options.prefix, options, &mut out)?;
    Ok(out)
}

/// Flatten with an explicit prefix and separator and the overwrite policy
pub fn flatten_with(value: &ConfigValue, prefix: &str, separator: &str) -> ConfigResult<FlatConfig> {
    flatten(
        value,
        &FlattenOptions::default()
            .with_prefix(prefix)
            .with_separator(separator),
    )
}

fn flatten_into(
    map: &ConfigMap,
    parent: &str,
    options: &FlattenOptions,
    out: &mut FlatConfig,
) -> ConfigResult<()> {
    for (key, value) in map {
        let joined = if parent.is_empty() {
            key.clone()
        } else {
            format!("{}{}{}", parent, options.separator, key)
        };

        match value {
            ConfigValue::Map(child) => flatten_into(child, &joined, options, out)?,
            terminal => {
                let text = terminal.to_text();
                if options.collision == CollisionPolicy::Error && out.contains_key(&joined) {
                    let err = ConfShiftError::KeyCollision { key: joined };
                    error!("Error flattening configuration: {}", err);
                    return Err(err);
                }
                out.insert(joined, text);
            },
        }
    }

    Ok(())
}
