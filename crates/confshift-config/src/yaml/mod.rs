//! YAML loading and normalization into the canonical model.

use camino::Utf8Path;
use confshift_core::{ConfShiftError, ConfigMap, ConfigValue, Location};
use serde::Deserialize;
use serde_yaml::Value;
use tracing::{error, info};

use crate::ConfigResult;

const FORMAT: &str = "YAML";

/// Parse a single YAML document into a canonical configuration.
///
/// An empty or null document yields an empty mapping. `path` is only used
/// for diagnostics.
pub fn parse_yaml(content: &str, path: &str) -> ConfigResult<ConfigValue> {
    let mut documents = serde_yaml::Deserializer::from_str(content);
    let Some(first) = documents.next() else {
        return Ok(ConfigValue::empty_map());
    };

    let mut document = Value::deserialize(first).map_err(|e| yaml_error(path, &e))?;
    if documents.next().is_some() {
        return Err(parse_error(
            path,
            "expected a single document but found more than one".to_string(),
        ));
    }

    document.apply_merge().map_err(|e| yaml_error(path, &e))?;

    match document {
        Value::Null => Ok(ConfigValue::empty_map()),
        other => normalize(other, path),
    }
}

/// Load and parse a YAML file from disk
pub fn load_from_file(path: &Utf8Path) -> ConfigResult<ConfigValue> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        let err = ConfShiftError::read_failure(path.as_str(), FORMAT, e);
        match &err {
            ConfShiftError::FileNotFound { .. } => error!("YAML file not found: {}", path),
            other => error!("Failed to read YAML file {}: {}", path, other),
        }
        err
    })?;

    let config = parse_yaml(&content, path.as_str()).map_err(|e| {
        error!("Error parsing YAML file {}: {}", path, e);
        e
    })?;

    info!("Successfully read YAML config file {}", path);
    Ok(config)
}

fn normalize(value: Value, path: &str) -> ConfigResult<ConfigValue> {
    Ok(match value {
        Value::Null => ConfigValue::Null,
        Value::Bool(b) => ConfigValue::Bool(b),
        Value::Number(n) => number_value(&n),
        Value::String(s) => ConfigValue::String(s),
        Value::Sequence(items) => ConfigValue::Sequence(
            items
                .into_iter()
                .map(|item| normalize(item, path))
                .collect::<ConfigResult<Vec<_>>>()?,
        ),
        Value::Mapping(mapping) => {
            let mut map = ConfigMap::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(key_text(&key, path)?, normalize(value, path)?);
            }
            ConfigValue::Map(map)
        },
        Value::Tagged(tagged) => {
            return Err(parse_error(
                path,
                format!("custom tag {} is not supported", tagged.tag),
            ));
        },
    })
}

fn number_value(n: &serde_yaml::Number) -> ConfigValue {
    if let Some(i) = n.as_i64() {
        ConfigValue::from(i)
    } else if let Some(u) = n.as_u64() {
        ConfigValue::from(u)
    } else {
        ConfigValue::from(n.as_f64().unwrap_or(f64::NAN))
    }
}

/// Scalar keys are rendered to text; compound keys cannot be represented
fn key_text(key: &Value, path: &str) -> ConfigResult<String> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(number_value(n).to_text()),
        other => Err(parse_error(
            path,
            format!("mapping keys must be scalars, found {}", kind_of(other)),
        )),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
        _ => "a scalar",
    }
}

fn yaml_error(path: &str, e: &serde_yaml::Error) -> ConfShiftError {
    ConfShiftError::Parse {
        path: path.to_string(),
        format: FORMAT,
        message: e.to_string(),
        location: e.location().map(|loc| Location {
            line: loc.line(),
            column: loc.column(),
        }),
    }
}

fn parse_error(path: &str, message: String) -> ConfShiftError {
    ConfShiftError::Parse {
        path: path.to_string(),
        format: FORMAT,
        message,
        location: None,
    }
}
