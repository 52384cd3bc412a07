//! JSON emitter.

use camino::Utf8Path;
use confshift_core::{ConfShiftError, ConfigValue};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{error, info};

use crate::ConfigResult;

const INDENT: &[u8] = b"    ";

/// Render the canonical configuration as a JSON document with 4-space
/// indentation and no trailing newline.
pub fn to_json_string(config: &ConfigValue) -> ConfigResult<String> {
    if !config.is_map() {
        let err = ConfShiftError::not_a_mapping("JSON conversion", config.type_name());
        error!("Error converting configuration to JSON: {}", err);
        return Err(err);
    }

    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    config.serialize(&mut serializer).map_err(|e| ConfShiftError::Type {
        message: format!("JSON serialization error: {}", e),
    })?;

    String::from_utf8(buf).map_err(|e| ConfShiftError::Type {
        message: format!("JSON serialization produced invalid UTF-8: {}", e),
    })
}

/// Write the canonical configuration to a JSON file
pub fn write_json(config: &ConfigValue, path: &Utf8Path) -> ConfigResult<()> {
    let document = to_json_string(config)?;

    std::fs::write(path, document).map_err(|e| {
        error!("Failed to write JSON file {}: {}", path, e);
        ConfShiftError::io(format!("Failed to write JSON file {}", path), e)
    })?;

    info!("Successfully written configuration to JSON file {}", path);
    Ok(())
}
