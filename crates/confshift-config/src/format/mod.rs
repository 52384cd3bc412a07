//! Input format selection.
//!
//! Loading dispatches over [`ConfigFormat`]; sniffing a format from a file
//! name is a thin adapter in front of that dispatch.

use camino::Utf8Path;
use confshift_core::{utils::get_extension, ConfShiftError};
use std::fmt;
use tracing::{debug, error};

use crate::ConfigResult;

/// Supported input formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// Single-document YAML (`.yaml`)
    Yaml,
    /// INI-style sections and options (`.cfg`, `.conf`)
    Ini,
}

impl ConfigFormat {
    /// Map a lowercased extension onto a format
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "yaml" => Some(ConfigFormat::Yaml),
            "cfg" | "conf" => Some(ConfigFormat::Ini),
            _ => None,
        }
    }

    /// Infer the format from the text after the last `.` of the path
    pub fn from_path(path: &Utf8Path) -> ConfigResult<Self> {
        let extension = get_extension(path);
        match Self::from_extension(&extension) {
            Some(format) => {
                debug!("Detected {} format for {}", format, path);
                Ok(format)
            },
            None => {
                error!("Failed to read config file {}: unsupported file format", path);
                Err(ConfShiftError::UnsupportedFormat {
                    path: path.to_string(),
                    extension,
                })
            },
        }
    }

    /// Display name used in diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            ConfigFormat::Yaml => "YAML",
            ConfigFormat::Ini => "INI",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
