//! INI-style (`.cfg` / `.conf`) loading.
//!
//! Sections become top-level keys whose values map option names to string
//! values. INI has no native typing, so nothing is coerced. Parsing follows
//! the usual `configparser` conventions:
//! - option names are lowercased, section names keep their case
//! - options of a `[DEFAULT]` section are inherited by every other section
//! - duplicate sections or options are rejected
//! - options before the first section header are rejected
//! - indented lines continue the previous value
//! - quotes and backslashes are kept verbatim
//! - `%(name)s` expands to another option of the same section (or
//!   `[DEFAULT]`) and `%%` is a literal `%`

use camino::Utf8Path;
use confshift_core::{ConfShiftError, ConfigMap, ConfigValue, Location};
use indexmap::IndexMap;
use ::ini::{Ini, ParseOption};
use tracing::{error, info};

use crate::ConfigResult;

const FORMAT: &str = "INI";

/// Name of the section whose options every other section inherits
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Nesting limit for `%(name)s` references
pub const MAX_INTERPOLATION_DEPTH: usize = 10;

/// Parse INI-style text into a canonical configuration.
///
/// `path` is only used for diagnostics.
pub fn parse_ini(content: &str, path: &str) -> ConfigResult<ConfigValue> {
    let option = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        enabled_indented_mutiline_value: true,
        ..ParseOption::default()
    };

    let ini = Ini::load_from_str_opt(content, option).map_err(|e| ConfShiftError::Parse {
        path: path.to_string(),
        format: FORMAT,
        message: e.msg.to_string(),
        location: Some(Location {
            line: e.line,
            column: e.col,
        }),
    })?;

    let mut defaults: IndexMap<String, String> = IndexMap::new();
    let mut sections: IndexMap<String, IndexMap<String, String>> = IndexMap::new();
    let mut seen_default = false;

    for (section, properties) in ini.iter() {
        let options = match section {
            None if properties.iter().next().is_none() => continue,
            None => {
                return Err(parse_error(
                    path,
                    "file contains options before the first section header".to_string(),
                ));
            },
            Some(DEFAULT_SECTION) => {
                if seen_default {
                    return Err(parse_error(
                        path,
                        format!("section '{}' already exists", DEFAULT_SECTION),
                    ));
                }
                seen_default = true;
                &mut defaults
            },
            Some(name) => {
                if sections.contains_key(name) {
                    return Err(parse_error(path, format!("section '{}' already exists", name)));
                }
                sections.entry(name.to_string()).or_default()
            },
        };

        for (key, value) in properties.iter() {
            let key = key.to_lowercase();
            if options.contains_key(&key) {
                return Err(parse_error(
                    path,
                    format!(
                        "option '{}' in section '{}' already exists",
                        key,
                        section.unwrap_or_default()
                    ),
                ));
            }
            options.insert(key, value.to_string());
        }
    }

    let mut config = ConfigMap::with_capacity(sections.len());
    for (name, own) in sections {
        let options = with_defaults(&defaults, own);
        let resolved =
            interpolate_section(&name, &options).map_err(|message| parse_error(path, message))?;
        config.insert(name, ConfigValue::Map(resolved));
    }

    Ok(ConfigValue::Map(config))
}

/// Load and parse an INI-style file from disk
pub fn load_from_file(path: &Utf8Path) -> ConfigResult<ConfigValue> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        let err = ConfShiftError::read_failure(path.as_str(), FORMAT, e);
        match &err {
            ConfShiftError::FileNotFound { .. } => error!("INI file not found: {}", path),
            other => error!("Error reading INI file {}: {}", path, other),
        }
        err
    })?;

    let config = parse_ini(&content, path.as_str()).map_err(|e| {
        error!("Error reading INI file {}: {}", path, e);
        e
    })?;

    info!("Successfully read INI config file {}", path);
    Ok(config)
}

/// Inherited options first, in `[DEFAULT]` order, then the section's own
fn with_defaults(
    defaults: &IndexMap<String, String>,
    own: IndexMap<String, String>,
) -> IndexMap<String, String> {
    let mut merged = defaults.clone();
    for (key, value) in own {
        merged.insert(key, value);
    }
    merged
}

fn interpolate_section(
    section: &str,
    options: &IndexMap<String, String>,
) -> Result<ConfigMap, String> {
    options
        .iter()
        .map(|(key, raw)| {
            let value = interpolate(section, key, raw, options, 1)?;
            Ok((key.clone(), ConfigValue::String(value)))
        })
        .collect()
}

/// Expand `%%` and `%(name)s` in `raw`, the value of `option`
fn interpolate(
    section: &str,
    option: &str,
    raw: &str,
    options: &IndexMap<String, String>,
    depth: usize,
) -> Result<String, String> {
    if depth > MAX_INTERPOLATION_DEPTH {
        return Err(format!(
            "interpolation of option '{}' in section '{}' is nested deeper than {} levels",
            option, section, MAX_INTERPOLATION_DEPTH
        ));
    }

    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if let Some(after) = rest.strip_prefix("%%") {
            out.push('%');
            rest = after;
            continue;
        }

        let Some(after) = rest.strip_prefix("%(") else {
            return Err(format!(
                "'%' must be followed by '%' or '(' in option '{}' of section '{}', found: {}",
                option, section, rest
            ));
        };

        let reference = after
            .find(')')
            .filter(|&end| end > 0 && after[end + 1..].starts_with('s'));
        let Some(end) = reference else {
            return Err(format!(
                "bad interpolation variable reference in option '{}' of section '{}': {}",
                option, section, rest
            ));
        };

        let name = after[..end].to_lowercase();
        let value = options.get(&name).ok_or_else(|| {
            format!(
                "option '{}' in section '{}' references '{}', which is not defined",
                option, section, name
            )
        })?;

        if value.contains('%') {
            out.push_str(&interpolate(section, &name, value, options, depth + 1)?);
        } else {
            out.push_str(value);
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    Ok(out)
}

fn parse_error(path: &str, message: String) -> ConfShiftError {
    ConfShiftError::Parse {
        path: path.to_string(),
        format: FORMAT,
        message,
        location: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn section<'a>(config: &'a ConfigValue, name: &str) -> &'a ConfigMap {
        config.get(name).and_then(ConfigValue::as_map).unwrap()
    }

    #[test]
    fn test_parse_sections() {
        let content = r#"
[server]
host = 0.0.0.0
port: 8080

; comment line
# another comment
[database]
url = postgres://localhost/app
pool_size = 10
"#;
        let config = parse_ini(content, "app.cfg").unwrap();
        let keys: Vec<&str> = config.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["server", "database"]);

        let server = section(&config, "server");
        assert_eq!(server.get("host"), Some(&ConfigValue::from("0.0.0.0")));
        assert_eq!(server.get("port"), Some(&ConfigValue::from("8080")));

        let database = section(&config, "database");
        assert_eq!(database.len(), 2);
        assert_eq!(database.get("pool_size"), Some(&ConfigValue::from("10")));
    }

    #[test]
    fn test_values_are_never_coerced() {
        let config = parse_ini("[flags]\nenabled = true\nratio = 0.5\n", "flags.conf").unwrap();
        let flags = section(&config, "flags");
        assert_eq!(flags.get("enabled"), Some(&ConfigValue::from("true")));
        assert_eq!(flags.get("ratio"), Some(&ConfigValue::from("0.5")));
    }

    #[test]
    fn test_option_names_lowercased_sections_not() {
        let config = parse_ini("[MySection]\nUserName = Alice\n", "case.cfg").unwrap();
        let my = section(&config, "MySection");
        assert_eq!(my.get("username"), Some(&ConfigValue::from("Alice")));
        assert!(my.get("UserName").is_none());
    }

    #[test]
    fn test_no_sections_is_empty() {
        assert_eq!(parse_ini("", "empty.cfg").unwrap(), ConfigValue::empty_map());
        assert_eq!(parse_ini("; nothing here\n", "c.cfg").unwrap(), ConfigValue::empty_map());
    }

    #[test]
    fn test_default_section_inherited() {
        let content = "[DEFAULT]\ntimeout = 30\nretries = 3\n\n[api]\nurl = http://api\nretries = 5\n\n[worker]\n";
        let config = parse_ini(content, "defaults.cfg").unwrap();

        let keys: Vec<&str> = config.as_map().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["api", "worker"]);

        let api = section(&config, "api");
        let api_keys: Vec<&str> = api.keys().map(String::as_str).collect();
        assert_eq!(api_keys, vec!["timeout", "retries", "url"]);
        assert_eq!(api.get("retries"), Some(&ConfigValue::from("5")));

        let worker = section(&config, "worker");
        assert_eq!(worker.get("timeout"), Some(&ConfigValue::from("30")));
        assert_eq!(worker.len(), 2);
    }

    #[test]
    fn test_values_kept_verbatim() {
        let config = parse_ini("[s]\nquoted = \"a b\"\npath = C:\\temp\n", "raw.cfg").unwrap();
        let s = section(&config, "s");
        assert_eq!(s.get("quoted"), Some(&ConfigValue::from("\"a b\"")));
        assert_eq!(s.get("path"), Some(&ConfigValue::from("C:\\temp")));
    }

    #[test]
    fn test_multiline_values() {
        let config = parse_ini("[s]\nk = first\n  continued\nnext = 1\n", "multi.cfg").unwrap();
        let s = section(&config, "s");
        let keys: Vec<&str> = s.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["k", "next"]);
        assert_eq!(s.get("k"), Some(&ConfigValue::from("first\ncontinued")));
        assert_eq!(s.get("next"), Some(&ConfigValue::from("1")));
    }

    #[test]
    fn test_percent_escape() {
        let config = parse_ini("[s]\npct = 50%%\n", "pct.cfg").unwrap();
        assert_eq!(section(&config, "s").get("pct"), Some(&ConfigValue::from("50%")));
    }

    #[test]
    fn test_interpolation_within_section() {
        let config = parse_ini("[s]\nhome = /h\nk = %(home)s/x\n", "interp.cfg").unwrap();
        assert_eq!(section(&config, "s").get("k"), Some(&ConfigValue::from("/h/x")));
    }

    #[test]
    fn test_interpolation_from_defaults_and_chained() {
        let content = "[DEFAULT]\nroot = /srv\n\n[app]\ndata = %(root)s/data\nCACHE = %(DATA)s/cache\n";
        let config = parse_ini(content, "interp.cfg").unwrap();
        let app = section(&config, "app");
        assert_eq!(app.get("data"), Some(&ConfigValue::from("/srv/data")));
        assert_eq!(app.get("cache"), Some(&ConfigValue::from("/srv/data/cache")));
    }

    #[test]
    fn test_section_value_overrides_default_in_interpolation() {
        let content = "[DEFAULT]\nhost = default\nurl = http://%(host)s\n\n[api]\nhost = api\n";
        let config = parse_ini(content, "interp.cfg").unwrap();
        assert_eq!(section(&config, "api").get("url"), Some(&ConfigValue::from("http://api")));
    }

    #[test]
    fn test_unknown_reference_rejected() {
        let err = parse_ini("[s]\nk = %(missing)s\n", "interp.cfg").unwrap_err();
        assert_eq!(err.kind(), "parse");
        assert!(err.to_string().contains("'missing'"));
    }

    #[test]
    fn test_lone_percent_rejected() {
        let err = parse_ini("[s]\nk = 50%\n", "pct.cfg").unwrap_err();
        assert_eq!(err.kind(), "parse");

        let err = parse_ini("[s]\nk = %(name)d\nname = 1\n", "pct.cfg").unwrap_err();
        assert_eq!(err.kind(), "parse");
    }

    #[test]
    fn test_self_reference_hits_depth_limit() {
        let err = parse_ini("[s]\nk = %(k)s\n", "loop.cfg").unwrap_err();
        assert!(err.to_string().contains("nested deeper"));
    }

    #[test]
    fn test_options_before_section_rejected() {
        let err = parse_ini("orphan = 1\n[s]\nk = v\n", "orphan.cfg").unwrap_err();
        assert_eq!(err.kind(), "parse");
    }

    #[test]
    fn test_duplicate_option_rejected() {
        let err = parse_ini("[s]\nkey = 1\nKEY = 2\n", "dup.cfg").unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_duplicate_section_rejected() {
        let err = parse_ini("[s]\na = 1\n[s]\nb = 2\n", "dup.cfg").unwrap_err();
        assert!(err.to_string().contains("section 's' already exists"));
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = camino::Utf8PathBuf::try_from(temp_dir.path().join("test.cfg")).unwrap();
        std::fs::write(&path, "[section]\nkey = value\n").unwrap();

        let config = load_from_file(&path).unwrap();
        assert_eq!(
            config,
            ConfigValue::from_pairs([("section", ConfigValue::from_pairs([("key", "value")]))])
        );

        let err = load_from_file(&path.with_file_name("missing.conf")).unwrap_err();
        assert!(matches!(err, ConfShiftError::FileNotFound { .. }));
    }
}
