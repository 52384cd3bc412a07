//! Common utilities for benchmarks

use confshift_core::ConfigValue;
use criterion::Criterion;
use std::fmt::Write;

/// Criterion settings shared by every benchmark group
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(2))
        .measurement_time(std::time::Duration::from_secs(5))
        .sample_size(50)
}

/// YAML document with `sections` top-level mappings of `keys` entries each
pub fn create_yaml_content(sections: usize, keys: usize) -> String {
    let mut out = String::new();
    for s in 0..sections {
        let _ = writeln!(out, "section{}:", s);
        for k in 0..keys {
            let _ = writeln!(out, "  key{}: value{}", k, k);
        }
        let _ = writeln!(out, "  nested:\n    enabled: true\n    ports: [80, 443]");
    }
    out
}

/// INI document with `sections` sections of `keys` options each
pub fn create_ini_content(sections: usize, keys: usize) -> String {
    let mut out = String::new();
    for s in 0..sections {
        let _ = writeln!(out, "[section{}]", s);
        for k in 0..keys {
            let _ = writeln!(out, "key{} = value{}", k, k);
        }
    }
    out
}

/// Chain of mappings `depth` levels deep with `width` leaves per level
pub fn create_nested_config(depth: usize, width: usize) -> ConfigValue {
    let mut value = ConfigValue::empty_map();
    for level in (0..depth).rev() {
        let mut pairs: Vec<(String, ConfigValue)> = (0..width)
            .map(|i| (format!("leaf{}", i), ConfigValue::from(format!("v{}_{}", level, i))))
            .collect();
        pairs.push((format!("level{}", level), value));
        value = ConfigValue::from_pairs(pairs);
    }
    value
}
