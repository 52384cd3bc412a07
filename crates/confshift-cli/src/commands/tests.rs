//! Unit tests for CLI commands.

use super::*;
use camino::Utf8PathBuf;
use confshift_core::ConfShiftError;
use std::fs;
use tempfile::TempDir;

/// Write `content` to `name` inside the temp dir and return its path
fn write_input(temp_dir: &TempDir, name: &str, content: &str) -> Utf8PathBuf {
    let path = Utf8PathBuf::try_from(temp_dir.path().join(name)).expect("temp path is UTF-8");
    fs::write(&path, content).expect("Failed to write input file");
    path
}

fn out_path(temp_dir: &TempDir, name: &str) -> Utf8PathBuf {
    Utf8PathBuf::try_from(temp_dir.path().join(name)).expect("temp path is UTF-8")
}

#[test]
fn test_show_renders_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "app.yaml", "name: app\nport: 80\n");
    let ctx = CommandContext::new(None);

    let json = show::render(&input, &ctx).unwrap();
    assert_eq!(json, "{\n    \"name\": \"app\",\n    \"port\": 80\n}");
}

#[test]
fn test_format_override() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "settings.ini", "[main]\nkey = value\n");

    let err = show::render(&input, &CommandContext::new(None)).unwrap_err();
    assert!(matches!(err, ConfShiftError::UnsupportedFormat { .. }));

    let json = show::render(&input, &CommandContext::new(Some(ConfigFormat::Ini))).unwrap();
    assert!(json.contains("\"main\""));
}

#[test]
fn test_flatten_options() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "app.yaml", "db:\n  host: localhost\n  port: 5432\n");
    let ctx = CommandContext::new(None);

    let options = flatten::build_options(".".to_string(), "APP".to_string(), false);
    let text = flatten::render(&input, &options, &ctx).unwrap();
    assert_eq!(text, "APP.db.host=localhost\nAPP.db.port=5432\n");
}

#[test]
fn test_flatten_strict_reports_collision() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "app.yaml", "a_b: 1\na:\n  b: 2\n");
    let ctx = CommandContext::new(None);

    let lenient = flatten::build_options("_".to_string(), String::new(), false);
    assert_eq!(flatten::render(&input, &lenient, &ctx).unwrap(), "a_b=2\n");

    let strict = flatten::build_options("_".to_string(), String::new(), true);
    let err = flatten::render(&input, &strict, &ctx).unwrap_err();
    assert!(matches!(err, ConfShiftError::KeyCollision { .. }));
}

#[test]
fn test_convert_json_and_env_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "app.cfg", "[section]\nkey = value\n");
    let json_out = out_path(&temp_dir, "app.json");
    let env_out = out_path(&temp_dir, "app.env");
    let ctx = CommandContext::new(None);

    convert::json(&input, &json_out, &ctx).unwrap();
    convert::env_file(&input, &env_out, &ctx).unwrap();

    assert_eq!(
        fs::read_to_string(&json_out).unwrap(),
        "{\n    \"section\": {\n        \"key\": \"value\"\n    }\n}"
    );
    assert_eq!(fs::read_to_string(&env_out).unwrap(), "section_key=value\n");
}

#[test]
fn test_dispatch_missing_input() {
    let temp_dir = TempDir::new().unwrap();
    let ctx = CommandContext::new(None);

    let result = dispatch_command(
        Commands::Show {
            input: out_path(&temp_dir, "missing.yaml"),
        },
        &ctx,
    );
    assert!(matches!(result, Err(ConfShiftError::FileNotFound { .. })));
}

#[cfg(unix)]
#[test]
#[serial_test::serial]
fn test_exec_passes_environment_to_child() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "env.yaml", "CONFSHIFT_EXEC_TEST: expected\n");
    let ctx = CommandContext::new(None);

    let command = vec![
        "sh".to_string(),
        "-c".to_string(),
        "test \"$CONFSHIFT_EXEC_TEST\" = expected".to_string(),
    ];
    assert_eq!(exec::execute(&input, &command, &ctx).unwrap(), 0);

    let failing = vec!["sh".to_string(), "-c".to_string(), "exit 3".to_string()];
    assert_eq!(exec::execute(&input, &failing, &ctx).unwrap(), 3);

    std::env::remove_var("CONFSHIFT_EXEC_TEST");
}

#[test]
fn test_exec_without_command_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(&temp_dir, "env.yaml", "KEY: value\n");

    let err = exec::execute(&input, &[], &CommandContext::new(None)).unwrap_err();
    assert!(matches!(err, ConfShiftError::Io { .. }));
}
