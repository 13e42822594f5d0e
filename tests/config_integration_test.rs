//! Integration tests for configuration and resource loading

use nameveil::{load_deny_list, AnonymizerEngine, EngineConfig, Error};
use std::io::Write;
use tempfile::TempDir;

#[test]
fn test_load_deny_list_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("names.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "Alice Smith").unwrap();
    writeln!(file, "  Bob Jones  ").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "Carol White").unwrap();
    drop(file);

    let names = load_deny_list(&path).unwrap();
    assert_eq!(names, vec!["Alice Smith", "Bob Jones", "Carol White"]);
}

#[test]
fn test_load_deny_list_missing_file() {
    let err = load_deny_list("/nonexistent/names.txt").unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_loaded_deny_list_drives_engine() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("names.txt");
    std::fs::write(&path, "Alice Smith\n").unwrap();

    let config = EngineConfig::with_deny_list(load_deny_list(&path).unwrap());
    let engine = AnonymizerEngine::new(config).unwrap();
    let result = engine.anonymize_text("per Alice Smith, approved").unwrap();
    assert_eq!(result.text, "per <ANONYMIZED>, approved");
}

#[test]
fn test_custom_pattern_library() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patterns.toml");
    std::fs::write(
        &path,
        r#"
[patterns.agent]
category = "PERSON"
confidence = 0.95
patterns = ['\bAgent\s+[A-Z][a-z]+\b']
"#,
    )
    .unwrap();

    let config = EngineConfig {
        pattern_library: Some(path),
        ..EngineConfig::default()
    };
    let engine = AnonymizerEngine::new(config).unwrap();

    let result = engine.anonymize_text("handled by Agent Cooper").unwrap();
    assert_eq!(result.text, "handled by <ANONYMIZED>");

    // Built-in patterns are replaced, not extended
    let result = engine.anonymize_text("handled by Jane Doe").unwrap();
    assert_eq!(result.text, "handled by Jane Doe");
}

#[test]
fn test_pattern_library_wrong_extension_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patterns.txt");
    std::fs::write(&path, "not toml patterns").unwrap();

    let config = EngineConfig {
        pattern_library: Some(path),
        ..EngineConfig::default()
    };
    assert!(matches!(
        AnonymizerEngine::new(config),
        Err(Error::Configuration(_))
    ));
}

#[test]
fn test_malformed_pattern_library_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patterns.toml");
    std::fs::write(&path, "patterns = 'not a table'").unwrap();

    let config = EngineConfig {
        pattern_library: Some(path),
        ..EngineConfig::default()
    };
    assert!(AnonymizerEngine::new(config).is_err());
}

#[test]
fn test_env_overrides() {
    // Single test touching NAMEVEIL_* variables; tests in this binary run
    // in parallel threads, so all env mutation stays in one test.
    std::env::set_var("NAMEVEIL_MARKER", "[redacted]");
    std::env::set_var("NAMEVEIL_CASE_INSENSITIVE", "true");
    std::env::set_var("NAMEVEIL_CONFIDENCE_THRESHOLD", "0.9");

    let mut config = EngineConfig::default();
    let applied = config.apply_env_overrides();

    std::env::set_var("NAMEVEIL_STRATEGY", "shred");
    let mut invalid = EngineConfig::default();
    let rejected = invalid.apply_env_overrides();

    std::env::remove_var("NAMEVEIL_MARKER");
    std::env::remove_var("NAMEVEIL_CASE_INSENSITIVE");
    std::env::remove_var("NAMEVEIL_CONFIDENCE_THRESHOLD");
    std::env::remove_var("NAMEVEIL_STRATEGY");

    applied.unwrap();
    assert_eq!(config.marker, "[redacted]");
    assert!(config.case_insensitive);
    assert_eq!(config.confidence_threshold, 0.9);
    assert!(matches!(rejected, Err(Error::Configuration(_))));
}
