/*!
 * Tests for application configuration
 */

use pdfglot::app_config::{Config, LogLevel};

#[test]
fn test_default_config_should_use_documented_constants() {
    let config = Config::default();

    assert_eq!(config.target_language, "French");
    assert_eq!(config.chunking.max_chunk_length, 1024);
    assert_eq!(config.summary.min_length, 30);
    assert_eq!(config.summary.max_length, 150);
    assert_eq!(config.generation.num_beams, 4);
    assert_eq!(config.generation.length_penalty, 2.0);
    assert!(config.generation.early_stopping);
    assert_eq!(config.generation.max_length, 1024);
    assert!(config.workers.is_none());
    assert_eq!(config.log_level, LogLevel::Info);
}

#[test]
fn test_default_config_should_validate() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_empty_json_should_parse_to_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.chunking.max_chunk_length, 1024);
    assert_eq!(config.target_language, "French");
}

#[test]
fn test_config_should_round_trip_through_json() {
    let mut config = Config::default();
    config.target_language = "Japanese".to_string();
    config.chunking.max_chunk_length = 512;
    config.workers = Some(2);

    let json = serde_json::to_string_pretty(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.target_language, "Japanese");
    assert_eq!(parsed.chunking.max_chunk_length, 512);
    assert_eq!(parsed.workers, Some(2));
}

#[test]
fn test_validate_should_reject_unsupported_language() {
    let mut config = Config::default();
    config.target_language = "Esperanto".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_should_reject_zero_chunk_length() {
    let mut config = Config::default();
    config.chunking.max_chunk_length = 0;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_should_reject_inverted_summary_bounds() {
    let mut config = Config::default();
    config.summary.min_length = 200;
    config.summary.max_length = 150;
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_should_reject_excessive_retries() {
    let mut config = Config::default();
    config.inference.max_retries = 64;
    assert!(config.validate().is_err());

    config.inference.max_retries = 10;
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_should_reject_zero_workers() {
    let mut config = Config::default();
    config.workers = Some(0);
    assert!(config.validate().is_err());
}

#[test]
fn test_effective_workers_should_prefer_override() {
    let mut config = Config::default();
    config.workers = Some(3);
    assert_eq!(config.effective_workers(), 3);

    config.workers = None;
    assert!(config.effective_workers() >= 1);
}
