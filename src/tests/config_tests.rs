//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and route tables.

use std::path::Path;

use super::{TestFixture, SCENARIO_ROUTES};
use crate::config::{ConfigLoader, MatcherConfig, RouteTable, Validate};
use crate::error::config::ConfigError;
use crate::matcher::{MatcherStrategy, PathMatcher, TrieConfig};

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = MatcherConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.matcher.strategy, MatcherStrategy::Trie);
    assert_eq!(config.matcher.trie, TrieConfig::default());
}

/// Test that configuration validation catches invalid values.
#[test]
fn test_config_validation() {
    let mut config = MatcherConfig::default();

    config.log.level = "verbose".to_string();
    assert!(config.validate().is_err());

    config.log.level = "debug".to_string();
    config.matcher.trie.initial_child_capacity = 12;
    assert!(config.validate().is_err());

    config.matcher.trie.initial_child_capacity = 16;
    config.matcher.trie.max_load_factor = 1.5;
    assert!(config.validate().is_err());

    config.matcher.trie.max_load_factor = 0.5;
    assert!(config.validate().is_ok());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file(
            "matcher.toml",
            r#"
            [matcher]
            strategy = "sorted"

            [matcher.trie]
            initial_child_capacity = 4
            fixed_capacity = true

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "PMTEST_FILE").load().unwrap();
    assert_eq!(config.matcher.strategy, MatcherStrategy::Sorted);
    assert_eq!(config.matcher.trie.initial_child_capacity, 4);
    assert!(config.matcher.trie.fixed_capacity);
    // Unset keys keep their defaults.
    assert_eq!(config.matcher.trie.max_load_factor, 0.75);
    assert_eq!(config.log.level, "debug");
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("matcher.json", r#"{"matcher": {"strategy": "btree"}}"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&path), "PMTEST_JSON").load().unwrap();
    assert_eq!(config.matcher.strategy, MatcherStrategy::BTree);
}

/// Test that invalid file contents fail validation.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("bad.toml", "[matcher.trie]\ninitial_child_capacity = 3\n")
        .unwrap();

    let result = ConfigLoader::new(Some(&path), "PMTEST_INVALID").load();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange { .. })));
}

/// Test that environment variables override defaults.
#[test]
fn test_env_override() {
    let mut fixture = TestFixture::new().unwrap();
    fixture.set_env("PMTEST_ENV__MATCHER__STRATEGY", "linear");
    fixture.set_env("PMTEST_ENV__LOG__JSON", "true");

    let config = ConfigLoader::new(None::<&Path>, "PMTEST_ENV").load().unwrap();
    assert_eq!(config.matcher.strategy, MatcherStrategy::Linear);
    assert!(config.log.json);
}

/// Test error reporting for missing and unsupported files.
#[test]
fn test_missing_and_unsupported_files() {
    let result = ConfigLoader::new(Some("does/not/exist.toml"), "PMTEST_MISSING").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));

    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("matcher.ini", "strategy=trie").unwrap();
    let result = ConfigLoader::new(Some(&path), "PMTEST_INI").load();
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

/// Test loading a route table from disk and resolving against it.
#[test]
fn test_route_table_from_file() {
    let fixture = TestFixture::new().unwrap();
    let mut content = String::from("[routes]\n");
    for (pattern, value) in SCENARIO_ROUTES {
        content.push_str(&format!("{pattern:?} = {value:?}\n"));
    }
    let path = fixture.create_file("routes.toml", content).unwrap();

    let table = RouteTable::from_path(&path).unwrap();
    assert_eq!(table.len(), 4);

    for strategy in MatcherStrategy::ALL {
        let matcher = table.build(strategy, &TrieConfig::default()).unwrap();
        let resolve = |p: &str| matcher.match_path(p).unwrap().map(String::as_str);
        assert_eq!(resolve("/products/3"), Some("C"));
        assert_eq!(resolve("/products/4"), Some("B"));
        assert_eq!(resolve("/admin/products/create"), Some("D"));
        assert_eq!(resolve("/unknown"), Some("A"));
    }
}

/// Test route table error paths.
#[test]
fn test_route_table_errors() {
    let missing = RouteTable::from_path(Path::new("no/such/routes.toml"));
    assert!(matches!(missing, Err(ConfigError::FileNotFound(_))));

    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("routes.yaml", "routes: {}").unwrap();
    assert!(matches!(
        RouteTable::from_path(&path),
        Err(ConfigError::ParseError(_))
    ));

    let path = fixture.create_file("routes.json", "{not json").unwrap();
    assert!(matches!(
        RouteTable::from_path(&path),
        Err(ConfigError::ParseError(_))
    ));
}
