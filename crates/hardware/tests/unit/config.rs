//! # Configuration Tests
//!
//! Tests for configuration defaults, JSON deserialization and validation.

use snoopsim_core::common::ConfigError;
use snoopsim_core::config::*;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.cache, CacheConfig::default());
    assert_eq!(config.coherence, CoherenceConfig::default());
}

#[test]
fn test_cache_config_defaults() {
    let cache = CacheConfig::default();
    assert_eq!(cache.size_bytes, 8192);
    assert_eq!(cache.ways, 8);
    assert_eq!(cache.line_bytes, 64);
    let g = cache.geometry().unwrap();
    assert_eq!(g.sets(), 16);
}

#[test]
fn test_coherence_config_defaults() {
    let coherence = CoherenceConfig::default();
    assert_eq!(coherence.cores, 4);
    assert!(coherence.snoop_self);
}

#[test]
fn test_json_empty_object_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.cache, CacheConfig::default());
    assert_eq!(config.coherence, CoherenceConfig::default());
}

#[test]
fn test_json_partial_override() {
    let config = Config::from_json(
        r#"{
            "cache": { "size_bytes": 32768, "ways": 4 },
            "coherence": { "snoop_self": false }
        }"#,
    )
    .unwrap();
    assert_eq!(config.cache.size_bytes, 32768);
    assert_eq!(config.cache.ways, 4);
    assert_eq!(config.cache.line_bytes, 64);
    assert_eq!(config.coherence.cores, 4);
    assert!(!config.coherence.snoop_self);
}

#[test]
fn test_json_type_error() {
    let err = Config::from_json(r#"{ "cache": { "ways": "eight" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Json(_)));
}

#[test]
fn test_json_syntax_error() {
    assert!(matches!(
        Config::from_json("{ cache: "),
        Err(ConfigError::Json(_))
    ));
}

#[test]
fn test_geometry_validation_reports_bad_config() {
    let cache = CacheConfig {
        size_bytes: 8192,
        ways: 8,
        line_bytes: 48,
    };
    assert!(matches!(
        cache.geometry(),
        Err(ConfigError::LineSizeNotPowerOfTwo(48))
    ));
}
