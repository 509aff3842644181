use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_known_values() {
    assert_eq!(parse_environment("development"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should be valid");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:3000");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.max_upload_bytes, 10 * 1024 * 1024);
    assert_eq!(cfg.category, "laptop");
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("STOCKGROUP_ENV", "production");
    map.insert("STOCKGROUP_BIND_ADDR", "127.0.0.1:8080");
    map.insert("STOCKGROUP_LOG_LEVEL", "debug");
    map.insert("STOCKGROUP_MAX_UPLOAD_BYTES", "2048");
    map.insert("STOCKGROUP_CATEGORY", "desktop");
    let cfg = build_app_config(lookup_from_map(&map)).expect("overrides should be valid");
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.max_upload_bytes, 2048);
    assert_eq!(cfg.category, "desktop");
}

#[test]
fn build_app_config_fails_with_invalid_bind_addr() {
    let mut map = HashMap::new();
    map.insert("STOCKGROUP_BIND_ADDR", "not-a-socket-addr");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOCKGROUP_BIND_ADDR"),
        "expected InvalidEnvVar(STOCKGROUP_BIND_ADDR), got: {result:?}"
    );
}

#[test]
fn build_app_config_fails_with_non_numeric_upload_limit() {
    let mut map = HashMap::new();
    map.insert("STOCKGROUP_MAX_UPLOAD_BYTES", "ten megabytes");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOCKGROUP_MAX_UPLOAD_BYTES"),
        "expected InvalidEnvVar(STOCKGROUP_MAX_UPLOAD_BYTES), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_upload_limit() {
    let mut map = HashMap::new();
    map.insert("STOCKGROUP_MAX_UPLOAD_BYTES", "0");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn build_app_config_rejects_blank_category() {
    let mut map = HashMap::new();
    map.insert("STOCKGROUP_CATEGORY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "STOCKGROUP_CATEGORY"),
        "expected InvalidEnvVar(STOCKGROUP_CATEGORY), got: {result:?}"
    );
}
