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
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("unknown"), Environment::Development);
}

#[test]
fn build_app_config_succeeds_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.sites_path.to_str(), Some("./config/sites.yaml"));
    assert_eq!(
        cfg.aliases_path.to_str(),
        Some("./config/custom_aliases.json")
    );
    assert_eq!(
        cfg.image_overrides_path.to_str(),
        Some("./config/additional_images.json")
    );
    assert_eq!(cfg.views_path.to_str(), Some("./config/views.json"));
    assert_eq!(cfg.audit_window, 50);
    assert!((cfg.audit_min_ratio - 0.6).abs() < f64::EPSILON);
}

#[test]
fn build_app_config_env_override() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("JUICEDEX_ENV", "production");
    map.insert("JUICEDEX_LOG_LEVEL", "debug");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
}

#[test]
fn build_app_config_audit_window_override() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("JUICEDEX_AUDIT_WINDOW", "100");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.audit_window, 100);
}

#[test]
fn build_app_config_audit_window_invalid() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("JUICEDEX_AUDIT_WINDOW", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JUICEDEX_AUDIT_WINDOW"),
        "expected InvalidEnvVar(JUICEDEX_AUDIT_WINDOW), got: {result:?}"
    );
}

#[test]
fn build_app_config_audit_min_ratio_override() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("JUICEDEX_AUDIT_MIN_RATIO", "0.8");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!((cfg.audit_min_ratio - 0.8).abs() < f64::EPSILON);
}

#[test]
fn build_app_config_audit_min_ratio_out_of_range() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("JUICEDEX_AUDIT_MIN_RATIO", "1.5");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JUICEDEX_AUDIT_MIN_RATIO"),
        "expected InvalidEnvVar(JUICEDEX_AUDIT_MIN_RATIO), got: {result:?}"
    );
}

#[test]
fn build_app_config_audit_min_ratio_invalid() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("JUICEDEX_AUDIT_MIN_RATIO", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "JUICEDEX_AUDIT_MIN_RATIO"),
        "expected InvalidEnvVar(JUICEDEX_AUDIT_MIN_RATIO), got: {result:?}"
    );
}

#[test]
fn build_app_config_paths_override() {
    let mut map: HashMap<&str, &str> = HashMap::new();
    map.insert("JUICEDEX_SITES_PATH", "/etc/juicedex/sites.yaml");
    map.insert("JUICEDEX_ALIASES_PATH", "/data/aliases.json");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.sites_path.to_str(), Some("/etc/juicedex/sites.yaml"));
    assert_eq!(cfg.aliases_path.to_str(), Some("/data/aliases.json"));
}
