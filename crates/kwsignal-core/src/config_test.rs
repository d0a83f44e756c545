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

/// Returns a map with all required env vars populated.
fn full_env<'a>() -> HashMap<&'a str, &'a str> {
    let mut m = HashMap::new();
    m.insert("NAVER_CLIENT_ID", "client-id");
    m.insert("NAVER_CLIENT_SECRET", "client-secret");
    m.insert("AD_ACCESS_KEY", "access-key");
    m.insert("AD_SECRET_KEY", "secret-key");
    m.insert("AD_CUSTOMER_ID", "1234567");
    m
}

#[test]
fn build_app_config_succeeds_with_all_required_vars() {
    let map = full_env();
    let result = build_app_config(lookup_from_map(&map));
    assert!(result.is_ok(), "expected Ok, got: {result:?}");
    let cfg = result.unwrap();
    assert_eq!(cfg.naver_client_id, "client-id");
    assert_eq!(cfg.ad_customer_id, "1234567");
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.searchad_base_url, "https://api.naver.com");
    assert_eq!(cfg.openapi_base_url, "https://openapi.naver.com");
    assert_eq!(cfg.request_timeout_secs, 30);
    assert_eq!(cfg.user_agent, "kwsignal/0.1 (keyword-research)");
    assert_eq!(cfg.max_suggestions, 15);
    assert_eq!(cfg.max_concurrent_lookups, 1);
    assert_eq!(cfg.cache_ttl_secs, 600);
}

#[test]
fn build_app_config_fails_without_each_credential() {
    for var in [
        "NAVER_CLIENT_ID",
        "NAVER_CLIENT_SECRET",
        "AD_ACCESS_KEY",
        "AD_SECRET_KEY",
        "AD_CUSTOMER_ID",
    ] {
        let mut map = full_env();
        map.remove(var);
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == var),
            "expected MissingEnvVar({var}), got: {result:?}"
        );
    }
}

#[test]
fn build_app_config_treats_blank_credential_as_missing() {
    let mut map = full_env();
    map.insert("AD_SECRET_KEY", "   ");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "AD_SECRET_KEY"),
        "expected MissingEnvVar(AD_SECRET_KEY), got: {result:?}"
    );
}

#[test]
fn overrides_are_applied() {
    let mut map = full_env();
    map.insert("KWSIGNAL_LOG_LEVEL", "debug");
    map.insert("KWSIGNAL_SEARCHAD_BASE_URL", "http://127.0.0.1:9000");
    map.insert("KWSIGNAL_REQUEST_TIMEOUT_SECS", "5");
    map.insert("KWSIGNAL_MAX_SUGGESTIONS", "10");
    map.insert("KWSIGNAL_MAX_CONCURRENT_LOOKUPS", "4");
    map.insert("KWSIGNAL_CACHE_TTL_SECS", "0");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.searchad_base_url, "http://127.0.0.1:9000");
    assert_eq!(cfg.request_timeout_secs, 5);
    assert_eq!(cfg.max_suggestions, 10);
    assert_eq!(cfg.max_concurrent_lookups, 4);
    assert_eq!(cfg.cache_ttl_secs, 0);
}

#[test]
fn request_timeout_invalid() {
    let mut map = full_env();
    map.insert("KWSIGNAL_REQUEST_TIMEOUT_SECS", "not-a-number");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "KWSIGNAL_REQUEST_TIMEOUT_SECS"),
        "expected InvalidEnvVar(KWSIGNAL_REQUEST_TIMEOUT_SECS), got: {result:?}"
    );
}

#[test]
fn max_suggestions_above_bound_is_rejected() {
    let mut map = full_env();
    map.insert("KWSIGNAL_MAX_SUGGESTIONS", "16");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "KWSIGNAL_MAX_SUGGESTIONS"),
        "expected InvalidEnvVar(KWSIGNAL_MAX_SUGGESTIONS), got: {result:?}"
    );
}

#[test]
fn max_suggestions_zero_is_rejected() {
    let mut map = full_env();
    map.insert("KWSIGNAL_MAX_SUGGESTIONS", "0");
    assert!(build_app_config(lookup_from_map(&map)).is_err());
}

#[test]
fn zero_concurrency_is_rejected() {
    let mut map = full_env();
    map.insert("KWSIGNAL_MAX_CONCURRENT_LOOKUPS", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "KWSIGNAL_MAX_CONCURRENT_LOOKUPS"),
        "expected InvalidEnvVar(KWSIGNAL_MAX_CONCURRENT_LOOKUPS), got: {result:?}"
    );
}

#[test]
fn debug_output_redacts_secrets() {
    let map = full_env();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    let rendered = format!("{cfg:?}");
    assert!(!rendered.contains("client-secret"));
    assert!(!rendered.contains("secret-key"));
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn search_ad_settings_build_without_content_credentials() {
    let mut map = full_env();
    map.remove("NAVER_CLIENT_ID");
    map.remove("NAVER_CLIENT_SECRET");
    assert!(build_app_config(lookup_from_map(&map)).is_err());

    let settings = build_search_ad_settings(lookup_from_map(&map)).unwrap();
    assert_eq!(settings.ad_access_key, "access-key");
    assert_eq!(settings.ad_secret_key, "secret-key");
    assert_eq!(settings.ad_customer_id, "1234567");
    assert_eq!(settings.log_level, "info");
    assert!(!format!("{settings:?}").contains("secret-key"));
}

#[test]
fn search_ad_settings_require_ad_credentials() {
    let mut map = full_env();
    map.remove("AD_SECRET_KEY");
    let result = build_search_ad_settings(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::MissingEnvVar(ref var)) if var == "AD_SECRET_KEY"),
        "expected MissingEnvVar(AD_SECRET_KEY), got: {result:?}"
    );
}
