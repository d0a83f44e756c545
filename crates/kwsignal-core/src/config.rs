use crate::app_config::{AppConfig, SearchAdSettings};
use crate::signal::MAX_SUGGESTIONS;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Load only the search-advertising signing settings from the process
/// environment. Does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if an `AD_*` credential is missing.
pub fn load_search_ad_settings_from_env() -> Result<SearchAdSettings, ConfigError> {
    build_search_ad_settings(|key| std::env::var(key))
}

/// A non-blank value for `var`, or `MissingEnvVar`.
fn require<F>(lookup: &F, var: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    lookup(var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingEnvVar(var.to_string()))
}

fn build_search_ad_settings<F>(lookup: F) -> Result<SearchAdSettings, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    Ok(SearchAdSettings {
        log_level: lookup("KWSIGNAL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        ad_access_key: require(&lookup, "AD_ACCESS_KEY")?,
        ad_secret_key: require(&lookup, "AD_SECRET_KEY")?,
        ad_customer_id: require(&lookup, "AD_CUSTOMER_ID")?,
    })
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can use a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let naver_client_id = require(&lookup, "NAVER_CLIENT_ID")?;
    let naver_client_secret = require(&lookup, "NAVER_CLIENT_SECRET")?;
    let ad_access_key = require(&lookup, "AD_ACCESS_KEY")?;
    let ad_secret_key = require(&lookup, "AD_SECRET_KEY")?;
    let ad_customer_id = require(&lookup, "AD_CUSTOMER_ID")?;

    let log_level = or_default("KWSIGNAL_LOG_LEVEL", "info");
    let searchad_base_url = or_default("KWSIGNAL_SEARCHAD_BASE_URL", "https://api.naver.com");
    let openapi_base_url = or_default("KWSIGNAL_OPENAPI_BASE_URL", "https://openapi.naver.com");
    let request_timeout_secs = parse_u64("KWSIGNAL_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("KWSIGNAL_USER_AGENT", "kwsignal/0.1 (keyword-research)");

    let max_suggestions = parse_usize("KWSIGNAL_MAX_SUGGESTIONS", "15")?;
    if max_suggestions == 0 || max_suggestions > MAX_SUGGESTIONS {
        return Err(ConfigError::InvalidEnvVar {
            var: "KWSIGNAL_MAX_SUGGESTIONS".to_string(),
            reason: format!("must be between 1 and {MAX_SUGGESTIONS}, got {max_suggestions}"),
        });
    }

    let max_concurrent_lookups = parse_usize("KWSIGNAL_MAX_CONCURRENT_LOOKUPS", "1")?;
    if max_concurrent_lookups == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "KWSIGNAL_MAX_CONCURRENT_LOOKUPS".to_string(),
            reason: "must be at least 1".to_string(),
        });
    }

    let cache_ttl_secs = parse_u64("KWSIGNAL_CACHE_TTL_SECS", "600")?;

    Ok(AppConfig {
        log_level,
        naver_client_id,
        naver_client_secret,
        ad_access_key,
        ad_secret_key,
        ad_customer_id,
        searchad_base_url,
        openapi_base_url,
        request_timeout_secs,
        user_agent,
        max_suggestions,
        max_concurrent_lookups,
        cache_ttl_secs,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
