#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub naver_client_id: String,
    pub naver_client_secret: String,
    pub ad_access_key: String,
    pub ad_secret_key: String,
    pub ad_customer_id: String,
    pub searchad_base_url: String,
    pub openapi_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_suggestions: usize,
    pub max_concurrent_lookups: usize,
    pub cache_ttl_secs: u64,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("naver_client_id", &self.naver_client_id)
            .field("naver_client_secret", &"[redacted]")
            .field("ad_access_key", &self.ad_access_key)
            .field("ad_secret_key", &"[redacted]")
            .field("ad_customer_id", &self.ad_customer_id)
            .field("searchad_base_url", &self.searchad_base_url)
            .field("openapi_base_url", &self.openapi_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_suggestions", &self.max_suggestions)
            .field("max_concurrent_lookups", &self.max_concurrent_lookups)
            .field("cache_ttl_secs", &self.cache_ttl_secs)
            .finish()
    }
}

/// The subset of configuration needed to sign search-advertising requests.
/// Loads without the content-search credentials.
#[derive(Clone)]
pub struct SearchAdSettings {
    pub log_level: String,
    pub ad_access_key: String,
    pub ad_secret_key: String,
    pub ad_customer_id: String,
}

impl std::fmt::Debug for SearchAdSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchAdSettings")
            .field("log_level", &self.log_level)
            .field("ad_access_key", &self.ad_access_key)
            .field("ad_secret_key", &"[redacted]")
            .field("ad_customer_id", &self.ad_customer_id)
            .finish()
    }
}
