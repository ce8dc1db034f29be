//! App Configuration
//!
//! Compile-time settings. A CSR bundle has no process environment, so
//! overrides are read with `option_env!` when the bundle is built.

/// Remote store used when `INGREDIENTS_API_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "https://react-hooks-update-e4eb6.firebaseio.com";

/// Quiet period before a filter edit turns into a lookup
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub search_debounce_ms: u32,
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Defaults plus whatever was baked in at build time
    pub fn from_build_env() -> Self {
        Self::from_overrides(
            option_env!("INGREDIENTS_API_URL"),
            option_env!("INGREDIENTS_SEARCH_DEBOUNCE_MS"),
        )
    }

    fn from_overrides(api_url: Option<&str>, debounce_ms: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            config.api_base_url = url.to_string();
        }
        if let Some(ms) = debounce_ms.and_then(|ms| ms.trim().parse().ok()) {
            config.search_debounce_ms = ms;
        }
        config.api_base_url = config.api_base_url.trim_end_matches('/').to_string();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_overrides() {
        let config = AppConfig::from_overrides(None, None);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_trim_trailing_slash() {
        let config = AppConfig::from_overrides(Some("http://localhost:9000/"), Some("250"));
        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert_eq!(config.search_debounce_ms, 250);
    }

    #[test]
    fn test_bad_debounce_keeps_default() {
        let config = AppConfig::from_overrides(Some("  "), Some("soon"));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.search_debounce_ms, DEFAULT_SEARCH_DEBOUNCE_MS);
    }
}
