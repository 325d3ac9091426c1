use crate::application::RequestOrdering;
use crate::domain::forecast::ValidationMode;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Runtime settings. A single base URL addresses all three endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub validation: ValidationMode,
    pub ordering: RequestOrdering,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            validation: ValidationMode::Strict,
            ordering: RequestOrdering::LatestOnly,
        }
    }
}

impl AppConfig {
    /// Defaults overridden by `FORECAST_API_BASE_URL`, `FORECAST_VALIDATION`
    /// and `FORECAST_REQUEST_ORDERING` captured at compile time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("FORECAST_API_BASE_URL"),
            option_env!("FORECAST_VALIDATION"),
            option_env!("FORECAST_REQUEST_ORDERING"),
        )
    }

    /// Unparseable mode values fall back to the defaults.
    pub fn from_values(base_url: Option<&str>, validation: Option<&str>, ordering: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = base_url.filter(|url| !url.trim().is_empty()) {
            config = config.with_api_base_url(url);
        }
        if let Some(mode) = validation.and_then(|raw| raw.parse().ok()) {
            config = config.with_validation(mode);
        }
        if let Some(ordering) = ordering.and_then(|raw| raw.parse().ok()) {
            config = config.with_ordering(ordering);
        }
        config
    }

    pub fn with_api_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }

    pub fn with_ordering(mut self, ordering: RequestOrdering) -> Self {
        self.ordering = ordering;
        self
    }
}
