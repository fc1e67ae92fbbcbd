//! API client configuration.
//!
//! The browser build reads values baked in at compile time
//! ([`ApiConfig::from_build_env`]); native tools read the process environment
//! ([`ApiConfig::from_env`]). Both go through the same parser.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const BASE_URL_VAR: &str = "MENU_API_URL";
pub const TIMEOUT_VAR: &str = "MENU_API_TIMEOUT_SECS";
pub const MOCK_DATA_VAR: &str = "MENU_USE_MOCK_DATA";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL every request path is appended to, without a trailing `/`.
    pub base_url: String,
    pub timeout_secs: u64,
    /// Serve built-in demo data instead of calling the backend.
    pub use_mock_data: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeout_secs: DEFAULT_TIMEOUT_SECS, use_mock_data: false }
    }
}

impl ApiConfig {
    /// Build config from the process environment.
    ///
    /// - `MENU_API_URL`: default `http://localhost:8000/api/v1`
    /// - `MENU_API_TIMEOUT_SECS`: default 10
    /// - `MENU_USE_MOCK_DATA`: `1/true/yes/on` or `0/false/no/off`, default off
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a value is present but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var(BASE_URL_VAR).ok().as_deref(),
            std::env::var(TIMEOUT_VAR).ok().as_deref(),
            std::env::var(MOCK_DATA_VAR).ok().as_deref(),
        )
    }

    /// Build config from variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a value is present but unparsable.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("MENU_API_URL"), option_env!("MENU_API_TIMEOUT_SECS"), option_env!("MENU_USE_MOCK_DATA"))
    }

    /// Build config from optional raw values, applying defaults for absent ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a value is present but unparsable.
    pub fn from_values(base_url: Option<&str>, timeout: Option<&str>, mock: Option<&str>) -> Result<Self, ConfigError> {
        let base_url = normalize_base_url(base_url.filter(|v| !v.trim().is_empty()).unwrap_or(DEFAULT_BASE_URL));
        let timeout_secs = match timeout {
            None => DEFAULT_TIMEOUT_SECS,
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::Invalid { key: TIMEOUT_VAR, value: raw.to_owned() })?,
        };
        let use_mock_data = match mock {
            None => false,
            Some(raw) => parse_bool(raw).ok_or_else(|| ConfigError::Invalid { key: MOCK_DATA_VAR, value: raw.to_owned() })?,
        };
        Ok(Self { base_url, timeout_secs, use_mock_data })
    }

    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}

/// Parse the usual spellings of an on/off flag.
#[must_use]
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
