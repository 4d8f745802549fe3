//! Runtime configuration loaded from the environment.

use std::time::Duration;

use crate::constants::{
    DEFAULT_REQUEST_TIMEOUT_SECS, OPEN_METEO_API_BASE, OPEN_METEO_GEOCODING_API_BASE,
};

pub const FORECAST_API_BASE_VAR: &str = "WEATHER_FORECAST_API_BASE";
pub const GEOCODING_API_BASE_VAR: &str = "WEATHER_GEOCODING_API_BASE";
pub const REQUEST_TIMEOUT_VAR: &str = "WEATHER_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the forecast API, without trailing slash
    pub forecast_api_base: String,
    /// Base URL of the geocoding API, without trailing slash
    pub geocoding_api_base: String,
    /// Applied to every upstream request and to each aggregated fetch
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            forecast_api_base: OPEN_METEO_API_BASE.to_string(),
            geocoding_api_base: OPEN_METEO_GEOCODING_API_BASE.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Reads configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let forecast_api_base = lookup(FORECAST_API_BASE_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.forecast_api_base);

        let geocoding_api_base = lookup(GEOCODING_API_BASE_VAR)
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.geocoding_api_base);

        let request_timeout = match lookup(REQUEST_TIMEOUT_VAR) {
            None => defaults.request_timeout,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "Ignoring invalid {}={:?}, using {}s",
                        REQUEST_TIMEOUT_VAR,
                        raw,
                        DEFAULT_REQUEST_TIMEOUT_SECS
                    );
                    defaults.request_timeout
                }
            },
        };

        Self {
            forecast_api_base,
            geocoding_api_base,
            request_timeout,
        }
    }
}
