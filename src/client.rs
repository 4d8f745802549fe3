//! Shared HTTP plumbing for the Open-Meteo APIs.

use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::{Result, WeatherError};

/// Client for the Open-Meteo forecast and geocoding endpoints
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Arc<Client>,
    pub(crate) forecast_api_base: String,
    pub(crate) geocoding_api_base: String,
}

impl OpenMeteoClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| WeatherError::transport("Failed to build HTTP client", e))?;

        Ok(Self {
            client: Arc::new(client),
            forecast_api_base: config.forecast_api_base.clone(),
            geocoding_api_base: config.geocoding_api_base.clone(),
        })
    }

    /// Makes an HTTP GET request and deserializes the JSON response.
    ///
    /// `context` becomes the error message; the body is decoded separately so
    /// malformed payloads surface as `Decode` rather than `Transport`.
    pub(crate) async fn get_json<T, Q>(&self, url: &str, query: &Q, context: &str) -> Result<T>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| WeatherError::transport(context, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| WeatherError::transport(context, e))?;

        serde_json::from_slice::<T>(&body).map_err(|e| WeatherError::decode(context, e))
    }
}
