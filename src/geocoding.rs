use async_trait::async_trait;

use crate::client::OpenMeteoClient;
use crate::error::{Result, WeatherError};
use crate::models::{GeocodingResponse, Location};

/// Resolves a free-text place name to a single identified location
#[async_trait]
pub trait GeocodingResolver: Send + Sync {
    /// Returns the best match, or `LocationNotFound` when nothing matches
    async fn resolve(&self, name: &str) -> Result<Location>;
}

#[async_trait]
impl GeocodingResolver for OpenMeteoClient {
    async fn resolve(&self, name: &str) -> Result<Location> {
        tracing::debug!("Geocoding location name: {}", name);

        let url = format!("{}/search", self.geocoding_api_base);
        let response: GeocodingResponse = self
            .get_json(
                &url,
                &[("name", name), ("count", "1")],
                "Failed to search for location",
            )
            .await?;

        let Some(best) = response.results.into_iter().next() else {
            return Err(WeatherError::LocationNotFound {
                name: name.to_string(),
            });
        };

        tracing::debug!(
            "Found location: {} ({:.4}, {:.4})",
            best.name,
            best.latitude,
            best.longitude
        );
        Ok(best.into())
    }
}
