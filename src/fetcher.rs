use async_trait::async_trait;

use crate::client::OpenMeteoClient;
use crate::constants::{CURRENT_FIELDS, PRECIPITATION_UNIT, TEMPERATURE_UNIT, WIND_SPEED_UNIT};
use crate::error::Result;
use crate::models::{CurrentConditions, ForecastResponse, Location};

pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch weather data";

/// Fetches current conditions for one location. Implementations do not retry.
#[async_trait]
pub trait WeatherFetcher: Send + Sync {
    async fn fetch(&self, location: &Location) -> Result<CurrentConditions>;
}

#[async_trait]
impl WeatherFetcher for OpenMeteoClient {
    async fn fetch(&self, location: &Location) -> Result<CurrentConditions> {
        let url = format!("{}/forecast", self.forecast_api_base);
        let latitude = location.latitude.to_string();
        let longitude = location.longitude.to_string();

        let response: ForecastResponse = self
            .get_json(
                &url,
                &[
                    ("latitude", latitude.as_str()),
                    ("longitude", longitude.as_str()),
                    ("current", CURRENT_FIELDS),
                    ("temperature_unit", TEMPERATURE_UNIT),
                    ("wind_speed_unit", WIND_SPEED_UNIT),
                    ("precipitation_unit", PRECIPITATION_UNIT),
                ],
                FETCH_ERROR_MESSAGE,
            )
            .await?;

        Ok(response.current)
    }
}
