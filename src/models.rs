use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::weather_codes;

// ============================================================================
// Domain Models
// ============================================================================

/// A tracked place, identified by its geocoding provider id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub country: String,
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Point-in-time observation as reported by the forecast API.
///
/// Units follow the request: Fahrenheit, mph, inches, hPa, percent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Local ISO-8601 observation time, e.g. `2025-01-01T12:00`
    pub time: String,
    /// Sampling interval in seconds
    pub interval: f64,
    #[serde(rename = "temperature_2m")]
    pub temperature: f64,
    pub apparent_temperature: f64,
    #[serde(rename = "relative_humidity_2m")]
    pub relative_humidity: f64,
    pub weather_code: i32,
    pub cloud_cover: f64,
    pub precipitation: f64,
    pub rain: f64,
    pub showers: f64,
    pub snowfall: f64,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: f64,
    #[serde(rename = "wind_direction_10m")]
    pub wind_direction: f64,
    #[serde(rename = "wind_gusts_10m")]
    pub wind_gusts: f64,
    pub pressure_msl: f64,
    pub surface_pressure: f64,
    #[serde(deserialize_with = "bool_from_flag")]
    pub is_day: bool,
}

impl CurrentConditions {
    pub fn description(&self) -> &'static str {
        weather_codes::describe(self.weather_code)
    }
}

/// A location joined with the conditions fetched for it during one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationWeather {
    #[serde(flatten)]
    pub location: Location,
    pub weather: CurrentConditions,
}

/// Open-Meteo sends `is_day` as 0/1; plain booleans are accepted too.
fn bool_from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => Ok(b),
        Flag::Int(0) => Ok(false),
        Flag::Int(1) => Ok(true),
        Flag::Int(other) => Err(serde::de::Error::custom(format!(
            "invalid is_day flag: {other}"
        ))),
    }
}

// ============================================================================
// Open-Meteo API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    /// Omitted entirely by the API when nothing matches
    #[serde(default)]
    pub results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub timezone: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Self {
            id: result.id,
            name: result.name,
            country: result.country,
            timezone: result.timezone,
            latitude: result.latitude,
            longitude: result.longitude,
        }
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct AddLocationRequest {
    /// Free-text place name, e.g. "Paris" or "Springfield, Illinois"
    pub name: String,
}

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct RemoveLocationRequest {
    /// Identifier of a tracked location, as shown by list_locations
    pub id: i64,
}
