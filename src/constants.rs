/// User agent string for HTTP requests
pub const USER_AGENT: &str = "weather-locations-server/0.1.0";

/// Open-Meteo forecast API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Open-Meteo geocoding API base URL
pub const OPEN_METEO_GEOCODING_API_BASE: &str = "https://geocoding-api.open-meteo.com/v1";

/// Current-condition fields requested from the forecast endpoint
pub const CURRENT_FIELDS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,weather_code,cloud_cover,precipitation,rain,showers,snowfall,wind_speed_10m,wind_direction_10m,wind_gusts_10m,pressure_msl,surface_pressure,is_day";

pub const TEMPERATURE_UNIT: &str = "fahrenheit";
pub const WIND_SPEED_UNIT: &str = "mph";
pub const PRECIPITATION_UNIT: &str = "inch";

/// Upstream request timeout, also used as the per-location fetch deadline
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
