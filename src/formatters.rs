use crate::models::{Location, LocationWeather};

/// Converts a bearing in degrees to a 16-point compass direction
fn compass_direction(degrees: f64) -> &'static str {
    const POINTS: [&str; 16] = [
        "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW",
        "NW", "NNW",
    ];
    if !degrees.is_finite() {
        return "?";
    }
    let index = (degrees.rem_euclid(360.0) / 22.5).round() as usize % POINTS.len();
    POINTS[index]
}

/// Formats one location's current conditions into a human-readable string
pub fn format_location_weather(entry: &LocationWeather) -> String {
    let location = &entry.location;
    let weather = &entry.weather;

    format!(
        "{} ({}) [id {}]\n  Local time: {} ({}, {})\n  Conditions: {}\n  Temperature: {:.1}\u{00b0}F (feels like {:.1}\u{00b0}F)\n  Humidity: {:.0}%  Cloud cover: {:.0}%\n  Wind: {:.1} mph {} (gusts {:.1} mph)\n  Precipitation: {:.2} in (rain {:.2}, showers {:.2}, snowfall {:.2})\n  Pressure: {:.1} hPa (surface {:.1} hPa)\n",
        location.name,
        location.country,
        location.id,
        weather.time,
        location.timezone,
        if weather.is_day { "day" } else { "night" },
        weather.description(),
        weather.temperature,
        weather.apparent_temperature,
        weather.relative_humidity,
        weather.cloud_cover,
        weather.wind_speed,
        compass_direction(weather.wind_direction),
        weather.wind_gusts,
        weather.precipitation,
        weather.rain,
        weather.showers,
        weather.snowfall,
        weather.pressure_msl,
        weather.surface_pressure,
    )
}

/// Formats the aggregated weather of all locations
pub fn format_weather_report(entries: &[LocationWeather]) -> String {
    if entries.is_empty() {
        return "No weather data available.".to_string();
    }

    let mut output = String::from("Current Weather:\n\n");
    for entry in entries {
        output.push_str(&format_location_weather(entry));
        output.push('\n');
    }
    output
}

/// Formats the tracked locations with their identifiers
pub fn format_locations(locations: &[Location]) -> String {
    if locations.is_empty() {
        return "No locations are being tracked.".to_string();
    }

    let mut output = String::from("Tracked Locations:\n\n");
    for location in locations {
        output.push_str(&format!(
            "{}: {}, {} ({:.4}, {:.4})\n",
            location.id, location.name, location.country, location.latitude, location.longitude
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::tests::conditions;
    use crate::registry::LocationRegistry;

    #[test]
    fn test_compass_direction() {
        assert_eq!(compass_direction(0.0), "N");
        assert_eq!(compass_direction(359.0), "N");
        assert_eq!(compass_direction(90.0), "E");
        assert_eq!(compass_direction(250.0), "WSW");
        assert_eq!(compass_direction(-90.0), "W");
        assert_eq!(compass_direction(f64::NAN), "?");
    }

    #[test]
    fn test_format_location_weather() {
        let location = LocationRegistry::with_defaults().snapshot()[0].clone();
        let mut weather = conditions(61.04);
        weather.weather_code = 42;
        weather.is_day = false;

        let text = format_location_weather(&LocationWeather { location, weather });

        assert!(text.starts_with("San Francisco (United States) [id 5391959]"));
        assert!(text.contains("Conditions: Unknown"));
        assert!(text.contains("Temperature: 61.0\u{00b0}F (feels like 59.0\u{00b0}F)"));
        assert!(text.contains("Wind: 8.0 mph WSW (gusts 15.0 mph)"));
        assert!(text.contains("America/Los_Angeles, night"));
    }

    #[test]
    fn test_empty_outputs() {
        assert_eq!(format_weather_report(&[]), "No weather data available.");
        assert_eq!(format_locations(&[]), "No locations are being tracked.");
    }

    #[test]
    fn test_format_locations_lists_ids() {
        let snapshot = LocationRegistry::with_defaults().snapshot();
        let text = format_locations(&snapshot);
        assert!(text.contains("5391959: San Francisco, United States (37.7749, -122.4194)"));
        assert!(text.contains("5128581: New York City, United States (40.7128, -74.0060)"));
    }
}
