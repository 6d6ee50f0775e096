//! Weather report model returned by the server

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Wind conditions nested inside a [`WeatherReport`]
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct WindInfo {
    /// Compass abbreviation, e.g. "NW"
    #[serde(deserialize_with = "null_as_default")]
    pub direction: String,
    #[serde(deserialize_with = "null_as_default")]
    pub speed: i64,
}

/// Weather data for a single location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct WeatherReport {
    #[serde(rename = "locationName", deserialize_with = "null_as_default")]
    pub location_name: String,
    /// Free-text description of the conditions
    #[serde(deserialize_with = "null_as_default")]
    pub weather: String,
    #[serde(deserialize_with = "null_as_default")]
    pub temperature: i64,
    /// `true` for Celsius, `false` for Fahrenheit
    #[serde(deserialize_with = "null_as_default")]
    pub celsius: bool,
    /// Predicted temperatures for the next days, oldest first
    #[serde(rename = "temp_forecast", deserialize_with = "null_as_default")]
    pub forecast: Vec<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub wind: WindInfo,
}

impl WeatherReport {
    /// The mock-up report the server answers every request with
    #[must_use]
    pub fn canned() -> Self {
        Self {
            location_name: "Zzyzx".to_string(),
            weather: "cloudy".to_string(),
            temperature: 31,
            celsius: true,
            forecast: vec![30, 32, 29],
            wind: WindInfo {
                direction: "S".to_string(),
                speed: 20,
            },
        }
    }

    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        let unit = if self.celsius { 'C' } else { 'F' };
        format!("{}°{unit}", self.temperature)
    }
}
