//! Current conditions and display helpers

use serde::{Deserialize, Serialize};

use crate::weather_code;

/// Placeholder shown for a value the provider did not report
pub const MISSING_VALUE: &str = "--";

/// Current conditions at the resolved location.
///
/// Every field is unknown until a fetch succeeds; the default value is the
/// empty placeholder rendered before the first query.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CurrentConditions {
    /// Air temperature at 2 m in °C
    pub temperature: Option<f64>,
    /// Apparent ("feels like") temperature in °C
    pub apparent_temperature: Option<f64>,
    /// Relative humidity at 2 m in percent
    pub relative_humidity: Option<f64>,
    /// Wind speed at 10 m, unit as reported by the provider
    pub wind_speed: Option<f64>,
    /// Wind direction at 10 m in degrees (0/360 is North)
    pub wind_direction: Option<f64>,
    /// WMO weather code
    pub weather_code: Option<i32>,
}

impl CurrentConditions {
    #[must_use]
    pub fn description(&self) -> &'static str {
        weather_code::describe(self.weather_code)
    }

    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°", format_value(self.temperature))
    }

    #[must_use]
    pub fn format_feels_like(&self) -> String {
        format!("{}°", format_value(self.apparent_temperature))
    }

    #[must_use]
    pub fn format_humidity(&self) -> String {
        format!("{}%", format_value(self.relative_humidity))
    }

    #[must_use]
    pub fn format_wind(&self) -> String {
        format!("{} m/s", format_value(self.wind_speed))
    }

    /// Degrees plus a compass label, e.g. "270° (W)"
    #[must_use]
    pub fn format_wind_direction(&self) -> String {
        match self.wind_direction {
            Some(degrees) => format!(
                "{}° ({})",
                format_value(Some(degrees)),
                wind_direction_to_cardinal(degrees)
            ),
            None => format!("{MISSING_VALUE}°"),
        }
    }
}

/// Render a reported number the way the provider sent it, or "--"
#[must_use]
pub fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v}"),
        _ => MISSING_VALUE.to_string(),
    }
}

/// Convert wind direction from degrees to a 16-point compass label
#[must_use]
pub fn wind_direction_to_cardinal(degrees: f64) -> &'static str {
    if !degrees.is_finite() {
        return "Unknown";
    }
    let normalized = degrees.rem_euclid(360.0);
    match normalized {
        d if d < 11.25 => "N",
        d if d < 33.75 => "NNE",
        d if d < 56.25 => "NE",
        d if d < 78.75 => "ENE",
        d if d < 101.25 => "E",
        d if d < 123.75 => "ESE",
        d if d < 146.25 => "SE",
        d if d < 168.75 => "SSE",
        d if d < 191.25 => "S",
        d if d < 213.75 => "SSW",
        d if d < 236.25 => "SW",
        d if d < 258.75 => "WSW",
        d if d < 281.25 => "W",
        d if d < 303.75 => "WNW",
        d if d < 326.25 => "NW",
        d if d < 348.75 => "NNW",
        _ => "N",
    }
}
