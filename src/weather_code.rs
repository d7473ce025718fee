//! WMO weather interpretation codes as reported by Open-Meteo
//!
//! See <https://open-meteo.com/en/docs#weathervariables>.

/// Description used for any code outside the table, including a missing one
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Convert a WMO weather code to a human-readable description.
///
/// Total: never fails, anything unmapped reads as [`UNKNOWN_CONDITION`].
#[must_use]
pub fn describe(code: Option<i32>) -> &'static str {
    match code {
        Some(code) => describe_code(code),
        None => UNKNOWN_CONDITION,
    }
}

#[must_use]
pub fn describe_code(code: i32) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Fog with rime",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Dense freezing drizzle",
        61 => "Slight rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Slight snow fall",
        73 => "Moderate snow fall",
        75 => "Heavy snow fall",
        77 => "Snow grains",
        80 => "Slight rain showers",
        81 => "Moderate rain showers",
        82 => "Violent rain showers",
        85 => "Slight snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with slight hail",
        99 => "Thunderstorm with heavy hail",
        _ => UNKNOWN_CONDITION,
    }
}
