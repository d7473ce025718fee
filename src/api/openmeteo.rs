//! `OpenMeteo` API response structures and conversion into internal models

use crate::models::{CurrentConditions, DailyForecast, DayForecast, Location};
use crate::{Result, WeatherError};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

/// Current-condition variables requested from the forecast endpoint
pub const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,apparent_temperature,weather_code,wind_speed_10m,wind_direction_10m";

/// Daily variables requested from the forecast endpoint
pub const DAILY_FIELDS: &str = "weather_code,temperature_2m_max,temperature_2m_min";

/// Geocoding response from `OpenMeteo`; `results` is omitted when nothing matched
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Location {
            latitude: result.latitude,
            longitude: result.longitude,
            name: result.name,
            country: result.country,
        }
    }
}

/// Forecast response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub timezone: Option<String>,
    pub current: Option<CurrentData>,
    pub daily: Option<DailyData>,
}

/// Current weather block, one value per requested variable
#[derive(Debug, Deserialize)]
pub struct CurrentData {
    #[serde(rename = "temperature_2m")]
    pub temperature: Option<f64>,
    #[serde(rename = "relative_humidity_2m")]
    pub relative_humidity: Option<f64>,
    pub apparent_temperature: Option<f64>,
    pub weather_code: Option<i32>,
    #[serde(rename = "wind_speed_10m")]
    pub wind_speed: Option<f64>,
    #[serde(rename = "wind_direction_10m")]
    pub wind_direction: Option<f64>,
}

impl From<CurrentData> for CurrentConditions {
    fn from(current: CurrentData) -> Self {
        CurrentConditions {
            temperature: current.temperature,
            apparent_temperature: current.apparent_temperature,
            relative_humidity: current.relative_humidity,
            wind_speed: current.wind_speed,
            wind_direction: current.wind_direction,
            weather_code: current.weather_code,
        }
    }
}

/// Daily block: parallel arrays where index `i` of every array is the same day
#[derive(Debug, Deserialize)]
pub struct DailyData {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m_max")]
    pub temperature_max: Option<Vec<Option<f64>>>,
    #[serde(rename = "temperature_2m_min")]
    pub temperature_min: Option<Vec<Option<f64>>>,
    pub weather_code: Option<Vec<Option<i32>>>,
}

/// Bounded read of one element of an optional column
fn column_value<T: Copy>(column: Option<&Vec<Option<T>>>, index: usize) -> Option<T> {
    column.and_then(|values| values.get(index)).copied().flatten()
}

impl DailyData {
    /// Zip the parallel arrays into one entry per day.
    ///
    /// `time` declares the length; shorter columns leave the tail unknown,
    /// longer ones are ignored past the last date.
    pub fn into_forecast(self) -> Result<DailyForecast> {
        let len = self.time.len();
        let mismatched = [
            self.temperature_max.as_ref().map(Vec::len),
            self.temperature_min.as_ref().map(Vec::len),
            self.weather_code.as_ref().map(Vec::len),
        ]
        .into_iter()
        .flatten()
        .any(|column_len| column_len != len);
        if mismatched {
            warn!("Daily forecast arrays differ in length; reading {} days", len);
        }

        let mut days = Vec::with_capacity(len);
        for (i, time) in self.time.iter().enumerate() {
            let date = NaiveDate::parse_from_str(time, "%Y-%m-%d").map_err(|e| {
                WeatherError::malformed(format!("invalid daily date '{time}': {e}"))
            })?;

            days.push(DayForecast {
                date,
                temperature_max: column_value(self.temperature_max.as_ref(), i),
                temperature_min: column_value(self.temperature_min.as_ref(), i),
                weather_code: column_value(self.weather_code.as_ref(), i),
            });
        }

        Ok(DailyForecast::new(days))
    }
}

impl ForecastResponse {
    /// Both blocks must be present; a response without them is malformed
    pub fn into_parts(self) -> Result<(CurrentConditions, DailyForecast)> {
        let current = self
            .current
            .ok_or_else(|| WeatherError::malformed("forecast response has no `current` block"))?;
        let daily = self
            .daily
            .ok_or_else(|| WeatherError::malformed("forecast response has no `daily` block"))?;

        Ok((current.into(), daily.into_forecast()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geocoding_response_without_results() {
        let response: GeocodingResponse =
            serde_json::from_value(json!({ "generationtime_ms": 0.5 })).unwrap();
        assert!(response.results.is_none());
    }

    #[test]
    fn test_geocoding_result_to_location() {
        let response: GeocodingResponse = serde_json::from_value(json!({
            "results": [{
                "id": 2988507,
                "name": "Paris",
                "latitude": 48.85341,
                "longitude": 2.3488,
                "country_code": "FR",
                "country": "France",
                "admin1": "Île-de-France"
            }]
        }))
        .unwrap();

        let location: Location = response.results.unwrap().remove(0).into();
        assert_eq!(location.name, "Paris");
        assert_eq!(location.country.as_deref(), Some("France"));
        assert_eq!(location.latitude, 48.85341);
    }

    #[test]
    fn test_forecast_into_parts() {
        let response: ForecastResponse = serde_json::from_value(json!({
            "timezone": "Europe/Paris",
            "current": {
                "time": "2024-01-01T12:00",
                "temperature_2m": 18,
                "relative_humidity_2m": 70,
                "apparent_temperature": 17.2,
                "weather_code": 1,
                "wind_speed_10m": 3.4,
                "wind_direction_10m": 250
            },
            "daily": {
                "time": ["2024-01-01", "2024-01-02"],
                "weather_code": [1, 2],
                "temperature_2m_max": [19, 20],
                "temperature_2m_min": [10, 11]
            }
        }))
        .unwrap();

        let (current, daily) = response.into_parts().unwrap();
        assert_eq!(current.temperature, Some(18.0));
        assert_eq!(current.relative_humidity, Some(70.0));
        assert_eq!(current.weather_code, Some(1));
        assert_eq!(daily.len(), 2);
        assert_eq!(daily.days[1].temperature_max, Some(20.0));
        assert_eq!(daily.days[1].weather_code, Some(2));
    }

    #[test]
    fn test_unequal_daily_arrays_are_bounded_by_time() {
        let daily: DailyData = serde_json::from_value(json!({
            "time": ["2024-01-01", "2024-01-02", "2024-01-03"],
            "weather_code": [1],
            "temperature_2m_max": [19, 20, 21, 22],
            "temperature_2m_min": [10, null]
        }))
        .unwrap();

        let forecast = daily.into_forecast().unwrap();
        assert_eq!(forecast.len(), 3);
        assert_eq!(forecast.days[0].weather_code, Some(1));
        assert_eq!(forecast.days[1].weather_code, None);
        assert_eq!(forecast.days[1].temperature_min, None);
        assert_eq!(forecast.days[2].temperature_max, Some(21.0));
        assert_eq!(forecast.days[2].temperature_min, None);
    }

    #[test]
    fn test_missing_daily_columns_read_as_unknown() {
        let daily: DailyData =
            serde_json::from_value(json!({ "time": ["2024-01-01"] })).unwrap();
        let forecast = daily.into_forecast().unwrap();
        assert_eq!(forecast.days[0].temperature_max, None);
        assert_eq!(forecast.days[0].description(), "Unknown");
    }

    #[test]
    fn test_invalid_daily_date_is_malformed() {
        let daily: DailyData =
            serde_json::from_value(json!({ "time": ["tomorrow"] })).unwrap();
        let err = daily.into_forecast().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::MalformedResponse);
    }

    #[test]
    fn test_missing_blocks_are_malformed() {
        let response: ForecastResponse =
            serde_json::from_value(json!({ "daily": { "time": [] } })).unwrap();
        let err = response.into_parts().unwrap_err();
        assert!(err.to_string().contains("current"));

        let response: ForecastResponse =
            serde_json::from_value(json!({ "current": {} })).unwrap();
        let err = response.into_parts().unwrap_err();
        assert!(err.to_string().contains("daily"));
    }
}
