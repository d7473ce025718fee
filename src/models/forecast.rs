//! Daily forecast series and the weather snapshot

use super::{CurrentConditions, Location};
use super::weather::format_value;
use crate::weather_code;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day of the forecast
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DayForecast {
    /// Local calendar date at the location
    pub date: NaiveDate,
    /// Maximum temperature at 2 m in °C
    pub temperature_max: Option<f64>,
    /// Minimum temperature at 2 m in °C
    pub temperature_min: Option<f64>,
    /// WMO weather code
    pub weather_code: Option<i32>,
}

impl DayForecast {
    /// Short weekday label, e.g. "Mon"
    #[must_use]
    pub fn weekday_label(&self) -> String {
        self.date.format("%a").to_string()
    }

    #[must_use]
    pub fn description(&self) -> &'static str {
        weather_code::describe(self.weather_code)
    }

    #[must_use]
    pub fn format_temperature_range(&self) -> String {
        format!(
            "{}° / {}°",
            format_value(self.temperature_max),
            format_value(self.temperature_min)
        )
    }
}

/// Chronological daily forecast, starting today in the location's timezone
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct DailyForecast {
    pub days: Vec<DayForecast>,
}

impl DailyForecast {
    #[must_use]
    pub fn new(days: Vec<DayForecast>) -> Self {
        Self { days }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DayForecast> {
        self.days.iter()
    }
}

/// Everything shown for one resolved location at one point in time.
///
/// Only ever built from a complete, successful lookup.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentConditions,
    pub daily: DailyForecast,
}

impl WeatherSnapshot {
    #[must_use]
    pub fn new(location: Location, current: CurrentConditions, daily: DailyForecast) -> Self {
        Self {
            location,
            current,
            daily,
        }
    }

    /// "<name>, <country>" heading for the display
    #[must_use]
    pub fn location_label(&self) -> String {
        self.location.display_label()
    }
}
