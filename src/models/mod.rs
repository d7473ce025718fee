//! Data models for the weather lookup
//!
//! - Location: the resolved place
//! - Weather: current conditions
//! - Forecast: the daily series and the snapshot that ties everything together

pub mod forecast;
pub mod location;
pub mod weather;

pub use forecast::{DailyForecast, DayForecast, WeatherSnapshot};
pub use location::Location;
pub use weather::CurrentConditions;
