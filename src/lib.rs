//! `Weather Now` - current conditions and a daily forecast for any city
//!
//! This library resolves a free-text place name through the Open-Meteo
//! geocoding API, fetches current and daily weather for the result, and
//! tracks the lookup in a single state machine that a UI can render.

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod orchestrator;
pub mod shell;
pub mod weather_code;

// Re-export core types for public API
pub use api::{ForecastFetcher, GeocodeResolver, OpenMeteoForecastClient, OpenMeteoGeocoder};
pub use crate::config::WeatherNowConfig;
pub use error::{ErrorKind, WeatherError};
pub use models::{CurrentConditions, DailyForecast, DayForecast, Location, WeatherSnapshot};
pub use orchestrator::{
    ErrorReason, Outcome, Pipeline, QueryOrchestrator, RequestId, RequestState, Submission, Ticket,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WeatherError>;

/// Orchestrator wired to the real Open-Meteo clients, sharing one HTTP client
pub fn open_meteo_orchestrator(
    api_config: &crate::config::ApiConfig,
) -> Result<QueryOrchestrator<OpenMeteoGeocoder, OpenMeteoForecastClient>> {
    let client = api::build_http_client(api_config)?;
    Ok(QueryOrchestrator::new(
        OpenMeteoGeocoder::with_client(client.clone(), &api_config.geocoding_base_url),
        OpenMeteoForecastClient::with_client(client, &api_config.forecast_base_url),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_open_meteo_orchestrator_starts_idle() {
        let orchestrator = open_meteo_orchestrator(&crate::config::ApiConfig::default()).unwrap();
        assert_eq!(orchestrator.state(), &RequestState::Idle);
    }
}
