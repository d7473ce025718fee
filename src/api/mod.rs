//! Open-Meteo HTTP clients
//!
//! Two sequential calls make up one lookup: the geocoder turns a place name
//! into coordinates, then the forecast client fetches conditions for them.
//! Neither call retries; a failure is reported once and left to the caller.

pub mod forecast;
pub mod geocoding;
pub mod openmeteo;

pub use forecast::{ForecastFetcher, OpenMeteoForecastClient};
pub use geocoding::{GeocodeResolver, OpenMeteoGeocoder};

use crate::config::ApiConfig;
use crate::{Result, WeatherError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const SLOW_RESPONSE: Duration = Duration::from_secs(5);

/// Build the HTTP client shared by both Open-Meteo clients
pub fn build_http_client(config: &ApiConfig) -> Result<Client> {
    Client::builder()
        .timeout(config.timeout())
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(|e| WeatherError::config(format!("Failed to create HTTP client: {e}")))
}

/// GET `url` and decode the JSON body into `T`.
///
/// Transport failures and non-2xx statuses are [`WeatherError::Network`];
/// a body that does not match `T` is [`WeatherError::MalformedResponse`].
pub(crate) async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T> {
    let start_time = Instant::now();
    debug!("GET {}", url);

    let response = client
        .get(url)
        .send()
        .await
        .map_err(WeatherError::from)?;

    let status = response.status();
    if !status.is_success() {
        return Err(WeatherError::network(format!(
            "request failed with status: {} - {}",
            status,
            status.canonical_reason().unwrap_or("Unknown error")
        )));
    }

    // Read the body first so decode failures are told apart from transport ones
    let body = response
        .text()
        .await
        .map_err(|e| WeatherError::network(format!("failed to read response body: {e}")))?;

    let elapsed = start_time.elapsed();
    debug!(
        "HTTP {} with {} bytes in {:.3}s",
        status,
        body.len(),
        elapsed.as_secs_f64()
    );
    if elapsed > SLOW_RESPONSE {
        warn!("Slow API response detected: {:.3}s", elapsed.as_secs_f64());
    }

    serde_json::from_str(&body).map_err(WeatherError::from)
}

/// Join a configured base URL and an endpoint path without doubling slashes
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_paths() {
        assert_eq!(
            endpoint("https://api.open-meteo.com/v1", "forecast"),
            "https://api.open-meteo.com/v1/forecast"
        );
        assert_eq!(
            endpoint("https://api.open-meteo.com/v1/", "/forecast"),
            "https://api.open-meteo.com/v1/forecast"
        );
    }

    #[test]
    fn test_build_http_client_from_defaults() {
        assert!(build_http_client(&ApiConfig::default()).is_ok());
    }
}
