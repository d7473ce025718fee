//! Place-name lookup against the Open-Meteo geocoding API

use super::openmeteo::GeocodingResponse;
use super::{build_http_client, endpoint, get_json};
use crate::config::ApiConfig;
use crate::models::Location;
use crate::{Result, WeatherError};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, instrument, warn};

/// Resolves a free-text place name to a single location
#[async_trait]
pub trait GeocodeResolver: Send + Sync {
    /// Fails with [`WeatherError::NotFound`] when nothing matched
    async fn resolve(&self, query: &str) -> Result<Location>;
}

/// Geocoder backed by `https://geocoding-api.open-meteo.com/v1/search`
#[derive(Debug, Clone)]
pub struct OpenMeteoGeocoder {
    client: Client,
    search_url: String,
}

impl OpenMeteoGeocoder {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self::with_client(
            build_http_client(config)?,
            &config.geocoding_base_url,
        ))
    }

    /// Reuse an existing HTTP client
    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            search_url: endpoint(base_url, "search"),
        }
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}?name={}&count=1",
            self.search_url,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl GeocodeResolver for OpenMeteoGeocoder {
    #[instrument(skip(self), fields(location = query))]
    async fn resolve(&self, query: &str) -> Result<Location> {
        info!("Geocoding location: '{}'", query);

        let response: GeocodingResponse = get_json(&self.client, &self.search_url(query))
            .await
            .inspect_err(|e| warn!("Geocoding request for '{}' failed: {}", query, e))?;

        // Only one candidate is requested; take it as-is
        let Some(result) = response.results.unwrap_or_default().into_iter().next() else {
            warn!("No results found for location '{}'", query);
            return Err(WeatherError::not_found(query));
        };

        let location = Location::from(result);
        debug!(
            "Found location: {} ({})",
            location.display_label(),
            location.format_coordinates()
        );
        Ok(location)
    }
}
