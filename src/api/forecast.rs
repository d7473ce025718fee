//! Current conditions and daily forecast from the Open-Meteo forecast API

use super::openmeteo::{CURRENT_FIELDS, DAILY_FIELDS, ForecastResponse};
use super::{build_http_client, endpoint, get_json};
use crate::Result;
use crate::config::ApiConfig;
use crate::models::{CurrentConditions, DailyForecast};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

/// Fetches conditions for coordinates produced by a [`super::GeocodeResolver`]
#[async_trait]
pub trait ForecastFetcher: Send + Sync {
    /// Either both structures are returned or the call fails as a whole
    async fn fetch(&self, latitude: f64, longitude: f64)
    -> Result<(CurrentConditions, DailyForecast)>;
}

/// Forecast client backed by `https://api.open-meteo.com/v1/forecast`
#[derive(Debug, Clone)]
pub struct OpenMeteoForecastClient {
    client: Client,
    forecast_url: String,
}

impl OpenMeteoForecastClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        Ok(Self::with_client(
            build_http_client(config)?,
            &config.forecast_base_url,
        ))
    }

    /// Reuse an existing HTTP client
    #[must_use]
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            forecast_url: endpoint(base_url, "forecast"),
        }
    }

    // Timezone is inferred by the provider from the coordinates
    fn forecast_url(&self, latitude: f64, longitude: f64) -> String {
        format!(
            "{}?latitude={}&longitude={}&current={}&daily={}&timezone=auto",
            self.forecast_url, latitude, longitude, CURRENT_FIELDS, DAILY_FIELDS
        )
    }
}

#[async_trait]
impl ForecastFetcher for OpenMeteoForecastClient {
    #[instrument(skip(self), fields(lat = latitude, lon = longitude))]
    async fn fetch(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<(CurrentConditions, DailyForecast)> {
        info!(
            "Getting forecast for coordinates: {:.4}, {:.4}",
            latitude, longitude
        );

        let response: ForecastResponse =
            get_json(&self.client, &self.forecast_url(latitude, longitude))
                .await
                .inspect_err(|e| warn!("Forecast request failed: {}", e))?;

        let timezone = response.timezone.clone().unwrap_or_default();
        let (current, daily) = response
            .into_parts()
            .inspect_err(|e| warn!("Forecast response rejected: {}", e))?;

        info!(
            "Retrieved forecast with {} days (timezone {})",
            daily.len(),
            timezone
        );
        Ok((current, daily))
    }
}
