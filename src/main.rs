use anyhow::{Context, Result};
use tokio::io::BufReader;
use weather_now::{WeatherNowConfig, logging, shell};

const BANNER: &str = "Weather Now - type a city name, `:cancel` to abandon a lookup, `:quit` to exit";

#[tokio::main]
async fn main() -> Result<()> {
    let config = WeatherNowConfig::load().context("Failed to load configuration")?;
    logging::init(&config.logging)?;
    tracing::info!(
        "Using geocoding API {} and forecast API {}",
        config.api.geocoding_base_url,
        config.api.forecast_base_url
    );

    let mut orchestrator = weather_now::open_meteo_orchestrator(&config.api)
        .context("Failed to create Open-Meteo clients")?;

    println!("{BANNER}");
    shell::run(
        &mut orchestrator,
        BufReader::new(tokio::io::stdin()),
        &mut std::io::stdout(),
    )
    .await
}
