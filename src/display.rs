//! Terminal rendering of the lookup state

use crate::models::WeatherSnapshot;
use crate::orchestrator::RequestState;
use std::fmt::{self, Display};

pub const IDLE_PROMPT: &str = "Enter a city name to get the current weather.";
pub const LOADING_TEXT: &str = "Loading...";

/// Borrowing view that renders any [`RequestState`]
pub struct StateView<'a>(pub &'a RequestState);

impl Display for StateView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            RequestState::Idle => writeln!(f, "{IDLE_PROMPT}"),
            RequestState::Loading => writeln!(f, "{LOADING_TEXT}"),
            RequestState::Failed(reason) => writeln!(f, "⚠️  {}", reason.message()),
            RequestState::Success(snapshot) => write!(f, "{}", SnapshotView(snapshot)),
        }
    }
}

/// Weather card for one snapshot
pub struct SnapshotView<'a>(pub &'a WeatherSnapshot);

impl Display for SnapshotView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        let current = &snapshot.current;

        writeln!(f, "📍 {}", snapshot.location_label())?;
        writeln!(
            f,
            "   {}  {}",
            current.format_temperature(),
            current.description()
        )?;
        writeln!(f, "   Feels like: {}", current.format_feels_like())?;
        writeln!(f, "   Humidity:   {}", current.format_humidity())?;
        writeln!(f, "   Wind:       {}", current.format_wind())?;
        writeln!(f, "   Direction:  {}", current.format_wind_direction())?;

        if snapshot.daily.is_empty() {
            return Ok(());
        }

        writeln!(f)?;
        writeln!(f, "   Daily Forecast")?;
        for day in snapshot.daily.iter() {
            writeln!(
                f,
                "   {:<4} {:<16} {}",
                day.weekday_label(),
                day.format_temperature_range(),
                day.description()
            )?;
        }
        Ok(())
    }
}

/// Render a state to a string
#[must_use]
pub fn render(state: &RequestState) -> String {
    StateView(state).to_string()
}
