//! Location model for a geocoded place

use serde::{Deserialize, Serialize};

/// A place resolved by the geocoder
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Place name as returned by the provider
    pub name: String,
    /// Country name as returned by the provider, absent for some places
    pub country: Option<String>,
}

impl Location {
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, name: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country: None,
        }
    }

    #[must_use]
    pub fn with_country(latitude: f64, longitude: f64, name: String, country: String) -> Self {
        Self {
            latitude,
            longitude,
            name,
            country: Some(country),
        }
    }

    /// Heading shown above the weather, e.g. "Paris, France"
    #[must_use]
    pub fn display_label(&self) -> String {
        match &self.country {
            Some(country) => format!("{}, {}", self.name, country),
            None => self.name.clone(),
        }
    }

    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_label_with_country() {
        let location =
            Location::with_country(48.85, 2.35, "Paris".to_string(), "France".to_string());
        assert_eq!(location.display_label(), "Paris, France");
    }

    #[test]
    fn test_display_label_without_country() {
        let location = Location::new(0.0, -160.0, "Pacific Station".to_string());
        assert_eq!(location.display_label(), "Pacific Station");
    }

    #[test]
    fn test_format_coordinates() {
        let location = Location::new(46.818_234, 8.227_456, "Interlaken".to_string());
        assert_eq!(location.format_coordinates(), "46.8182, 8.2275");
    }
}
