//! Error types and handling for the weather lookup

use thiserror::Error;

/// User-facing message when the geocoder knows no place by that name
pub const CITY_NOT_FOUND_MESSAGE: &str = "City not found. Try another city.";

/// User-facing message for every other failure
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch weather data.";

/// Main error type for the weather lookup
#[derive(Error, Debug)]
pub enum WeatherError {
    /// The geocoding provider returned no candidate for the query
    #[error("No place matched '{query}'")]
    NotFound { query: String },

    /// Transport failure, timeout or non-success HTTP status
    #[error("Network error: {message}")]
    Network { message: String },

    /// The provider answered with a body we could not decode
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

/// Discriminant of [`WeatherError`], cheap to copy into terminal states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Network,
    MalformedResponse,
    Config,
}

impl WeatherError {
    /// Create a new not-found error
    pub fn not_found<S: Into<String>>(query: S) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a new network error
    pub fn network<S: Into<String>>(message: S) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new malformed-response error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            WeatherError::NotFound { .. } => ErrorKind::NotFound,
            WeatherError::Network { .. } => ErrorKind::Network,
            WeatherError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            WeatherError::Config { .. } => ErrorKind::Config,
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        self.kind().user_message()
    }
}

impl ErrorKind {
    /// Only a failed lookup is told apart from the rest
    #[must_use]
    pub fn user_message(self) -> &'static str {
        match self {
            ErrorKind::NotFound => CITY_NOT_FOUND_MESSAGE,
            ErrorKind::Network | ErrorKind::MalformedResponse | ErrorKind::Config => {
                FETCH_FAILED_MESSAGE
            }
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            WeatherError::network(format!("request timed out: {err}"))
        } else {
            WeatherError::network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for WeatherError {
    fn from(err: serde_json::Error) -> Self {
        WeatherError::malformed(err.to_string())
    }
}
