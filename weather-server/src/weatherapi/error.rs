//! WeatherAPI client error types.

/// Errors that can occur when fetching current weather.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// No API key configured; the request was never sent
    #[error("weather API key not configured: set WEATHER_API_KEY")]
    MissingApiKey,

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check WEATHER_API_KEY")]
    Unauthorized,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}
