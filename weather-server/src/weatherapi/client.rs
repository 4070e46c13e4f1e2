//! WeatherAPI HTTP client.
//!
//! Provides an async lookup from a city name to its current temperature.
//! The API key comes from configuration at construction time; it is never
//! read from the environment per call.

use async_trait::async_trait;

use super::error::WeatherError;
use super::types::{CurrentConditions, WeatherPayload};

/// Default base URL for WeatherAPI.
const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the WeatherAPI client.
#[derive(Debug, Clone)]
pub struct WeatherApiConfig {
    /// API key sent with every request. May be empty; fetches then fail
    /// with `MissingApiKey` before any network call is attempted.
    pub api_key: String,
    /// Base URL for the API (defaults to production WeatherAPI)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl WeatherApiConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Capability of reading the current weather for a city.
///
/// This abstraction lets the request pipeline be exercised with
/// deterministic fakes instead of live network calls.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Fetch the current conditions for a city by name.
    async fn current(&self, city: &str) -> Result<CurrentConditions, WeatherError>;
}

/// WeatherAPI client.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherApiClient {
    /// Create a new WeatherAPI client with the given configuration.
    pub fn new(config: WeatherApiConfig) -> Result<Self, WeatherError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
        })
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        if self.api_key.is_empty() {
            return Err(WeatherError::MissingApiKey);
        }

        let url = format!("{}/current.json", self.base_url);

        // `.query` percent-encodes the city name, so accented or
        // space-containing names reach the provider intact.
        let response = self
            .http
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", city),
                ("aqi", "no"),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(WeatherError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WeatherError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let payload: WeatherPayload =
            serde_json::from_str(&body).map_err(|e| WeatherError::Json {
                message: e.to_string(),
            })?;

        Ok(payload.current)
    }
}
