//! Mock weather provider for testing without API access.

use std::collections::HashMap;

use async_trait::async_trait;

use super::client::WeatherProvider;
use super::error::WeatherError;
use super::types::CurrentConditions;

/// In-memory provider serving a fixed table of readings.
///
/// Cities without a registered reading fail the way the real provider does
/// for an unknown location. The `unavailable` mode makes every fetch fail
/// as if the provider could not be contacted at all.
#[derive(Debug, Clone, Default)]
pub struct MockWeatherProvider {
    readings: HashMap<String, f64>,
    unavailable: bool,
}

impl MockWeatherProvider {
    /// Create an empty provider; every fetch fails with an API error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a Celsius reading for a city.
    pub fn with_city(mut self, city: impl Into<String>, temp_c: f64) -> Self {
        self.readings.insert(city.into(), temp_c);
        self
    }

    /// Create a provider whose every fetch fails with a transport-level
    /// error.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl WeatherProvider for MockWeatherProvider {
    async fn current(&self, city: &str) -> Result<CurrentConditions, WeatherError> {
        if self.unavailable {
            return Err(WeatherError::Api {
                status: 0,
                message: "mock weather provider is unavailable".to_string(),
            });
        }

        self.readings
            .get(city)
            .map(|&temp_c| CurrentConditions { temp_c })
            .ok_or_else(|| WeatherError::Api {
                status: 400,
                message: format!("no mock reading for city: {city}"),
            })
    }
}
