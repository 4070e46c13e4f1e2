//! WeatherAPI current-conditions client.
//!
//! This module provides an HTTP client for WeatherAPI
//! (<https://www.weatherapi.com>), which answers free-text location queries
//! with current observed conditions.
//!
//! Key characteristics of WeatherAPI:
//! - Every request carries the API key as a `key` query parameter
//! - The `q` parameter accepts a city name; accented or space-containing
//!   names are percent-encoded on the wire rather than transliterated
//! - Only the Celsius reading is decoded from the response

mod client;
mod error;
mod mock;
mod types;

pub use client::{WeatherApiClient, WeatherApiConfig, WeatherProvider};
pub use error::WeatherError;
pub use mock::MockWeatherProvider;
pub use types::CurrentConditions;
