//! Weather-by-CEP server.
//!
//! A small HTTP service that answers: "what is the temperature where this
//! Brazilian postal code is?" The code is resolved to its city via ViaCEP,
//! the city's current conditions come from WeatherAPI, and the response
//! carries the temperature in Celsius, Fahrenheit and Kelvin.

pub mod domain;
pub mod viacep;
pub mod weatherapi;
pub mod web;
