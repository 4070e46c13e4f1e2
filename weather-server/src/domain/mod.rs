//! Domain types for the weather service.
//!
//! This module contains the validated value types the request pipeline is
//! built from. Types enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod cep;
mod temperature;

pub use cep::{Cep, InvalidCep};
pub use temperature::{TemperatureReport, fahrenheit_from_celsius, kelvin_from_celsius};
