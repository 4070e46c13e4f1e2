//! Data transfer objects for web responses.

use serde::Serialize;

use crate::domain::TemperatureReport;

/// Successful lookup: the temperature on all three scales.
///
/// The `temp_C`/`temp_F`/`temp_K` key casing is part of the public
/// contract.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TemperatureResponse {
    /// Celsius, as reported by the weather provider
    #[serde(rename = "temp_C")]
    pub temp_c: f64,

    /// Fahrenheit, derived from Celsius
    #[serde(rename = "temp_F")]
    pub temp_f: f64,

    /// Kelvin, derived from Celsius
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl From<TemperatureReport> for TemperatureResponse {
    fn from(report: TemperatureReport) -> Self {
        Self {
            temp_c: report.celsius,
            temp_f: report.fahrenheit,
            temp_k: report.kelvin,
        }
    }
}

/// Error body: a single fixed message, never internal detail.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: &'static str,
}
