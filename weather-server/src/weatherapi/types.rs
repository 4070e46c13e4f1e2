//! Wire types for the WeatherAPI current-conditions endpoint.

use serde::Deserialize;

/// Current observed conditions for a location.
///
/// WeatherAPI returns far more than this; only the Celsius reading is
/// decoded, and unknown fields are ignored.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CurrentConditions {
    /// Current temperature in Celsius
    pub temp_c: f64,
}

/// Top-level response body for `current.json`.
#[derive(Debug, Deserialize)]
pub(crate) struct WeatherPayload {
    pub current: CurrentConditions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_nested_temperature() {
        let json = r#"{
            "location": {"name": "Sao Paulo", "country": "Brazil"},
            "current": {"temp_c": 28.3, "temp_f": 82.9, "humidity": 62}
        }"#;

        let payload: WeatherPayload = serde_json::from_str(json).unwrap();
        assert_eq!(payload.current.temp_c, 28.3);
    }

    #[test]
    fn missing_current_is_an_error() {
        let result: Result<WeatherPayload, _> =
            serde_json::from_str(r#"{"location": {"name": "Sao Paulo"}}"#);
        assert!(result.is_err());
    }
}
