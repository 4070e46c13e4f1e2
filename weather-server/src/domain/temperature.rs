//! Temperature scale conversion.

/// Convert a Celsius reading to Fahrenheit.
pub fn fahrenheit_from_celsius(celsius: f64) -> f64 {
    celsius * 1.8 + 32.0
}

/// Convert a Celsius reading to Kelvin.
///
/// The offset is the whole number 273, not 273.15: the public response
/// format has always used the rounded offset, and clients depend on the
/// exact values it produces.
pub fn kelvin_from_celsius(celsius: f64) -> f64 {
    celsius + 273.0
}

/// A temperature expressed on all three scales the API serves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureReport {
    /// Celsius, as reported by the weather provider
    pub celsius: f64,
    /// Fahrenheit, derived
    pub fahrenheit: f64,
    /// Kelvin, derived
    pub kelvin: f64,
}

impl TemperatureReport {
    /// Derive Fahrenheit and Kelvin from a Celsius reading.
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            celsius,
            fahrenheit: fahrenheit_from_celsius(celsius),
            kelvin: kelvin_from_celsius(celsius),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fahrenheit_reference_points() {
        assert_eq!(fahrenheit_from_celsius(0.0), 32.0);
        assert_eq!(fahrenheit_from_celsius(100.0), 212.0);
        assert_eq!(fahrenheit_from_celsius(25.0), 77.0);
        assert_eq!(fahrenheit_from_celsius(-10.0), 14.0);
    }

    #[test]
    fn kelvin_reference_points() {
        assert_eq!(kelvin_from_celsius(0.0), 273.0);
        assert_eq!(kelvin_from_celsius(100.0), 373.0);
        assert_eq!(kelvin_from_celsius(25.0), 298.0);
        assert_eq!(kelvin_from_celsius(-273.0), 0.0);
    }

    #[test]
    fn report_carries_all_scales() {
        let report = TemperatureReport::from_celsius(25.0);
        assert_eq!(report.celsius, 25.0);
        assert_eq!(report.fahrenheit, 77.0);
        assert_eq!(report.kelvin, 298.0);
    }

    #[test]
    fn report_preserves_celsius_verbatim() {
        let report = TemperatureReport::from_celsius(28.3);
        assert_eq!(report.celsius, 28.3);
    }
}
