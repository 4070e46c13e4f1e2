//! ViaCEP client error types.

/// Errors that can occur when looking up a postal code.
#[derive(Debug, thiserror::Error)]
pub enum ViaCepError {
    /// The provider does not know the postal code
    #[error("CEP not found")]
    NotFound,

    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ViaCepError::NotFound;
        assert_eq!(err.to_string(), "CEP not found");

        let err = ViaCepError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = ViaCepError::Json {
            message: "expected value".into(),
        };
        assert!(err.to_string().contains("JSON parse error"));
    }
}
