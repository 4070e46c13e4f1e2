//! ViaCEP HTTP client.
//!
//! Provides an async lookup from a validated postal code to the address
//! record ViaCEP holds for it.

use async_trait::async_trait;

use crate::domain::Cep;

use super::error::ViaCepError;
use super::types::{Address, LookupPayload};

/// Default base URL for the ViaCEP API.
const DEFAULT_BASE_URL: &str = "https://viacep.com.br/ws";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the ViaCEP client.
#[derive(Debug, Clone)]
pub struct ViaCepConfig {
    /// Base URL for the API (defaults to production ViaCEP)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ViaCepConfig {
    /// Create a config pointing at the public ViaCEP endpoint.
    pub fn new() -> Self {
        Self {
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

impl Default for ViaCepConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Capability of resolving a postal code to an address.
///
/// This abstraction lets the request pipeline be exercised with
/// deterministic fakes instead of live network calls.
#[async_trait]
pub trait CepResolver: Send + Sync {
    /// Resolve a postal code to its address record.
    async fn resolve(&self, cep: &Cep) -> Result<Address, ViaCepError>;
}

/// ViaCEP API client.
#[derive(Debug, Clone)]
pub struct ViaCepClient {
    http: reqwest::Client,
    base_url: String,
}

impl ViaCepClient {
    /// Create a new ViaCEP client with the given configuration.
    pub fn new(config: ViaCepConfig) -> Result<Self, ViaCepError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }
}

#[async_trait]
impl CepResolver for ViaCepClient {
    async fn resolve(&self, cep: &Cep) -> Result<Address, ViaCepError> {
        let url = format!("{}/{}/json/", self.base_url, cep.digits());

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ViaCepError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let payload: LookupPayload =
            serde_json::from_str(&body).map_err(|e| ViaCepError::Json {
                message: e.to_string(),
            })?;

        // ViaCEP reports unknown CEPs with 200 and an `erro` marker.
        if payload.erro {
            return Err(ViaCepError::NotFound);
        }

        Ok(payload.address)
    }
}
