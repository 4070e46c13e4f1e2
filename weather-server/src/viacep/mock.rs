//! Mock CEP resolver for testing without network access.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::Cep;

use super::client::CepResolver;
use super::error::ViaCepError;
use super::types::Address;

/// In-memory resolver serving a fixed table of addresses.
///
/// Unknown codes report `NotFound`, matching the real provider's behavior.
/// The `unreachable` mode makes every lookup fail as if the provider could
/// not be contacted at all.
#[derive(Debug, Clone, Default)]
pub struct MockCepResolver {
    addresses: HashMap<Cep, Address>,
    unreachable: bool,
}

impl MockCepResolver {
    /// Create an empty resolver; every lookup reports `NotFound`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an address for a postal code.
    pub fn with_address(
        mut self,
        cep: Cep,
        city: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        let address = Address {
            cep: cep.to_string(),
            city: city.into(),
            state: state.into(),
            ..Address::default()
        };
        self.addresses.insert(cep, address);
        self
    }

    /// Create a resolver whose every lookup fails with a transport-level
    /// error.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl CepResolver for MockCepResolver {
    async fn resolve(&self, cep: &Cep) -> Result<Address, ViaCepError> {
        if self.unreachable {
            return Err(ViaCepError::Api {
                status: 0,
                message: "mock resolver is unreachable".to_string(),
            });
        }

        self.addresses
            .get(cep)
            .cloned()
            .ok_or(ViaCepError::NotFound)
    }
}
