//! ViaCEP address lookup client.
//!
//! This module provides an HTTP client for the ViaCEP API
//! (<https://viacep.com.br>), which resolves Brazilian postal codes to
//! address records.
//!
//! Key characteristics of ViaCEP:
//! - An unknown CEP comes back as HTTP 200 with an `{"erro": true}` marker
//!   in the body, not as a 404
//! - The lookup path takes the bare 8 digits, without the hyphen
//! - Field names in the response are Portuguese (`logradouro`, `bairro`,
//!   `localidade`, ...)

mod client;
mod error;
mod mock;
mod types;

pub use client::{CepResolver, ViaCepClient, ViaCepConfig};
pub use error::ViaCepError;
pub use mock::MockCepResolver;
pub use types::Address;
