//! Wire types for the ViaCEP API.

use serde::Deserialize;

/// An address record returned by ViaCEP.
///
/// Field names map the API's Portuguese keys onto English ones. Every field
/// may be absent on the wire (the not-found payload carries none of them),
/// so all of them default to empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Address {
    /// Echoed postal code, formatted `NNNNN-NNN`
    #[serde(default)]
    pub cep: String,

    /// Street (`logradouro`)
    #[serde(default, rename = "logradouro")]
    pub street: String,

    /// Address complement (`complemento`), e.g. "até 610 - lado par"
    #[serde(default, rename = "complemento")]
    pub complement: String,

    /// Neighborhood (`bairro`)
    #[serde(default, rename = "bairro")]
    pub neighborhood: String,

    /// City (`localidade`) - the value forwarded to the weather provider
    #[serde(default, rename = "localidade")]
    pub city: String,

    /// Two-letter state code (`uf`)
    #[serde(default, rename = "uf")]
    pub state: String,

    /// IBGE municipality code
    #[serde(default)]
    pub ibge: String,

    /// GIA taxpayer code (São Paulo state only)
    #[serde(default)]
    pub gia: String,

    /// Telephone area code
    #[serde(default)]
    pub ddd: String,

    /// SIAFI fiscal code
    #[serde(default)]
    pub siafi: String,
}

/// Raw lookup response: an address plus the provider's not-found marker.
///
/// ViaCEP signals an unknown CEP with `{"erro": true}` in a 200 response.
/// The client checks the marker and never hands an erroneous payload to
/// callers, so `Address` itself carries no error state.
#[derive(Debug, Deserialize)]
pub(crate) struct LookupPayload {
    #[serde(default)]
    pub erro: bool,

    #[serde(flatten)]
    pub address: Address,
}
