//! # CEP → Address Lookup
//!
//! Two upstream providers, consulted in order:
//!
//! 1. **ViaCEP**: primary. Its not-found answer is authoritative.
//! 2. **BrasilAPI**: secondary, only after ViaCEP is unavailable.

pub mod brasilapi;
pub mod viacep;

use std::sync::Arc;
use std::time::Duration;

use locar_core::Cep;

use crate::config::LookupConfig;
use crate::fallback::{FallbackChain, NotFoundPolicy};
use crate::types::AddressResult;

pub use brasilapi::BrasilApiCepAdapter;
pub use viacep::ViaCepAdapter;

/// Fallback chain type for CEP lookups.
pub type CepChain = FallbackChain<Cep, AddressResult>;

/// Build the production CEP chain: ViaCEP, then BrasilAPI.
pub fn default_chain(http: &reqwest::Client, config: &LookupConfig) -> CepChain {
    let timeout = Duration::from_secs(config.timeout_secs);
    CepChain::new("cep", NotFoundPolicy::PrimaryAuthoritative)
        .with_provider(Arc::new(ViaCepAdapter::new(
            http.clone(),
            config.viacep_url.clone(),
            timeout,
        )))
        .with_provider(Arc::new(BrasilApiCepAdapter::new(
            http.clone(),
            config.brasilapi_url.clone(),
            timeout,
        )))
}
