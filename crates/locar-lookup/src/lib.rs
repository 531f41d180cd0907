//! # locar-lookup — Resilient registry lookups
//!
//! Resolves Brazilian public-registry identifiers against third-party
//! providers:
//! - **CEP → address** via ViaCEP, falling back to BrasilAPI
//! - **CNPJ → company** via BrasilAPI, falling back to CNPJá
//!
//! ## Architecture
//!
//! Each upstream service sits behind one [`LookupProvider`] adapter that
//! performs a single HTTP call and maps the provider's wire format into
//! [`AddressResult`] or [`CompanyResult`]. A [`FallbackChain`] per domain
//! owns the provider order and decides when a failure should move on to
//! the next provider. [`LookupClient`] ties both chains to the identifier
//! normalization in `locar-core`.
//!
//! Callers only ever see the normalized result types and [`LookupError`].
//! Provider field names never leave their adapter module.

pub mod cep;
pub mod cnpj;
pub mod config;
pub mod error;
pub mod fallback;
pub mod provider;
pub mod types;

pub use config::{ConfigError, LookupConfig};
pub use error::{LookupError, LookupErrorKind};
pub use fallback::{FallbackChain, NotFoundPolicy};
pub use provider::LookupProvider;
pub use types::{AddressResult, CompanyResult};

use std::time::Duration;

use locar_core::{Cep, Cnpj};

/// User agent sent to every provider.
const USER_AGENT: &str = concat!("locar/", env!("CARGO_PKG_VERSION"));

/// Top-level lookup client. Holds one fallback chain per domain.
#[derive(Debug, Clone)]
pub struct LookupClient {
    cep: cep::CepChain,
    cnpj: cnpj::CnpjChain,
}

impl LookupClient {
    /// Create a client wired to the production provider order.
    pub fn new(config: LookupConfig) -> Result<Self, ConfigError> {
        if config.timeout_secs == 0 {
            return Err(ConfigError::InvalidTimeout(config.timeout_secs.to_string()));
        }
        if let Some(key) = &config.cnpja_api_key {
            reqwest::header::HeaderValue::from_str(key.as_str())
                .map_err(|_| ConfigError::InvalidApiKey)?;
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self::from_chains(
            cep::default_chain(&http, &config),
            cnpj::default_chain(&http, &config),
        ))
    }

    /// Build a client from explicit chains.
    pub fn from_chains(cep: cep::CepChain, cnpj: cnpj::CnpjChain) -> Self {
        Self { cep, cnpj }
    }

    /// Resolve a CEP in any formatting into an address.
    ///
    /// Fails with `InvalidShape` before any network call if the input does
    /// not normalize to exactly 8 digits.
    pub async fn resolve_cep(&self, raw: &str) -> Result<AddressResult, LookupError> {
        let cep = Cep::new(raw)?;
        tracing::debug!(cep = %cep, "resolving CEP");
        self.cep.resolve(&cep).await
    }

    /// Resolve a CNPJ in any formatting into company data.
    ///
    /// Fails with `InvalidShape` before any network call if the input does
    /// not normalize to exactly 14 digits. Check digits are not verified.
    pub async fn resolve_cnpj(&self, raw: &str) -> Result<CompanyResult, LookupError> {
        let cnpj = Cnpj::new(raw)?;
        tracing::debug!(cnpj = %cnpj, "resolving CNPJ");
        self.cnpj.resolve(&cnpj).await
    }

    /// The CEP fallback chain.
    pub fn cep_chain(&self) -> &cep::CepChain {
        &self.cep
    }

    /// The CNPJ fallback chain.
    pub fn cnpj_chain(&self) -> &cnpj::CnpjChain {
        &self.cnpj
    }
}
