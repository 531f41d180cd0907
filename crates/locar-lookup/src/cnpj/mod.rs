//! # CNPJ → Company Lookup
//!
//! Two upstream providers, consulted in order:
//!
//! 1. **BrasilAPI**: primary.
//! 2. **CNPJá**: secondary.
//!
//! Neither provider gives an unambiguous "no such company" answer that can
//! be told apart from its other failures, so every adapter failure here is
//! `ProviderUnavailable` and the chain always falls back.

pub mod brasilapi;
pub mod cnpja;
pub mod size;

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use locar_core::Cnpj;

use crate::config::LookupConfig;
use crate::fallback::{FallbackChain, NotFoundPolicy};
use crate::types::CompanyResult;

pub use brasilapi::BrasilApiCnpjAdapter;
pub use cnpja::CnpjaAdapter;
pub use size::size_label;

/// Fallback chain type for CNPJ lookups.
pub type CnpjChain = FallbackChain<Cnpj, CompanyResult>;

/// Build the production CNPJ chain: BrasilAPI, then CNPJá.
pub fn default_chain(http: &reqwest::Client, config: &LookupConfig) -> CnpjChain {
    let timeout = Duration::from_secs(config.timeout_secs);
    CnpjChain::new("cnpj", NotFoundPolicy::FallThrough)
        .with_provider(Arc::new(BrasilApiCnpjAdapter::new(
            http.clone(),
            config.brasilapi_url.clone(),
            timeout,
        )))
        .with_provider(Arc::new(CnpjaAdapter::new(
            http.clone(),
            config.cnpja_url.clone(),
            config.cnpja_api_key.clone(),
            timeout,
        )))
}

/// Normalize a provider date to ISO `YYYY-MM-DD`.
///
/// Accepts `YYYY-MM-DD`, `DD/MM/YYYY`, and an ISO timestamp whose date part
/// is `YYYY-MM-DD`. Anything else becomes `""`.
pub(crate) fn iso_date(raw: &str) -> String {
    let raw = raw.trim();
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(raw, "%d/%m/%Y"))
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}
