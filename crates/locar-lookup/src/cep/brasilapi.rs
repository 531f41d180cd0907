//! BrasilAPI CEP v1 adapter (secondary CEP provider).
//!
//! `GET {base}/api/cep/v1/{cep}`
//!
//! BrasilAPI answers an unknown CEP with HTTP 404. Any other non-success
//! status is an outage.

use std::time::Duration;

use async_trait::async_trait;
use locar_core::Cep;
use serde::Deserialize;
use url::Url;

use crate::config::endpoint;
use crate::error::LookupError;
use crate::provider::{decode, send, unavailable_status, LookupProvider};
use crate::types::{text, AddressResult};

const PROVIDER: &str = "brasilapi-cep";

#[derive(Debug, Deserialize)]
struct BrasilApiCepResponse {
    #[serde(default)]
    street: Option<String>,
    #[serde(default)]
    neighborhood: Option<String>,
    #[serde(default)]
    city: Option<String>,
    #[serde(default)]
    state: Option<String>,
}

impl From<BrasilApiCepResponse> for AddressResult {
    fn from(r: BrasilApiCepResponse) -> Self {
        Self {
            street: text(r.street),
            neighborhood: text(r.neighborhood),
            city: text(r.city),
            state: text(r.state),
        }
    }
}

/// HTTP client for the BrasilAPI CEP endpoint.
#[derive(Debug, Clone)]
pub struct BrasilApiCepAdapter {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl BrasilApiCepAdapter {
    /// Wrap a shared HTTP client.
    pub fn new(client: reqwest::Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            timeout,
        }
    }
}

#[async_trait]
impl LookupProvider<Cep, AddressResult> for BrasilApiCepAdapter {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn resolve(&self, cep: &Cep) -> Result<AddressResult, LookupError> {
        let url = endpoint(&self.base_url, &format!("api/cep/v1/{}", cep.as_str()));
        let resp = send(PROVIDER, self.client.get(&url), self.timeout).await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::not_found(PROVIDER, cep.as_str()));
        }
        if !resp.status().is_success() {
            return Err(unavailable_status(PROVIDER, resp).await);
        }

        let body: BrasilApiCepResponse = decode(PROVIDER, resp).await?;
        Ok(body.into())
    }
}
