//! ViaCEP adapter (primary CEP provider).
//!
//! `GET {base}/ws/{cep}/json/`
//!
//! ViaCEP answers an unknown but well-formed CEP with HTTP 200 and a body of
//! `{"erro": true}`. Older deployments send the string `"true"`, so both are
//! accepted as the not-found signal.

use std::time::Duration;

use async_trait::async_trait;
use locar_core::Cep;
use serde::Deserialize;
use url::Url;

use crate::config::endpoint;
use crate::error::LookupError;
use crate::provider::{decode, send, unavailable_status, LookupProvider};
use crate::types::{text, AddressResult};

const PROVIDER: &str = "viacep";

#[derive(Debug, Deserialize)]
struct ViaCepResponse {
    #[serde(default)]
    logradouro: Option<String>,
    #[serde(default)]
    bairro: Option<String>,
    #[serde(default)]
    localidade: Option<String>,
    #[serde(default)]
    uf: Option<String>,
    #[serde(default)]
    erro: Option<serde_json::Value>,
}

impl ViaCepResponse {
    fn is_not_found(&self) -> bool {
        match &self.erro {
            Some(serde_json::Value::Bool(flag)) => *flag,
            Some(serde_json::Value::String(s)) => s.eq_ignore_ascii_case("true"),
            _ => false,
        }
    }
}

impl From<ViaCepResponse> for AddressResult {
    fn from(r: ViaCepResponse) -> Self {
        Self {
            street: text(r.logradouro),
            neighborhood: text(r.bairro),
            city: text(r.localidade),
            state: text(r.uf),
        }
    }
}

/// HTTP client for the ViaCEP public API.
#[derive(Debug, Clone)]
pub struct ViaCepAdapter {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl ViaCepAdapter {
    /// Wrap a shared HTTP client. `timeout` is reported in error messages;
    /// enforcement is the client's.
    pub fn new(client: reqwest::Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            timeout,
        }
    }
}

#[async_trait]
impl LookupProvider<Cep, AddressResult> for ViaCepAdapter {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn resolve(&self, cep: &Cep) -> Result<AddressResult, LookupError> {
        let url = endpoint(&self.base_url, &format!("ws/{}/json/", cep.as_str()));
        let resp = send(PROVIDER, self.client.get(&url), self.timeout).await?;

        if !resp.status().is_success() {
            return Err(unavailable_status(PROVIDER, resp).await);
        }

        let body: ViaCepResponse = decode(PROVIDER, resp).await?;
        if body.is_not_found() {
            return Err(LookupError::not_found(PROVIDER, cep.as_str()));
        }
        Ok(body.into())
    }
}
