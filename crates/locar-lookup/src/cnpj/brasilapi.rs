//! BrasilAPI CNPJ v1 adapter (primary CNPJ provider).
//!
//! `GET {base}/api/cnpj/v1/{cnpj}`
//!
//! BrasilAPI returns 404 both for unknown CNPJs and for upstream Receita
//! outages, so every non-success status is reported as unavailable.

use std::time::Duration;

use async_trait::async_trait;
use locar_core::Cnpj;
use serde::Deserialize;
use url::Url;

use super::{iso_date, size_label};
use crate::config::endpoint;
use crate::error::LookupError;
use crate::provider::{decode, send, unavailable_status, LookupProvider};
use crate::types::{text, CompanyResult};

const PROVIDER: &str = "brasilapi-cnpj";

#[derive(Debug, Deserialize)]
struct BrasilApiCnpjResponse {
    #[serde(default)]
    razao_social: Option<String>,
    #[serde(default)]
    nome_fantasia: Option<String>,
    #[serde(default)]
    data_inicio_atividade: Option<String>,
    #[serde(default)]
    cnae_fiscal_descricao: Option<String>,
    #[serde(default)]
    porte: Option<String>,
}

impl From<BrasilApiCnpjResponse> for CompanyResult {
    fn from(r: BrasilApiCnpjResponse) -> Self {
        Self {
            legal_name: text(r.razao_social),
            trade_name: text(r.nome_fantasia),
            incorporation_date: iso_date(&text(r.data_inicio_atividade)),
            primary_activity: text(r.cnae_fiscal_descricao),
            size: size_label(&text(r.porte)),
            state_registration: String::new(),
            municipal_registration: String::new(),
        }
    }
}

/// HTTP client for the BrasilAPI CNPJ endpoint.
#[derive(Debug, Clone)]
pub struct BrasilApiCnpjAdapter {
    client: reqwest::Client,
    base_url: Url,
    timeout: Duration,
}

impl BrasilApiCnpjAdapter {
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
impl LookupProvider<Cnpj, CompanyResult> for BrasilApiCnpjAdapter {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn resolve(&self, cnpj: &Cnpj) -> Result<CompanyResult, LookupError> {
        let url = endpoint(&self.base_url, &format!("api/cnpj/v1/{}", cnpj.as_str()));
        let resp = send(PROVIDER, self.client.get(&url), self.timeout).await?;

        if !resp.status().is_success() {
            return Err(unavailable_status(PROVIDER, resp).await);
        }

        let body: BrasilApiCnpjResponse = decode(PROVIDER, resp).await?;
        Ok(body.into())
    }
}
