//! CNPJá office adapter (secondary CNPJ provider).
//!
//! `GET {base}/office/{cnpj}`
//!
//! The open tier needs no credentials. When an API key is configured it is
//! sent verbatim as the `Authorization` header.

use std::time::Duration;

use async_trait::async_trait;
use locar_core::Cnpj;
use serde::Deserialize;
use url::Url;
use zeroize::Zeroizing;

use super::{iso_date, size_label};
use crate::config::endpoint;
use crate::error::LookupError;
use crate::provider::{decode, send, unavailable_status, LookupProvider};
use crate::types::{text, CompanyResult};

const PROVIDER: &str = "cnpja";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CnpjaOffice {
    #[serde(default)]
    alias: Option<String>,
    #[serde(default)]
    founded: Option<String>,
    #[serde(default)]
    company: Option<CnpjaCompany>,
    #[serde(default)]
    main_activity: Option<CnpjaActivity>,
    #[serde(default)]
    registrations: Vec<CnpjaRegistration>,
}

#[derive(Debug, Default, Deserialize)]
struct CnpjaCompany {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    size: Option<CnpjaSize>,
}

#[derive(Debug, Deserialize)]
struct CnpjaSize {
    #[serde(default)]
    acronym: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CnpjaActivity {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CnpjaRegistration {
    #[serde(default)]
    number: Option<String>,
    #[serde(default)]
    enabled: bool,
}

impl From<CnpjaOffice> for CompanyResult {
    fn from(office: CnpjaOffice) -> Self {
        let company = office.company.unwrap_or_default();
        let size_code = text(company.size.and_then(|s| s.acronym));
        let state_registration = office
            .registrations
            .into_iter()
            .find(|r| r.enabled)
            .map(|r| text(r.number))
            .unwrap_or_default();

        Self {
            legal_name: text(company.name),
            trade_name: text(office.alias),
            incorporation_date: iso_date(&text(office.founded)),
            primary_activity: text(office.main_activity.and_then(|a| a.text)),
            size: size_label(&size_code),
            state_registration,
            municipal_registration: String::new(),
        }
    }
}

/// HTTP client for the CNPJá office endpoint.
#[derive(Clone)]
pub struct CnpjaAdapter {
    client: reqwest::Client,
    base_url: Url,
    api_key: Option<Zeroizing<String>>,
    timeout: Duration,
}

impl std::fmt::Debug for CnpjaAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CnpjaAdapter")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl CnpjaAdapter {
    /// Wrap a shared HTTP client, optionally authenticating with `api_key`.
    pub fn new(
        client: reqwest::Client,
        base_url: Url,
        api_key: Option<Zeroizing<String>>,
        timeout: Duration,
    ) -> Self {
        Self {
            client,
            base_url,
            api_key,
            timeout,
        }
    }
}

#[async_trait]
impl LookupProvider<Cnpj, CompanyResult> for CnpjaAdapter {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn resolve(&self, cnpj: &Cnpj) -> Result<CompanyResult, LookupError> {
        let url = endpoint(&self.base_url, &format!("office/{}", cnpj.as_str()));
        let mut request = self.client.get(&url);
        if let Some(key) = &self.api_key {
            request = request.header(reqwest::header::AUTHORIZATION, key.as_str());
        }
        let resp = send(PROVIDER, request, self.timeout).await?;

        if !resp.status().is_success() {
            return Err(unavailable_status(PROVIDER, resp).await);
        }

        let body: CnpjaOffice = decode(PROVIDER, resp).await?;
        Ok(body.into())
    }
}
