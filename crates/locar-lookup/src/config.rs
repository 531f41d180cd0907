//! Lookup client configuration.
//!
//! Configures base URLs for each upstream provider. Defaults point to the
//! public production endpoints. Override via environment variables or
//! explicit construction for staging/testing.

use url::Url;
use zeroize::Zeroizing;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for connecting to the lookup providers.
///
/// Custom `Debug` implementation redacts the `cnpja_api_key` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct LookupConfig {
    /// Base URL for ViaCEP (primary CEP provider).
    /// Default: <https://viacep.com.br>
    pub viacep_url: Url,
    /// Base URL for BrasilAPI (secondary CEP, primary CNPJ provider).
    /// Default: <https://brasilapi.com.br>
    pub brasilapi_url: Url,
    /// Base URL for the CNPJá office API (secondary CNPJ provider).
    /// Default: <https://open.cnpja.com>
    pub cnpja_url: Url,
    /// Optional CNPJá key, sent as the `Authorization` header when present.
    pub cnpja_api_key: Option<Zeroizing<String>>,
    /// Request timeout in seconds, applied to every provider call.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupConfig")
            .field("viacep_url", &self.viacep_url)
            .field("brasilapi_url", &self.brasilapi_url)
            .field("cnpja_url", &self.cnpja_url)
            .field(
                "cnpja_api_key",
                &self.cnpja_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl LookupConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `LOCAR_VIACEP_URL` (default: `https://viacep.com.br`)
    /// - `LOCAR_BRASILAPI_URL` (default: `https://brasilapi.com.br`)
    /// - `LOCAR_CNPJA_URL` (default: `https://open.cnpja.com`)
    /// - `LOCAR_CNPJA_API_KEY` (optional)
    /// - `LOCAR_LOOKUP_TIMEOUT_SECS` (default: 10; must be a positive integer)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            viacep_url: env_url("LOCAR_VIACEP_URL", "https://viacep.com.br")?,
            brasilapi_url: env_url("LOCAR_BRASILAPI_URL", "https://brasilapi.com.br")?,
            cnpja_url: env_url("LOCAR_CNPJA_URL", "https://open.cnpja.com")?,
            cnpja_api_key: std::env::var("LOCAR_CNPJA_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty())
                .map(Zeroizing::new),
            timeout_secs: match std::env::var("LOCAR_LOOKUP_TIMEOUT_SECS") {
                Ok(raw) => parse_timeout(&raw)?,
                Err(_) => DEFAULT_TIMEOUT_SECS,
            },
        })
    }

    /// Create a configuration pointing every provider at one mock server.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidUrl` if `base_url` cannot be parsed.
    pub fn local_mock(base_url: &str) -> Result<Self, ConfigError> {
        let url = Url::parse(base_url)
            .map_err(|e| ConfigError::InvalidUrl("local_mock".to_string(), e.to_string()))?;
        Ok(Self {
            viacep_url: url.clone(),
            brasilapi_url: url.clone(),
            cnpja_url: url,
            cnpja_api_key: None,
            timeout_secs: 5,
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Parse a timeout in whole seconds. Zero would fail every provider call.
fn parse_timeout(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::InvalidTimeout(raw.to_string())),
    }
}

/// Join a base URL and a path without doubling or dropping the slash.
pub(crate) fn endpoint(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
    #[error("invalid lookup timeout {0:?}: expected a positive number of seconds")]
    InvalidTimeout(String),
    #[error("CNPJá API key contains characters not allowed in an HTTP header")]
    InvalidApiKey,
    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),
}
