//! # Provider Adapter Interface
//!
//! A provider adapter wraps exactly one upstream lookup service. Given an
//! already validated identifier it performs a single network call and
//! returns either the normalized result or a typed [`LookupError`]:
//!
//! - transport failure, non-success status, undecodable body →
//!   [`LookupError::ProviderUnavailable`]
//! - the provider's own "no such record" signal → [`LookupError::NotFound`]
//! - data → mapped into the normalized result, missing fields as `""`
//!
//! Adapters never retry and never consult another provider; ordering and
//! fallback belong to [`crate::fallback::FallbackChain`].

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::LookupError;

/// One upstream source able to resolve identifier `I` into result `T`.
///
/// Implementations must be `Send + Sync` so they can be shared across
/// async tasks behind an `Arc`. The trait is object-safe so the fallback
/// chain can hold an ordered list of heterogeneous adapters.
#[async_trait]
pub trait LookupProvider<I, T>: Send + Sync {
    /// Stable, human-readable adapter name used in logs and errors
    /// (e.g. `"viacep"`).
    fn name(&self) -> &str;

    /// Perform one lookup against the upstream service.
    async fn resolve(&self, identifier: &I) -> Result<T, LookupError>;
}

/// Send a request, mapping transport failures to `ProviderUnavailable`.
///
/// The caller inspects the status code; only transport-level errors are
/// handled here.
pub(crate) async fn send(
    provider: &str,
    request: reqwest::RequestBuilder,
    timeout: Duration,
) -> Result<reqwest::Response, LookupError> {
    request.send().await.map_err(|e| {
        let reason = if e.is_timeout() {
            format!("request timed out after {}ms", timeout.as_millis())
        } else if e.is_connect() {
            format!("connection failed: {e}")
        } else {
            format!("transport error: {e}")
        };
        tracing::debug!(provider, %reason, "provider request failed");
        LookupError::unavailable(provider, reason)
    })
}

/// Turn a non-success response into `ProviderUnavailable` with a body excerpt.
pub(crate) async fn unavailable_status(provider: &str, resp: reqwest::Response) -> LookupError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    let excerpt: String = body.chars().take(200).collect();
    LookupError::unavailable(provider, format!("HTTP {status}: {excerpt}"))
}

/// Decode a JSON body, mapping failures to `ProviderUnavailable`.
pub(crate) async fn decode<T: DeserializeOwned>(
    provider: &str,
    resp: reqwest::Response,
) -> Result<T, LookupError> {
    resp.json::<T>().await.map_err(|e| {
        LookupError::unavailable(provider, format!("response deserialization failed: {e}"))
    })
}
