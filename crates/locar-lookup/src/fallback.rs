//! # Fallback Chain
//!
//! Sequences provider adapters for one lookup domain. This is the only place
//! that knows the provider order and the difference between a confirmed
//! negative and an outage.
//!
//! ## Per-call state machine
//!
//! ```text
//! Start → PrimaryPending ─┬─ Ok ─────────────────────────────→ Success
//!                         ├─ NotFound (authoritative policy) → NotFound (terminal)
//!                         └─ any other failure ─→ SecondaryPending ─┬─ Ok ──→ Success
//!                                                                   └─ Err ─→ ProviderUnavailable (terminal)
//! ```
//!
//! With more than two providers the "secondary" step repeats down the list.
//! Each provider is attempted at most once per call; there is no backoff and
//! no retry of the same provider.

use std::fmt;
use std::sync::Arc;

use crate::error::{LookupError, LookupErrorKind};
use crate::provider::LookupProvider;

/// How a `NotFound` from the primary provider is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundPolicy {
    /// A `NotFound` from the primary provider ends the lookup. Lower-priority
    /// providers are not consulted after a confirmed negative.
    PrimaryAuthoritative,
    /// `NotFound` is just another failure and the chain moves on.
    FallThrough,
}

/// Ordered list of providers for one lookup domain.
pub struct FallbackChain<I, T> {
    domain: &'static str,
    policy: NotFoundPolicy,
    providers: Vec<Arc<dyn LookupProvider<I, T>>>,
}

impl<I, T> fmt::Debug for FallbackChain<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackChain")
            .field("domain", &self.domain)
            .field("policy", &self.policy)
            .field(
                "providers",
                &self.providers.iter().map(|p| p.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl<I, T> Clone for FallbackChain<I, T> {
    fn clone(&self) -> Self {
        Self {
            domain: self.domain,
            policy: self.policy,
            providers: self.providers.clone(),
        }
    }
}

impl<I, T> FallbackChain<I, T>
where
    I: fmt::Display + Sync,
    T: Send,
{
    /// Create an empty chain for `domain` (used in logs and the terminal
    /// error's provider field).
    pub fn new(domain: &'static str, policy: NotFoundPolicy) -> Self {
        Self {
            domain,
            policy,
            providers: Vec::new(),
        }
    }

    /// Append a provider. The first provider added is the primary.
    pub fn with_provider(mut self, provider: Arc<dyn LookupProvider<I, T>>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Provider names in the order they are consulted.
    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Resolve `identifier`, falling back down the provider list.
    pub async fn resolve(&self, identifier: &I) -> Result<T, LookupError> {
        let mut failures: Vec<LookupError> = Vec::new();

        for (position, provider) in self.providers.iter().enumerate() {
            tracing::debug!(
                domain = self.domain,
                provider = provider.name(),
                position,
                identifier = %identifier,
                "querying lookup provider"
            );

            match provider.resolve(identifier).await {
                Ok(result) => {
                    if position > 0 {
                        tracing::info!(
                            domain = self.domain,
                            provider = provider.name(),
                            "fallback provider resolved lookup"
                        );
                    }
                    return Ok(result);
                }
                Err(err)
                    if position == 0
                        && err.kind() == LookupErrorKind::NotFound
                        && self.policy == NotFoundPolicy::PrimaryAuthoritative =>
                {
                    tracing::debug!(
                        domain = self.domain,
                        provider = provider.name(),
                        identifier = %identifier,
                        "primary provider reports no record; not falling back"
                    );
                    return Err(err);
                }
                Err(err) => {
                    tracing::warn!(
                        domain = self.domain,
                        provider = provider.name(),
                        kind = %err.kind(),
                        "lookup provider failed: {err}"
                    );
                    failures.push(err);
                }
            }
        }

        let last_failure = failures.pop();
        let reason = match &last_failure {
            Some(_) => format!(
                "all {} providers failed for {identifier}",
                self.providers.len()
            ),
            None => "no providers configured".to_string(),
        };
        Err(LookupError::ProviderUnavailable {
            provider: format!("{} lookup", self.domain),
            reason,
            cause: last_failure.map(Box::new),
            earlier: failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::error::Error as _;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted provider that counts how often it is called.
    struct Scripted {
        name: &'static str,
        outcome: Result<String, LookupError>,
        calls: AtomicUsize,
    }

    impl Scripted {
        fn ok(name: &'static str, value: &str) -> Arc<Self> {
            Arc::new(Self {
                name,
                outcome: Ok(value.to_string()),
                calls: AtomicUsize::new(0),
            })
        }

        fn err(name: &'static str, err: LookupError) -> Arc<Self> {
            Arc::new(Self {
                name,
                outcome: Err(err),
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl LookupProvider<String, String> for Scripted {
        fn name(&self) -> &str {
            self.name
        }

        async fn resolve(&self, _identifier: &String) -> Result<String, LookupError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()
        }
    }

    fn chain(
        policy: NotFoundPolicy,
        primary: Arc<Scripted>,
        secondary: Arc<Scripted>,
    ) -> FallbackChain<String, String> {
        FallbackChain::<String, String>::new("test", policy)
            .with_provider(primary)
            .with_provider(secondary)
    }

    fn id() -> String {
        "01310100".to_string()
    }

    #[tokio::test]
    async fn primary_success_skips_secondary() {
        let primary = Scripted::ok("a", "from-a");
        let secondary = Scripted::ok("b", "from-b");
        let chain = chain(
            NotFoundPolicy::PrimaryAuthoritative,
            primary.clone(),
            secondary.clone(),
        );

        assert_eq!(chain.resolve(&id()).await.unwrap(), "from-a");
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn primary_not_found_is_terminal_when_authoritative() {
        let primary = Scripted::err("a", LookupError::not_found("a", "01310100"));
        let secondary = Scripted::ok("b", "from-b");
        let chain = chain(
            NotFoundPolicy::PrimaryAuthoritative,
            primary.clone(),
            secondary.clone(),
        );

        let err = chain.resolve(&id()).await.unwrap_err();
        assert_eq!(err.kind(), LookupErrorKind::NotFound);
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 0);
    }

    #[tokio::test]
    async fn primary_not_found_falls_through_when_policy_says_so() {
        let primary = Scripted::err("a", LookupError::not_found("a", "01310100"));
        let secondary = Scripted::ok("b", "from-b");
        let chain = chain(NotFoundPolicy::FallThrough, primary.clone(), secondary.clone());

        assert_eq!(chain.resolve(&id()).await.unwrap(), "from-b");
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn primary_unavailable_uses_secondary() {
        let primary = Scripted::err("a", LookupError::unavailable("a", "HTTP 503"));
        let secondary = Scripted::ok("b", "from-b");
        let chain = chain(
            NotFoundPolicy::PrimaryAuthoritative,
            primary.clone(),
            secondary.clone(),
        );

        assert_eq!(chain.resolve(&id()).await.unwrap(), "from-b");
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn both_failing_yields_wrapped_unavailable() {
        let primary = Scripted::err("a", LookupError::unavailable("a", "timeout"));
        let secondary = Scripted::err("b", LookupError::not_found("b", "00000000"));
        let chain = chain(
            NotFoundPolicy::PrimaryAuthoritative,
            primary.clone(),
            secondary.clone(),
        );

        let err = chain.resolve(&id()).await.unwrap_err();
        assert_eq!(err.kind(), LookupErrorKind::ProviderUnavailable);
        assert!(err.to_string().contains("test lookup"));
        let cause = err.source().expect("cause preserved");
        assert!(cause.to_string().contains("b has no record"));
        let failures: Vec<String> = err.failures().iter().map(|e| e.to_string()).collect();
        assert_eq!(failures, vec!["a unavailable: timeout", "b has no record for 00000000"]);
        assert_eq!(primary.calls(), 1);
        assert_eq!(secondary.calls(), 1);
    }

    #[tokio::test]
    async fn empty_chain_is_unavailable() {
        let chain: FallbackChain<String, String> =
            FallbackChain::new("empty", NotFoundPolicy::FallThrough);
        let err = chain.resolve(&id()).await.unwrap_err();
        assert_eq!(err.kind(), LookupErrorKind::ProviderUnavailable);
        assert!(err.source().is_none());
        assert!(err.failures().is_empty());
    }

    #[test]
    fn provider_names_follow_insertion_order() {
        let chain = chain(
            NotFoundPolicy::FallThrough,
            Scripted::ok("first", ""),
            Scripted::ok("second", ""),
        );
        assert_eq!(chain.provider_names(), vec!["first", "second"]);
        assert!(format!("{chain:?}").contains("first"));
    }
}
