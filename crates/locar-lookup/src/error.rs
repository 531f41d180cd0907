//! Lookup error types.
//!
//! Every failure a lookup can surface carries one of three machine-checkable
//! kinds. The kind, not the variant payload, decides whether the fallback
//! chain moves on to the next provider.

use serde::{Deserialize, Serialize};
use std::fmt;

use locar_core::ShapeError;

/// Machine-checkable classification of a [`LookupError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupErrorKind {
    /// Input failed local validation; no provider was contacted.
    InvalidShape,
    /// A provider authoritatively reported that no record exists.
    NotFound,
    /// Transport failure, unusable response, or every provider failed.
    ProviderUnavailable,
}

impl LookupErrorKind {
    /// Stable snake_case tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidShape => "invalid_shape",
            Self::NotFound => "not_found",
            Self::ProviderUnavailable => "provider_unavailable",
        }
    }
}

impl fmt::Display for LookupErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors from a CEP or CNPJ lookup.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LookupError {
    /// The identifier does not have the required digit count.
    #[error("{0}")]
    InvalidShape(#[from] ShapeError),

    /// The provider answered and says the record does not exist.
    #[error("{provider} has no record for {identifier}")]
    NotFound {
        /// Provider that answered.
        provider: String,
        /// Normalized identifier that was looked up.
        identifier: String,
    },

    /// The provider could not produce a result. When raised by the fallback
    /// chain after every provider failed, `cause` holds the last failure and
    /// `earlier` the failures of the providers consulted before it.
    #[error("{provider} unavailable: {reason}")]
    ProviderUnavailable {
        /// Provider, or chain, that failed.
        provider: String,
        /// Human-readable description.
        reason: String,
        /// Underlying failure, if this error wraps one.
        #[source]
        cause: Option<Box<LookupError>>,
        /// Failures from providers consulted before `cause`, in order.
        earlier: Vec<LookupError>,
    },
}

impl LookupError {
    /// Classification used by the fallback chain and by callers.
    pub fn kind(&self) -> LookupErrorKind {
        match self {
            Self::InvalidShape(_) => LookupErrorKind::InvalidShape,
            Self::NotFound { .. } => LookupErrorKind::NotFound,
            Self::ProviderUnavailable { .. } => LookupErrorKind::ProviderUnavailable,
        }
    }

    /// Shorthand for a provider-level outage with no wrapped cause.
    pub fn unavailable(provider: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ProviderUnavailable {
            provider: provider.into(),
            reason: reason.into(),
            cause: None,
            earlier: Vec::new(),
        }
    }

    /// Every provider failure wrapped by this error, in the order the
    /// providers were consulted. Empty for errors that wrap nothing.
    pub fn failures(&self) -> Vec<&LookupError> {
        match self {
            Self::ProviderUnavailable { cause, earlier, .. } => {
                earlier.iter().chain(cause.as_deref()).collect()
            }
            _ => Vec::new(),
        }
    }

    /// Shorthand for an authoritative negative.
    pub fn not_found(provider: impl Into<String>, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            provider: provider.into(),
            identifier: identifier.into(),
        }
    }
}
