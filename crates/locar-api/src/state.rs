//! # Application State
//!
//! Shared state for the Axum application, passed to all route handlers
//! via the `State` extractor.

use locar_lookup::LookupClient;

use crate::middleware::metrics::ApiMetrics;

/// State shared by every handler.
///
/// Cheap to clone: the lookup client's provider chains and the metric
/// counters are reference-counted.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Registry lookup client with both fallback chains.
    pub lookup: LookupClient,
    /// In-process request counters.
    pub metrics: ApiMetrics,
}

impl AppState {
    /// Wrap a configured lookup client with fresh metric counters.
    pub fn new(lookup: LookupClient) -> Self {
        Self {
            lookup,
            metrics: ApiMetrics::new(),
        }
    }
}
