//! # locar-api — Axum HTTP Service
//!
//! Exposes the registry lookups of `locar-lookup` over HTTP for the
//! dashboard's address autofill and organization registration flows.
//!
//! ## API Surface
//!
//! | Path | Module | Purpose |
//! |------|--------|---------|
//! | `/v1/lookup/cep/{cep}` | [`routes::lookup`] | CEP → address |
//! | `/v1/lookup/cnpj/{cnpj}` | [`routes::lookup`] | CNPJ → company |
//! | `/openapi.json` | [`openapi`] | Generated OpenAPI document |
//! | `/health/*` | this module | Kubernetes probes |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → Handler
//! ```
//!
//! All errors map to the `{"error": {"code", "message"}}` envelope via
//! [`AppError`].

pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

pub use error::AppError;
pub use state::AppState;

use axum::middleware::from_fn;
use axum::Router;
use tower_http::trace::TraceLayer;

/// Assemble the full application router with all routes and middleware.
///
/// Health probes are mounted outside the metrics layer so probe traffic
/// does not inflate request counts.
pub fn app(state: AppState) -> Router {
    let metrics = state.metrics.clone();

    let api = Router::new()
        .merge(routes::lookup::router())
        .merge(openapi::router())
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(axum::Extension(metrics))
        .with_state(state);

    let health = Router::new()
        .route("/health/liveness", axum::routing::get(liveness))
        .route("/health/readiness", axum::routing::get(readiness));

    Router::new().merge(health).merge(api)
}

/// Liveness probe: always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe: the lookup client is built before the listener binds,
/// so a serving process is ready.
async fn readiness() -> &'static str {
    "ready"
}
