//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented lookup routes into a single OpenAPI
//! document served at `/openapi.json`.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI document for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "locar API",
        version = "0.1.0",
        description = "Resolve Brazilian CEPs into addresses and CNPJs into company data, with primary/secondary provider fallback."
    ),
    paths(
        crate::routes::lookup::resolve_cep,
        crate::routes::lookup::resolve_cnpj,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
        crate::routes::lookup::AddressResponse,
        crate::routes::lookup::CompanyResponse,
    )),
    tags(
        (name = "lookup", description = "Registry lookups"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
