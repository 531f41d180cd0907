//! # Registry Lookup Routes
//!
//! `GET /v1/lookup/cep/{cep}` and `GET /v1/lookup/cnpj/{cnpj}`.
//!
//! The path segment is passed to the lookup client untouched, formatting
//! characters included. The CNPJ route captures the rest of the path so the
//! `/` in the standard `12.345.678/0001-99` form reaches the handler. Normalization, shape validation, and provider
//! fallback all happen in `locar-lookup`; handlers only translate between
//! HTTP and the library.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use locar_lookup::{AddressResult, CompanyResult};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Build the lookup router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/lookup/cep/{cep}", get(resolve_cep))
        .route("/v1/lookup/cnpj/{*cnpj}", get(resolve_cnpj))
}

// -- Response DTOs ------------------------------------------------------------

/// Address resolved from a CEP.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddressResponse {
    pub street: String,
    pub neighborhood: String,
    pub city: String,
    /// Two-letter state code.
    pub state: String,
}

impl From<AddressResult> for AddressResponse {
    fn from(a: AddressResult) -> Self {
        Self {
            street: a.street,
            neighborhood: a.neighborhood,
            city: a.city,
            state: a.state,
        }
    }
}

/// Company data resolved from a CNPJ.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CompanyResponse {
    pub legal_name: String,
    pub trade_name: String,
    /// ISO `YYYY-MM-DD`, or empty when unknown.
    pub incorporation_date: String,
    pub primary_activity: String,
    /// Display label for the size classification.
    pub size: String,
    pub state_registration: String,
    pub municipal_registration: String,
}

impl From<CompanyResult> for CompanyResponse {
    fn from(c: CompanyResult) -> Self {
        Self {
            legal_name: c.legal_name,
            trade_name: c.trade_name,
            incorporation_date: c.incorporation_date,
            primary_activity: c.primary_activity,
            size: c.size,
            state_registration: c.state_registration,
            municipal_registration: c.municipal_registration,
        }
    }
}

// -- Handlers -----------------------------------------------------------------

/// GET /v1/lookup/cep/{cep}: resolve a CEP into an address.
#[utoipa::path(
    get,
    path = "/v1/lookup/cep/{cep}",
    params(("cep" = String, Path, description = "CEP in any formatting, e.g. 01310-100")),
    responses(
        (status = 200, description = "Address found", body = AddressResponse),
        (status = 404, description = "Primary provider has no record", body = ErrorBody),
        (status = 422, description = "Not an 8-digit CEP", body = ErrorBody),
        (status = 503, description = "No provider could answer", body = ErrorBody),
    ),
    tag = "lookup"
)]
pub async fn resolve_cep(
    State(state): State<AppState>,
    Path(cep): Path<String>,
) -> Result<Json<AddressResponse>, AppError> {
    let address = state.lookup.resolve_cep(&cep).await?;
    Ok(Json(address.into()))
}

/// GET /v1/lookup/cnpj/{cnpj}: resolve a CNPJ into company data.
#[utoipa::path(
    get,
    path = "/v1/lookup/cnpj/{cnpj}",
    params(("cnpj" = String, Path, description = "CNPJ in any formatting, e.g. 12.345.678/0001-99")),
    responses(
        (status = 200, description = "Company found", body = CompanyResponse),
        (status = 422, description = "Not a 14-digit CNPJ", body = ErrorBody),
        (status = 503, description = "No provider could answer", body = ErrorBody),
    ),
    tag = "lookup"
)]
pub async fn resolve_cnpj(
    State(state): State<AppState>,
    Path(cnpj): Path<String>,
) -> Result<Json<CompanyResponse>, AppError> {
    let company = state.lookup.resolve_cnpj(&cnpj).await?;
    Ok(Json(company.into()))
}
