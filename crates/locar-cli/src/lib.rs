//! # locar-cli — Command-Line Lookups
//!
//! Provides the `locar` command, a terminal front end for the same lookup
//! client the API serves. Useful for operators checking whether a provider
//! outage or a bad identifier is behind a dashboard complaint.
//!
//! ## Subcommands
//!
//! - `locar cep <raw>`: CEP → address.
//! - `locar cnpj <raw>`: CNPJ → company.
//!
//! ```bash
//! locar cep 01310-100
//! locar cnpj 12.345.678/0001-99 --plain
//! locar -vv cep 00000000   # debug logs show each provider attempt
//! ```
//!
//! Provider endpoints come from the same `LOCAR_*` environment variables
//! as the API server.

pub mod lookup;

use anyhow::{Context, Result};
use locar_lookup::{LookupClient, LookupConfig};

/// Build a lookup client from the `LOCAR_*` environment.
pub fn client_from_env() -> Result<LookupClient> {
    let config = LookupConfig::from_env().context("loading lookup configuration")?;
    tracing::debug!(?config, "lookup configuration");
    LookupClient::new(config).context("building lookup client")
}
