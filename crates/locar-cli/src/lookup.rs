//! # Lookup Subcommands
//!
//! `locar cep <raw>` and `locar cnpj <raw>`. Both pass the raw argument to
//! [`LookupClient`] unchanged and print the normalized result.
//!
//! Lookup failures are reported on stderr and mapped to a distinct exit
//! code per error kind, so scripts can tell a typo from an outage.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use locar_lookup::{AddressResult, CompanyResult, LookupClient, LookupError, LookupErrorKind};

/// Exit code for a successful lookup.
pub const EXIT_OK: u8 = 0;
/// Exit code when the identifier has the wrong digit count.
pub const EXIT_INVALID_SHAPE: u8 = 2;
/// Exit code when the authoritative provider has no record.
pub const EXIT_NOT_FOUND: u8 = 3;
/// Exit code when no provider could answer.
pub const EXIT_PROVIDER_UNAVAILABLE: u8 = 4;

/// Arguments shared by `locar cep` and `locar cnpj`.
#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Identifier in any formatting (e.g. "01310-100", "12.345.678/0001-99").
    pub raw: String,

    /// Print aligned `field: value` lines instead of JSON.
    #[arg(long)]
    pub plain: bool,
}

/// Exit code for a lookup error kind.
pub fn exit_code(kind: LookupErrorKind) -> u8 {
    match kind {
        LookupErrorKind::InvalidShape => EXIT_INVALID_SHAPE,
        LookupErrorKind::NotFound => EXIT_NOT_FOUND,
        LookupErrorKind::ProviderUnavailable => EXIT_PROVIDER_UNAVAILABLE,
    }
}

/// A lookup result that can be printed as plain text.
pub trait Render: Serialize {
    /// Field names and values in display order.
    fn fields(&self) -> Vec<(&'static str, &str)>;
}

impl Render for AddressResult {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("street", self.street.as_str()),
            ("neighborhood", self.neighborhood.as_str()),
            ("city", self.city.as_str()),
            ("state", self.state.as_str()),
        ]
    }
}

impl Render for CompanyResult {
    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("legal_name", self.legal_name.as_str()),
            ("trade_name", self.trade_name.as_str()),
            ("incorporation_date", self.incorporation_date.as_str()),
            ("primary_activity", self.primary_activity.as_str()),
            ("size", self.size.as_str()),
            ("state_registration", self.state_registration.as_str()),
            ("municipal_registration", self.municipal_registration.as_str()),
        ]
    }
}

/// Write `result` as pretty JSON or as aligned plain lines.
pub fn render<T: Render>(result: &T, plain: bool, out: &mut impl Write) -> Result<()> {
    if plain {
        let fields = result.fields();
        let width = fields.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        for (name, value) in fields {
            writeln!(out, "{:<width$}  {}", format!("{name}:"), value, width = width + 1)?;
        }
    } else {
        let json = serde_json::to_string_pretty(result).context("serializing lookup result")?;
        writeln!(out, "{json}")?;
    }
    Ok(())
}

/// Print the outcome of a lookup and return the process exit code.
pub fn report<T: Render>(
    outcome: std::result::Result<T, LookupError>,
    plain: bool,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<u8> {
    match outcome {
        Ok(result) => {
            render(&result, plain, out)?;
            Ok(EXIT_OK)
        }
        Err(e) => {
            tracing::debug!(kind = %e.kind(), "lookup failed: {e:?}");
            writeln!(err, "{}: {e}", e.kind())?;
            Ok(exit_code(e.kind()))
        }
    }
}

/// Execute `locar cep`.
pub async fn run_cep(args: &LookupArgs, client: &LookupClient) -> Result<u8> {
    let outcome = client.resolve_cep(&args.raw).await;
    report(outcome, args.plain, &mut std::io::stdout(), &mut std::io::stderr())
}

/// Execute `locar cnpj`.
pub async fn run_cnpj(args: &LookupArgs, client: &LookupClient) -> Result<u8> {
    let outcome = client.resolve_cnpj(&args.raw).await;
    report(outcome, args.plain, &mut std::io::stdout(), &mut std::io::stderr())
}
