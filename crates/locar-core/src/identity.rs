//! # Identity Newtypes
//!
//! Brazilian identifiers accepted by the registry lookups:
//!
//! - **CEP** (Código de Endereçamento Postal): 8-digit postal code,
//!   commonly written `01310-100`.
//! - **CNPJ** (Cadastro Nacional da Pessoa Jurídica): 14-digit company tax
//!   ID, commonly written `12.345.678/0001-99`.
//!
//! Constructors accept any formatting. Separators, spaces, and letters are
//! dropped by [`normalize_digits`]; what remains must have the exact digit
//! count for the kind. Validation is format-only: CNPJ check digits are not
//! verified, so syntactically well-formed but unregistered numbers pass.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ShapeError;

/// Implements `Deserialize` by routing the raw string through `new()`, so a
/// payload cannot smuggle in an identifier that skipped validation.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Which identifier a value claims to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    /// Postal code.
    Cep,
    /// Company tax ID.
    Cnpj,
}

impl IdentifierKind {
    /// Exact digit count a normalized identifier of this kind must have.
    pub const fn expected_len(self) -> usize {
        match self {
            Self::Cep => 8,
            Self::Cnpj => 14,
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cep => write!(f, "CEP"),
            Self::Cnpj => write!(f, "CNPJ"),
        }
    }
}

/// Keep only the ASCII digits of `raw`, preserving their order.
///
/// Never fails. Empty input yields an empty string, and applying the
/// function to its own output returns the same value.
pub fn normalize_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Reject `normalized` unless it has exactly `kind.expected_len()` digits.
///
/// This is a precondition check only; the value is never modified.
pub fn validate_shape(kind: IdentifierKind, normalized: &str) -> Result<(), ShapeError> {
    let expected = kind.expected_len();
    let actual = normalized.len();
    if actual != expected {
        return Err(ShapeError::WrongLength {
            kind,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Brazilian postal code, stored as 8 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cep(String);

impl_validating_deserialize!(Cep);

impl Cep {
    /// Normalize `raw` and validate it as a CEP.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::WrongLength`] if the input does not contain
    /// exactly 8 digits.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ShapeError> {
        let digits = normalize_digits(raw.as_ref());
        validate_shape(IdentifierKind::Cep, &digits)?;
        Ok(Self(digits))
    }

    /// The 8-digit canonical form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form with the conventional hyphen (`01310-100`).
    pub fn formatted(&self) -> String {
        format!("{}-{}", &self.0[..5], &self.0[5..])
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Brazilian company tax ID, stored as 14 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Cnpj(String);

impl_validating_deserialize!(Cnpj);

impl Cnpj {
    /// Normalize `raw` and validate it as a CNPJ.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::WrongLength`] if the input does not contain
    /// exactly 14 digits.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, ShapeError> {
        let digits = normalize_digits(raw.as_ref());
        validate_shape(IdentifierKind::Cnpj, &digits)?;
        Ok(Self(digits))
    }

    /// The 14-digit canonical form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form with the conventional punctuation (`12.345.678/0001-99`).
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!(
            "{}.{}.{}/{}-{}",
            &d[..2],
            &d[2..5],
            &d[5..8],
            &d[8..12],
            &d[12..]
        )
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
