//! # Error Types
//!
//! Validation failures raised before any provider is contacted.

use thiserror::Error;

use crate::identity::IdentifierKind;

/// A normalized identifier does not have the digit count its kind requires.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// Wrong number of digits after normalization.
    #[error("invalid {kind}: expected {expected} digits, got {actual}")]
    WrongLength {
        /// Which identifier was being validated.
        kind: IdentifierKind,
        /// Required digit count.
        expected: usize,
        /// Digit count actually present.
        actual: usize,
    },
}

impl ShapeError {
    /// The identifier kind that failed validation.
    pub fn kind(&self) -> IdentifierKind {
        match self {
            Self::WrongLength { kind, .. } => *kind,
        }
    }
}
