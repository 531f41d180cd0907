//! # locar-core — Foundational Types for locar
//!
//! Leaf crate of the workspace. Defines the identifier newtypes used by the
//! registry lookups and the two pure steps that run before any network call:
//!
//! 1. **Normalization.** [`normalize_digits`] reduces whatever the user typed
//!    to its ASCII digits, in order. Total, pure, idempotent.
//!
//! 2. **Shape validation.** [`validate_shape`] rejects a normalized value whose
//!    length differs from the expected digit count for its
//!    [`IdentifierKind`]. It never fixes input up.
//!
//! [`Cep`] and [`Cnpj`] combine both steps in their constructors, so holding
//! one is proof that the shape check passed.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `locar-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod identity;

pub use error::ShapeError;
pub use identity::{normalize_digits, validate_shape, Cep, Cnpj, IdentifierKind};
