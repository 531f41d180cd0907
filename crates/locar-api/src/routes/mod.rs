//! # API Route Modules
//!
//! - `lookup`: CEP → address and CNPJ → company resolution.

pub mod lookup;
