//! # Normalized Lookup Results
//!
//! The only shapes callers ever see. Provider field names never appear here.
//!
//! Every field is a plain `String` defaulting to `""`. A provider that omits
//! a field produces an empty string, so consumers test emptiness and never
//! branch on presence vs. absence.

use serde::{Deserialize, Serialize};

/// Address resolved from a CEP.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressResult {
    /// Street name (logradouro).
    pub street: String,
    /// Neighborhood (bairro).
    pub neighborhood: String,
    /// Municipality.
    pub city: String,
    /// Two-letter state code (UF).
    pub state: String,
}

/// Company registration data resolved from a CNPJ.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyResult {
    /// Registered legal name (razão social).
    pub legal_name: String,
    /// Trade name (nome fantasia).
    pub trade_name: String,
    /// Incorporation date as ISO `YYYY-MM-DD`, or empty.
    pub incorporation_date: String,
    /// Description of the primary economic activity (CNAE).
    pub primary_activity: String,
    /// Human-readable size classification.
    pub size: String,
    /// State registration number (inscrição estadual).
    pub state_registration: String,
    /// Municipal registration number (inscrição municipal).
    pub municipal_registration: String,
}

/// Collapse an optional provider string into the empty-string convention,
/// trimming surrounding whitespace.
pub(crate) fn text(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let addr: AddressResult = serde_json::from_str(r#"{"city":"Campinas"}"#).unwrap();
        assert_eq!(addr.city, "Campinas");
        assert_eq!(addr.street, "");
        assert_eq!(addr.state, "");
    }

    #[test]
    fn serializes_every_field() {
        let json = serde_json::to_value(CompanyResult::default()).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 7);
        assert!(obj.values().all(|v| v == ""));
    }

    #[test]
    fn text_trims_and_defaults() {
        assert_eq!(text(None), "");
        assert_eq!(text(Some("  SP ".into())), "SP");
    }
}
