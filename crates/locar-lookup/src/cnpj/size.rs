//! Company size code translation.
//!
//! The Receita Federal classifies companies by size ("porte"). CNPJá reports
//! the classification as a short acronym and BrasilAPI as the upper-case
//! Receita text; both map onto the same display label.

/// Fixed code → label table.
const SIZE_LABELS: &[(&str, &str)] = &[
    ("ME", "Microempresa"),
    ("MICRO EMPRESA", "Microempresa"),
    ("MICROEMPRESA", "Microempresa"),
    ("EPP", "Empresa de Pequeno Porte"),
    ("EMPRESA DE PEQUENO PORTE", "Empresa de Pequeno Porte"),
    ("DEMAIS", "Demais"),
];

/// Translate a provider size code into its display label.
///
/// Matching ignores case and surrounding whitespace. Codes not in the table
/// are returned unchanged, never dropped.
pub fn size_label(code: &str) -> String {
    let key = code.trim();
    SIZE_LABELS
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(key))
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| code.to_string())
}
