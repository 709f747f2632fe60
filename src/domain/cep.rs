//! Brazilian postal code (CEP) checks and formatting.
//!
//! A CEP is accepted as `NNNNNNNN` or `NNNNN-NNN`, optionally surrounded by
//! whitespace. The canonical form used for lookups is the 8 bare digits.

use regex::Regex;
use std::sync::LazyLock;

static CEP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}-?[0-9]{3}$").expect("CEP pattern is a valid regex"));

/// Returns true when `cep` is 8 ASCII digits, with at most one hyphen right
/// after the fifth digit.
pub fn is_valid_cep(cep: &str) -> bool {
    CEP_PATTERN.is_match(cep.trim())
}

/// Strips every hyphen and surrounding whitespace. Does not validate.
pub fn normalize_cep(cep: &str) -> String {
    cep.replace('-', "").trim().to_string()
}

/// Renders a CEP as `NNNNN-NNN`. Input that does not normalize to exactly
/// 8 characters is returned unchanged.
pub fn format_cep(cep: &str) -> String {
    let normalized = normalize_cep(cep);
    if normalized.chars().count() != 8 {
        return cep.to_string();
    }

    match normalized.char_indices().nth(5) {
        Some((split, _)) => format!("{}-{}", &normalized[..split], &normalized[split..]),
        None => cep.to_string(),
    }
}
