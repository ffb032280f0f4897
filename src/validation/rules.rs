//! Validation Rules
//!
//! The pure predicates of the validation pipeline. Each rule answers a single
//! question; ordering and short-circuiting live in the engine.

use std::sync::OnceLock;

use regex::Regex;

use crate::catalog::Catalog;

/// Lengths at which the HSN hierarchy defines an ancestor level
/// (chapter, heading, subheading).
const ANCESTOR_LENGTHS: [usize; 3] = [2, 4, 6];

/// Length of a full tariff item code, the only level with ancestors to check
const TARIFF_ITEM_LEN: usize = 8;

fn format_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9]{2,8}$").expect("valid format pattern"))
}

/// Check whether a string is syntactically a candidate HSN code
///
/// Passes iff every character is an ASCII digit and the length is between 2
/// and 8 inclusive. The empty string, internal whitespace, signs and decimal
/// points all fail. No catalog involved.
pub fn is_valid_format(code: &str) -> bool {
    format_pattern().is_match(code)
}

/// The shorter prefixes a tariff item code must be consistent with
///
/// Only 8-digit codes have ancestors under this rule; chapter, heading and
/// subheading codes return an empty list, as does anything non-ASCII (which
/// can never be a well-formed code).
pub fn ancestor_prefixes(code: &str) -> Vec<&str> {
    if code.len() != TARIFF_ITEM_LEN || !code.is_ascii() {
        return Vec::new();
    }
    ANCESTOR_LENGTHS.iter().map(|&len| &code[..len]).collect()
}

/// Check hierarchical consistency of a code against the catalog
///
/// An 8-digit code is consistent when its 2-, 4- and 6-digit prefixes each
/// exist in the catalog. Shorter codes are trivially consistent.
pub fn is_hierarchy_valid(catalog: &Catalog, code: &str) -> bool {
    ancestor_prefixes(code)
        .iter()
        .all(|prefix| catalog.contains(prefix))
}
