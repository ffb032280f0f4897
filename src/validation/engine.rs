//! Validation Engine
//!
//! Core validation logic separated from catalog loading and host concerns.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::rules;
use crate::catalog::Catalog;

/// Why a code was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Reason {
    /// Not all-digit, or length outside 2..=8 (includes the empty string)
    Format,
    /// Well-formed but absent from the catalog
    NotFound,
    /// Present in the catalog, but an ancestor prefix is missing
    Hierarchy,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Reason::Format => "format",
            Reason::NotFound => "not-found",
            Reason::Hierarchy => "hierarchy",
        };
        f.write_str(s)
    }
}

/// Validation outcome for a single submitted code
///
/// `description` is present iff the code is valid, `reason` iff it is not;
/// the two constructors keep the payloads mutually exclusive.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    /// The normalized input, kept for traceability
    pub code: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<Reason>,
}

impl Verdict {
    /// Verdict for a code that passed every check
    pub fn accepted(code: &str, description: &str) -> Self {
        Self {
            code: code.to_string(),
            valid: true,
            description: Some(description.to_string()),
            reason: None,
        }
    }

    /// Verdict for a code rejected by one of the rules
    pub fn rejected(code: &str, reason: Reason) -> Self {
        Self {
            code: code.to_string(),
            valid: false,
            description: None,
            reason: Some(reason),
        }
    }
}

/// Per-code validator running the rule pipeline
///
/// Checks run cheapest-first: format, then catalog membership, then (when
/// enabled) hierarchy. The first failing check decides the verdict and no
/// later check runs, so malformed codes never incur a table probe.
#[derive(Debug, Clone)]
pub struct Validator {
    catalog: Arc<Catalog>,
    check_hierarchy: bool,
}

impl Validator {
    /// Create a validator over a shared catalog, hierarchy checking disabled
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            check_hierarchy: false,
        }
    }

    /// Enable or disable ancestor checking for 8-digit codes
    pub fn with_hierarchy_check(mut self, enabled: bool) -> Self {
        self.check_hierarchy = enabled;
        self
    }

    /// The catalog this validator reads from
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Validate a single normalized code
    pub fn validate(&self, code: &str) -> Verdict {
        if !rules::is_valid_format(code) {
            return Verdict::rejected(code, Reason::Format);
        }

        // Existence check and description lookup share the same table probe.
        let Some(description) = self.catalog.lookup(code) else {
            return Verdict::rejected(code, Reason::NotFound);
        };

        if self.check_hierarchy && !rules::is_hierarchy_valid(&self.catalog, code) {
            return Verdict::rejected(code, Reason::Hierarchy);
        }

        Verdict::accepted(code, description)
    }
}
