//! Catalog Table
//!
//! Simple in-memory code-to-description table, immutable after construction.

use std::collections::HashMap;

/// Immutable mapping from HSN code to catalog description
///
/// Built once at startup and shared read-only; reloading means constructing
/// a new table and swapping the reference at the call site.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Build a catalog from (code, description) pairs
    ///
    /// Later pairs replace earlier ones with the same code; the loader is
    /// responsible for counting and reporting such duplicates.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Look up the description for a code
    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(|s| s.as_str())
    }

    /// Check whether a code is present
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
