//! Catalog Loading
//!
//! Handles:
//! - Loading catalogs from delimited text (`.csv`/`.txt`) and TOML files
//! - Skipping and counting malformed rows
//! - The embedded sample catalog

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::table::Catalog;

/// Sample catalog compiled into the binary, used when no catalog file is
/// configured.
const BUILTIN_SAMPLE: &str = include_str!("../../resources/catalogs/sample.toml");

/// Errors that abort catalog construction
///
/// The engine must never come up with a partially-populated catalog, so any
/// of these is fatal to the caller building the validator.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    #[error("failed to read catalog source {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog TOML {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("catalog source {path} contains no usable entries")]
    Empty { path: PathBuf },

    #[error("unsupported catalog format: {path} (expected .csv, .txt or .toml)")]
    UnsupportedFormat { path: PathBuf },
}

/// Outcome of a catalog load, for startup logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries that made it into the catalog
    pub entries: usize,
    /// Rows dropped: malformed, missing a description, or duplicates
    pub skipped: usize,
}

/// Root catalog file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogFile {
    pub catalog: CatalogMeta,
    pub entries: Vec<EntryDef>,
}

/// Catalog metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CatalogMeta {
    pub name: String,
    pub version: Option<String>,
    pub description: Option<String>,
}

/// One code-to-description row
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EntryDef {
    pub code: String,
    pub description: String,
}

/// Load a catalog from a file, dispatching on its extension
///
/// `.toml` sources use the [`CatalogFile`] schema; `.csv` and `.txt` sources
/// are `code,description` rows with `#` comment lines. Codes are stored
/// as-is: the loader does not check code formats, only that a row has both a
/// code and a description.
pub async fn load_from_path(path: &Path) -> Result<(Catalog, LoadReport), CatalogLoadError> {
    let content =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogLoadError::Io {
                path: path.to_path_buf(),
                source,
            })?;

    let raw = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => parse_toml(&content).map_err(|source| CatalogLoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?,
        Some("csv") | Some("txt") => parse_delimited(&content),
        _ => {
            return Err(CatalogLoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    build(raw, path)
}

/// Load the embedded sample catalog
pub fn load_builtin_sample() -> Result<(Catalog, LoadReport), CatalogLoadError> {
    let path = Path::new("<built-in sample>");
    let raw = parse_toml(BUILTIN_SAMPLE).map_err(|source| CatalogLoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    build(raw, path)
}

/// Rows extracted from a source before duplicate resolution
struct RawRows {
    rows: Vec<(String, String)>,
    skipped: usize,
}

fn parse_delimited(content: &str) -> RawRows {
    let mut rows = Vec::new();
    let mut skipped = 0;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match line.split_once(',') {
            Some((code, description)) => {
                let code = code.trim();
                let description = description.trim();
                if code.is_empty() || description.is_empty() {
                    skipped += 1;
                } else {
                    rows.push((code.to_string(), description.to_string()));
                }
            }
            None => skipped += 1,
        }
    }

    RawRows { rows, skipped }
}

fn parse_toml(content: &str) -> Result<RawRows, toml::de::Error> {
    let file: CatalogFile = toml::from_str(content)?;
    log::debug!(
        "parsed catalog '{}' (version {})",
        file.catalog.name,
        file.catalog.version.as_deref().unwrap_or("unknown")
    );

    let mut rows = Vec::new();
    let mut skipped = 0;
    for entry in file.entries {
        let code = entry.code.trim().to_string();
        let description = entry.description.trim().to_string();
        if code.is_empty() || description.is_empty() {
            skipped += 1;
        } else {
            rows.push((code, description));
        }
    }

    Ok(RawRows { rows, skipped })
}

fn build(raw: RawRows, path: &Path) -> Result<(Catalog, LoadReport), CatalogLoadError> {
    let mut entries: HashMap<String, String> = HashMap::new();
    let mut skipped = raw.skipped;

    for (code, description) in raw.rows {
        // Last occurrence wins; the replaced row counts as skipped.
        if entries.insert(code, description).is_some() {
            skipped += 1;
        }
    }

    if entries.is_empty() {
        return Err(CatalogLoadError::Empty {
            path: path.to_path_buf(),
        });
    }

    let report = LoadReport {
        entries: entries.len(),
        skipped,
    };
    Ok((Catalog::from_entries(entries), report))
}
