//! Configuration management for the HSN validator.
//!
//! Handles:
//! - Command-line argument parsing
//! - Catalog source resolution

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::validation::DEFAULT_DELIMITER;

/// Command-line arguments for the HSN validator
#[derive(Debug, Parser)]
#[command(name = "hsn-validator")]
#[command(about = "Validates HSN product codes against a reference catalog")]
#[command(version)]
pub struct Args {
    /// Catalog file to validate against
    #[arg(long, help = "Path to the catalog file (.csv, .txt or .toml)")]
    pub catalog: Option<PathBuf>,

    /// One-shot batch of codes; without this, batches are read from stdin
    #[arg(long, help = "Delimited batch of codes to validate, e.g. '01,0101'")]
    pub codes: Option<String>,

    /// Token delimiter for batch input
    #[arg(
        long,
        default_value_t = DEFAULT_DELIMITER,
        help = "Delimiter separating codes in a batch"
    )]
    pub delimiter: char,

    /// Hierarchical consistency checking for 8-digit codes
    #[arg(
        long,
        help = "Require the 2/4/6-digit ancestors of 8-digit codes to exist in the catalog"
    )]
    pub check_hierarchy: bool,

    /// Output format
    #[arg(long, help = "Emit verdicts as a JSON array instead of plain text")]
    pub json: bool,

    /// Log level for the validator
    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog path explicitly set via command line
    pub catalog_path: Option<PathBuf>,
    /// One-shot batch input, if any
    pub codes: Option<String>,
    /// Token delimiter for batch input
    pub delimiter: char,
    /// Whether 8-digit codes must have all ancestors in the catalog
    pub check_hierarchy: bool,
    /// Emit JSON instead of plain text
    pub json: bool,
    /// Log level
    pub log_level: String,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        Ok(Config {
            catalog_path: args.catalog,
            codes: args.codes,
            delimiter: args.delimiter,
            check_hierarchy: args.check_hierarchy,
            json: args.json,
            log_level: args.log_level,
        })
    }

    /// Resolve the catalog file to load
    ///
    /// An explicitly configured path always wins. Otherwise the default user
    /// catalog is used if it exists; `None` means the host should fall back
    /// to the embedded sample catalog.
    pub fn resolve_catalog_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.catalog_path {
            return Some(path.clone());
        }

        let default = dirs::config_dir()?.join("hsn-validator").join("catalog.csv");
        default.exists().then_some(default)
    }
}
