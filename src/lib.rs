//! HSN Code Validator
//!
//! Validates Harmonized System Nomenclature (HSN) product codes against a
//! reference catalog.
//!
//! This library provides:
//! - Catalog loading from delimited text or TOML sources
//! - A three-stage validation pipeline (format, existence, hierarchy)
//! - Batch processing with one verdict per submitted code
//! - Configuration management
//! - Catalog file watching for long-running hosts

pub mod catalog;
pub mod config;
pub mod validation;
pub mod watch;

// Re-exports for clean public API
pub use catalog::{Catalog, CatalogLoadError, LoadReport};
pub use config::Config;
pub use validation::{BatchProcessor, Reason, Validator, Verdict};
