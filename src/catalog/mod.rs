//! Catalog System
//!
//! The immutable code-to-description reference table and its loaders.

pub mod loader;
pub mod table;

pub use loader::{CatalogFile, CatalogLoadError, LoadReport, load_builtin_sample, load_from_path};
pub use table::Catalog;
