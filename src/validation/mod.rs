//! Validation Engine
//!
//! Clean separation of validation logic from catalog loading and host
//! concerns.

pub mod batch;
pub mod engine;
pub mod rules;

pub use batch::{BatchProcessor, DEFAULT_DELIMITER};
pub use engine::{Reason, Validator, Verdict};
pub use rules::{ancestor_prefixes, is_hierarchy_valid, is_valid_format};
