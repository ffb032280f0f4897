//! Batch Processing
//!
//! Turns a raw delimited input string into an ordered list of verdicts.

use super::engine::{Validator, Verdict};

/// Default token delimiter for batch input
pub const DEFAULT_DELIMITER: char = ',';

/// Splits raw input into code tokens and validates each one
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    validator: Validator,
    delimiter: char,
}

impl BatchProcessor {
    /// Create a processor using the default comma delimiter
    pub fn new(validator: Validator) -> Self {
        Self {
            validator,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Use a different token delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// The per-code validator this processor drives
    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    /// Validate every token of a raw input batch
    ///
    /// Tokens are split on the delimiter with empty tokens preserved, then
    /// trimmed of surrounding whitespace. Every token yields exactly one
    /// verdict, in input order: empty tokens (consecutive or trailing
    /// delimiters) come back as format rejections, and duplicate codes are
    /// validated independently.
    pub fn process(&self, raw: &str) -> Vec<Verdict> {
        raw.split(self.delimiter)
            .map(|token| self.validator.validate(token.trim()))
            .collect()
    }
}
