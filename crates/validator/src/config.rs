//! Validator configuration
//!
//! The defaults reproduce the classic behaviour: string length is measured
//! in bytes and unrecognised clause names are ignored.
//!
//! ```
//! use structval::{LengthMode, UnknownClausePolicy, ValidatorConfig};
//!
//! let config: ValidatorConfig =
//!     serde_json::from_str(r#"{ "length_mode": "chars", "unknown_clauses": "reject" }"#).unwrap();
//! assert_eq!(config.length_mode, LengthMode::Chars);
//! assert_eq!(config.unknown_clauses, UnknownClausePolicy::Reject);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length for `min`, `max` and `len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthMode {
    /// Count UTF-8 bytes.
    #[default]
    Bytes,
    /// Count Unicode scalar values.
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// UNKNOWN CLAUSES
// ============================================================================

/// What to do with a clause whose name is not `min`, `max`, `len` or `in`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownClausePolicy {
    /// Skip it silently.
    #[default]
    Ignore,
    /// Skip it and emit a `tracing` warning.
    Warn,
    /// Treat the tag as malformed.
    Reject,
}

// ============================================================================
// CONFIG
// ============================================================================

/// Settings for a [`Validator`](crate::Validator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// String length measurement.
    pub length_mode: LengthMode,
    /// Handling of unrecognised clause names.
    pub unknown_clauses: UnknownClausePolicy,
}

impl ValidatorConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the length mode.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_length_mode(mut self, length_mode: LengthMode) -> Self {
        self.length_mode = length_mode;
        self
    }

    /// Sets the unknown clause policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_unknown_clauses(mut self, policy: UnknownClausePolicy) -> Self {
        self.unknown_clauses = policy;
        self
    }
}
