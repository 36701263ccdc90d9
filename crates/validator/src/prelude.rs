//! Prelude module for convenient imports.
//!
//! Provides a single `use structval::prelude::*;` import that brings in the
//! record contract, the validator and its configuration, and the error types.
//!
//! # Examples
//!
//! ```
//! use structval::prelude::*;
//!
//! #[derive(Record)]
//! struct Port {
//!     #[validate("min:1; max:65535")]
//!     pub number: u32,
//! }
//!
//! let validator = Validator::new(ValidatorConfig::new());
//! assert!(validator.validate(&Port { number: 8080 }).is_ok());
//! assert!(matches!(validator.validate(&Port { number: 0 }), Err(Error::Invalid(_))));
//! ```

// ============================================================================
// FOUNDATION: Record contract, kinds, values, errors
// ============================================================================

pub use crate::foundation::{
    Error, FieldKind, FieldValue, IntoFieldValue, ParseError, Record, RecordField, Shape,
    ValidationErrors, Violation,
};

// ============================================================================
// ENGINE: Validation entry points and configuration
// ============================================================================

pub use crate::config::{LengthMode, UnknownClausePolicy, ValidatorConfig};
pub use crate::engine::{Validator, validate};
pub use crate::options::{NumericRule, Options};

// ============================================================================
// DERIVE-GATED: `#[derive(Record)]`
// ============================================================================

#[cfg(feature = "derive")]
pub use structval_macros::Record;

// ============================================================================
// JSON-GATED: JSON object records
// ============================================================================

#[cfg(feature = "json")]
pub use crate::json::JsonRecord;
