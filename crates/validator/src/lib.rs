//! # structval
//!
//! Tag-driven validation of struct fields.
//!
//! Each field of a record may carry a constraint tag such as
//! `"min:18; max:130"` or `"in:admin,stuff"`. Validation walks the fields in
//! declaration order, checks every tagged field, and reports all failures
//! at once.
//!
//! ## Quick Start
//!
//! ```
//! use structval::Record;
//!
//! #[derive(Record)]
//! struct User {
//!     #[validate("len:36")]
//!     pub id: String,
//!     #[validate("min:18; max:50")]
//!     pub age: i32,
//!     #[validate("in:admin,stuff")]
//!     pub role: String,
//!     #[validate("max:12")]
//!     pub phones: Vec<String>,
//! }
//!
//! let user = User {
//!     id: "f9d4e1b0-63a4-4b2e-8d6c-0a47b6e3c2aa".into(),
//!     age: 17,
//!     role: "admin".into(),
//!     phones: vec!["79991234567".into()],
//! };
//!
//! let err = structval::validate(&user).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "field 'age' of type int is not valid: has constraint ('min': 18), but got value = 17"
//! );
//! ```
//!
//! ## Tag grammar
//!
//! A tag is a `;`-separated list of `name:value` clauses:
//!
//! | clause | applies to | meaning |
//! |--------|------------|---------|
//! | `min:N` | integers, strings | value (or length) is at least `N` |
//! | `max:N` | integers, strings | value (or length) is at most `N` |
//! | `len:N` | integers, strings | value (or length) equals `N` |
//! | `in:a,b,c` | integers, strings | value is one of the listed items |
//!
//! Sequences of integers or strings are checked element by element.
//! Unknown clause names are ignored unless configured otherwise through
//! [`ValidatorConfig`].
//!
//! ## Modules
//!
//! - [`options`]: tag parsing into [`Options`]
//! - [`validators`]: evaluation of [`Options`] against a [`FieldValue`]
//! - [`engine`]: the record walk, [`Validator`] and [`validate`]
//! - [`foundation`]: the [`Record`] contract, field kinds, values and errors
//! - `json`: [`JsonRecord`](json::JsonRecord) for `serde_json` objects
//!   (feature `json`)

extern crate self as structval;

pub mod config;
pub mod engine;
pub mod foundation;
#[cfg(feature = "json")]
pub mod json;
pub mod options;
pub mod prelude;
pub mod validators;

/// Derives [`Record`](trait@Record) for a struct.
///
/// Fields take their constraint tag from `#[validate("...")]`. Only `pub`
/// fields count as exported; a tag on any other field is reported as a
/// violation.
#[cfg(feature = "derive")]
pub use structval_macros::Record;

pub use config::{LengthMode, UnknownClausePolicy, ValidatorConfig};
pub use engine::{Validator, validate};
pub use foundation::{
    Error, FieldKind, FieldValue, IntoFieldValue, ParseError, Record, RecordField, Shape,
    ValidationErrors, Violation,
};
pub use options::{NumericRule, Options, parse};
pub use validators::{evaluate, evaluate_into, magnitude};
