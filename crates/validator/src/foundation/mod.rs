//! Core types shared by the parser, the evaluator and the driver
//!
//! - **Kinds**: [`FieldKind`] - the declared kind of a field
//! - **Values**: [`FieldValue`], [`IntoFieldValue`] - borrowed runtime values
//! - **Records**: [`Record`], [`Shape`], [`RecordField`] - the driver contract
//! - **Errors**: [`ParseError`], [`Violation`], [`ValidationErrors`], [`Error`]
//!
//! # Examples
//!
//! Implementing [`Record`] by hand, which is what `#[derive(Record)]` does:
//!
//! ```
//! use structval::foundation::{FieldKind, IntoFieldValue, Record, RecordField, Shape};
//!
//! struct Login {
//!     user: String,
//! }
//!
//! impl Record for Login {
//!     fn shape(&self) -> Shape<'_> {
//!         Shape::Record(vec![
//!             RecordField::new("user", FieldKind::String)
//!                 .with_tag("min:3")
//!                 .with_value(self.user.field_value()),
//!         ])
//!     }
//! }
//!
//! let login = Login { user: "al".into() };
//! assert!(structval::validate(&login).is_err());
//! ```

pub mod error;
pub mod kind;
pub mod record;
pub mod value;

pub use error::{Error, ParseError, ValidationErrors, Violation};
pub use kind::FieldKind;
pub use record::{Record, RecordField, Shape};
pub use value::{FieldValue, IntoFieldValue};
