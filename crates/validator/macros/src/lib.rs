//! Procedural macros for structval
//!
//! - **`#[derive(Record)]`** - implements `structval::Record` for a struct,
//!   reading constraint tags from `#[validate("...")]` field attributes.
//!
//! # Examples
//!
//! ```rust,ignore
//! use structval::Record;
//!
//! #[derive(Record)]
//! struct Account {
//!     #[validate("min:3; max:20")]
//!     pub username: String,
//!
//!     #[validate("min:18")]
//!     pub age: u8,
//!
//!     #[validate("in:admin,staff")]
//!     pub roles: Vec<String>,
//!
//!     // Not validated: no tag.
//!     notes: String,
//! }
//! ```
//!
//! # Architecture
//!
//! - `record/` - the `Record` derive: attribute parsing and code generation
//! - `shared/` - type inspection used to pick a field kind

use proc_macro::TokenStream;

mod record;
mod shared;

// ============================================================================
// RECORD DERIVE
// ============================================================================

/// Derives `structval::Record`.
///
/// # Attributes
///
/// - `#[validate("clauses")]` - the field's constraint tag, for example
///   `#[validate("min:1; max:10")]` or `#[validate("in:red,green")]`. At most
///   one per field.
///
/// # Field handling
///
/// - Fields are listed in declaration order. Tuple struct fields are named
///   `0`, `1`, ...
/// - A field is exported when its visibility is `pub`.
/// - Integer fields up to 64 bits, string fields (`String`, `str`,
///   `Box<str>`, `Cow<str>`) and sequences of those (`Vec`, `VecDeque`,
///   arrays, slices, `Box<[T]>`) are supported; references are looked
///   through. Any other type is reported as unsupported when tagged.
///
/// Enums derive a non-record shape, so validating one fails at runtime.
/// Unions are rejected at compile time.
#[proc_macro_derive(Record, attributes(validate))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive_record_impl(input)
}
