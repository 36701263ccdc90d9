//! Constraint evaluation
//!
//! Applies parsed [`Options`] to a field value. Sequences are checked element
//! by element against the same options; each element can contribute its own
//! violations. For one scalar, a membership breach comes before numeric
//! breaches, and numeric rules run in `min`, `max`, `len` order.
//!
//! ```
//! use structval::{FieldKind, FieldValue, LengthMode, Options, evaluate};
//!
//! let kind = FieldKind::SequenceOfString;
//! let options = Options::parse(&kind, "len:5").unwrap();
//! let value = FieldValue::Seq(vec![FieldValue::Str("abcde"), FieldValue::Str("abc")]);
//!
//! let violations = evaluate("Codes", &kind, &value, &options, LengthMode::Bytes);
//! assert_eq!(violations.len(), 1);
//! ```

mod magnitude;
mod membership;

pub use magnitude::magnitude;

use crate::config::LengthMode;
use crate::foundation::{FieldKind, FieldValue, ValidationErrors, Violation};
use crate::options::Options;

/// Evaluates `value` against `options` and returns the violations in order.
///
/// `kind` is the field's declared kind and is what the messages show; for
/// sequences that is `slice`.
#[must_use]
pub fn evaluate(
    field: &str,
    kind: &FieldKind,
    value: &FieldValue<'_>,
    options: &Options,
    length_mode: LengthMode,
) -> Vec<Violation> {
    let mut out = Vec::new();
    evaluate_value(field, kind, value, options, length_mode, &mut out);
    out
}

/// Like [`evaluate`], appending to an existing collection.
pub fn evaluate_into(
    field: &str,
    kind: &FieldKind,
    value: &FieldValue<'_>,
    options: &Options,
    length_mode: LengthMode,
    errors: &mut ValidationErrors,
) {
    errors.extend(evaluate(field, kind, value, options, length_mode));
}

fn evaluate_value(
    field: &str,
    kind: &FieldKind,
    value: &FieldValue<'_>,
    options: &Options,
    length_mode: LengthMode,
    out: &mut Vec<Violation>,
) {
    if let FieldValue::Seq(items) = value {
        for item in items {
            evaluate_value(field, kind, item, options, length_mode, out);
        }
        return;
    }

    out.extend(membership::check(field, kind, value, options));
    magnitude::check(field, kind, value, options, length_mode, out);
}

// ============================================================================
// TESTS
// ============================================================================
