//! The `min`, `max` and `len` constraints

use crate::config::LengthMode;
use crate::foundation::{FieldKind, FieldValue, Violation};
use crate::options::Options;

/// Reduces a scalar to the integer compared against numeric rules: the
/// value itself for integers, the measured length for strings.
#[must_use]
pub fn magnitude(value: &FieldValue<'_>, mode: LengthMode) -> i128 {
    match value {
        FieldValue::Int(n) => *n,
        FieldValue::Str(s) => mode.measure(s) as i128,
        FieldValue::Seq(_) => 0,
    }
}

/// Runs every declared numeric rule against a scalar.
pub(crate) fn check(
    field: &str,
    kind: &FieldKind,
    value: &FieldValue<'_>,
    options: &Options,
    mode: LengthMode,
    out: &mut Vec<Violation>,
) {
    let n = magnitude(value, mode);
    for (rule, threshold) in options.numeric() {
        if rule.is_violated(n, threshold) {
            out.push(Violation::constraint(
                field,
                kind,
                rule.as_str(),
                threshold,
                n,
            ));
        }
    }
}
