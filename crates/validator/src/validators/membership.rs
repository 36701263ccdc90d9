//! The `in` constraint

use crate::foundation::{FieldKind, FieldValue, Violation};
use crate::options::{IN, Options};

/// Checks a scalar against the `in` clause.
///
/// Integers are compared with the integer items, strings with the raw
/// items. The rendered allowed set is always the comma-joined string form.
pub(crate) fn check(
    field: &str,
    kind: &FieldKind,
    value: &FieldValue<'_>,
    options: &Options,
) -> Option<Violation> {
    let allowed = match value {
        FieldValue::Int(n) => {
            let allowed = options.allowed_ints();
            allowed.is_empty() || allowed.iter().any(|item| i128::from(*item) == *n)
        }
        FieldValue::Str(s) => {
            let allowed = options.allowed_strings();
            allowed.is_empty() || allowed.iter().any(|item| item.as_str() == *s)
        }
        FieldValue::Seq(_) => true,
    };

    if allowed {
        None
    } else {
        Some(Violation::constraint(
            field,
            kind,
            IN,
            options.allowed_display(),
            value,
        ))
    }
}
