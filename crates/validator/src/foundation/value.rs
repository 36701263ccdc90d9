//! Runtime field values
//!
//! The driver hands the evaluator a borrowed [`FieldValue`] for each tagged,
//! exported, supported field. [`IntoFieldValue`] is the conversion the derive
//! macro calls on the field; it is implemented for every type the macro can
//! classify as an integer, a string, or a sequence of either.

use std::borrow::Cow;
use std::collections::VecDeque;
use std::fmt;

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A borrowed view of a field's runtime value.
///
/// Integers are widened to `i128`, which holds every primitive integer up to
/// 64 bits (signed or unsigned) without loss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// An integer scalar.
    Int(i128),
    /// A string scalar.
    Str(&'a str),
    /// A homogeneous sequence of scalars.
    Seq(Vec<FieldValue<'a>>),
}

impl FieldValue<'_> {
    /// Returns `true` if this is a sequence.
    #[must_use]
    pub fn is_seq(&self) -> bool {
        matches!(self, Self::Seq(_))
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
            Self::Seq(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

// ============================================================================
// CONVERSION TRAIT
// ============================================================================

/// Conversion of a field into a [`FieldValue`].
pub trait IntoFieldValue {
    /// Borrows `self` as a field value.
    fn field_value(&self) -> FieldValue<'_>;
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoFieldValue for $ty {
                #[inline]
                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::Int(*self as i128)
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// ============================================================================
// STRINGS
// ============================================================================

impl IntoFieldValue for str {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl IntoFieldValue for String {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl IntoFieldValue for Box<str> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl IntoFieldValue for Cow<'_, str> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_ref())
    }
}

// ============================================================================
// REFERENCES AND SEQUENCES
// ============================================================================

impl<T: IntoFieldValue + ?Sized> IntoFieldValue for &T {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

impl<T: IntoFieldValue> IntoFieldValue for [T] {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.iter().map(IntoFieldValue::field_value).collect())
    }
}

impl<T: IntoFieldValue, const N: usize> IntoFieldValue for [T; N] {
    fn field_value(&self) -> FieldValue<'_> {
        self.as_slice().field_value()
    }
}

impl<T: IntoFieldValue> IntoFieldValue for Vec<T> {
    fn field_value(&self) -> FieldValue<'_> {
        self.as_slice().field_value()
    }
}

impl<T: IntoFieldValue> IntoFieldValue for Box<[T]> {
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

impl<T: IntoFieldValue> IntoFieldValue for VecDeque<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Seq(self.iter().map(IntoFieldValue::field_value).collect())
    }
}
