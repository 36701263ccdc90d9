//! Declared field kinds
//!
//! A [`FieldKind`] is resolved once per field by the driver (the derive macro
//! or [`JsonRecord`](crate::json::JsonRecord)) from the field's declared type.
//! It selects which constraint syntax is legal and how values are compared.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// FIELD KIND
// ============================================================================

/// The declared kind of a record field.
///
/// Only integers, strings and homogeneous sequences of either can carry
/// constraints. Everything else is [`FieldKind::Unsupported`], labelled with
/// the declared type name so that it can be reported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Any primitive integer up to 64 bits wide.
    Integer,
    /// `String`, `str` and friends.
    String,
    /// A sequence whose elements are integers.
    SequenceOfInteger,
    /// A sequence whose elements are strings.
    SequenceOfString,
    /// A type that cannot be validated. Holds the declared type label
    /// (the element label for sequences of unsupported elements).
    Unsupported(Cow<'static, str>),
}

impl FieldKind {
    /// Creates an unsupported kind with the given type label.
    pub fn unsupported(label: impl Into<Cow<'static, str>>) -> Self {
        Self::Unsupported(label.into())
    }

    /// Returns the per-element kind: sequences map to their element kind,
    /// scalars map to themselves.
    #[must_use]
    pub fn element_kind(&self) -> Self {
        match self {
            Self::SequenceOfInteger => Self::Integer,
            Self::SequenceOfString => Self::String,
            other => other.clone(),
        }
    }

    /// Returns `true` for `Integer` and `SequenceOfInteger`.
    #[must_use]
    pub fn is_integer_based(&self) -> bool {
        matches!(self, Self::Integer | Self::SequenceOfInteger)
    }

    /// Returns `true` for `String` and `SequenceOfString`.
    #[must_use]
    pub fn is_string_based(&self) -> bool {
        matches!(self, Self::String | Self::SequenceOfString)
    }

    /// Returns `true` for both sequence kinds.
    #[must_use]
    pub fn is_sequence(&self) -> bool {
        matches!(self, Self::SequenceOfInteger | Self::SequenceOfString)
    }

    /// Returns `false` only for [`FieldKind::Unsupported`].
    #[must_use]
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }

    /// The name used when rendering violation messages.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Integer => "int",
            Self::String => "string",
            Self::SequenceOfInteger | Self::SequenceOfString => "slice",
            Self::Unsupported(label) => label,
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
