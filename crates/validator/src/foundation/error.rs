//! Error types for validation failures
//!
//! Three layers, from the inside out:
//!
//! - [`ParseError`] - a tag could not be turned into [`Options`](crate::Options).
//! - [`Violation`] - one field-level failure. Parse errors, unexported
//!   fields and constraint breaches all travel through this one type.
//! - [`ValidationErrors`] / [`Error`] - the ordered collection for a whole
//!   record, and the top-level error returned by [`validate`](crate::validate).
//!
//! Message texts are fixed and stable.

use std::fmt;

use super::kind::FieldKind;

// ============================================================================
// PARSE ERROR
// ============================================================================

/// Failure to parse a constraint tag for a field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The tag text is malformed.
    #[error("invalid validator syntax")]
    InvalidSyntax,

    /// The field's declared type cannot carry constraints.
    #[error("field of type {kind} can not be validated")]
    UnsupportedKind {
        /// The offending kind.
        kind: FieldKind,
    },
}

// ============================================================================
// VIOLATION
// ============================================================================

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Violation {
    /// A tagged field is not public.
    #[error("validation for unexported field is not allowed")]
    Unexported,

    /// A tagged field has a type that cannot be validated.
    #[error("field of type {kind} can not be validated")]
    UnsupportedKind {
        /// The offending kind.
        kind: FieldKind,
    },

    /// A tag could not be parsed.
    #[error("invalid validator syntax")]
    InvalidSyntax,

    /// A value breaks a declared constraint.
    #[error(
        "field '{field}' of type {kind} is not valid: has constraint ('{constraint}': {expected}), but got value = {actual}"
    )]
    Constraint {
        /// Field name.
        field: String,
        /// Declared field kind.
        kind: FieldKind,
        /// Clause name (`min`, `max`, `len` or `in`).
        constraint: &'static str,
        /// Configured threshold or allowed set.
        expected: String,
        /// Offending value (magnitude for numeric rules).
        actual: String,
    },
}

impl Violation {
    /// Creates a constraint violation.
    pub fn constraint(
        field: impl Into<String>,
        kind: &FieldKind,
        constraint: &'static str,
        expected: impl fmt::Display,
        actual: impl fmt::Display,
    ) -> Self {
        Self::Constraint {
            field: field.into(),
            kind: kind.clone(),
            constraint,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Returns `true` for constraint breaches, `false` for structural failures.
    #[must_use]
    pub fn is_constraint(&self) -> bool {
        matches!(self, Self::Constraint { .. })
    }

    /// The clause name of a constraint breach.
    #[must_use]
    pub fn constraint_name(&self) -> Option<&'static str> {
        match self {
            Self::Constraint { constraint, .. } => Some(*constraint),
            _ => None,
        }
    }

    /// The field name of a constraint breach.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Constraint { field, .. } => Some(field.as_str()),
            _ => None,
        }
    }
}

impl From<ParseError> for Violation {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::InvalidSyntax => Self::InvalidSyntax,
            ParseError::UnsupportedKind { kind } => Self::UnsupportedKind { kind },
        }
    }
}

// ============================================================================
// ERROR COLLECTION
// ============================================================================

/// The ordered violations of one record.
///
/// Violations appear in field declaration order, and within a sequence
/// field in element order. Rendered as the individual messages joined by
/// `";\n"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    violations: Vec<Violation>,
}

impl ValidationErrors {
    /// Creates a new empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            violations: Vec::new(),
        }
    }

    /// Adds a violation.
    pub fn add(&mut self, violation: impl Into<Violation>) {
        self.violations.push(violation.into());
    }

    /// Adds multiple violations, preserving their order.
    pub fn extend(&mut self, violations: impl IntoIterator<Item = Violation>) {
        self.violations.extend(violations);
    }

    /// Returns the number of violations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.violations.len()
    }

    /// Returns true if the record is valid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns all violations.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Iterates over the violations in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Converts to a Result.
    #[must_use = "result must be used"]
    pub fn into_result<T>(self, ok_value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(ok_value)
        } else {
            Err(self)
        }
    }
}

impl FromIterator<Violation> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            violations: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValidationErrors {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str(";\n")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TOP-LEVEL ERROR
// ============================================================================

/// Error returned by [`validate`](crate::validate).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The subject is not a record.
    #[error("wrong argument given, should be a struct")]
    NotStruct,

    /// One or more fields are invalid.
    #[error(transparent)]
    Invalid(#[from] ValidationErrors),
}

impl Error {
    /// The collected violations, if this is [`Error::Invalid`].
    #[must_use]
    pub fn violations(&self) -> Option<&ValidationErrors> {
        match self {
            Self::Invalid(errors) => Some(errors),
            Self::NotStruct => None,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
