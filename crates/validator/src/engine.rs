//! Record validation
//!
//! Walks the fields of a [`Record`] in declaration order, parsing each tag
//! and evaluating the field's value. Every field is processed; failures are
//! collected into a [`ValidationErrors`] owned by the call.

use crate::config::ValidatorConfig;
use crate::foundation::{Error, Record, RecordField, Shape, ValidationErrors, Violation};
use crate::options::Options;
use crate::validators::evaluate_into;

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates records with a fixed configuration.
///
/// A `Validator` holds no per-record state; one instance can validate any
/// number of records, from any number of threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    /// Creates a validator with the given configuration.
    #[must_use]
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validates `record`.
    ///
    /// Fails with [`Error::NotStruct`] when `record` is not a record, and
    /// with [`Error::Invalid`] when any field is invalid.
    pub fn validate<R: Record + ?Sized>(&self, record: &R) -> Result<(), Error> {
        let errors = self.collect(record)?;
        errors.into_result(()).map_err(Error::Invalid)
    }

    /// Validates `record` and returns the collected violations, which are
    /// empty when it is valid.
    pub fn collect<R: Record + ?Sized>(&self, record: &R) -> Result<ValidationErrors, Error> {
        let fields = match record.shape() {
            Shape::Record(fields) => fields,
            Shape::Other(shape) => {
                tracing::debug!(%shape, "validation subject is not a record");
                return Err(Error::NotStruct);
            }
        };

        let mut errors = ValidationErrors::new();
        for field in &fields {
            self.validate_field(field, &mut errors);
        }

        tracing::debug!(
            fields = fields.len(),
            violations = errors.len(),
            "validated record"
        );
        Ok(errors)
    }

    fn validate_field(&self, field: &RecordField<'_>, errors: &mut ValidationErrors) {
        let Some(tag) = field.declared_tag() else {
            tracing::trace!(field = %field.name, "no tag, skipping");
            return;
        };

        if !field.exported {
            tracing::trace!(field = %field.name, "tagged field is not exported");
            errors.add(Violation::Unexported);
            return;
        }

        let kind = field.kind.element_kind();
        let options = match Options::parse_with(&kind, tag, self.config.unknown_clauses) {
            Ok(options) => options,
            Err(err) => {
                tracing::trace!(field = %field.name, %tag, error = %err, "tag rejected");
                errors.add(err);
                return;
            }
        };

        let Some(value) = &field.value else {
            tracing::trace!(field = %field.name, "no value supplied, skipping");
            return;
        };

        let before = errors.len();
        evaluate_into(
            &field.name,
            &field.kind,
            value,
            &options,
            self.config.length_mode,
            errors,
        );
        if errors.len() > before {
            tracing::trace!(
                field = %field.name,
                violations = errors.len() - before,
                "field is invalid"
            );
        }
    }
}

/// Validates `record` with the default configuration.
///
/// ```
/// use structval::Record;
///
/// #[derive(Record)]
/// struct Signup {
///     #[validate("min:3; max:16")]
///     pub login: String,
///     #[validate("in:free,pro")]
///     pub plan: String,
/// }
///
/// let signup = Signup { login: "jo".into(), plan: "gold".into() };
/// let err = structval::validate(&signup).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "field 'login' of type string is not valid: has constraint ('min': 3), but got value = 2;\n\
///      field 'plan' of type string is not valid: has constraint ('in': free,pro), but got value = gold"
/// );
/// ```
pub fn validate<R: Record + ?Sized>(record: &R) -> Result<(), Error> {
    Validator::default().validate(record)
}

// ============================================================================
// TESTS
// ============================================================================
