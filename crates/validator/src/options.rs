//! Constraint tag parsing
//!
//! A tag is a list of `name:value` clauses separated by `;`:
//!
//! ```text
//! min:10; max: 20
//! in:foo,bar
//! len:5
//! ```
//!
//! Both parts of a clause are trimmed; an empty value is malformed.
//! `min`, `max` and `len` take a base-10 integer. `in` takes a comma
//! separated list, whose items must also be integers when the field is
//! integer-based. Other clause names are left to the [`UnknownClausePolicy`].
//!
//! ```
//! use structval::{FieldKind, NumericRule, Options};
//!
//! let options = Options::parse(&FieldKind::String, "min:2; max: 8; in:ab,abcd").unwrap();
//! assert_eq!(options.threshold(NumericRule::Max), Some(8));
//! assert_eq!(options.allowed_strings(), ["ab", "abcd"]);
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::config::UnknownClausePolicy;
use crate::foundation::{FieldKind, ParseError};

/// Clause name of the membership constraint.
pub const IN: &str = "in";
/// Clause name of the lower bound.
pub const MIN: &str = "min";
/// Clause name of the upper bound.
pub const MAX: &str = "max";
/// Clause name of the exact magnitude.
pub const LEN: &str = "len";

const CLAUSE_SEPARATOR: char = ';';
const NAME_SEPARATOR: char = ':';
const ITEM_SEPARATOR: char = ',';

// ============================================================================
// NUMERIC RULES
// ============================================================================

/// A constraint compared against a value's magnitude.
///
/// Ordered `Min < Max < Len`, which is the order rules are evaluated in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NumericRule {
    /// Magnitude must be at least the threshold.
    Min,
    /// Magnitude must be at most the threshold.
    Max,
    /// Magnitude must equal the threshold.
    Len,
}

impl NumericRule {
    /// All rules, in evaluation order.
    pub const ALL: [NumericRule; 3] = [NumericRule::Min, NumericRule::Max, NumericRule::Len];

    /// The clause name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            NumericRule::Min => MIN,
            NumericRule::Max => MAX,
            NumericRule::Len => LEN,
        }
    }

    /// Returns `true` if `magnitude` breaks the rule for `threshold`.
    #[must_use]
    pub fn is_violated(self, magnitude: i128, threshold: i64) -> bool {
        let threshold = i128::from(threshold);
        match self {
            NumericRule::Min => magnitude < threshold,
            NumericRule::Max => magnitude > threshold,
            NumericRule::Len => magnitude != threshold,
        }
    }
}

impl fmt::Display for NumericRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NumericRule {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            MIN => Ok(NumericRule::Min),
            MAX => Ok(NumericRule::Max),
            LEN => Ok(NumericRule::Len),
            _ => Err(()),
        }
    }
}

// ============================================================================
// OPTIONS
// ============================================================================

/// The parsed constraints of one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    numeric: BTreeMap<NumericRule, i64>,
    allowed_strings: Vec<String>,
    allowed_ints: Vec<i64>,
}

impl Options {
    /// Parses `tag` for a field of the given kind, ignoring unknown clauses.
    pub fn parse(kind: &FieldKind, tag: &str) -> Result<Self, ParseError> {
        Self::parse_with(kind, tag, UnknownClausePolicy::Ignore)
    }

    /// Parses `tag` for a field of the given kind.
    ///
    /// Fails with [`ParseError::UnsupportedKind`] before looking at the tag
    /// when `kind` cannot be validated.
    pub fn parse_with(
        kind: &FieldKind,
        tag: &str,
        unknown: UnknownClausePolicy,
    ) -> Result<Self, ParseError> {
        if !kind.is_supported() {
            return Err(ParseError::UnsupportedKind { kind: kind.clone() });
        }

        let mut options = Self::default();
        for clause in tag.split(CLAUSE_SEPARATOR) {
            let (name, value) = split_clause(clause)?;
            options.set(kind, name, value, unknown)?;
        }
        Ok(options)
    }

    fn set(
        &mut self,
        kind: &FieldKind,
        name: &str,
        value: &str,
        unknown: UnknownClausePolicy,
    ) -> Result<(), ParseError> {
        if let Ok(rule) = name.parse::<NumericRule>() {
            self.numeric.insert(rule, parse_int(value)?);
            return Ok(());
        }

        if name == IN {
            return self.set_allowed(kind, value);
        }

        match unknown {
            UnknownClausePolicy::Ignore => Ok(()),
            UnknownClausePolicy::Warn => {
                tracing::warn!(clause = name, "ignoring unknown validation clause");
                Ok(())
            }
            UnknownClausePolicy::Reject => Err(ParseError::InvalidSyntax),
        }
    }

    fn set_allowed(&mut self, kind: &FieldKind, value: &str) -> Result<(), ParseError> {
        self.allowed_strings = value.split(ITEM_SEPARATOR).map(str::to_owned).collect();
        self.allowed_ints = if kind.is_integer_based() {
            self.allowed_strings
                .iter()
                .map(|item| parse_int(item))
                .collect::<Result<_, _>>()?
        } else {
            Vec::new()
        };
        Ok(())
    }

    /// Threshold of a numeric rule, if declared.
    #[must_use]
    pub fn threshold(&self, rule: NumericRule) -> Option<i64> {
        self.numeric.get(&rule).copied()
    }

    /// Declared numeric rules, in evaluation order.
    pub fn numeric(&self) -> impl Iterator<Item = (NumericRule, i64)> + '_ {
        self.numeric.iter().map(|(rule, threshold)| (*rule, *threshold))
    }

    /// Items of the `in` clause, as written.
    #[must_use]
    pub fn allowed_strings(&self) -> &[String] {
        &self.allowed_strings
    }

    /// Items of the `in` clause as integers (integer-based fields only).
    #[must_use]
    pub fn allowed_ints(&self) -> &[i64] {
        &self.allowed_ints
    }

    /// The `in` items joined back with commas, for messages.
    #[must_use]
    pub fn allowed_display(&self) -> String {
        self.allowed_strings.join(",")
    }

    /// Returns `true` when no constraint was declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numeric.is_empty() && self.allowed_strings.is_empty()
    }
}

/// Parses `tag` for a field of the given kind, ignoring unknown clauses.
pub fn parse(kind: &FieldKind, tag: &str) -> Result<Options, ParseError> {
    Options::parse(kind, tag)
}

fn split_clause(clause: &str) -> Result<(&str, &str), ParseError> {
    let mut parts = clause.split(NAME_SEPARATOR);
    let (Some(name), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParseError::InvalidSyntax);
    };

    let value = value.trim();
    if value.is_empty() {
        return Err(ParseError::InvalidSyntax);
    }
    Ok((name.trim(), value))
}

fn parse_int(value: &str) -> Result<i64, ParseError> {
    value.parse().map_err(|_| ParseError::InvalidSyntax)
}

// ============================================================================
// TESTS
// ============================================================================
