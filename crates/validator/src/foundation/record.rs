//! The driver contract: records and their fields
//!
//! Rust has no runtime reflection, so the information a validator needs
//! about a record (field names, visibility, declared kinds, tags and
//! borrowed values) is supplied through the [`Record`] trait. It is normally
//! implemented with `#[derive(Record)]`; [`JsonRecord`](crate::json::JsonRecord)
//! implements it for JSON objects.
//!
//! Types that are not records implement [`Record`] too, returning
//! [`Shape::Other`], so that handing them to [`validate`](crate::validate)
//! fails with [`Error::NotStruct`](crate::Error::NotStruct) instead of not
//! compiling.

use std::any::Any;
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use super::kind::FieldKind;
use super::value::FieldValue;

// ============================================================================
// RECORD TRAIT
// ============================================================================

/// A value that can be inspected field by field.
pub trait Record {
    /// Describes the shape of this value.
    fn shape(&self) -> Shape<'_>;
}

/// The driver's answer to "is this a record, and what are its fields".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape<'a> {
    /// A record with its fields in declaration order.
    Record(Vec<RecordField<'a>>),
    /// Anything else, with a short description (`"string"`, `"map"`, ...).
    Other(Cow<'static, str>),
}

impl Shape<'_> {
    /// Returns `true` for [`Shape::Record`].
    #[must_use]
    pub fn is_record(&self) -> bool {
        matches!(self, Self::Record(_))
    }
}

// ============================================================================
// RECORD FIELD
// ============================================================================

/// One field of a record, already resolved by the driver.
///
/// `value` is `None` when the driver must not or cannot read the field
/// (unexported or unsupported fields).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordField<'a> {
    /// Field name as declared.
    pub name: Cow<'a, str>,
    /// Whether the field is visible outside its defining module.
    pub exported: bool,
    /// The declared kind.
    pub kind: FieldKind,
    /// Raw constraint tag, if one was declared.
    pub tag: Option<&'a str>,
    /// Borrowed runtime value.
    pub value: Option<FieldValue<'a>>,
}

impl<'a> RecordField<'a> {
    /// Creates an exported field with no tag and no value.
    pub fn new(name: impl Into<Cow<'a, str>>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            exported: true,
            kind,
            tag: None,
            value: None,
        }
    }

    /// Sets the constraint tag.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_tag(mut self, tag: &'a str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Sets the runtime value.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_value(mut self, value: FieldValue<'a>) -> Self {
        self.value = Some(value);
        self
    }

    /// Marks the field as exported or not.
    #[must_use = "builder methods must be chained or built"]
    pub fn exported(mut self, exported: bool) -> Self {
        self.exported = exported;
        self
    }

    /// The tag, treating an empty tag as absent.
    #[must_use]
    pub fn declared_tag(&self) -> Option<&'a str> {
        self.tag.filter(|tag| !tag.is_empty())
    }
}

// ============================================================================
// NON-RECORD SHAPES
// ============================================================================

macro_rules! impl_not_record {
    ($shape:literal => $($ty:ty),* $(,)?) => {
        $(
            impl Record for $ty {
                #[inline]
                fn shape(&self) -> Shape<'_> {
                    Shape::Other(Cow::Borrowed($shape))
                }
            }
        )*
    };
}

impl_not_record!("int" => i8, i16, i32, i64, i128, isize);
impl_not_record!("uint" => u8, u16, u32, u64, u128, usize);
impl_not_record!("float" => f32, f64);
impl_not_record!("bool" => bool);
impl_not_record!("char" => char);
impl_not_record!("string" => str, String);
impl_not_record!("interface" => dyn Any, dyn Any + Send, dyn Any + Send + Sync);
impl_not_record!("tuple" => ());

impl<T> Record for [T] {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Cow::Borrowed("slice"))
    }
}

impl<T, const N: usize> Record for [T; N] {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Cow::Borrowed("array"))
    }
}

impl<T> Record for Vec<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Cow::Borrowed("slice"))
    }
}

impl<T> Record for VecDeque<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Cow::Borrowed("slice"))
    }
}

impl<K, V, S> Record for HashMap<K, V, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Cow::Borrowed("map"))
    }
}

impl<K, V> Record for BTreeMap<K, V> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Cow::Borrowed("map"))
    }
}

impl<T, S> Record for HashSet<T, S> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Cow::Borrowed("set"))
    }
}

impl<T> Record for BTreeSet<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Cow::Borrowed("set"))
    }
}

impl<T> Record for Option<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Cow::Borrowed("option"))
    }
}

impl<T: ?Sized> Record for Box<T> {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Cow::Borrowed("ptr"))
    }
}

impl<T: ?Sized> Record for &T {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Cow::Borrowed("ptr"))
    }
}

#[cfg(feature = "json")]
impl Record for serde_json::Value {
    fn shape(&self) -> Shape<'_> {
        Shape::Other(Cow::Borrowed("json"))
    }
}
