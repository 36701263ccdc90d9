//! Type detection for record fields
//!
//! Field kinds are decided from the declared type's syntax alone. Only the
//! last path segment is looked at, so `std::vec::Vec<u8>` and `Vec<u8>` are
//! the same sequence of integers.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{GenericArgument, PathArguments, PathSegment, Type, TypePath};

// ============================================================================
// TYPE CATEGORY
// ============================================================================

/// What a declared type looks like to the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TypeCategory {
    Integer,
    String,
    Sequence {
        element: Box<TypeCategory>,
        /// Printed element type.
        label: String,
    },
    Unsupported(String),
}

/// The field kind emitted into generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DetectedKind {
    Integer,
    String,
    SequenceOfInteger,
    SequenceOfString,
    Unsupported(String),
}

impl DetectedKind {
    pub(crate) fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl From<TypeCategory> for DetectedKind {
    fn from(category: TypeCategory) -> Self {
        match category {
            TypeCategory::Integer => Self::Integer,
            TypeCategory::String => Self::String,
            TypeCategory::Sequence { element, label } => match *element {
                TypeCategory::Integer => Self::SequenceOfInteger,
                TypeCategory::String => Self::SequenceOfString,
                TypeCategory::Unsupported(inner) => Self::Unsupported(inner),
                TypeCategory::Sequence { .. } => Self::Unsupported(label),
            },
            TypeCategory::Unsupported(label) => Self::Unsupported(label),
        }
    }
}

impl ToTokens for DetectedKind {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        tokens.extend(match self {
            Self::Integer => quote!(::structval::FieldKind::Integer),
            Self::String => quote!(::structval::FieldKind::String),
            Self::SequenceOfInteger => quote!(::structval::FieldKind::SequenceOfInteger),
            Self::SequenceOfString => quote!(::structval::FieldKind::SequenceOfString),
            Self::Unsupported(label) => quote!(::structval::FieldKind::unsupported(#label)),
        });
    }
}

// ============================================================================
// TYPE DETECTION
// ============================================================================

/// Detects the field kind of a declared type.
pub(crate) fn detect_kind(ty: &Type) -> DetectedKind {
    detect_type(ty).into()
}

/// Main type detection function
pub(crate) fn detect_type(ty: &Type) -> TypeCategory {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => detect_from_path(ty, type_path),
        Type::Reference(type_ref) if type_ref.mutability.is_none() => detect_type(&type_ref.elem),
        Type::Slice(slice) => sequence_of(&slice.elem),
        Type::Array(array) => sequence_of(&array.elem),
        Type::Paren(paren) => detect_type(&paren.elem),
        Type::Group(group) => detect_type(&group.elem),
        _ => TypeCategory::Unsupported(type_label(ty)),
    }
}

fn detect_from_path(ty: &Type, type_path: &TypePath) -> TypeCategory {
    let Some(last_segment) = type_path.path.segments.last() else {
        return TypeCategory::Unsupported(type_label(ty));
    };
    let type_name = last_segment.ident.to_string();
    let bare = matches!(last_segment.arguments, PathArguments::None);

    match type_name.as_str() {
        "i8" | "i16" | "i32" | "i64" | "isize" | "u8" | "u16" | "u32" | "u64" | "usize"
            if bare =>
        {
            return TypeCategory::Integer;
        }

        "String" | "str" if bare => return TypeCategory::String,

        "Vec" | "VecDeque" => {
            if let Some(inner_ty) = extract_first_generic(last_segment) {
                return sequence_of(inner_ty);
            }
        }

        "Cow" => {
            if extract_first_generic(last_segment).is_some_and(is_str) {
                return TypeCategory::String;
            }
        }

        "Box" => match extract_first_generic(last_segment) {
            Some(inner_ty) if is_str(inner_ty) => return TypeCategory::String,
            Some(Type::Slice(slice)) => return sequence_of(&slice.elem),
            _ => {}
        },

        _ => {}
    }

    TypeCategory::Unsupported(type_label(ty))
}

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

fn sequence_of(element: &Type) -> TypeCategory {
    TypeCategory::Sequence {
        element: Box::new(detect_type(element)),
        label: type_label(element),
    }
}

fn is_str(ty: &Type) -> bool {
    matches!(ty, Type::Path(type_path) if type_path.qself.is_none() && type_path.path.is_ident("str"))
}

/// Extract the first generic type argument, skipping lifetimes.
fn extract_first_generic(segment: &PathSegment) -> Option<&Type> {
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(ty) => Some(ty),
        _ => None,
    })
}

/// Renders a type the way it is usually written: `Option<String>`,
/// `HashMap<String, i32>`, `[f64; 3]`.
pub(crate) fn type_label(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" <", "<")
        .replace("< ", "<")
        .replace(" >", ">")
        .replace(" ,", ",")
        .replace(" ;", ";")
        .replace(" :: ", "::")
        .replace(":: ", "::")
        .replace("& ", "&")
}
