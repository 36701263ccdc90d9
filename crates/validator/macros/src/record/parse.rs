//! Parsing of `#[validate("...")]` attributes

use syn::{Attribute, LitStr};

/// Attributes collected from one field.
#[derive(Debug, Default, Clone)]
pub(super) struct FieldAttrs {
    /// The constraint tag, if the field declares one.
    pub tag: Option<LitStr>,
}

impl FieldAttrs {
    /// Parse field attributes, ignoring everything but `validate`.
    pub(super) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !attr.path().is_ident("validate") {
                continue;
            }

            if result.tag.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate `validate` attribute; join the clauses with `;` instead",
                ));
            }

            let tag = attr.parse_args::<LitStr>().map_err(|err| {
                syn::Error::new(
                    err.span(),
                    "expected a tag string, e.g. #[validate(\"min:1; max:10\")]",
                )
            })?;
            result.tag = Some(tag);
        }

        Ok(result)
    }
}
