//! Code generation for the Record derive
//!
//! The generated `shape()` builds one `RecordField` per struct field, in
//! declaration order. Values are borrowed only for exported fields whose
//! kind is supported; every other field is described without being read.

use super::parse::FieldAttrs;
use crate::shared::types::detect_kind;
use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Fields, Index, Member, Visibility};

/// Generate the `Record` implementation for a struct or enum.
///
/// # Errors
///
/// Returns an error if the input is a union, or if a field attribute is
/// malformed.
pub(super) fn generate_record(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let body = match &input.data {
        Data::Struct(data) => {
            let fields = generate_fields(&data.fields)?;
            quote! {
                ::structval::Shape::Record(::std::vec![#(#fields),*])
            }
        }
        Data::Enum(_) => quote! {
            ::structval::Shape::Other(::std::borrow::Cow::Borrowed("enum"))
        },
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "`Record` cannot be derived for unions.\n\
                 \n\
                 Only structs have fields that can be validated.",
            ));
        }
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::structval::Record for #name #ty_generics #where_clause {
            fn shape(&self) -> ::structval::Shape<'_> {
                #body
            }
        }
    })
}

fn generate_fields(fields: &Fields) -> syn::Result<Vec<TokenStream>> {
    match fields {
        Fields::Named(named) => named
            .named
            .iter()
            .enumerate()
            .map(|(index, field)| generate_field(index, field))
            .collect(),
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(index, field)| generate_field(index, field))
            .collect(),
        Fields::Unit => Ok(Vec::new()),
    }
}

/// Generate the `RecordField` expression for one field.
fn generate_field(index: usize, field: &Field) -> syn::Result<TokenStream> {
    let attrs = FieldAttrs::from_attributes(&field.attrs)?;

    let (member, field_name) = match &field.ident {
        Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
        None => (Member::Unnamed(Index::from(index)), index.to_string()),
    };

    let kind = detect_kind(&field.ty);
    let exported = matches!(field.vis, Visibility::Public(_));

    let mut tokens = quote! {
        ::structval::RecordField::new(#field_name, #kind)
    };

    if !exported {
        tokens.extend(quote!(.exported(false)));
    }

    if let Some(tag) = &attrs.tag {
        tokens.extend(quote!(.with_tag(#tag)));
    }

    if exported && kind.is_supported() {
        tokens.extend(quote! {
            .with_value(::structval::IntoFieldValue::field_value(&self.#member))
        });
    }

    Ok(tokens)
}
