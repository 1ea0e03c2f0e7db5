//! Implementation of the `#[derive(Record)]` macro.
//!
//! The macro generates an implementation of `tabulon::Record`: a schema
//! listing every named field with its `#[record(...)]` appearance, plus a
//! by-name accessor that converts each field through `tabulon::ToValue`.
//!
//! Fields marked `ignore` stay in the schema; dropping them is the
//! resolver's job, so that a caller-supplied override can still reinstate
//! them at render time.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Result};

use super::attrs::{generate_align_tokens, parse_record_attrs};

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let mut schema_tokens: Vec<TokenStream> = Vec::new();
    let mut value_arms: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_ident = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;
        let field_name = field_ident.to_string();

        let attr = parse_record_attrs(&field.attrs)?;

        let mut appearance = quote! { ::tabulon::Appearance::new() };
        if let Some(rename) = &attr.rename {
            appearance = quote! { #appearance.rename(#rename) };
        }
        if let Some(format) = &attr.format {
            appearance = quote! { #appearance.format(#format) };
        }
        if let Some(align) = &attr.align {
            let align_tokens = generate_align_tokens(align, field.span())?;
            appearance = quote! { #appearance.align(#align_tokens) };
        }
        if let Some(order) = attr.order {
            appearance = quote! { #appearance.order(#order) };
        }
        if attr.ignore {
            appearance = quote! { #appearance.ignore() };
        }
        if attr.encapsulate {
            appearance = quote! { #appearance.encapsulate() };
        }

        schema_tokens.push(quote! {
            ::tabulon::Field::new(#field_name).appearance(#appearance)
        });

        value_arms.push(quote! {
            #field_name => ::tabulon::ToValue::to_value(&self.#field_ident),
        });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let expanded = quote! {
        #[automatically_derived]
        impl #impl_generics ::tabulon::Record for #struct_name #ty_generics #where_clause {
            fn schema() -> ::std::vec::Vec<::tabulon::Field> {
                vec![
                    #(#schema_tokens),*
                ]
            }

            fn value(&self, field: &str) -> ::tabulon::Value {
                match field {
                    #(#value_arms)*
                    _ => ::tabulon::Value::Null,
                }
            }
        }
    };

    Ok(expanded)
}
