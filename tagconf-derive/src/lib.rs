//! Derive macro implementation for tagconf

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::FieldAttrs;

/// `Config` derive macro
///
/// Implements `tagconf::Config` by listing every named field, in declaration
/// order, with its `#[conf("...")]` annotation. A field without the attribute
/// is listed with an empty annotation and is rejected at validation time.
///
/// # Example
///
/// See the `tagconf` crate documentation for usage examples.
#[proc_macro_derive(Config, attributes(conf))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(expanded) => expanded.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Config only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Config only supports structs",
            ));
        }
    };

    let mut entries = Vec::with_capacity(fields.len());
    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };
        let attrs = FieldAttrs::from_field(field)?;

        let name = field_name.unraw().to_string();
        let annotation = attrs.annotation_value();

        entries.push(quote! {
            ::tagconf::Field::new(#name, #annotation, &mut self.#field_name)
        });
    }

    Ok(quote! {
        impl #impl_generics ::tagconf::Config for #struct_name #ty_generics #where_clause {
            fn fields(&mut self) -> ::std::vec::Vec<::tagconf::Field<'_>> {
                ::std::vec![
                    #(#entries),*
                ]
            }
        }
    })
}
