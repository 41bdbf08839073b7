//! Procedural macros for the Herald event dispatcher.
//!
//! - `#[derive(Event)]`: Implements `herald::Event` for your type, preserving generics and bounds.
//!   For structs, `name()` returns the struct name; for enums it returns the variant name.
//!
//! Usage:
//! ```rust,ignore
//! use herald::Event;
//!
//! #[derive(Debug, Event)]
//! struct UserSignedUp { user: String }
//!
//! #[derive(Debug, Event)]
//! enum Billing { Charged(u64), Refunded { amount: u64 } }
//! ```
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, parse_macro_input};

#[proc_macro_derive(Event)]
pub fn derive_event(input: TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let ident = input.ident.clone();
    let generics = input.generics.clone();

    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let name_impl = match &input.data {
        Data::Enum(data_enum) => {
            let match_arms = data_enum.variants.iter().map(|variant| {
                let variant_ident = &variant.ident;
                let variant_name = variant_ident.to_string();

                let pattern = match &variant.fields {
                    Fields::Unit => quote! { Self::#variant_ident },
                    Fields::Unnamed(_) => quote! { Self::#variant_ident(..) },
                    Fields::Named(_) => quote! { Self::#variant_ident { .. } },
                };

                quote! {
                    #pattern => ::std::borrow::Cow::Borrowed(#variant_name)
                }
            });

            quote! {
                fn name(&self) -> ::std::borrow::Cow<'static, str> {
                    match self {
                        #(#match_arms),*
                    }
                }
            }
        }
        _ => {
            let type_name = ident.to_string();
            quote! {
                fn name(&self) -> ::std::borrow::Cow<'static, str> {
                    ::std::borrow::Cow::Borrowed(#type_name)
                }
            }
        }
    };

    let expanded = quote! {
        impl #impl_generics herald::Event for #ident #ty_generics #where_clause {
            #name_impl
        }
    };
    TokenStream::from(expanded)
}
