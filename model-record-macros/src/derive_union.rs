//! Implementation of the `#[derive(ModelUnion)]` macro.
//!
//! Each variant wraps exactly one alternative type. Without a discriminator
//! the generated parser tries the alternatives in declaration order; with
//! `#[model(discriminator = "...")]` it dispatches on the tag value instead.

use std::collections::{HashMap, HashSet};

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::{Data, DeriveInput, Error, Fields, Ident, Result, Type, ext::IdentExt, parse2};

use crate::codegen::generate_serde_impls;
use crate::parse::{UnionConfig, VariantConfig};

/// Main implementation for the `#[derive(ModelUnion)]` macro.
pub fn derive_model_union_impl(input: TokenStream) -> TokenStream {
    match derive_model_union_inner(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

struct UnionVariant {
    ident: Ident,
    ty: Type,
    /// Candidate name: the tag when discriminated, else the variant name.
    name: String,
}

fn derive_model_union_inner(input: TokenStream) -> Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let config = UnionConfig::from_attrs(&input.attrs)?;
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "ModelUnion cannot be derived for generic types",
        ));
    }

    let data_enum = match &input.data {
        Data::Enum(data_enum) => data_enum,
        _ => {
            return Err(Error::new_spanned(
                name,
                "ModelUnion can only be derived on enums",
            ));
        }
    };

    if data_enum.variants.is_empty() {
        return Err(Error::new_spanned(
            name,
            "ModelUnion requires at least one variant",
        ));
    }

    let mut variants = Vec::with_capacity(data_enum.variants.len());
    let mut seen_names = HashSet::new();

    for variant in &data_enum.variants {
        let ty = match &variant.fields {
            Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => unnamed.unnamed[0].ty.clone(),
            _ => {
                return Err(Error::new_spanned(
                    variant,
                    "ModelUnion variants must wrap exactly one type, e.g. `User(UserMessage)`",
                ));
            }
        };

        let variant_config = VariantConfig::from_attrs(&variant.attrs)?;
        let candidate_name = match (&config.discriminator, variant_config.tag) {
            (Some(_), Some(tag)) => tag,
            (Some(key), None) => {
                return Err(Error::new_spanned(
                    variant,
                    format!("variant needs `#[model(tag = \"...\")]` for discriminator `{key}`"),
                ));
            }
            (None, Some(_)) => {
                return Err(Error::new(
                    variant_config.span.unwrap_or_else(|| variant.ident.span()),
                    "`tag` requires `#[model(discriminator = \"...\")]` on the enum",
                ));
            }
            (None, None) => variant.ident.unraw().to_string(),
        };

        if !seen_names.insert(candidate_name.clone()) {
            return Err(Error::new_spanned(
                variant,
                format!("duplicate variant tag `{candidate_name}`"),
            ));
        }

        variants.push(UnionVariant {
            ident: variant.ident.clone(),
            ty,
            name: candidate_name,
        });
    }

    let union_name = config.name.unwrap_or_else(|| name.unraw().to_string());

    let wire_impl = generate_wire_impl(name, &union_name, config.discriminator.as_deref(), &variants);
    let inherent_impl = generate_inherent_impl(name, &variants);
    let from_impls = generate_from_impls(name, &variants);
    let serde_impls = generate_serde_impls(name);

    Ok(quote! {
        #wire_impl
        #inherent_impl
        #from_impls
        #serde_impls
    })
}

fn generate_wire_impl(
    name: &Ident,
    union_name: &str,
    discriminator: Option<&str>,
    variants: &[UnionVariant],
) -> TokenStream {
    let count = variants.len();
    let idents: Vec<_> = variants.iter().map(|v| &v.ident).collect();
    let tys: Vec<_> = variants.iter().map(|v| &v.ty).collect();
    let names: Vec<_> = variants.iter().map(|v| &v.name).collect();

    let resolve = match discriminator {
        Some(key) => quote! {
            ::model_record::Discriminator::new(#union_name, #key, &__candidates).resolve(value)
        },
        None => quote! {
            ::model_record::Variants::new(#union_name, &__candidates).resolve(value)
        },
    };

    quote! {
        impl ::model_record::WireValue for #name {
            fn to_wire(&self) -> ::model_record::__private::Value {
                match self {
                    #( Self::#idents(inner) => ::model_record::WireValue::to_wire(inner), )*
                }
            }

            fn from_wire(
                value: ::model_record::__private::Value,
            ) -> ::core::result::Result<Self, ::model_record::ModelError> {
                let __candidates: [::model_record::Candidate<Self>; #count] = [
                    #(
                        ::model_record::Candidate::new(#names, |value| {
                            <#tys as ::model_record::WireValue>::from_wire(value).map(Self::#idents)
                        }),
                    )*
                ];
                #resolve
            }
        }
    }
}

fn generate_inherent_impl(name: &Ident, variants: &[UnionVariant]) -> TokenStream {
    let idents: Vec<_> = variants.iter().map(|v| &v.ident).collect();
    let names: Vec<_> = variants.iter().map(|v| &v.name).collect();

    quote! {
        impl #name {
            /// Name of the held alternative (its tag, for discriminated unions).
            pub fn variant_name(&self) -> &'static str {
                match self {
                    #( Self::#idents(_) => #names, )*
                }
            }
        }
    }
}

/// `From<Alternative>` for each alternative type that appears only once.
fn generate_from_impls(name: &Ident, variants: &[UnionVariant]) -> TokenStream {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for variant in variants {
        *counts.entry(variant.ty.to_token_stream().to_string()).or_default() += 1;
    }

    let impls = variants
        .iter()
        .filter(|v| counts[&v.ty.to_token_stream().to_string()] == 1)
        .map(|v| {
            let ident = &v.ident;
            let ty = &v.ty;
            quote! {
                impl ::core::convert::From<#ty> for #name {
                    fn from(value: #ty) -> Self {
                        Self::#ident(value)
                    }
                }
            }
        });

    quote! { #( #impls )* }
}
