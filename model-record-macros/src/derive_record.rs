//! Implementation of the `#[derive(ModelRecord)]` macro.
//!
//! Reads the struct's fields and their `#[model(...)]` attributes, then emits
//! the record contract as a flat sequence of reader/writer calls: required
//! fields first, optional fields second, both in declaration order.

use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Error, Fields, Ident, Result, Type, ext::IdentExt, parse2};

use crate::codegen::{generate_serde_impls, is_field_wrapper};
use crate::parse::{FieldConfig, Presence, RecordConfig};

/// Main implementation for the `#[derive(ModelRecord)]` macro.
pub fn derive_model_record_impl(input: TokenStream) -> TokenStream {
    match derive_model_record_inner(input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

/// One declared (non-extra) field.
struct RecordField {
    ident: Ident,
    ty: Type,
    key: String,
}

fn derive_model_record_inner(input: TokenStream) -> Result<TokenStream> {
    let input: DeriveInput = parse2(input)?;
    let config = RecordConfig::from_attrs(&input.attrs)?;
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(
            &input.generics,
            "ModelRecord cannot be derived for generic types",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named) => &named.named,
            other => {
                return Err(Error::new_spanned(
                    other,
                    "ModelRecord can only be derived on structs with named fields",
                ));
            }
        },
        Data::Enum(_) => {
            return Err(Error::new_spanned(
                name,
                "ModelRecord cannot be derived on enums; use ModelUnion for tagged unions",
            ));
        }
        Data::Union(_) => {
            return Err(Error::new_spanned(
                name,
                "ModelRecord cannot be derived on unions",
            ));
        }
    };

    let mut required = Vec::new();
    let mut optional = Vec::new();
    let mut extra: Option<Ident> = None;
    let mut seen_keys = HashSet::new();

    for field in fields {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let field_config = FieldConfig::from_attrs(&field.attrs, ident.span())?;

        if field_config.extra {
            if extra.is_some() {
                return Err(Error::new_spanned(
                    &ident,
                    "only one field may be marked `#[model(extra)]`",
                ));
            }
            extra = Some(ident);
            continue;
        }

        let key = field_config
            .rename
            .clone()
            .unwrap_or_else(|| ident.unraw().to_string());
        if !seen_keys.insert(key.clone()) {
            return Err(Error::new_spanned(
                &ident,
                format!("duplicate document key `{key}`"),
            ));
        }

        let is_optional = match field_config.presence {
            Some(Presence::Optional) => true,
            Some(Presence::Required) => false,
            None => is_field_wrapper(&field.ty),
        };

        let record_field = RecordField {
            ident,
            ty: field.ty.clone(),
            key,
        };
        if is_optional {
            optional.push(record_field);
        } else {
            required.push(record_field);
        }
    }

    let extra = extra.ok_or_else(|| {
        Error::new_spanned(
            name,
            "ModelRecord requires one `#[model(extra)]` field of type `AdditionalProperties`",
        )
    })?;

    let record_name = config.name.unwrap_or_else(|| name.unraw().to_string());

    let record_impl = generate_record_impl(name, &record_name, &required, &optional, &extra);
    let wire_impl = generate_wire_impl(name);
    let index_impl = generate_index_impl(name, &extra);
    let serde_impls = generate_serde_impls(name);

    Ok(quote! {
        #record_impl
        #wire_impl
        #index_impl
        #serde_impls
    })
}

fn generate_record_impl(
    name: &Ident,
    record_name: &str,
    required: &[RecordField],
    optional: &[RecordField],
    extra: &Ident,
) -> TokenStream {
    let req_idents: Vec<_> = required.iter().map(|f| &f.ident).collect();
    let req_keys: Vec<_> = required.iter().map(|f| &f.key).collect();
    let req_tys: Vec<_> = required.iter().map(|f| &f.ty).collect();
    let req_locals: Vec<_> = (0..required.len())
        .map(|i| format_ident!("__required_{}", i))
        .collect();

    let opt_idents: Vec<_> = optional.iter().map(|f| &f.ident).collect();
    let opt_keys: Vec<_> = optional.iter().map(|f| &f.key).collect();
    let opt_tys: Vec<_> = optional.iter().map(|f| &f.ty).collect();
    let opt_locals: Vec<_> = (0..optional.len())
        .map(|i| format_ident!("__optional_{}", i))
        .collect();

    quote! {
        impl ::model_record::ModelRecord for #name {
            const NAME: &'static str = #record_name;

            fn to_document(&self) -> ::model_record::Document {
                let mut __writer = ::model_record::DocumentWriter::new(&self.#extra);
                #( __writer.required(#req_keys, &self.#req_idents); )*
                #( __writer.optional(#opt_keys, &self.#opt_idents); )*
                __writer.finish()
            }

            fn from_document(
                document: ::model_record::Document,
            ) -> ::core::result::Result<Self, ::model_record::ModelError> {
                let mut __reader = ::model_record::DocumentReader::new(#record_name, document);
                #( let #req_locals: #req_tys = __reader.required(#req_keys)?; )*
                #( let #opt_locals: #opt_tys = __reader.optional(#opt_keys)?; )*
                ::core::result::Result::Ok(Self {
                    #( #req_idents: #req_locals, )*
                    #( #opt_idents: #opt_locals, )*
                    #extra: __reader.finish(),
                })
            }

            fn additional_properties(&self) -> &::model_record::AdditionalProperties {
                &self.#extra
            }

            fn additional_properties_mut(&mut self) -> &mut ::model_record::AdditionalProperties {
                &mut self.#extra
            }
        }
    }
}

fn generate_wire_impl(name: &Ident) -> TokenStream {
    quote! {
        impl ::model_record::WireValue for #name {
            fn to_wire(&self) -> ::model_record::__private::Value {
                ::model_record::__private::Value::Object(
                    <Self as ::model_record::ModelRecord>::to_document(self),
                )
            }

            fn from_wire(
                value: ::model_record::__private::Value,
            ) -> ::core::result::Result<Self, ::model_record::ModelError> {
                <Self as ::model_record::ModelRecord>::from_value(value)
            }
        }
    }
}

/// Item-style read access to the extras, e.g. `record["extra_flag"]`.
fn generate_index_impl(name: &Ident, extra: &Ident) -> TokenStream {
    quote! {
        impl ::core::ops::Index<&str> for #name {
            type Output = ::model_record::__private::Value;

            fn index(&self, key: &str) -> &Self::Output {
                &self.#extra[key]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn test_derive_basic_record() {
        let input = quote! {
            pub struct FunctionCall {
                pub name: String,
                pub arguments: String,
                #[model(extra)]
                pub additional_properties: AdditionalProperties,
            }
        };

        let result = derive_model_record_impl(input).to_string();
        assert!(!result.contains("compile_error"));
        assert!(result.contains("\"FunctionCall\""));
    }

    #[test]
    fn test_optional_fields_come_after_required() {
        let input = quote! {
            pub struct Config {
                pub temperature: Field<f64>,
                pub model: String,
                #[model(extra)]
                pub extra: AdditionalProperties,
            }
        };

        let result = derive_model_record_impl(input).to_string();
        let model_at = result.find("required (\"model\"").unwrap();
        let temperature_at = result.find("optional (\"temperature\"").unwrap();
        assert!(model_at < temperature_at);
    }

    #[test]
    fn test_raw_identifiers_use_unraw_key() {
        let input = quote! {
            pub struct Column {
                pub r#type: String,
                #[model(extra)]
                pub extra: AdditionalProperties,
            }
        };

        let result = derive_model_record_impl(input).to_string();
        assert!(result.contains("required (\"type\""));
    }

    #[test]
    fn test_requires_extra_field() {
        let input = quote! {
            pub struct NoExtras {
                pub name: String,
            }
        };

        let result = derive_model_record_impl(input).to_string();
        assert!(result.contains("compile_error"));
        assert!(result.contains("model(extra)"));
    }

    #[test]
    fn test_rejects_duplicate_keys() {
        let input = quote! {
            pub struct Clash {
                pub kind: String,
                #[model(rename = "kind")]
                pub other: String,
                #[model(extra)]
                pub extra: AdditionalProperties,
            }
        };

        let result = derive_model_record_impl(input).to_string();
        assert!(result.contains("duplicate document key"));
    }

    #[test]
    fn test_rejects_tuple_structs() {
        let input = quote! {
            pub struct Pair(String, String);
        };

        let result = derive_model_record_impl(input).to_string();
        assert!(result.contains("compile_error"));
    }

    #[test]
    fn test_rejects_enums() {
        let input = quote! {
            pub enum Message { A(String) }
        };

        let result = derive_model_record_impl(input).to_string();
        assert!(result.contains("use ModelUnion"));
    }
}
