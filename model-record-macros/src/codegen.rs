//! Code generation shared by the record and union derives.

use proc_macro2::{Ident, TokenStream};
use quote::quote;
use syn::{GenericArgument, PathArguments, Type};

/// Returns true when `ty` is spelled `Field<T>` (with any path prefix).
pub fn is_field_wrapper(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };
    if type_path.qself.is_some() {
        return false;
    }
    let Some(last) = type_path.path.segments.last() else {
        return false;
    };
    if last.ident != "Field" {
        return false;
    }
    match &last.arguments {
        PathArguments::AngleBracketed(args) => {
            args.args.len() == 1 && matches!(args.args[0], GenericArgument::Type(_))
        }
        _ => false,
    }
}

/// `Serialize` and `Deserialize` impls that go through `model_record::WireValue`.
///
/// Lets records and unions sit inside ordinary serde types.
pub fn generate_serde_impls(name: &Ident) -> TokenStream {
    quote! {
        impl ::model_record::__private::serde::Serialize for #name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: ::model_record::__private::serde::Serializer,
            {
                ::model_record::__private::serde::Serialize::serialize(
                    &::model_record::WireValue::to_wire(self),
                    serializer,
                )
            }
        }

        impl<'de> ::model_record::__private::serde::Deserialize<'de> for #name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: ::model_record::__private::serde::Deserializer<'de>,
            {
                let value = <::model_record::__private::Value as ::model_record::__private::serde::Deserialize>::deserialize(deserializer)?;
                <Self as ::model_record::WireValue>::from_wire(value)
                    .map_err(<D::Error as ::model_record::__private::serde::de::Error>::custom)
            }
        }
    }
}
