//! Conversion between typed field values and their document form.

use std::collections::BTreeMap;

use serde_json::{Number, Value};

use crate::document::Document;
use crate::error::{ModelError, PathSegment};

/// A type that can be stored in a document field.
///
/// Implemented for JSON primitives, `Vec<T>`, `Option<T>` (as nullable),
/// string-keyed maps, raw [`Value`]s, and every type deriving
/// [`ModelRecord`](crate::ModelRecord) or [`ModelUnion`](crate::ModelUnion).
/// String enums and string literals get implementations through
/// [`wire_str_enum!`](crate::wire_str_enum) and
/// [`wire_literal!`](crate::wire_literal).
///
/// `from_wire` returns errors rooted at the value itself; callers that walk
/// into a key or index re-root them with [`ModelError::within`].
pub trait WireValue: Sized {
    /// Converts to the document form. Never fails.
    fn to_wire(&self) -> Value;

    /// Reads a value of this type from its document form.
    fn from_wire(value: Value) -> Result<Self, ModelError>;
}

impl WireValue for Value {
    fn to_wire(&self) -> Value {
        self.clone()
    }

    fn from_wire(value: Value) -> Result<Self, ModelError> {
        Ok(value)
    }
}

impl WireValue for String {
    fn to_wire(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_wire(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::String(s) => Ok(s),
            other => Err(ModelError::type_mismatch("string", &other)),
        }
    }
}

impl WireValue for bool {
    fn to_wire(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_wire(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Bool(b) => Ok(b),
            other => Err(ModelError::type_mismatch("boolean", &other)),
        }
    }
}

/// Largest magnitude at which every integer is exactly representable as `f64`.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

impl WireValue for f64 {
    /// Integral values are written as JSON integers, the way JavaScript
    /// producers emit them, so `1` survives a round trip as `1`.
    /// Non-finite values have no JSON form and are written as `null`.
    fn to_wire(&self) -> Value {
        if self.fract() == 0.0 && self.abs() <= MAX_SAFE_INTEGER {
            return Value::Number(Number::from(*self as i64));
        }
        Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }

    fn from_wire(value: Value) -> Result<Self, ModelError> {
        match &value {
            Value::Number(n) => n
                .as_f64()
                .ok_or_else(|| ModelError::type_mismatch("number", &value)),
            _ => Err(ModelError::type_mismatch("number", &value)),
        }
    }
}

macro_rules! wire_integer {
    ($($ty:ty => $as:ident),+ $(,)?) => {
        $(
            impl WireValue for $ty {
                fn to_wire(&self) -> Value {
                    Value::Number(Number::from(*self))
                }

                fn from_wire(value: Value) -> Result<Self, ModelError> {
                    value
                        .$as()
                        .and_then(|n| <$ty>::try_from(n).ok())
                        .ok_or_else(|| ModelError::type_mismatch(stringify!($ty), &value))
                }
            }
        )+
    };
}

wire_integer!(i64 => as_i64, i32 => as_i64, u64 => as_u64, u32 => as_u64);

impl<T: WireValue> WireValue for Vec<T> {
    fn to_wire(&self) -> Value {
        Value::Array(self.iter().map(WireValue::to_wire).collect())
    }

    fn from_wire(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    T::from_wire(item).map_err(|err| err.within(PathSegment::Index(index)))
                })
                .collect(),
            other => Err(ModelError::type_mismatch("array", &other)),
        }
    }
}

/// `None` is the document's `null`.
impl<T: WireValue> WireValue for Option<T> {
    fn to_wire(&self) -> Value {
        match self {
            Some(value) => value.to_wire(),
            None => Value::Null,
        }
    }

    fn from_wire(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_wire(other).map(Some),
        }
    }
}

impl<T: WireValue> WireValue for Box<T> {
    fn to_wire(&self) -> Value {
        (**self).to_wire()
    }

    fn from_wire(value: Value) -> Result<Self, ModelError> {
        T::from_wire(value).map(Box::new)
    }
}

impl WireValue for Document {
    fn to_wire(&self) -> Value {
        Value::Object(self.clone())
    }

    fn from_wire(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => Ok(map),
            other => Err(ModelError::type_mismatch("object", &other)),
        }
    }
}

impl<T: WireValue> WireValue for BTreeMap<String, T> {
    fn to_wire(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_wire()))
                .collect(),
        )
    }

    fn from_wire(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => map
                .into_iter()
                .map(|(key, value)| match T::from_wire(value) {
                    Ok(value) => Ok((key, value)),
                    Err(err) => Err(err.within(PathSegment::Key(key))),
                })
                .collect(),
            other => Err(ModelError::type_mismatch("object", &other)),
        }
    }
}

/// Implements [`WireValue`] for enums that convert to and from strings.
///
/// The enum must implement `AsRef<str>` and `FromStr`, which `strum`'s
/// `AsRefStr` and `EnumString` derives provide.
///
/// ```
/// use model_record::{wire_str_enum, WireValue};
/// use serde_json::json;
///
/// #[derive(Debug, PartialEq, strum::AsRefStr, strum::EnumString)]
/// #[strum(serialize_all = "snake_case")]
/// enum Verdict {
///     Success,
///     Failure,
/// }
///
/// wire_str_enum!(Verdict);
///
/// assert_eq!(Verdict::Success.to_wire(), json!("success"));
/// assert!(Verdict::from_wire(json!("maybe")).is_err());
/// ```
#[macro_export]
macro_rules! wire_str_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::WireValue for $ty {
                fn to_wire(&self) -> $crate::__private::Value {
                    $crate::__private::Value::String(
                        ::core::convert::AsRef::<str>::as_ref(self).to_owned(),
                    )
                }

                fn from_wire(
                    value: $crate::__private::Value,
                ) -> ::core::result::Result<Self, $crate::ModelError> {
                    let parsed = match &value {
                        $crate::__private::Value::String(s) => s.parse::<$ty>().ok(),
                        _ => None,
                    };
                    parsed.ok_or_else(|| $crate::ModelError::type_mismatch(stringify!($ty), &value))
                }
            }
        )+
    };
}

/// Declares a unit type that stands for exactly one string value.
///
/// Union alternatives pin discriminating fields (such as a message `role`)
/// with a literal so that trial parsing rejects the wrong shapes.
///
/// ```
/// use model_record::{wire_literal, WireValue};
/// use serde_json::json;
///
/// wire_literal! {
///     /// The `"tool"` role.
///     pub struct ToolRole = "tool";
/// }
///
/// assert_eq!(ToolRole.to_wire(), json!("tool"));
/// assert!(ToolRole::from_wire(json!("tool")).is_ok());
/// assert!(ToolRole::from_wire(json!("user")).is_err());
/// ```
#[macro_export]
macro_rules! wire_literal {
    ($(#[$meta:meta])* $vis:vis struct $name:ident = $value:literal;) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $name {
            /// The only accepted value.
            pub const VALUE: &'static str = $value;
        }

        impl $crate::WireValue for $name {
            fn to_wire(&self) -> $crate::__private::Value {
                $crate::__private::Value::String(::std::string::String::from($value))
            }

            fn from_wire(
                value: $crate::__private::Value,
            ) -> ::core::result::Result<Self, $crate::ModelError> {
                match &value {
                    $crate::__private::Value::String(s) if s == $value => Ok($name),
                    _ => Err($crate::ModelError::type_mismatch(
                        concat!("\"", $value, "\""),
                        &value,
                    )),
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str($value)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn strings_reject_other_kinds() {
        assert_eq!(String::from_wire(json!("x")).unwrap(), "x");
        let err = String::from_wire(json!(1)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch at `$`: expected string, found number"
        );
    }

    #[test]
    fn integral_floats_are_written_as_integers() {
        assert_eq!(1.0f64.to_wire(), json!(1));
        assert_eq!((-3.0f64).to_wire(), json!(-3));
        assert_eq!(0.7f64.to_wire(), json!(0.7));
        assert_eq!(f64::NAN.to_wire(), Value::Null);
    }

    #[test]
    fn floats_accept_any_json_number() {
        assert_eq!(f64::from_wire(json!(2)).unwrap(), 2.0);
        assert_eq!(f64::from_wire(json!(0.25)).unwrap(), 0.25);
        assert!(f64::from_wire(json!("2")).is_err());
    }

    #[test]
    fn integers_reject_fractions_and_overflow() {
        assert_eq!(u32::from_wire(json!(7)).unwrap(), 7);
        assert!(u32::from_wire(json!(1.5)).is_err());
        assert!(u32::from_wire(json!(-1)).is_err());
        assert!(i32::from_wire(json!(i64::MAX)).is_err());
    }

    #[test]
    fn vec_errors_carry_the_index() {
        let err = Vec::<String>::from_wire(json!(["a", "b", 3])).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "$[2]");
    }

    #[test]
    fn option_maps_null_to_none() {
        assert_eq!(Option::<bool>::from_wire(Value::Null).unwrap(), None);
        assert_eq!(Option::<bool>::from_wire(json!(true)).unwrap(), Some(true));
        assert_eq!(Option::<bool>::None.to_wire(), Value::Null);
    }

    #[test]
    fn btree_map_errors_carry_the_key() {
        let err = BTreeMap::<String, u64>::from_wire(json!({"a": 1, "b": "x"})).unwrap_err();
        assert_eq!(err.path().unwrap().to_string(), "$.b");
    }

    #[test]
    fn document_requires_an_object() {
        assert!(Document::from_wire(json!({})).is_ok());
        assert!(Document::from_wire(json!([])).unwrap_err().is_type_mismatch());
    }

    crate::wire_literal! {
        struct FunctionType = "function";
    }

    #[test]
    fn literal_mismatch_names_the_expected_value() {
        let err = FunctionType::from_wire(json!("method")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type mismatch at `$`: expected \"function\", found string"
        );
        assert_eq!(FunctionType.to_string(), "function");
        assert_eq!(FunctionType::VALUE, "function");
    }
}
