//! Option Values
//!
//! Enum-like component parameters restricted to a fixed set of string values.

use crate::error::{Error, Result};

/// A parameter value drawn from a fixed, finite set
pub trait OptionValue: Sized + Copy + 'static {
    /// Every allowed value, in declaration order
    const ALL: &'static [Self];

    /// The wire name of this value
    fn as_str(&self) -> &'static str;

    /// Every allowed wire name, in declaration order
    fn allowed() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::as_str).collect()
    }
}

/// Parse `value` into `T`, naming `component` and `field` in the error
pub fn parse_option<T: OptionValue>(
    component: &'static str,
    field: &'static str,
    value: &str,
) -> Result<T> {
    let wanted = value.trim();
    T::ALL
        .iter()
        .copied()
        .find(|candidate| candidate.as_str().eq_ignore_ascii_case(wanted))
        .ok_or_else(|| Error::InvalidOption {
            component,
            field,
            value: value.to_string(),
            allowed: T::allowed(),
        })
}

/// Parse an optional string parameter, falling back to the type's default
pub fn parse_option_or_default<T: OptionValue + Default>(
    component: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> Result<T> {
    value.map_or_else(|| Ok(T::default()), |v| parse_option(component, field, v))
}

/// Declare an [`OptionValue`] enum with its wire names.
///
/// Generates `Display`, `FromStr`, string serde impls and a string-enum
/// `JsonSchema`.
macro_rules! option_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $crate::option::OptionValue for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::option::OptionValue::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                $crate::option::parse_option(stringify!($name), "value", s)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(
                &self,
                serializer: S,
            ) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::option::OptionValue::as_str(self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(
                deserializer: D,
            ) -> ::std::result::Result<Self, D::Error> {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                value.parse().map_err(::serde::de::Error::custom)
            }
        }

        impl ::schemars::JsonSchema for $name {
            fn schema_name() -> ::std::borrow::Cow<'static, str> {
                stringify!($name).into()
            }

            fn json_schema(_generator: &mut ::schemars::SchemaGenerator) -> ::schemars::Schema {
                ::schemars::json_schema!({
                    "type": "string",
                    "enum": [$($value),+]
                })
            }
        }
    };
}
