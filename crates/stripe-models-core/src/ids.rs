//! Identifier types for Stripe objects.
//!
//! Stripe ids are opaque strings, most of which carry a short prefix naming
//! the object kind (`sub_`, `ic_`, `trxn_`). The `def_id!` macro generates a
//! newtype per object so that a `CustomerId` can never be passed where a
//! `PriceId` is expected.
//!
//! # Parsing vs decoding
//!
//! Decoding from JSON is lenient: whatever string the API returns becomes the
//! id. Parsing with `FromStr` is strict and rejects empty strings and values
//! with the wrong prefix, which is what callers building ids by hand want.

/// Define a string-backed identifier type with standard trait implementations.
///
/// This macro generates a newtype wrapper around `String` with:
/// - `Clone`, `PartialEq`, `Eq`, `PartialOrd`, `Ord`, `Hash`, `Default`
/// - `Serialize`, `Deserialize` (as a bare string)
/// - `FromStr` (validated), `Display`, `Debug`
/// - `From<String>`, `From<&str>`, `Into<String>`, `AsRef<str>`
///
/// # Example
///
/// ```ignore
/// def_id!(CouponId, "A coupon identifier.");
/// def_id!(SubscriptionId, "A subscription identifier.", prefix = "sub_");
/// let id: SubscriptionId = "sub_123".parse().unwrap();
/// ```
#[macro_export]
macro_rules! def_id {
    ($name:ident, $doc:expr) => {
        $crate::def_id!(@inner $name, $doc, ::core::option::Option::None);
    };
    ($name:ident, $doc:expr, prefix = $prefix:literal) => {
        $crate::def_id!(@inner $name, $doc, ::core::option::Option::Some($prefix));
    };
    (@inner $name:ident, $doc:expr, $prefix:expr) => {
        #[doc = $doc]
        #[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(::std::string::String);

        impl $name {
            /// The prefix every well-formed id of this kind starts with, if any.
            pub const PREFIX: ::core::option::Option<&'static str> = $prefix;

            /// Wrap a raw id without validating it.
            #[must_use]
            pub fn new(id: impl Into<::std::string::String>) -> Self {
                Self(id.into())
            }

            /// Return the id as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the id and return the raw string.
            #[must_use]
            pub fn into_inner(self) -> ::std::string::String {
                self.0
            }

            /// Whether the id is the empty string (an unset zero value).
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::ids::validate(stringify!($name), s, Self::PREFIX)?;
                Ok(Self(s.to_owned()))
            }
        }

        impl ::core::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::core::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl ::core::convert::From<$name> for ::std::string::String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl ::core::cmp::PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl ::core::cmp::PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )
                .map(Self)
            }
        }
    };
}

/// Errors that can occur when parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdError {
    /// The input is empty.
    #[error("{kind} must not be empty")]
    Empty {
        /// The identifier type being parsed.
        kind: &'static str,
    },

    /// The input does not start with the prefix this id kind requires.
    #[error("{kind} must start with `{expected}`, got `{value}`")]
    UnexpectedPrefix {
        /// The identifier type being parsed.
        kind: &'static str,
        /// The required prefix.
        expected: &'static str,
        /// The rejected input.
        value: String,
    },
}

#[doc(hidden)]
pub fn validate(kind: &'static str, value: &str, prefix: Option<&'static str>) -> Result<(), IdError> {
    if value.is_empty() {
        return Err(IdError::Empty { kind });
    }
    match prefix {
        Some(expected) if !value.starts_with(expected) => Err(IdError::UnexpectedPrefix {
            kind,
            expected,
            value: value.to_owned(),
        }),
        _ => Ok(()),
    }
}
