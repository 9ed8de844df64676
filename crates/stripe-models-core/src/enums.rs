//! String-backed enumerations.
//!
//! Every enumerated API field (status, type, reason, interval) is a distinct
//! Rust enum generated by [`string_enum!`](crate::string_enum). Each one
//! carries an `Unknown(String)` variant so that decoding a value the API
//! added after these bindings were written succeeds and keeps the raw string.

/// Define a string-backed enum with an `Unknown(String)` fallback.
///
/// Generated items:
/// - one unit variant per listed wire value, plus `Unknown(String)`
/// - `as_str`, `is_unknown` and the `KNOWN` list of wire values
/// - `FromStr` (infallible), `From<&str>`, `Display`, `AsRef<str>`
/// - `Serialize` / `Deserialize` as the bare wire string
///
/// # Example
///
/// ```ignore
/// string_enum! {
///     /// How long a coupon stays applied.
///     pub enum CouponDuration {
///         Forever = "forever",
///         Once = "once",
///         Repeating = "repeating",
///     }
/// }
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[doc = concat!("`", $value, "`")]
                $variant,
            )+
            /// A value not known to these bindings, kept verbatim.
            Unknown(::std::string::String),
        }

        impl $name {
            /// Every wire value this enum names explicitly.
            pub const KNOWN: &'static [&'static str] = &[$($value),+];

            /// Return the wire string for this value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $value,)+
                    Self::Unknown(value) => value,
                }
            }

            /// Whether this value fell outside the known set when decoded.
            #[must_use]
            pub fn is_unknown(&self) -> bool {
                matches!(self, Self::Unknown(_))
            }

            fn from_wire(value: &str) -> Self {
                match value {
                    $($value => Self::$variant,)+
                    other => Self::Unknown(other.to_owned()),
                }
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = ::core::convert::Infallible;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                Ok(Self::from_wire(s))
            }
        }

        impl ::core::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from_wire(value)
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let raw = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                let value = Self::from_wire(&raw);
                if value.is_unknown() {
                    $crate::__private::tracing::debug!(
                        kind = stringify!($name),
                        value = %raw,
                        "unrecognized enum value"
                    );
                }
                Ok(value)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    string_enum! {
        /// Test enum.
        pub enum Flavor {
            Vanilla = "vanilla",
            RockyRoad = "rocky_road",
        }
    }

    #[test]
    fn known_values_decode_to_named_variants() {
        let flavor: Flavor = serde_json::from_str("\"rocky_road\"").unwrap();
        assert_eq!(flavor, Flavor::RockyRoad);
        assert_eq!(flavor.as_str(), "rocky_road");
    }

    #[test]
    fn unknown_values_are_preserved() {
        let flavor: Flavor = serde_json::from_str("\"pistachio\"").unwrap();
        assert_eq!(flavor, Flavor::Unknown("pistachio".to_string()));
        assert!(flavor.is_unknown());
        assert_eq!(serde_json::to_string(&flavor).unwrap(), "\"pistachio\"");
    }

    #[test]
    fn from_str_never_fails() {
        let flavor: Flavor = "".parse().unwrap();
        assert_eq!(flavor, Flavor::Unknown(String::new()));
        assert_eq!(Flavor::KNOWN, &["vanilla", "rocky_road"]);
    }

    #[test]
    fn non_string_tokens_are_errors() {
        assert!(serde_json::from_str::<Flavor>("3").is_err());
    }
}
