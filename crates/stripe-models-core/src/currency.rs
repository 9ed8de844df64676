//! Three-letter ISO currency codes.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

/// A lowercase three-letter ISO 4217 currency code such as `usd`.
///
/// Amounts paired with a currency are always integers in the currency's
/// minor unit (cents for `usd`, whole yen for `jpy`).
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Currency(Cow<'static, str>);

/// Currencies whose minor unit is the whole unit.
const ZERO_DECIMAL: &[&str] = &[
    "bif", "clp", "djf", "gnf", "jpy", "kmf", "krw", "mga", "pyg", "rwf", "ugx", "vnd", "vuv",
    "xaf", "xof", "xpf",
];

impl Currency {
    /// Australian dollar.
    pub const AUD: Self = Self(Cow::Borrowed("aud"));
    /// Canadian dollar.
    pub const CAD: Self = Self(Cow::Borrowed("cad"));
    /// Swiss franc.
    pub const CHF: Self = Self(Cow::Borrowed("chf"));
    /// Euro.
    pub const EUR: Self = Self(Cow::Borrowed("eur"));
    /// Pound sterling.
    pub const GBP: Self = Self(Cow::Borrowed("gbp"));
    /// Japanese yen.
    pub const JPY: Self = Self(Cow::Borrowed("jpy"));
    /// US dollar.
    pub const USD: Self = Self(Cow::Borrowed("usd"));

    /// Return the lowercase code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether amounts in this currency carry no fractional minor unit.
    #[must_use]
    pub fn is_zero_decimal(&self) -> bool {
        ZERO_DECIMAL.contains(&self.as_str())
    }

    fn from_wire(value: &str) -> Self {
        Self(Cow::Owned(value.to_ascii_lowercase()))
    }
}

impl FromStr for Currency {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() == 3 && s.bytes().all(|b| b.is_ascii_alphabetic()) {
            Ok(Self::from_wire(s))
        } else {
            Err(Error::InvalidCurrency {
                value: s.to_owned(),
            })
        }
    }
}

impl fmt::Debug for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Currency({})", self.0)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for Currency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_wire(&raw))
    }
}
