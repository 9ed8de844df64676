//! Decimal values carried as strings on the wire.
//!
//! Fields like `unit_amount_decimal` allow up to twelve decimal places. They
//! travel as JSON strings and are held as `BigDecimal` so that no binary
//! floating point rounding creeps in between decode and re-encode.

use std::fmt;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::Error;

/// An arbitrary-precision decimal encoded as a string.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(BigDecimal);

impl Decimal {
    /// Wrap an existing `BigDecimal`.
    #[must_use]
    pub const fn new(value: BigDecimal) -> Self {
        Self(value)
    }

    /// Return the underlying value.
    #[must_use]
    pub const fn as_big_decimal(&self) -> &BigDecimal {
        &self.0
    }

    /// Consume and return the underlying value.
    #[must_use]
    pub fn into_inner(self) -> BigDecimal {
        self.0
    }

    /// Render without exponent notation, the form the API accepts.
    #[must_use]
    pub fn to_plain_string(&self) -> String {
        self.0.to_plain_string()
    }
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s.trim())
            .map(Self)
            .map_err(|_| Error::InvalidDecimal { value: s.to_owned() })
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self(BigDecimal::from(value))
    }
}

impl From<BigDecimal> for Decimal {
    fn from(value: BigDecimal) -> Self {
        Self(value)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({})", self.to_plain_string())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_plain_string())
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_plain_string())
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DecimalVisitor)
    }
}

struct DecimalVisitor;

impl Visitor<'_> for DecimalVisitor {
    type Value = Decimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or number")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(E::custom)
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Decimal::from(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Decimal(BigDecimal::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        // Shortest round-trip text keeps 0.1 as 0.1 rather than its binary expansion.
        value.to_string().parse().map_err(E::custom)
    }
}
