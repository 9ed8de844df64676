//! Core types and utilities for stripe-models.
//!
//! This crate provides the building blocks every resource model uses:
//!
//! - **Identifiers**: `def_id!` typed ids, `IdError`
//! - **Enumerations**: `string_enum!` with an `Unknown(String)` fallback
//! - **References**: `Expandable<T>` and the `Object` trait
//! - **Values**: `Currency`, `Decimal`, `Metadata`, `Timestamp`, `Period`, `Address`
//! - **Pagination**: `List<T>`, `SearchResult<T>`
//! - **Requests**: `Params`, `ListParams`, `SearchParams`, `RangeQuery`,
//!   `TimestampOrNow`, `Clearable<T>` and the `to_form` encoder
//! - **Configuration**: `ApiConfig`
//!
//! # Money
//!
//! Amounts are `i64` counts of the currency's minor unit:
//!
//! - `amount: 1000, currency: usd` is $10.00
//! - `amount: 1000, currency: jpy` is ¥1000
//! - sub-minor-unit prices travel as `Decimal` strings (`unit_amount_decimal`)

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod address;
pub mod config;
pub mod currency;
pub mod decimal;
pub mod enums;
pub mod error;
pub mod expandable;
pub mod external;
pub mod form;
pub mod ids;
pub mod list;
pub mod object;
pub mod params;
pub mod time;

pub use address::{Address, AddressParams};
pub use config::{ApiConfig, API_VERSION};
pub use currency::Currency;
pub use decimal::Decimal;
pub use error::{Error, Result};
pub use expandable::Expandable;
pub use external::*;
pub use form::{to_form, to_form_with, FormBody, FormConfig, FormError};
pub use ids::IdError;
pub use list::{List, ListMeta, SearchMeta, SearchResult};
pub use object::{Metadata, Object};
pub use params::{
    Clearable, Extra, Filters, ListParams, ListParamsContainer, Params, ParamsContainer, RangeBounds,
    RangeQuery, RequestOptions, SearchParams, SearchParamsContainer, TimestampOrNow,
};
pub use time::{Period, Timestamp};

/// Decode a JSON response body.
///
/// # Errors
///
/// Returns [`Error::Json`] carrying the unchanged `serde_json` error when the
/// body does not match `T`.
pub fn from_json<T: serde::de::DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

/// Decode a JSON response body from bytes.
///
/// # Errors
///
/// See [`from_json`].
pub fn from_slice<T: serde::de::DeserializeOwned>(body: &[u8]) -> Result<T> {
    Ok(serde_json::from_slice(body)?)
}

#[doc(hidden)]
pub mod __private {
    pub use serde;
    pub use tracing;
}
