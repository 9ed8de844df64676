//! Request parameter building blocks.
//!
//! Every create, update, list and search call takes a `...Params` struct whose
//! optional fields are only encoded when set. The base structs here carry
//! what all of them share:
//!
//! - [`Params`]: `expand`, `metadata`, free-form `extra` values and
//!   transport-only [`RequestOptions`]
//! - [`ListParams`]: cursors, `limit` and free-form filters
//! - [`SearchParams`]: `query`, `limit` and `page`
//!
//! Resource params embed one of them with `#[serde(flatten)]` and gain the
//! `add_expand` / `add_metadata` mutators from the container traits.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_with::skip_serializing_none;

use crate::{Metadata, Timestamp};

/// Options that travel as HTTP headers rather than in the request body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Key that makes a retried mutation safe to replay.
    pub idempotency_key: Option<String>,
    /// Connected account to act on behalf of.
    pub stripe_account: Option<String>,
    /// Additional headers, sent verbatim.
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    /// Return the idempotency key, generating one from a v4 UUID if unset.
    pub fn idempotency_key_or_new(&mut self, prefix: Option<&str>) -> &str {
        self.idempotency_key.get_or_insert_with(|| {
            let key = uuid::Uuid::new_v4().to_string();
            match prefix {
                Some(prefix) => format!("{prefix}{key}"),
                None => key,
            }
        })
    }
}

/// Free-form key/value pairs appended to a request body.
///
/// Keys are used as-is, so nested values are written `parent[child]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extra(Vec<(String, String)>);

impl Extra {
    /// Append a pair. Repeated keys are all sent.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.push((key.into(), value.into()));
    }

    /// Whether no pairs have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Extra {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A single list filter, encoded as `key[op]=value` or `key=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Filter {
    key: String,
    op: Option<String>,
    value: String,
}

/// Filters added to a list request by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters(Vec<Filter>);

impl Filters {
    /// Add a filter. An empty `op` encodes as a plain `key=value`.
    pub fn add(&mut self, key: impl Into<String>, op: impl Into<String>, value: impl Into<String>) {
        let op = op.into();
        self.0.push(Filter {
            key: key.into(),
            op: (!op.is_empty()).then_some(op),
            value: value.into(),
        });
    }

    /// Whether no filters have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Filters {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for filter in &self.0 {
            match &filter.op {
                Some(op) => map.serialize_entry(&format!("{}[{op}]", filter.key), &filter.value)?,
                None => map.serialize_entry(&filter.key, &filter.value)?,
            }
        }
        map.end()
    }
}

/// Fields common to create, update, retrieve and action requests.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Params {
    /// Response fields to expand.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// Key/value pairs to attach. `Some` of an empty map clears all keys.
    pub metadata: Option<Metadata>,
    /// Parameters these bindings do not model yet.
    #[serde(flatten)]
    pub extra: Extra,
    /// Header-level options.
    #[serde(skip)]
    pub options: RequestOptions,
}

/// Fields common to list requests.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    /// Cursor for the previous page: an object id.
    pub ending_before: Option<String>,
    /// Response fields to expand, written as `data.field`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// Free-form filters.
    #[serde(flatten)]
    pub filters: Filters,
    /// Page size, between 1 and 100.
    pub limit: Option<i64>,
    /// Cursor for the next page: an object id.
    pub starting_after: Option<String>,
    /// Header-level options.
    #[serde(skip)]
    pub options: RequestOptions,
}

/// Fields common to search requests.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchParams {
    /// The search query, in Stripe's search query language.
    pub query: String,
    /// Response fields to expand, written as `data.field`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub expand: Vec<String>,
    /// Page size, between 1 and 100.
    pub limit: Option<i64>,
    /// The `next_page` token of a previous result.
    pub page: Option<String>,
    /// Header-level options.
    #[serde(skip)]
    pub options: RequestOptions,
}

impl SearchParams {
    /// Create search params for `query`.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }
}

/// Access to the embedded [`Params`] of a request struct.
pub trait ParamsContainer {
    /// The shared params.
    fn params(&self) -> &Params;

    /// The shared params, mutably.
    fn params_mut(&mut self) -> &mut Params;

    /// Append a field to expand.
    fn add_expand(&mut self, field: impl Into<String>) {
        self.params_mut().expand.push(field.into());
    }

    /// Set a metadata key, creating the map on first use.
    fn add_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params_mut()
            .metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
    }

    /// Append a parameter these bindings do not model.
    fn add_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params_mut().extra.add(key, value);
    }

    /// Set the idempotency key header.
    fn set_idempotency_key(&mut self, key: impl Into<String>) {
        self.params_mut().options.idempotency_key = Some(key.into());
    }

    /// Act on behalf of a connected account.
    fn set_stripe_account(&mut self, account: impl Into<String>) {
        self.params_mut().options.stripe_account = Some(account.into());
    }
}

impl ParamsContainer for Params {
    fn params(&self) -> &Params {
        self
    }

    fn params_mut(&mut self) -> &mut Params {
        self
    }
}

/// Access to the embedded [`ListParams`] of a list request struct.
pub trait ListParamsContainer {
    /// The shared list params.
    fn list_params(&self) -> &ListParams;

    /// The shared list params, mutably.
    fn list_params_mut(&mut self) -> &mut ListParams;

    /// Append a field to expand.
    fn add_expand(&mut self, field: impl Into<String>) {
        self.list_params_mut().expand.push(field.into());
    }

    /// Add a free-form filter.
    fn add_filter(&mut self, key: impl Into<String>, op: impl Into<String>, value: impl Into<String>) {
        self.list_params_mut().filters.add(key, op, value);
    }

    /// Set the page size.
    fn set_limit(&mut self, limit: i64) {
        self.list_params_mut().limit = Some(limit);
    }

    /// Continue after the object with this id.
    fn set_starting_after(&mut self, id: impl Into<String>) {
        self.list_params_mut().starting_after = Some(id.into());
    }

    /// Act on behalf of a connected account.
    fn set_stripe_account(&mut self, account: impl Into<String>) {
        self.list_params_mut().options.stripe_account = Some(account.into());
    }
}

impl ListParamsContainer for ListParams {
    fn list_params(&self) -> &ListParams {
        self
    }

    fn list_params_mut(&mut self) -> &mut ListParams {
        self
    }
}

/// Access to the embedded [`SearchParams`] of a search request struct.
pub trait SearchParamsContainer {
    /// The shared search params.
    fn search_params(&self) -> &SearchParams;

    /// The shared search params, mutably.
    fn search_params_mut(&mut self) -> &mut SearchParams;

    /// Append a field to expand.
    fn add_expand(&mut self, field: impl Into<String>) {
        self.search_params_mut().expand.push(field.into());
    }

    /// Continue from a previous result's `next_page` token.
    fn set_page(&mut self, page: impl Into<String>) {
        self.search_params_mut().page = Some(page.into());
    }
}

impl SearchParamsContainer for SearchParams {
    fn search_params(&self) -> &SearchParams {
        self
    }

    fn search_params_mut(&mut self) -> &mut SearchParams {
        self
    }
}

/// Implement [`ParamsContainer`] for structs with a flattened `params` field.
#[macro_export]
macro_rules! impl_params {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ParamsContainer for $ty {
                fn params(&self) -> &$crate::Params {
                    &self.params
                }

                fn params_mut(&mut self) -> &mut $crate::Params {
                    &mut self.params
                }
            }
        )+
    };
}

/// Implement [`ListParamsContainer`] for structs with a flattened `list` field.
#[macro_export]
macro_rules! impl_list_params {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::ListParamsContainer for $ty {
                fn list_params(&self) -> &$crate::ListParams {
                    &self.list
                }

                fn list_params_mut(&mut self) -> &mut $crate::ListParams {
                    &mut self.list
                }
            }
        )+
    };
}

/// Implement [`SearchParamsContainer`] for structs with a flattened `search` field.
#[macro_export]
macro_rules! impl_search_params {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::SearchParamsContainer for $ty {
                fn search_params(&self) -> &$crate::SearchParams {
                    &self.search
                }

                fn search_params_mut(&mut self) -> &mut $crate::SearchParams {
                    &mut self.search
                }
            }
        )+
    };
}

/// Bounds for filtering a timestamp field.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RangeBounds {
    /// Strictly greater than.
    pub gt: Option<Timestamp>,
    /// Greater than or equal to.
    pub gte: Option<Timestamp>,
    /// Strictly less than.
    pub lt: Option<Timestamp>,
    /// Less than or equal to.
    pub lte: Option<Timestamp>,
}

impl RangeBounds {
    /// Set the exclusive lower bound.
    #[must_use]
    pub const fn with_gt(mut self, value: Timestamp) -> Self {
        self.gt = Some(value);
        self
    }

    /// Set the inclusive lower bound.
    #[must_use]
    pub const fn with_gte(mut self, value: Timestamp) -> Self {
        self.gte = Some(value);
        self
    }

    /// Set the exclusive upper bound.
    #[must_use]
    pub const fn with_lt(mut self, value: Timestamp) -> Self {
        self.lt = Some(value);
        self
    }

    /// Set the inclusive upper bound.
    #[must_use]
    pub const fn with_lte(mut self, value: Timestamp) -> Self {
        self.lte = Some(value);
        self
    }
}

/// A timestamp filter on a list request: one exact value or a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RangeQuery {
    /// Match exactly this timestamp (`created=...`).
    Exact(Timestamp),
    /// Match within bounds (`created[gte]=...`).
    Range(RangeBounds),
}

impl RangeQuery {
    /// Match timestamps between `start` (inclusive) and `end` (exclusive).
    #[must_use]
    pub const fn between(start: Timestamp, end: Timestamp) -> Self {
        Self::Range(RangeBounds {
            gt: None,
            gte: Some(start),
            lt: Some(end),
            lte: None,
        })
    }
}

impl From<Timestamp> for RangeQuery {
    fn from(value: Timestamp) -> Self {
        Self::Exact(value)
    }
}

impl From<RangeBounds> for RangeQuery {
    fn from(value: RangeBounds) -> Self {
        Self::Range(value)
    }
}

/// A timestamp parameter that also accepts the literal `now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampOrNow {
    /// Let the API use the time the request is processed.
    Now,
    /// A specific point in time.
    At(Timestamp),
}

impl From<Timestamp> for TimestampOrNow {
    fn from(value: Timestamp) -> Self {
        Self::At(value)
    }
}

impl Serialize for TimestampOrNow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Now => serializer.serialize_str("now"),
            Self::At(timestamp) => serializer.serialize_i64(*timestamp),
        }
    }
}

/// A parameter that can be set, or cleared by sending an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clearable<T> {
    /// Set the value.
    Set(T),
    /// Remove any previously set value.
    Clear,
}

impl<T> From<T> for Clearable<T> {
    fn from(value: T) -> Self {
        Self::Set(value)
    }
}

impl<T: Serialize> Serialize for Clearable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Set(value) => value.serialize(serializer),
            Self::Clear => serializer.serialize_str(""),
        }
    }
}
