//! Form encoding of request parameters.
//!
//! Mutating requests send `application/x-www-form-urlencoded` bodies using
//! the bracketed nesting convention:
//!
//! - nested fields: `shipping[address][city]=Berlin`
//! - sequences: `items[0][price]=price_1&items[1][price]=price_2`
//! - `None` and unit values are omitted entirely
//! - an empty sequence or map is sent as `key=`, which clears it server-side
//!
//! [`to_form`] runs any `Serialize` value through a serde serializer that
//! collects these pairs into a [`FormBody`].

use std::fmt;

use serde::ser::{self, Impossible, Serialize};
use serde::{Deserialize, Serializer};

/// Errors produced while form-encoding a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// Only structs and maps can be the root of a form body.
    #[error("top-level value must be a struct or map, found {0}")]
    TopLevel(&'static str),

    /// The value has no form representation.
    #[error("cannot encode {kind} at `{key}`")]
    Unsupported {
        /// Key at which the value was found.
        key: String,
        /// Kind of value.
        kind: &'static str,
    },

    /// Map keys must be strings, characters or integers.
    #[error("map keys must be strings or integers")]
    InvalidKey,

    /// Error raised by a `Serialize` implementation.
    #[error("{0}")]
    Custom(String),
}

impl ser::Error for FormError {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}

/// Formatting options for the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Fixed number of decimals for floats. `None` writes the shortest
    /// representation that parses back to the same value.
    pub float_decimals: Option<usize>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            float_decimals: Some(4),
        }
    }
}

/// An ordered list of encoded key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormBody {
    pairs: Vec<(String, String)>,
}

impl FormBody {
    /// All pairs, in encoding order.
    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// The first value for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether any pair has this key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the body has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Render as `application/x-www-form-urlencoded`.
    ///
    /// Brackets in keys stay literal so bodies remain readable in logs.
    #[must_use]
    pub fn encode(&self) -> String {
        let mut out = String::new();
        for (key, value) in &self.pairs {
            if !out.is_empty() {
                out.push('&');
            }
            out.push_str(&escape(key).replace("%5B", "[").replace("%5D", "]"));
            out.push('=');
            out.push_str(&escape(value));
        }
        out
    }
}

impl fmt::Display for FormBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl IntoIterator for FormBody {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.into_iter()
    }
}

fn escape(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

/// Encode `value` with the default [`FormConfig`].
///
/// # Errors
///
/// Returns an error if `value` is not a struct or map, or contains a shape
/// with no form representation (bytes, tuple or struct enum variants).
pub fn to_form<T: Serialize + ?Sized>(value: &T) -> Result<FormBody, FormError> {
    to_form_with(value, &FormConfig::default())
}

/// Encode `value` with explicit formatting options.
///
/// # Errors
///
/// See [`to_form`].
pub fn to_form_with<T: Serialize + ?Sized>(value: &T, config: &FormConfig) -> Result<FormBody, FormError> {
    let mut pairs = Vec::new();
    value.serialize(ValueSerializer {
        out: &mut pairs,
        key: String::new(),
        config,
    })?;
    tracing::trace!(pairs = pairs.len(), "encoded form body");
    Ok(FormBody { pairs })
}

fn child_key(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}[{name}]")
    }
}

struct ValueSerializer<'a> {
    out: &'a mut Vec<(String, String)>,
    key: String,
    config: &'a FormConfig,
}

impl ValueSerializer<'_> {
    fn push(self, value: String, kind: &'static str) -> Result<(), FormError> {
        if self.key.is_empty() {
            return Err(FormError::TopLevel(kind));
        }
        self.out.push((self.key, value));
        Ok(())
    }

    fn unsupported(self, kind: &'static str) -> FormError {
        FormError::Unsupported { key: self.key, kind }
    }

    fn float(self, value: f64) -> Result<(), FormError> {
        let text = match self.config.float_decimals {
            Some(decimals) => format!("{value:.decimals$}"),
            None => value.to_string(),
        };
        self.push(text, "float")
    }
}

impl<'a> Serializer for ValueSerializer<'a> {
    type Ok = ();
    type Error = FormError;
    type SerializeSeq = SeqSerializer<'a>;
    type SerializeTuple = SeqSerializer<'a>;
    type SerializeTupleStruct = SeqSerializer<'a>;
    type SerializeTupleVariant = Impossible<(), FormError>;
    type SerializeMap = MapSerializer<'a>;
    type SerializeStruct = StructSerializer<'a>;
    type SerializeStructVariant = Impossible<(), FormError>;

    fn serialize_bool(self, v: bool) -> Result<(), FormError> {
        self.push(if v { "true" } else { "false" }.to_owned(), "bool")
    }

    fn serialize_i8(self, v: i8) -> Result<(), FormError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<(), FormError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<(), FormError> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<(), FormError> {
        self.push(v.to_string(), "integer")
    }

    fn serialize_u8(self, v: u8) -> Result<(), FormError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<(), FormError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<(), FormError> {
        self.serialize_u64(u64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<(), FormError> {
        self.push(v.to_string(), "integer")
    }

    fn serialize_f32(self, v: f32) -> Result<(), FormError> {
        self.float(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<(), FormError> {
        self.float(v)
    }

    fn serialize_char(self, v: char) -> Result<(), FormError> {
        self.push(v.to_string(), "char")
    }

    fn serialize_str(self, v: &str) -> Result<(), FormError> {
        self.push(v.to_owned(), "string")
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<(), FormError> {
        Err(self.unsupported("bytes"))
    }

    fn serialize_none(self) -> Result<(), FormError> {
        Ok(())
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<(), FormError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), FormError> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), FormError> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<(), FormError> {
        self.push(variant.to_owned(), "enum")
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<(), FormError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<(), FormError> {
        Err(self.unsupported("newtype variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SeqSerializer<'a>, FormError> {
        if self.key.is_empty() {
            return Err(FormError::TopLevel("sequence"));
        }
        Ok(SeqSerializer {
            out: self.out,
            key: self.key,
            config: self.config,
            index: 0,
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqSerializer<'a>, FormError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqSerializer<'a>, FormError> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, FormError> {
        Err(self.unsupported("tuple variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapSerializer<'a>, FormError> {
        Ok(MapSerializer {
            out: self.out,
            key: self.key,
            config: self.config,
            pending: None,
            entries: 0,
        })
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<StructSerializer<'a>, FormError> {
        Ok(StructSerializer {
            out: self.out,
            key: self.key,
            config: self.config,
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, FormError> {
        Err(self.unsupported("struct variant"))
    }
}

struct SeqSerializer<'a> {
    out: &'a mut Vec<(String, String)>,
    key: String,
    config: &'a FormConfig,
    index: usize,
}

impl SeqSerializer<'_> {
    fn element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormError> {
        let key = format!("{}[{}]", self.key, self.index);
        self.index += 1;
        value.serialize(ValueSerializer {
            out: &mut *self.out,
            key,
            config: self.config,
        })
    }

    fn finish(self) -> Result<(), FormError> {
        if self.index == 0 {
            self.out.push((self.key, String::new()));
        }
        Ok(())
    }
}

impl ser::SerializeSeq for SeqSerializer<'_> {
    type Ok = ();
    type Error = FormError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormError> {
        self.element(value)
    }

    fn end(self) -> Result<(), FormError> {
        self.finish()
    }
}

impl ser::SerializeTuple for SeqSerializer<'_> {
    type Ok = ();
    type Error = FormError;

    fn serialize_element<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormError> {
        self.element(value)
    }

    fn end(self) -> Result<(), FormError> {
        self.finish()
    }
}

impl ser::SerializeTupleStruct for SeqSerializer<'_> {
    type Ok = ();
    type Error = FormError;

    fn serialize_field<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormError> {
        self.element(value)
    }

    fn end(self) -> Result<(), FormError> {
        self.finish()
    }
}

struct MapSerializer<'a> {
    out: &'a mut Vec<(String, String)>,
    key: String,
    config: &'a FormConfig,
    pending: Option<String>,
    entries: usize,
}

impl ser::SerializeMap for MapSerializer<'_> {
    type Ok = ();
    type Error = FormError;

    fn serialize_key<T: Serialize + ?Sized>(&mut self, key: &T) -> Result<(), FormError> {
        self.pending = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<(), FormError> {
        let name = self.pending.take().ok_or(FormError::InvalidKey)?;
        self.entries += 1;
        value.serialize(ValueSerializer {
            out: &mut *self.out,
            key: child_key(&self.key, &name),
            config: self.config,
        })
    }

    fn end(self) -> Result<(), FormError> {
        // The root map is the body itself; only nested empty maps clear a field.
        if self.entries == 0 && !self.key.is_empty() {
            self.out.push((self.key, String::new()));
        }
        Ok(())
    }
}

struct StructSerializer<'a> {
    out: &'a mut Vec<(String, String)>,
    key: String,
    config: &'a FormConfig,
}

impl ser::SerializeStruct for StructSerializer<'_> {
    type Ok = ();
    type Error = FormError;

    fn serialize_field<T: Serialize + ?Sized>(
        &mut self,
        name: &'static str,
        value: &T,
    ) -> Result<(), FormError> {
        value.serialize(ValueSerializer {
            out: &mut *self.out,
            key: child_key(&self.key, name),
            config: self.config,
        })
    }

    fn end(self) -> Result<(), FormError> {
        Ok(())
    }
}

struct KeySerializer;

impl KeySerializer {
    fn reject<T>(self) -> Result<T, FormError> {
        Err(FormError::InvalidKey)
    }
}

impl Serializer for KeySerializer {
    type Ok = String;
    type Error = FormError;
    type SerializeSeq = Impossible<String, FormError>;
    type SerializeTuple = Impossible<String, FormError>;
    type SerializeTupleStruct = Impossible<String, FormError>;
    type SerializeTupleVariant = Impossible<String, FormError>;
    type SerializeMap = Impossible<String, FormError>;
    type SerializeStruct = Impossible<String, FormError>;
    type SerializeStructVariant = Impossible<String, FormError>;

    fn serialize_bool(self, _v: bool) -> Result<String, FormError> {
        self.reject()
    }

    fn serialize_i8(self, v: i8) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<String, FormError> {
        self.reject()
    }

    fn serialize_f64(self, _v: f64) -> Result<String, FormError> {
        self.reject()
    }

    fn serialize_char(self, v: char) -> Result<String, FormError> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String, FormError> {
        Ok(v.to_owned())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String, FormError> {
        self.reject()
    }

    fn serialize_none(self) -> Result<String, FormError> {
        self.reject()
    }

    fn serialize_some<T: Serialize + ?Sized>(self, value: &T) -> Result<String, FormError> {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String, FormError> {
        self.reject()
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<String, FormError> {
        self.reject()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String, FormError> {
        Ok(variant.to_owned())
    }

    fn serialize_newtype_struct<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<String, FormError> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: Serialize + ?Sized>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String, FormError> {
        self.reject()
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, FormError> {
        self.reject()
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, FormError> {
        self.reject()
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, FormError> {
        self.reject()
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, FormError> {
        self.reject()
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, FormError> {
        self.reject()
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, FormError> {
        self.reject()
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, FormError> {
        self.reject()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_with::skip_serializing_none;

    use super::*;
    use crate::{Clearable, Decimal, Params, ParamsContainer, TimestampOrNow};

    #[skip_serializing_none]
    #[derive(Serialize, Default)]
    struct Shipping {
        name: Option<String>,
        address: Option<BTreeMap<String, String>>,
    }

    #[skip_serializing_none]
    #[derive(Serialize, Default)]
    struct Item {
        price: Option<String>,
        quantity: Option<i64>,
    }

    #[skip_serializing_none]
    #[derive(Serialize, Default)]
    struct Request {
        #[serde(flatten)]
        params: Params,
        amount: Option<i64>,
        percent_off: Option<f64>,
        active: Option<bool>,
        shipping: Option<Shipping>,
        items: Option<Vec<Item>>,
        tax_rates: Option<Vec<String>>,
        trial_end: Option<TimestampOrNow>,
        thresholds: Option<Clearable<Item>>,
        unit_amount_decimal: Option<Decimal>,
    }

    fn pairs(body: &FormBody) -> Vec<(&str, &str)> {
        body.pairs().iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
    }

    #[test]
    fn unset_fields_are_omitted() {
        let body = to_form(&Request::default()).unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn nested_structs_and_sequences_use_brackets() {
        let request = Request {
            shipping: Some(Shipping {
                name: Some("Jenny".into()),
                address: Some(BTreeMap::from([("city".to_string(), "Berlin".to_string())])),
            }),
            items: Some(vec![
                Item { price: Some("price_a".into()), quantity: Some(2) },
                Item { price: Some("price_b".into()), quantity: None },
            ]),
            ..Request::default()
        };
        let body = to_form(&request).unwrap();
        assert_eq!(
            pairs(&body),
            vec![
                ("shipping[name]", "Jenny"),
                ("shipping[address][city]", "Berlin"),
                ("items[0][price]", "price_a"),
                ("items[0][quantity]", "2"),
                ("items[1][price]", "price_b"),
            ]
        );
    }

    #[test]
    fn scalars_format_like_the_api_expects() {
        let request = Request {
            amount: Some(1000),
            percent_off: Some(12.5),
            active: Some(false),
            unit_amount_decimal: Some("0.0001234".parse().unwrap()),
            ..Request::default()
        };
        let body = to_form(&request).unwrap();
        assert_eq!(body.get("amount"), Some("1000"));
        assert_eq!(body.get("percent_off"), Some("12.5000"));
        assert_eq!(body.get("active"), Some("false"));
        assert_eq!(body.get("unit_amount_decimal"), Some("0.0001234"));

        let shortest = to_form_with(&request, &FormConfig { float_decimals: None }).unwrap();
        assert_eq!(shortest.get("percent_off"), Some("12.5"));
    }

    #[test]
    fn empty_collections_clear_the_field() {
        let mut request = Request {
            tax_rates: Some(Vec::new()),
            thresholds: Some(Clearable::Clear),
            ..Request::default()
        };
        request.params.metadata = Some(BTreeMap::new());
        let body = to_form(&request).unwrap();
        assert_eq!(body.get("tax_rates"), Some(""));
        assert_eq!(body.get("thresholds"), Some(""));
        assert_eq!(body.get("metadata"), Some(""));
    }

    #[test]
    fn now_sentinel_and_params_base() {
        let mut request = Request {
            trial_end: Some(TimestampOrNow::Now),
            ..Request::default()
        };
        request.add_expand("latest_invoice");
        request.add_metadata("plan", "gold");
        request.add_extra("custom[field]", "x");
        let body = to_form(&request).unwrap();
        assert_eq!(
            pairs(&body),
            vec![
                ("expand[0]", "latest_invoice"),
                ("metadata[plan]", "gold"),
                ("custom[field]", "x"),
                ("trial_end", "now"),
            ]
        );

        request.trial_end = Some(TimestampOrNow::At(1_700_000_000));
        assert_eq!(to_form(&request).unwrap().get("trial_end"), Some("1700000000"));
    }

    #[test]
    fn encode_escapes_values_but_not_brackets() {
        let request = Request {
            shipping: Some(Shipping {
                name: Some("Jenny & Co".into()),
                address: None,
            }),
            ..Request::default()
        };
        assert_eq!(to_form(&request).unwrap().encode(), "shipping[name]=Jenny+%26+Co");
    }

    #[test]
    fn scalars_at_the_root_are_rejected() {
        assert_eq!(to_form(&5_i64), Err(FormError::TopLevel("integer")));
        assert_eq!(to_form(&vec![1, 2]), Err(FormError::TopLevel("sequence")));
    }

    impl crate::ParamsContainer for Request {
        fn params(&self) -> &Params {
            &self.params
        }

        fn params_mut(&mut self) -> &mut Params {
            &mut self.params
        }
    }
}
