//! Id-or-object references.
//!
//! Many fields come back from the API as a bare id unless the request asked
//! for them to be expanded, in which case the full object is inlined. The
//! shape is decided solely by the JSON token: a string is an id, an object
//! is the expanded value.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{self, value::MapAccessDeserializer, Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::Object;

/// A reference to `T` that is either just its id or the whole object.
pub enum Expandable<T: Object> {
    /// The API returned only the identifier.
    Id(T::Id),
    /// The API returned the expanded object.
    Object(Box<T>),
}

impl<T: Object> Expandable<T> {
    /// Wrap a bare identifier.
    #[must_use]
    pub fn from_id(id: impl Into<T::Id>) -> Self {
        Self::Id(id.into())
    }

    /// Wrap an expanded object.
    #[must_use]
    pub fn from_object(object: T) -> Self {
        Self::Object(Box::new(object))
    }

    /// The identifier of the referenced object, whichever shape was decoded.
    #[must_use]
    pub fn id(&self) -> &T::Id {
        match self {
            Self::Id(id) => id,
            Self::Object(object) => object.id(),
        }
    }

    /// Whether the reference was expanded.
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(_))
    }

    /// The expanded object, if present.
    #[must_use]
    pub fn as_object(&self) -> Option<&T> {
        match self {
            Self::Id(_) => None,
            Self::Object(object) => Some(object),
        }
    }

    /// Convert into an object, building an id-only value when not expanded.
    ///
    /// A bare `"cp_123"` and an expanded `{"id": "cp_123"}` yield equal values.
    #[must_use]
    pub fn into_object(self) -> T {
        match self {
            Self::Id(id) => T::from_id(id),
            Self::Object(object) => *object,
        }
    }

    /// Consume the reference and return its identifier.
    #[must_use]
    pub fn into_id(self) -> T::Id
    where
        T::Id: Clone,
    {
        match self {
            Self::Id(id) => id,
            Self::Object(object) => object.id().clone(),
        }
    }
}

impl<T: Object> From<T> for Expandable<T> {
    fn from(object: T) -> Self {
        Self::from_object(object)
    }
}

impl<T> fmt::Debug for Expandable<T>
where
    T: Object + fmt::Debug,
    T::Id: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => f.debug_tuple("Id").field(id).finish(),
            Self::Object(object) => f.debug_tuple("Object").field(object).finish(),
        }
    }
}

impl<T> Clone for Expandable<T>
where
    T: Object + Clone,
    T::Id: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::Id(id) => Self::Id(id.clone()),
            Self::Object(object) => Self::Object(object.clone()),
        }
    }
}

impl<T> PartialEq for Expandable<T>
where
    T: Object + PartialEq,
    T::Id: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Id(a), Self::Id(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => a == b,
            _ => false,
        }
    }
}

impl<T> Serialize for Expandable<T>
where
    T: Object + Serialize,
    T::Id: Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Id(id) => id.serialize(serializer),
            Self::Object(object) => object.serialize(serializer),
        }
    }
}

impl<'de, T> Deserialize<'de> for Expandable<T>
where
    T: Object + Deserialize<'de>,
    T::Id: From<String>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExpandableVisitor(PhantomData))
    }
}

struct ExpandableVisitor<T>(PhantomData<T>);

impl<'de, T> Visitor<'de> for ExpandableVisitor<T>
where
    T: Object + Deserialize<'de>,
    T::Id: From<String>,
{
    type Value = Expandable<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} id or an expanded {} object", T::OBJECT, T::OBJECT)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Ok(Expandable::Id(T::Id::from(value.to_owned())))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<Self::Value, E> {
        Ok(Expandable::Id(T::Id::from(value)))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map)).map(Expandable::from_object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::def_id;

    def_id!(WidgetId, "Test id.");

    #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Widget {
        id: WidgetId,
        size: i64,
    }

    crate::impl_object!(Widget, WidgetId, "widget");

    #[derive(Debug, Deserialize)]
    struct Holder {
        widget: Option<Expandable<Widget>>,
    }

    #[test]
    fn string_token_decodes_to_id() {
        let holder: Holder = serde_json::from_str(r#"{"widget": "wd_1"}"#).unwrap();
        let widget = holder.widget.unwrap();
        assert!(!widget.is_object());
        assert_eq!(widget.id(), "wd_1");
    }

    #[test]
    fn object_token_decodes_to_object() {
        let holder: Holder = serde_json::from_str(r#"{"widget": {"id": "wd_1", "size": 3}}"#).unwrap();
        let widget = holder.widget.unwrap();
        assert_eq!(widget.as_object().map(|w| w.size), Some(3));
        assert_eq!(widget.id(), "wd_1");
    }

    #[test]
    fn null_decodes_to_none() {
        let holder: Holder = serde_json::from_str(r#"{"widget": null}"#).unwrap();
        assert!(holder.widget.is_none());
    }

    #[test]
    fn both_shapes_normalize_to_the_same_object() {
        let bare: Expandable<Widget> = serde_json::from_str(r#""wd_1""#).unwrap();
        let full: Expandable<Widget> = serde_json::from_str(r#"{"id": "wd_1"}"#).unwrap();
        assert_eq!(bare.into_object(), full.into_object());
    }

    #[test]
    fn other_tokens_are_rejected() {
        let err = serde_json::from_str::<Expandable<Widget>>("42").unwrap_err();
        assert!(err.to_string().contains("widget id or an expanded widget object"));
    }

    #[test]
    fn serializes_in_the_shape_it_holds() {
        let id: Expandable<Widget> = Expandable::from_id("wd_1");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""wd_1""#);

        let object = Expandable::from_object(Widget { id: "wd_1".into(), size: 2 });
        assert_eq!(serde_json::to_string(&object).unwrap(), r#"{"id":"wd_1","size":2}"#);
    }
}
