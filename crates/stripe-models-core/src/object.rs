//! The `Object` trait shared by every top-level API resource.

use std::collections::BTreeMap;

/// User-supplied key/value pairs attached to an object.
///
/// Ordered so that encoded request bodies are deterministic.
pub type Metadata = BTreeMap<String, String>;

/// An API resource with a stable identifier.
///
/// Implemented for every resource that can appear as an expandable
/// reference, which is what lets [`Expandable`](crate::Expandable) build an
/// id-only value when the API returns a bare string.
pub trait Object {
    /// The typed identifier of this resource.
    type Id;

    /// The value of the `object` discriminator the API sends for this resource.
    const OBJECT: &'static str;

    /// Return the identifier.
    fn id(&self) -> &Self::Id;

    /// Build a value holding only `id`, with every other field zeroed.
    fn from_id(id: Self::Id) -> Self;
}

/// Implement [`Object`] for a resource struct with an `id` field and a
/// `Default` impl.
///
/// ```ignore
/// impl_object!(Coupon, CouponId, "coupon");
/// ```
#[macro_export]
macro_rules! impl_object {
    ($ty:ty, $id:ty, $object:literal) => {
        impl $crate::Object for $ty {
            type Id = $id;
            const OBJECT: &'static str = $object;

            fn id(&self) -> &$id {
                &self.id
            }

            fn from_id(id: $id) -> Self {
                Self {
                    id,
                    ..::core::default::Default::default()
                }
            }
        }
    };
}
