//! Discounts: a coupon or promotion code applied to a customer,
//! subscription, invoice or line item.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use stripe_models_core::{def_id, impl_object, Customer, Expandable, Timestamp};

use crate::coupon::Coupon;
use crate::promotion_code::PromotionCode;

def_id!(DiscountId, "Identifier of a discount.", prefix = "di_");

/// The application of a coupon to a billing object.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Discount {
    /// Checkout session the discount was applied through.
    pub checkout_session: Option<String>,
    /// The applied coupon, always expanded.
    pub coupon: Option<Coupon>,
    /// Customer the discount applies to.
    pub customer: Option<Expandable<Customer>>,
    /// Set on the object returned by a delete request.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
    /// When the discount stops applying. `None` for `forever` coupons.
    pub end: Option<Timestamp>,
    /// Unique identifier for the object.
    pub id: DiscountId,
    /// Invoice the discount was applied to, for invoice-level discounts.
    pub invoice: Option<String>,
    /// Invoice item the discount was applied to.
    pub invoice_item: Option<String>,
    /// Always `discount`.
    pub object: String,
    /// The promotion code redeemed, if any.
    pub promotion_code: Option<Expandable<PromotionCode>>,
    /// When the discount started applying.
    pub start: Timestamp,
    /// Subscription the discount was applied to.
    pub subscription: Option<String>,
    /// Subscription item the discount was applied to.
    pub subscription_item: Option<String>,
}

impl_object!(Discount, DiscountId, "discount");

impl Discount {
    /// Whether the discount applies at `at`.
    #[must_use]
    pub fn is_active_at(&self, at: Timestamp) -> bool {
        !self.deleted && self.start <= at && !matches!(self.end, Some(end) if end <= at)
    }
}

/// A discount to apply, named by exactly one of coupon, existing discount
/// or promotion code.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscountParams {
    /// Id of a coupon.
    pub coupon: Option<String>,
    /// Id of an existing discount on the object.
    pub discount: Option<String>,
    /// Id of a promotion code.
    pub promotion_code: Option<String>,
}

impl DiscountParams {
    /// Apply a coupon.
    #[must_use]
    pub fn coupon(id: impl Into<String>) -> Self {
        Self {
            coupon: Some(id.into()),
            ..Self::default()
        }
    }

    /// Reuse a discount already on the object.
    #[must_use]
    pub fn discount(id: impl Into<String>) -> Self {
        Self {
            discount: Some(id.into()),
            ..Self::default()
        }
    }

    /// Apply a promotion code.
    #[must_use]
    pub fn promotion_code(id: impl Into<String>) -> Self {
        Self {
            promotion_code: Some(id.into()),
            ..Self::default()
        }
    }
}
