//! Subscription items: the prices and quantities a subscription bills.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, Clearable, Currency, Decimal, Expandable, List,
    ListParams, Metadata, Params, Plan, Price, TaxRate, Timestamp,
};

use crate::common::{PaymentBehavior, ProrationBehavior, RecurringInterval, TaxBehavior};
use crate::discount::{Discount, DiscountParams};

def_id!(SubscriptionItemId, "Identifier of a subscription item.", prefix = "si_");

/// Usage threshold that triggers an invoice for a metered item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemBillingThresholds {
    /// Usage, in units, at which to invoice.
    pub usage_gte: i64,
}

/// One price billed by a subscription.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionItem {
    /// Usage threshold for metered prices.
    pub billing_thresholds: Option<ItemBillingThresholds>,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Set on the object returned by a delete request.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
    /// Discounts applied to the item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub discounts: Vec<Expandable<Discount>>,
    /// Unique identifier for the object.
    pub id: SubscriptionItemId,
    /// Key/value pairs attached to the object.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Always `subscription_item`.
    pub object: String,
    /// Legacy plan billed.
    pub plan: Option<Plan>,
    /// Price billed.
    pub price: Option<Price>,
    /// Quantity of units. Absent for metered prices.
    pub quantity: Option<i64>,
    /// Subscription the item belongs to.
    pub subscription: Option<String>,
    /// Tax rates applied to the item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tax_rates: Vec<TaxRate>,
}

impl_object!(SubscriptionItem, SubscriptionItemId, "subscription_item");

/// A page of subscription items.
pub type SubscriptionItemList = List<SubscriptionItem>;

/// Request form of [`ItemBillingThresholds`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemBillingThresholdsParams {
    /// Usage, in units, at which to invoice.
    pub usage_gte: Option<i64>,
}

/// Billing interval of an inline recurring price.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecurringParams {
    /// Unit of the interval.
    pub interval: Option<RecurringInterval>,
    /// Number of intervals between billings.
    pub interval_count: Option<i64>,
}

/// An inline recurring price.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionItemPriceDataParams {
    /// Currency of the price.
    pub currency: Option<Currency>,
    /// Product the price belongs to.
    pub product: Option<String>,
    /// Billing interval.
    pub recurring: Option<RecurringParams>,
    /// Whether the price is tax-inclusive.
    pub tax_behavior: Option<TaxBehavior>,
    /// Unit amount, in minor units.
    pub unit_amount: Option<i64>,
    /// Unit amount with sub-minor-unit precision.
    pub unit_amount_decimal: Option<Decimal>,
}

/// Create or update a subscription item.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubscriptionItemParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Usage threshold, or [`Clearable::Clear`] to remove it.
    pub billing_thresholds: Option<Clearable<ItemBillingThresholdsParams>>,
    /// On delete, also delete recorded usage.
    pub clear_usage: Option<bool>,
    /// Discounts to apply. An empty list removes them.
    pub discounts: Option<Vec<DiscountParams>>,
    /// Attempt payment as if the customer were not present.
    pub off_session: Option<bool>,
    /// What to do when the resulting payment fails.
    pub payment_behavior: Option<PaymentBehavior>,
    /// Legacy plan to bill.
    pub plan: Option<String>,
    /// Existing price to bill.
    pub price: Option<String>,
    /// Inline price to bill.
    pub price_data: Option<SubscriptionItemPriceDataParams>,
    /// How to prorate the change.
    pub proration_behavior: Option<ProrationBehavior>,
    /// Time to compute prorations at.
    pub proration_date: Option<Timestamp>,
    /// Quantity of units.
    pub quantity: Option<i64>,
    /// Subscription to add the item to. Required on create.
    pub subscription: Option<String>,
    /// Tax rates to apply. An empty list removes them.
    pub tax_rates: Option<Vec<String>>,
}

impl_params!(SubscriptionItemParams);

/// List the items of a subscription.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionItemListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Subscription whose items to list. Required.
    pub subscription: Option<String>,
}

impl_list_params!(SubscriptionItemListParams);

impl SubscriptionItemListParams {
    /// List the items of `subscription`.
    #[must_use]
    pub fn for_subscription(subscription: impl Into<String>) -> Self {
        Self {
            subscription: Some(subscription.into()),
            ..Self::default()
        }
    }
}

/// List the usage record summaries of a subscription item.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionItemUsageRecordSummariesParams {
    /// Subscription item whose summaries to list. Part of the request path.
    #[serde(skip)]
    pub subscription_item: String,
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
}

impl_list_params!(SubscriptionItemUsageRecordSummariesParams);

impl SubscriptionItemUsageRecordSummariesParams {
    /// List the summaries of `subscription_item`.
    #[must_use]
    pub fn new(subscription_item: impl Into<String>) -> Self {
        Self {
            subscription_item: subscription_item.into(),
            ..Self::default()
        }
    }
}
