//! Subscriptions: recurring billing of a customer for a set of items.

use serde::{Deserialize, Serialize, Serializer};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, impl_search_params, string_enum, Account,
    Application, Clearable, Currency, Customer, Expandable, Invoice, List, ListParams, Metadata,
    Params, PaymentMethod, PaymentSource, RangeQuery, SearchParams, SearchResult, SetupIntent,
    TaxRate, TestClock, Timestamp, TimestampOrNow,
};

use crate::common::{
    AutomaticTax, AutomaticTaxParams, BillingThresholds, BillingThresholdsParams, CollectionMethod,
    InvoiceSettings, InvoiceSettingsParams, PaymentBehavior, ProrationBehavior, RecurringInterval,
    TransferData, TransferDataParams,
};
use crate::discount::{Discount, DiscountParams};
use crate::invoice_item::InvoiceItemPriceDataParams;
use crate::payment_settings::{PaymentSettings, PaymentSettingsParams};
use crate::subscription_item::{
    ItemBillingThresholdsParams, SubscriptionItem, SubscriptionItemList, SubscriptionItemPriceDataParams,
};
use crate::subscription_schedule::SubscriptionSchedule;

def_id!(SubscriptionId, "Identifier of a subscription.", prefix = "sub_");

string_enum! {
    /// Lifecycle state of a subscription.
    pub enum SubscriptionStatus {
        Active = "active",
        Canceled = "canceled",
        Incomplete = "incomplete",
        IncompleteExpired = "incomplete_expired",
        PastDue = "past_due",
        Paused = "paused",
        Trialing = "trialing",
        Unpaid = "unpaid",
    }
}

impl SubscriptionStatus {
    /// Whether the subscription can no longer bill.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Canceled | Self::IncompleteExpired)
    }
}

string_enum! {
    /// Customer-reported reason for canceling.
    pub enum CancellationFeedback {
        CustomerService = "customer_service",
        LowQuality = "low_quality",
        MissingFeatures = "missing_features",
        Other = "other",
        SwitchedService = "switched_service",
        TooComplex = "too_complex",
        TooExpensive = "too_expensive",
        Unused = "unused",
    }
}

string_enum! {
    /// Why a subscription was canceled.
    pub enum CancellationReason {
        CancellationRequested = "cancellation_requested",
        PaymentDisputed = "payment_disputed",
        PaymentFailed = "payment_failed",
    }
}

string_enum! {
    /// What happens to invoices while collection is paused.
    pub enum PauseCollectionBehavior {
        KeepAsDraft = "keep_as_draft",
        MarkUncollectible = "mark_uncollectible",
        Void = "void",
    }
}

string_enum! {
    /// What happens when a trial ends without a payment method.
    pub enum MissingPaymentMethod {
        Cancel = "cancel",
        CreateInvoice = "create_invoice",
        Pause = "pause",
    }
}

/// Where the billing cycle is anchored.
///
/// Encodes as `now`, `unchanged` or a Unix timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingCycleAnchor {
    /// Reset the cycle to the time of the request.
    Now,
    /// Keep the current anchor.
    Unchanged,
    /// Anchor at a point in time.
    At(Timestamp),
}

impl From<Timestamp> for BillingCycleAnchor {
    fn from(value: Timestamp) -> Self {
        Self::At(value)
    }
}

impl Serialize for BillingCycleAnchor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Now => serializer.serialize_str("now"),
            Self::Unchanged => serializer.serialize_str("unchanged"),
            Self::At(timestamp) => serializer.serialize_i64(*timestamp),
        }
    }
}

/// Fixed calendar position of the billing cycle anchor.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingCycleAnchorConfig {
    /// Day of the month, 1 to 31.
    pub day_of_month: Option<i64>,
    /// Hour of the day, 0 to 23.
    pub hour: Option<i64>,
    /// Minute of the hour, 0 to 59.
    pub minute: Option<i64>,
    /// Month of the year, 1 to 12.
    pub month: Option<i64>,
    /// Second of the minute, 0 to 59.
    pub second: Option<i64>,
}

/// Details about why and how a subscription was canceled.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CancellationDetails {
    /// Free-form customer comment.
    pub comment: Option<String>,
    /// Customer-reported reason.
    pub feedback: Option<CancellationFeedback>,
    /// Why the subscription was canceled.
    pub reason: Option<CancellationReason>,
}

/// A pause on payment collection.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PauseCollection {
    /// What happens to invoices while paused.
    pub behavior: Option<PauseCollectionBehavior>,
    /// When collection resumes.
    pub resumes_at: Option<Timestamp>,
}

/// Interval at which pending invoice items are invoiced.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendingInvoiceItemInterval {
    /// Unit of the interval.
    pub interval: Option<RecurringInterval>,
    /// Number of intervals between invoices.
    pub interval_count: i64,
}

/// Changes waiting on a successful payment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendingUpdate {
    /// Pending billing cycle anchor.
    pub billing_cycle_anchor: Option<Timestamp>,
    /// When the update is abandoned if still unpaid.
    pub expires_at: Timestamp,
    /// Pending item changes.
    pub subscription_items: Option<Vec<SubscriptionItem>>,
    /// Pending trial end.
    pub trial_end: Option<Timestamp>,
    /// Whether the trial length comes from the plan.
    pub trial_from_plan: Option<bool>,
}

/// What happens when the trial ends.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialEndBehavior {
    /// Behavior when no payment method is on file.
    pub missing_payment_method: Option<MissingPaymentMethod>,
}

/// Trial settings.
///
/// The same shape is used in requests.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialSettings {
    /// End-of-trial behavior.
    pub end_behavior: Option<TrialEndBehavior>,
}

/// A customer's recurring billing arrangement.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    /// Connect application that created the subscription.
    pub application: Option<Expandable<Application>>,
    /// Percentage of each invoice paid to the application owner.
    pub application_fee_percent: Option<f64>,
    /// Automatic tax settings.
    pub automatic_tax: Option<AutomaticTax>,
    /// Reference point for billing periods.
    pub billing_cycle_anchor: Timestamp,
    /// Calendar position of the anchor, when set explicitly.
    pub billing_cycle_anchor_config: Option<BillingCycleAnchorConfig>,
    /// Thresholds that trigger an early invoice.
    pub billing_thresholds: Option<BillingThresholds>,
    /// Scheduled cancellation time.
    pub cancel_at: Option<Timestamp>,
    /// Whether the subscription cancels at the end of the current period.
    pub cancel_at_period_end: bool,
    /// When the subscription was canceled.
    pub canceled_at: Option<Timestamp>,
    /// Cancellation details.
    pub cancellation_details: Option<CancellationDetails>,
    /// How invoices are paid.
    pub collection_method: Option<CollectionMethod>,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Currency of the subscription.
    pub currency: Option<Currency>,
    /// End of the current billing period.
    pub current_period_end: Timestamp,
    /// Start of the current billing period.
    pub current_period_start: Timestamp,
    /// Customer billed.
    pub customer: Option<Expandable<Customer>>,
    /// Days a `send_invoice` invoice stays open.
    pub days_until_due: Option<i64>,
    /// Default payment method.
    pub default_payment_method: Option<Expandable<PaymentMethod>>,
    /// Default legacy payment source.
    pub default_source: Option<Expandable<PaymentSource>>,
    /// Tax rates applied to every item without its own.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub default_tax_rates: Vec<TaxRate>,
    /// Description shown to the customer.
    pub description: Option<String>,
    /// Deprecated single discount.
    pub discount: Option<Discount>,
    /// Discounts applied to the subscription.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub discounts: Vec<Expandable<Discount>>,
    /// When the subscription ended.
    pub ended_at: Option<Timestamp>,
    /// Unique identifier for the object.
    pub id: SubscriptionId,
    /// Invoice settings.
    pub invoice_settings: Option<InvoiceSettings>,
    /// The items billed.
    pub items: Option<SubscriptionItemList>,
    /// Most recent invoice.
    pub latest_invoice: Option<Expandable<Invoice>>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Key/value pairs attached to the object.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// When pending invoice items are next invoiced.
    pub next_pending_invoice_item_invoice: Option<Timestamp>,
    /// Always `subscription`.
    pub object: String,
    /// Account the charges are made on behalf of.
    pub on_behalf_of: Option<Expandable<Account>>,
    /// Pause on payment collection.
    pub pause_collection: Option<PauseCollection>,
    /// Payment settings for generated invoices.
    pub payment_settings: Option<PaymentSettings>,
    /// Interval at which pending invoice items are invoiced.
    pub pending_invoice_item_interval: Option<PendingInvoiceItemInterval>,
    /// Setup intent collecting a payment method for future invoices.
    pub pending_setup_intent: Option<Expandable<SetupIntent>>,
    /// Changes waiting on a successful payment.
    pub pending_update: Option<PendingUpdate>,
    /// Schedule managing the subscription.
    pub schedule: Option<Expandable<SubscriptionSchedule>>,
    /// When the subscription started.
    pub start_date: Timestamp,
    /// Lifecycle state.
    pub status: Option<SubscriptionStatus>,
    /// Test clock the subscription belongs to.
    pub test_clock: Option<Expandable<TestClock>>,
    /// Funds routed to a connected account.
    pub transfer_data: Option<TransferData>,
    /// End of the trial.
    pub trial_end: Option<Timestamp>,
    /// Trial settings.
    pub trial_settings: Option<TrialSettings>,
    /// Start of the trial.
    pub trial_start: Option<Timestamp>,
}

impl_object!(Subscription, SubscriptionId, "subscription");

impl Subscription {
    /// Whether the subscription is in its trial at `at`.
    #[must_use]
    pub fn is_trialing_at(&self, at: Timestamp) -> bool {
        matches!((self.trial_start, self.trial_end), (Some(start), Some(end)) if start <= at && at < end)
    }

    /// Iterate over the subscription's items.
    pub fn items(&self) -> impl Iterator<Item = &SubscriptionItem> {
        self.items.iter().flat_map(List::iter)
    }
}

/// A page of subscriptions.
pub type SubscriptionList = List<Subscription>;

/// A page of subscription search results.
pub type SubscriptionSearchResult = SearchResult<Subscription>;

/// A one-off item added to the next invoice.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddInvoiceItemParams {
    /// Discounts to apply.
    pub discounts: Option<Vec<DiscountParams>>,
    /// Existing price to bill.
    pub price: Option<String>,
    /// Inline price to bill.
    pub price_data: Option<InvoiceItemPriceDataParams>,
    /// Quantity of units.
    pub quantity: Option<i64>,
    /// Tax rates to apply.
    pub tax_rates: Option<Vec<String>>,
}

/// Request form of [`CancellationDetails`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CancellationDetailsParams {
    /// Free-form customer comment. [`Clearable::Clear`] removes it.
    pub comment: Option<Clearable<String>>,
    /// Customer-reported reason. [`Clearable::Clear`] removes it.
    pub feedback: Option<Clearable<CancellationFeedback>>,
}

/// Request form of [`PauseCollection`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PauseCollectionParams {
    /// What happens to invoices while paused.
    pub behavior: Option<PauseCollectionBehavior>,
    /// When collection resumes.
    pub resumes_at: Option<Timestamp>,
}

/// Request form of [`PendingInvoiceItemInterval`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PendingInvoiceItemIntervalParams {
    /// Unit of the interval.
    pub interval: Option<RecurringInterval>,
    /// Number of intervals between invoices.
    pub interval_count: Option<i64>,
}

/// An item to add, update or remove.
///
/// Items carry their own `metadata` rather than the shared request params.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubscriptionItemsParams {
    /// Usage threshold, or [`Clearable::Clear`] to remove it.
    pub billing_thresholds: Option<Clearable<ItemBillingThresholdsParams>>,
    /// On delete, also delete recorded usage.
    pub clear_usage: Option<bool>,
    /// Remove the item named by `id`.
    pub deleted: Option<bool>,
    /// Discounts to apply.
    pub discounts: Option<Vec<DiscountParams>>,
    /// Existing item to update or delete.
    pub id: Option<String>,
    /// Key/value pairs attached to the item.
    pub metadata: Option<Metadata>,
    /// Legacy plan to bill.
    pub plan: Option<String>,
    /// Existing price to bill.
    pub price: Option<String>,
    /// Inline price to bill.
    pub price_data: Option<SubscriptionItemPriceDataParams>,
    /// Quantity of units.
    pub quantity: Option<i64>,
    /// Tax rates to apply.
    pub tax_rates: Option<Vec<String>>,
}

impl SubscriptionItemsParams {
    /// Add an item billing `price`.
    #[must_use]
    pub fn price(price: impl Into<String>) -> Self {
        Self {
            price: Some(price.into()),
            ..Self::default()
        }
    }

    /// Remove the item `id`.
    #[must_use]
    pub fn delete(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            deleted: Some(true),
            ..Self::default()
        }
    }

    /// Set a metadata key on the item.
    pub fn add_metadata(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.metadata
            .get_or_insert_with(Metadata::new)
            .insert(key.into(), value.into());
    }
}

/// Create or update a subscription.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubscriptionParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// One-off items added to the next invoice.
    pub add_invoice_items: Option<Vec<AddInvoiceItemParams>>,
    /// Percentage of each invoice paid to the application owner.
    pub application_fee_percent: Option<f64>,
    /// Automatic tax settings.
    pub automatic_tax: Option<AutomaticTaxParams>,
    /// Start the subscription in the past.
    pub backdate_start_date: Option<Timestamp>,
    /// Where to anchor the billing cycle.
    pub billing_cycle_anchor: Option<BillingCycleAnchor>,
    /// Calendar position of the anchor.
    pub billing_cycle_anchor_config: Option<BillingCycleAnchorConfig>,
    /// Early-invoice thresholds, or [`Clearable::Clear`] to remove them.
    pub billing_thresholds: Option<Clearable<BillingThresholdsParams>>,
    /// Scheduled cancellation time, or [`Clearable::Clear`] to unschedule.
    pub cancel_at: Option<Clearable<Timestamp>>,
    /// Cancel at the end of the current period.
    pub cancel_at_period_end: Option<bool>,
    /// Cancellation details.
    pub cancellation_details: Option<CancellationDetailsParams>,
    /// How invoices are paid.
    pub collection_method: Option<CollectionMethod>,
    /// Deprecated coupon id.
    pub coupon: Option<String>,
    /// Currency of the subscription.
    pub currency: Option<Currency>,
    /// Customer to bill. Required on create.
    pub customer: Option<String>,
    /// Days a `send_invoice` invoice stays open.
    pub days_until_due: Option<i64>,
    /// Default payment method.
    pub default_payment_method: Option<String>,
    /// Default legacy payment source.
    pub default_source: Option<String>,
    /// Default tax rates. An empty list removes them.
    pub default_tax_rates: Option<Vec<String>>,
    /// Description shown to the customer.
    pub description: Option<String>,
    /// Discounts to apply. An empty list removes them.
    pub discounts: Option<Vec<DiscountParams>>,
    /// Invoice settings.
    pub invoice_settings: Option<InvoiceSettingsParams>,
    /// Items to add, update or remove.
    pub items: Option<Vec<SubscriptionItemsParams>>,
    /// Attempt payment as if the customer were not present.
    pub off_session: Option<bool>,
    /// Account the charges are made on behalf of.
    pub on_behalf_of: Option<String>,
    /// Pause collection, or [`Clearable::Clear`] to resume.
    pub pause_collection: Option<Clearable<PauseCollectionParams>>,
    /// What to do when the first payment fails.
    pub payment_behavior: Option<PaymentBehavior>,
    /// Payment settings for generated invoices.
    pub payment_settings: Option<PaymentSettingsParams>,
    /// Interval for invoicing pending items.
    pub pending_invoice_item_interval: Option<Clearable<PendingInvoiceItemIntervalParams>>,
    /// Deprecated promotion code id.
    pub promotion_code: Option<String>,
    /// How to prorate the change.
    pub proration_behavior: Option<ProrationBehavior>,
    /// Time to compute prorations at.
    pub proration_date: Option<Timestamp>,
    /// Funds routed to a connected account.
    pub transfer_data: Option<TransferDataParams>,
    /// End of the trial, or `now` to end it immediately.
    pub trial_end: Option<TimestampOrNow>,
    /// Take the trial length from the plan.
    pub trial_from_plan: Option<bool>,
    /// Trial length in days.
    pub trial_period_days: Option<i64>,
    /// Trial settings.
    pub trial_settings: Option<TrialSettings>,
}

impl_params!(SubscriptionParams);

impl SubscriptionParams {
    /// Params creating a subscription for `customer` billing `items`.
    #[must_use]
    pub fn new(customer: impl Into<String>, items: Vec<SubscriptionItemsParams>) -> Self {
        Self {
            customer: Some(customer.into()),
            items: Some(items),
            ..Self::default()
        }
    }
}

/// Cancel a subscription immediately.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionCancelParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Cancellation details.
    pub cancellation_details: Option<CancellationDetailsParams>,
    /// Invoice pending usage and prorations now.
    pub invoice_now: Option<bool>,
    /// Generate a proration credit for unused time.
    pub prorate: Option<bool>,
}

impl_params!(SubscriptionCancelParams);

/// Resume a paused subscription.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionResumeParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// [`BillingCycleAnchor::Now`] or [`BillingCycleAnchor::Unchanged`].
    pub billing_cycle_anchor: Option<BillingCycleAnchor>,
    /// How to prorate the resumption.
    pub proration_behavior: Option<ProrationBehavior>,
    /// Time to compute prorations at.
    pub proration_date: Option<Timestamp>,
}

impl_params!(SubscriptionResumeParams);

/// Remove the discount from a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionDeleteDiscountParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
}

impl_params!(SubscriptionDeleteDiscountParams);

/// Filter on whether automatic tax is enabled.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListAutomaticTaxParams {
    /// Whether automatic tax is enabled.
    pub enabled: Option<bool>,
}

/// List subscriptions.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Filter on automatic tax.
    pub automatic_tax: Option<ListAutomaticTaxParams>,
    /// Filter by collection method.
    pub collection_method: Option<CollectionMethod>,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Filter on the end of the current period.
    pub current_period_end: Option<RangeQuery>,
    /// Filter on the start of the current period.
    pub current_period_start: Option<RangeQuery>,
    /// Filter by customer.
    pub customer: Option<String>,
    /// Filter by legacy plan.
    pub plan: Option<String>,
    /// Filter by price.
    pub price: Option<String>,
    /// Filter by status. `all` and `ended` are also accepted.
    pub status: Option<String>,
    /// Filter by test clock.
    pub test_clock: Option<String>,
}

impl_list_params!(SubscriptionListParams);

/// Search subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionSearchParams {
    /// Query, pagination and expansion.
    #[serde(flatten)]
    pub search: SearchParams,
}

impl_search_params!(SubscriptionSearchParams);

impl SubscriptionSearchParams {
    /// Search with `query`.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            search: SearchParams::new(query),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stripe_models_core::{to_form, Object, ParamsContainer, SearchParamsContainer};

    use crate::common::LiabilityType;
    use crate::payment_settings::SaveDefaultPaymentMethod;

    const SUBSCRIPTION: &str = r#"{
        "id": "sub_1",
        "object": "subscription",
        "application": null,
        "application_fee_percent": null,
        "automatic_tax": {"disabled_reason": null, "enabled": true, "liability": {"type": "self"}},
        "billing_cycle_anchor": 1700000000,
        "billing_cycle_anchor_config": {"day_of_month": 31, "hour": null, "minute": null, "month": null, "second": null},
        "billing_thresholds": null,
        "cancel_at": null,
        "cancel_at_period_end": false,
        "canceled_at": null,
        "cancellation_details": {"comment": null, "feedback": null, "reason": null},
        "collection_method": "charge_automatically",
        "created": 1700000000,
        "currency": "usd",
        "current_period_end": 1702592000,
        "current_period_start": 1700000000,
        "customer": "cus_1",
        "days_until_due": null,
        "default_payment_method": {"id": "pm_1", "object": "payment_method", "type": "card"},
        "default_source": null,
        "default_tax_rates": [],
        "description": null,
        "discount": null,
        "discounts": ["di_1"],
        "ended_at": null,
        "invoice_settings": {"account_tax_ids": null, "issuer": {"type": "self"}},
        "items": {
            "object": "list",
            "data": [
                {"id": "si_1", "object": "subscription_item", "created": 1700000000, "metadata": {}, "quantity": 1, "subscription": "sub_1", "tax_rates": []},
                {"id": "si_2", "object": "subscription_item", "created": 1700000000, "metadata": {}, "quantity": 5, "subscription": "sub_1", "tax_rates": []}
            ],
            "has_more": false,
            "total_count": 2,
            "url": "/v1/subscription_items?subscription=sub_1"
        },
        "latest_invoice": "in_1",
        "livemode": false,
        "metadata": {"order": "6735"},
        "next_pending_invoice_item_invoice": null,
        "on_behalf_of": null,
        "pause_collection": null,
        "payment_settings": {"payment_method_options": null, "payment_method_types": null, "save_default_payment_method": "off"},
        "pending_invoice_item_interval": null,
        "pending_setup_intent": null,
        "pending_update": null,
        "schedule": "sub_sched_1",
        "start_date": 1700000000,
        "status": "trialing",
        "test_clock": null,
        "transfer_data": null,
        "trial_end": 1701209600,
        "trial_settings": {"end_behavior": {"missing_payment_method": "create_invoice"}},
        "trial_start": 1700000000
    }"#;

    #[test]
    fn decodes_full_subscription() {
        let sub: Subscription = serde_json::from_str(SUBSCRIPTION).unwrap();

        assert_eq!(sub.id, "sub_1");
        assert_eq!(sub.status, Some(SubscriptionStatus::Trialing));
        assert_eq!(sub.currency, Some(Currency::USD));
        assert_eq!(sub.customer.as_ref().unwrap().id(), "cus_1");
        assert!(sub.default_payment_method.as_ref().unwrap().is_object());
        assert_eq!(sub.schedule.as_ref().unwrap().id(), "sub_sched_1");
        assert_eq!(
            sub.automatic_tax.as_ref().unwrap().liability.as_ref().unwrap().type_,
            Some(LiabilityType::Self_)
        );
        assert_eq!(
            sub.billing_cycle_anchor_config.unwrap().day_of_month,
            Some(31)
        );
        assert_eq!(
            sub.payment_settings.as_ref().unwrap().save_default_payment_method,
            Some(SaveDefaultPaymentMethod::Off)
        );
        assert_eq!(
            sub.trial_settings.as_ref().unwrap().end_behavior.as_ref().unwrap().missing_payment_method,
            Some(MissingPaymentMethod::CreateInvoice)
        );
        assert_eq!(sub.items().map(|item| item.quantity.unwrap_or(0)).sum::<i64>(), 6);
        let items = sub.items.as_ref().unwrap();
        assert!(!items.meta.has_more);
        assert_eq!(items.next_cursor(), None);
        assert_eq!(items.data.last().map(|item| item.id.as_str()), Some("si_2"));
        assert!(sub.is_trialing_at(1_700_000_001));
        assert!(!sub.is_trialing_at(1_701_209_600));
    }

    #[test]
    fn unknown_status_is_preserved() {
        let sub: Subscription =
            serde_json::from_str(r#"{"id":"sub_1","status":"hibernating"}"#).unwrap();
        let status = sub.status.unwrap();
        assert!(status.is_unknown());
        assert_eq!(status.as_str(), "hibernating");
        assert!(!status.is_terminal());
    }

    #[test]
    fn create_params_encode_sentinels_and_items() {
        let mut first = SubscriptionItemsParams::price("price_1");
        first.quantity = Some(2);
        first.add_metadata("seat", "a");

        let mut params = SubscriptionParams::new(
            "cus_1",
            vec![first, SubscriptionItemsParams::delete("si_old")],
        );
        params.billing_cycle_anchor = Some(BillingCycleAnchor::Now);
        params.trial_end = Some(TimestampOrNow::Now);
        params.payment_behavior = Some(PaymentBehavior::DefaultIncomplete);
        params.add_expand("latest_invoice.payment_intent");

        let form = to_form(&params).unwrap();
        assert_eq!(
            form.encode(),
            "expand[0]=latest_invoice.payment_intent&billing_cycle_anchor=now&customer=cus_1\
             &items[0][metadata][seat]=a&items[0][price]=price_1&items[0][quantity]=2\
             &items[1][deleted]=true&items[1][id]=si_old\
             &payment_behavior=default_incomplete&trial_end=now"
        );
    }

    #[test]
    fn update_params_clear_fields() {
        let params = SubscriptionParams {
            billing_cycle_anchor: Some(BillingCycleAnchor::Unchanged),
            cancel_at: Some(Clearable::Clear),
            pause_collection: Some(Clearable::Clear),
            default_tax_rates: Some(Vec::new()),
            ..SubscriptionParams::default()
        };
        let form = to_form(&params).unwrap();
        assert_eq!(form.get("billing_cycle_anchor"), Some("unchanged"));
        assert_eq!(form.get("cancel_at"), Some(""));
        assert_eq!(form.get("pause_collection"), Some(""));
        assert_eq!(form.get("default_tax_rates"), Some(""));
    }

    #[test]
    fn cancel_params() {
        let params = SubscriptionCancelParams {
            cancellation_details: Some(CancellationDetailsParams {
                comment: Some("Too pricey".to_string().into()),
                feedback: Some(CancellationFeedback::TooExpensive.into()),
            }),
            invoice_now: Some(true),
            prorate: Some(false),
            ..SubscriptionCancelParams::default()
        };
        assert_eq!(
            to_form(&params).unwrap().encode(),
            "cancellation_details[comment]=Too+pricey\
             &cancellation_details[feedback]=too_expensive&invoice_now=true&prorate=false"
        );
    }

    #[test]
    fn list_params_with_period_ranges() {
        let params = SubscriptionListParams {
            automatic_tax: Some(ListAutomaticTaxParams { enabled: Some(true) }),
            current_period_end: Some(RangeQuery::between(1_700_000_000, 1_800_000_000)),
            status: Some("all".into()),
            ..SubscriptionListParams::default()
        };
        assert_eq!(
            to_form(&params).unwrap().encode(),
            "automatic_tax[enabled]=true&current_period_end[gte]=1700000000\
             &current_period_end[lt]=1800000000&status=all"
        );
    }

    #[test]
    fn search_params_and_result() {
        let mut params = SubscriptionSearchParams::new("status:'active' AND metadata['order']:'6735'");
        params.set_page("page_2");
        assert_eq!(
            to_form(&params).unwrap().encode(),
            "query=status%3A%27active%27+AND+metadata%5B%27order%27%5D%3A%276735%27&page=page_2"
        );

        let result: SubscriptionSearchResult = serde_json::from_str(
            r#"{"object":"search_result","data":[{"id":"sub_1","object":"subscription"}],
                "has_more":true,"next_page":"page_3","url":"/v1/subscriptions/search","total_count":9}"#,
        )
        .unwrap();
        assert_eq!(result.data[0].id(), "sub_1");
        assert_eq!(result.next_page(), Some("page_3"));
    }

    #[test]
    fn expandable_schedule_back_reference() {
        let schedule: Expandable<SubscriptionSchedule> = serde_json::from_str(
            r#"{"id":"sub_sched_1","object":"subscription_schedule","subscription":"sub_1"}"#,
        )
        .unwrap();
        let schedule = schedule.into_object();
        assert_eq!(schedule.subscription.unwrap().id(), "sub_1");
        assert_eq!(SubscriptionSchedule::OBJECT, "subscription_schedule");
    }
}
