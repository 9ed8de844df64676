//! Subscription schedules: planned sequences of subscription phases.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, Account, Application,
    Currency, Customer, Expandable, List, ListParams, Metadata, Params, PaymentMethod, Plan, Price,
    RangeQuery, TaxRate, TestClock, Timestamp, TimestampOrNow,
};

use crate::common::{
    AutomaticTax, AutomaticTaxParams, BillingThresholds, BillingThresholdsParams, CollectionMethod,
    InvoiceSettings, InvoiceSettingsParams, ProrationBehavior, TransferData, TransferDataParams,
};
use crate::coupon::Coupon;
use crate::discount::{Discount, DiscountParams};
use crate::invoice_item::InvoiceItemPriceDataParams;
use crate::promotion_code::PromotionCode;
use crate::subscription::Subscription;
use crate::subscription_item::{
    ItemBillingThresholds, ItemBillingThresholdsParams, SubscriptionItemPriceDataParams,
};

def_id!(SubscriptionScheduleId, "Identifier of a subscription schedule.", prefix = "sub_sched_");

string_enum! {
    /// Lifecycle state of a schedule.
    pub enum SubscriptionScheduleStatus {
        Active = "active",
        Canceled = "canceled",
        Completed = "completed",
        NotStarted = "not_started",
        Released = "released",
    }
}

string_enum! {
    /// What happens to the subscription after the last phase.
    pub enum SubscriptionScheduleEndBehavior {
        Cancel = "cancel",
        None = "none",
        Release = "release",
        Renew = "renew",
    }
}

string_enum! {
    /// Whether a phase resets the billing cycle anchor.
    pub enum PhaseBillingCycleAnchor {
        Automatic = "automatic",
        PhaseStart = "phase_start",
    }
}

/// Bounds of the phase currently in effect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrentPhase {
    /// End of the phase.
    pub end_date: Timestamp,
    /// Start of the phase.
    pub start_date: Timestamp,
}

/// Settings applied to phases that do not override them.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultSettings {
    /// Percentage of each invoice paid to the application owner.
    pub application_fee_percent: Option<f64>,
    /// Automatic tax settings.
    pub automatic_tax: Option<AutomaticTax>,
    /// Whether phases reset the billing cycle anchor.
    pub billing_cycle_anchor: Option<PhaseBillingCycleAnchor>,
    /// Early-invoice thresholds.
    pub billing_thresholds: Option<BillingThresholds>,
    /// How invoices are paid.
    pub collection_method: Option<CollectionMethod>,
    /// Default payment method.
    pub default_payment_method: Option<Expandable<PaymentMethod>>,
    /// Description shown to the customer.
    pub description: Option<String>,
    /// Invoice settings.
    pub invoice_settings: Option<InvoiceSettings>,
    /// Account the charges are made on behalf of.
    pub on_behalf_of: Option<Expandable<Account>>,
    /// Funds routed to a connected account.
    pub transfer_data: Option<TransferData>,
}

/// A discount attached to a phase or phase item.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseDiscount {
    /// Coupon to apply.
    pub coupon: Option<Expandable<Coupon>>,
    /// Existing discount to reuse.
    pub discount: Option<Expandable<Discount>>,
    /// Promotion code to apply.
    pub promotion_code: Option<Expandable<PromotionCode>>,
}

/// A one-off item added when the phase starts.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseAddInvoiceItem {
    /// Discounts applied to the item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub discounts: Vec<PhaseDiscount>,
    /// Price billed.
    pub price: Option<Expandable<Price>>,
    /// Quantity of units.
    pub quantity: Option<i64>,
    /// Tax rates applied.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tax_rates: Vec<TaxRate>,
}

/// A price billed during a phase.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseItem {
    /// Usage threshold for metered prices.
    pub billing_thresholds: Option<ItemBillingThresholds>,
    /// Discounts applied to the item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub discounts: Vec<PhaseDiscount>,
    /// Key/value pairs set on the subscription item.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Legacy plan billed.
    pub plan: Option<Expandable<Plan>>,
    /// Price billed.
    pub price: Option<Expandable<Price>>,
    /// Quantity of units.
    pub quantity: Option<i64>,
    /// Tax rates applied.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tax_rates: Vec<TaxRate>,
}

/// One period of a schedule with fixed billing settings.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionSchedulePhase {
    /// One-off items added when the phase starts.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub add_invoice_items: Vec<PhaseAddInvoiceItem>,
    /// Percentage of each invoice paid to the application owner.
    pub application_fee_percent: Option<f64>,
    /// Automatic tax settings.
    pub automatic_tax: Option<AutomaticTax>,
    /// Whether the phase resets the billing cycle anchor.
    pub billing_cycle_anchor: Option<PhaseBillingCycleAnchor>,
    /// Early-invoice thresholds.
    pub billing_thresholds: Option<BillingThresholds>,
    /// How invoices are paid.
    pub collection_method: Option<CollectionMethod>,
    /// Deprecated coupon.
    pub coupon: Option<Expandable<Coupon>>,
    /// Currency of the phase.
    pub currency: Option<Currency>,
    /// Default payment method.
    pub default_payment_method: Option<Expandable<PaymentMethod>>,
    /// Default tax rates.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub default_tax_rates: Vec<TaxRate>,
    /// Description shown to the customer.
    pub description: Option<String>,
    /// Discounts applied during the phase.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub discounts: Vec<PhaseDiscount>,
    /// End of the phase.
    pub end_date: Timestamp,
    /// Invoice settings.
    pub invoice_settings: Option<InvoiceSettings>,
    /// Prices billed during the phase.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub items: Vec<PhaseItem>,
    /// Key/value pairs set on the subscription when the phase starts.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Account the charges are made on behalf of.
    pub on_behalf_of: Option<Expandable<Account>>,
    /// How to prorate the transition into the phase.
    pub proration_behavior: Option<ProrationBehavior>,
    /// Start of the phase.
    pub start_date: Timestamp,
    /// Funds routed to a connected account.
    pub transfer_data: Option<TransferData>,
    /// End of the trial within the phase.
    pub trial_end: Option<Timestamp>,
}

impl SubscriptionSchedulePhase {
    /// Whether `at` falls within the phase.
    #[must_use]
    pub fn contains(&self, at: Timestamp) -> bool {
        self.start_date <= at && at < self.end_date
    }
}

/// A planned sequence of phases driving a subscription.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionSchedule {
    /// Connect application that created the schedule.
    pub application: Option<Expandable<Application>>,
    /// When the schedule was canceled.
    pub canceled_at: Option<Timestamp>,
    /// When the schedule completed.
    pub completed_at: Option<Timestamp>,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// The phase in effect, if any.
    pub current_phase: Option<CurrentPhase>,
    /// Customer billed.
    pub customer: Option<Expandable<Customer>>,
    /// Settings phases inherit.
    pub default_settings: Option<DefaultSettings>,
    /// What happens after the last phase.
    pub end_behavior: Option<SubscriptionScheduleEndBehavior>,
    /// Unique identifier for the object.
    pub id: SubscriptionScheduleId,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Key/value pairs attached to the object.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Always `subscription_schedule`.
    pub object: String,
    /// The planned phases.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub phases: Vec<SubscriptionSchedulePhase>,
    /// When the schedule was released.
    pub released_at: Option<Timestamp>,
    /// Subscription that was released.
    pub released_subscription: Option<String>,
    /// Lifecycle state.
    pub status: Option<SubscriptionScheduleStatus>,
    /// Subscription the schedule manages.
    pub subscription: Option<Expandable<Subscription>>,
    /// Test clock the schedule belongs to.
    pub test_clock: Option<Expandable<TestClock>>,
}

impl_object!(SubscriptionSchedule, SubscriptionScheduleId, "subscription_schedule");

impl SubscriptionSchedule {
    /// The phase in effect at `at`.
    #[must_use]
    pub fn phase_at(&self, at: Timestamp) -> Option<&SubscriptionSchedulePhase> {
        self.phases.iter().find(|phase| phase.contains(at))
    }
}

/// A page of subscription schedules.
pub type SubscriptionScheduleList = List<SubscriptionSchedule>;

/// Request form of [`DefaultSettings`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DefaultSettingsParams {
    /// Percentage of each invoice paid to the application owner.
    pub application_fee_percent: Option<f64>,
    /// Automatic tax settings.
    pub automatic_tax: Option<AutomaticTaxParams>,
    /// Whether phases reset the billing cycle anchor.
    pub billing_cycle_anchor: Option<PhaseBillingCycleAnchor>,
    /// Early-invoice thresholds.
    pub billing_thresholds: Option<BillingThresholdsParams>,
    /// How invoices are paid.
    pub collection_method: Option<CollectionMethod>,
    /// Default payment method.
    pub default_payment_method: Option<String>,
    /// Description shown to the customer.
    pub description: Option<String>,
    /// Invoice settings.
    pub invoice_settings: Option<InvoiceSettingsParams>,
    /// Account the charges are made on behalf of.
    pub on_behalf_of: Option<String>,
    /// Funds routed to a connected account.
    pub transfer_data: Option<TransferDataParams>,
}

/// A one-off item added when a phase starts.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhaseAddInvoiceItemParams {
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

/// A price billed during a phase.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhaseItemParams {
    /// Usage threshold for metered prices.
    pub billing_thresholds: Option<ItemBillingThresholdsParams>,
    /// Discounts to apply.
    pub discounts: Option<Vec<DiscountParams>>,
    /// Key/value pairs set on the subscription item.
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

impl PhaseItemParams {
    /// Bill `quantity` units of `price`.
    #[must_use]
    pub fn price(price: impl Into<String>, quantity: i64) -> Self {
        Self {
            price: Some(price.into()),
            quantity: Some(quantity),
            ..Self::default()
        }
    }
}

/// A phase to plan.
///
/// `start_date`, `end_date` and `trial_end` accept the literal `now`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PhaseParams {
    /// One-off items added when the phase starts.
    pub add_invoice_items: Option<Vec<PhaseAddInvoiceItemParams>>,
    /// Percentage of each invoice paid to the application owner.
    pub application_fee_percent: Option<f64>,
    /// Automatic tax settings.
    pub automatic_tax: Option<AutomaticTaxParams>,
    /// Whether the phase resets the billing cycle anchor.
    pub billing_cycle_anchor: Option<PhaseBillingCycleAnchor>,
    /// Early-invoice thresholds.
    pub billing_thresholds: Option<BillingThresholdsParams>,
    /// How invoices are paid.
    pub collection_method: Option<CollectionMethod>,
    /// Deprecated coupon id.
    pub coupon: Option<String>,
    /// Currency of the phase.
    pub currency: Option<Currency>,
    /// Default payment method.
    pub default_payment_method: Option<String>,
    /// Default tax rates.
    pub default_tax_rates: Option<Vec<String>>,
    /// Description shown to the customer.
    pub description: Option<String>,
    /// Discounts to apply.
    pub discounts: Option<Vec<DiscountParams>>,
    /// End of the phase.
    pub end_date: Option<TimestampOrNow>,
    /// Invoice settings.
    pub invoice_settings: Option<InvoiceSettingsParams>,
    /// Prices billed during the phase.
    pub items: Option<Vec<PhaseItemParams>>,
    /// Number of billing periods the phase lasts. Excludes `end_date`.
    pub iterations: Option<i64>,
    /// Key/value pairs set on the subscription when the phase starts.
    pub metadata: Option<Metadata>,
    /// Account the charges are made on behalf of.
    pub on_behalf_of: Option<String>,
    /// How to prorate the transition into the phase.
    pub proration_behavior: Option<ProrationBehavior>,
    /// Start of the phase. Only the first phase may set it.
    pub start_date: Option<TimestampOrNow>,
    /// Funds routed to a connected account.
    pub transfer_data: Option<TransferDataParams>,
    /// Run the whole phase as a trial.
    pub trial: Option<bool>,
    /// End of the trial within the phase.
    pub trial_end: Option<TimestampOrNow>,
}

/// Create or update a subscription schedule.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubscriptionScheduleParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Customer to bill.
    pub customer: Option<String>,
    /// Settings phases inherit.
    pub default_settings: Option<DefaultSettingsParams>,
    /// What happens after the last phase.
    pub end_behavior: Option<SubscriptionScheduleEndBehavior>,
    /// Existing subscription to manage. Excludes every other field.
    pub from_subscription: Option<String>,
    /// The planned phases.
    pub phases: Option<Vec<PhaseParams>>,
    /// How to prorate when the phases change.
    pub proration_behavior: Option<ProrationBehavior>,
    /// When the first phase starts, or `now`.
    pub start_date: Option<TimestampOrNow>,
}

impl_params!(SubscriptionScheduleParams);

/// Cancel a schedule and its subscription.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionScheduleCancelParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Invoice pending usage and prorations now.
    pub invoice_now: Option<bool>,
    /// Generate a proration credit for unused time.
    pub prorate: Option<bool>,
}

impl_params!(SubscriptionScheduleCancelParams);

/// Release a schedule, leaving its subscription in place.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionScheduleReleaseParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Keep the subscription's `cancel_at` date.
    pub preserve_cancel_date: Option<bool>,
}

impl_params!(SubscriptionScheduleReleaseParams);

/// List subscription schedules.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubscriptionScheduleListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Filter on cancellation time.
    pub canceled_at: Option<RangeQuery>,
    /// Filter on completion time.
    pub completed_at: Option<RangeQuery>,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Filter by customer.
    pub customer: Option<String>,
    /// Filter on release time.
    pub released_at: Option<RangeQuery>,
    /// Only schedules that have not started.
    pub scheduled: Option<bool>,
}

impl_list_params!(SubscriptionScheduleListParams);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stripe_models_core::{to_form, ParamsContainer, RangeBounds};

    const SCHEDULE: &str = r#"{
        "id": "sub_sched_1",
        "object": "subscription_schedule",
        "application": null,
        "canceled_at": null,
        "completed_at": null,
        "created": 1700000000,
        "current_phase": {"end_date": 1702592000, "start_date": 1700000000},
        "customer": "cus_1",
        "default_settings": {
            "application_fee_percent": null,
            "automatic_tax": {"enabled": false},
            "billing_cycle_anchor": "automatic",
            "billing_thresholds": null,
            "collection_method": "charge_automatically",
            "default_payment_method": null,
            "description": null,
            "invoice_settings": {"account_tax_ids": null, "days_until_due": null, "issuer": {"type": "self"}},
            "on_behalf_of": null,
            "transfer_data": null
        },
        "end_behavior": "release",
        "livemode": false,
        "metadata": {},
        "phases": [
            {
                "add_invoice_items": [{"discounts": [], "price": "price_setup", "quantity": 1, "tax_rates": []}],
                "billing_cycle_anchor": null,
                "currency": "usd",
                "discounts": [{"coupon": "SPRING", "discount": null, "promotion_code": null}],
                "end_date": 1702592000,
                "items": [{"discounts": [], "metadata": {}, "plan": "price_1", "price": "price_1", "quantity": 1, "tax_rates": []}],
                "metadata": {},
                "proration_behavior": "create_prorations",
                "start_date": 1700000000,
                "trial_end": null
            },
            {
                "currency": "usd",
                "end_date": 1705270400,
                "items": [{"metadata": {}, "price": "price_2", "quantity": 2}],
                "metadata": {},
                "proration_behavior": "none",
                "start_date": 1702592000
            }
        ],
        "released_at": null,
        "released_subscription": null,
        "status": "active",
        "subscription": "sub_1",
        "test_clock": null
    }"#;

    #[test]
    fn decodes_phases() {
        let schedule: SubscriptionSchedule = serde_json::from_str(SCHEDULE).unwrap();
        assert_eq!(schedule.status, Some(SubscriptionScheduleStatus::Active));
        assert_eq!(schedule.end_behavior, Some(SubscriptionScheduleEndBehavior::Release));
        assert_eq!(schedule.phases.len(), 2);
        assert_eq!(
            schedule.default_settings.as_ref().unwrap().billing_cycle_anchor,
            Some(PhaseBillingCycleAnchor::Automatic)
        );

        let first = &schedule.phases[0];
        assert_eq!(first.add_invoice_items[0].price.as_ref().unwrap().id(), "price_setup");
        assert_eq!(first.discounts[0].coupon.as_ref().unwrap().id(), "SPRING");
        assert_eq!(first.proration_behavior, Some(ProrationBehavior::CreateProrations));

        let current = schedule.phase_at(1_703_000_000).unwrap();
        assert_eq!(current.items[0].quantity, Some(2));
        assert!(schedule.phase_at(1_800_000_000).is_none());
    }

    #[test]
    fn phase_dates_accept_now() {
        let mut params = SubscriptionScheduleParams {
            customer: Some("cus_1".into()),
            start_date: Some(TimestampOrNow::Now),
            end_behavior: Some(SubscriptionScheduleEndBehavior::Cancel),
            phases: Some(vec![
                PhaseParams {
                    items: Some(vec![PhaseItemParams::price("price_1", 1)]),
                    iterations: Some(3),
                    trial_end: Some(TimestampOrNow::At(1_700_500_000)),
                    ..PhaseParams::default()
                },
                PhaseParams {
                    items: Some(vec![PhaseItemParams::price("price_2", 2)]),
                    end_date: Some(TimestampOrNow::At(1_800_000_000)),
                    ..PhaseParams::default()
                },
            ]),
            ..SubscriptionScheduleParams::default()
        };
        params.add_metadata("source", "migration");

        assert_eq!(
            to_form(&params).unwrap().encode(),
            "metadata[source]=migration&customer=cus_1&end_behavior=cancel\
             &phases[0][items][0][price]=price_1&phases[0][items][0][quantity]=1\
             &phases[0][iterations]=3&phases[0][trial_end]=1700500000\
             &phases[1][end_date]=1800000000\
             &phases[1][items][0][price]=price_2&phases[1][items][0][quantity]=2\
             &start_date=now"
        );
    }

    #[test]
    fn action_params() {
        let cancel = SubscriptionScheduleCancelParams {
            invoice_now: Some(true),
            prorate: Some(true),
            ..SubscriptionScheduleCancelParams::default()
        };
        assert_eq!(to_form(&cancel).unwrap().encode(), "invoice_now=true&prorate=true");

        let release = SubscriptionScheduleReleaseParams {
            preserve_cancel_date: Some(false),
            ..SubscriptionScheduleReleaseParams::default()
        };
        assert_eq!(to_form(&release).unwrap().encode(), "preserve_cancel_date=false");
    }

    #[test]
    fn list_filters() {
        let params = SubscriptionScheduleListParams {
            completed_at: Some(RangeBounds::default().with_lt(1_700_000_000).into()),
            released_at: Some(1_690_000_000.into()),
            scheduled: Some(true),
            ..SubscriptionScheduleListParams::default()
        };
        assert_eq!(
            to_form(&params).unwrap().encode(),
            "completed_at[lt]=1700000000&released_at=1690000000&scheduled=true"
        );
    }
}
