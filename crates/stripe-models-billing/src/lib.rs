//! Billing resources for stripe-models.
//!
//! This crate models the recurring-billing side of the API:
//!
//! - **Discounts**: `Coupon`, `PromotionCode`, `Discount`
//! - **Invoicing**: `InvoiceItem`, `InvoiceLineItem`
//! - **Subscriptions**: `Subscription`, `SubscriptionItem`, `SubscriptionSchedule`
//! - **Metered usage**: `UsageRecordSummary`
//!
//! Each resource comes with its request types: `<Resource>Params` for
//! create and update, `<Resource>ListParams` for list filters, plus action
//! params such as `SubscriptionCancelParams`.
//!
//! # Sentinels
//!
//! Some timestamps accept the literal `now` and the subscription billing
//! anchor also accepts `unchanged`. These are typed enums
//! (`TimestampOrNow`, `BillingCycleAnchor`) rather than boolean side fields:
//!
//! - `trial_end: Some(TimestampOrNow::Now)` encodes as `trial_end=now`
//! - `billing_cycle_anchor: Some(BillingCycleAnchor::Unchanged)` encodes as
//!   `billing_cycle_anchor=unchanged`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod common;
pub mod coupon;
pub mod discount;
pub mod invoice_item;
pub mod invoice_line_item;
pub mod payment_settings;
pub mod promotion_code;
pub mod subscription;
pub mod subscription_item;
pub mod subscription_schedule;
pub mod usage_record_summary;

pub use common::{
    AutomaticTax, BillingThresholds, CollectionMethod, InvoiceSettings, Liability, LiabilityType,
    PaymentBehavior, ProrationBehavior, RecurringInterval, TaxBehavior, TransferData,
};
pub use coupon::{Coupon, CouponDuration, CouponId, CouponList, CouponListParams, CouponParams};
pub use discount::{Discount, DiscountId, DiscountParams};
pub use invoice_item::{
    InvoiceItem, InvoiceItemId, InvoiceItemList, InvoiceItemListParams, InvoiceItemParams,
};
pub use invoice_line_item::{
    InvoiceLineItem, InvoiceLineItemId, InvoiceLineItemList, InvoiceLineItemListParams,
    InvoiceLineItemParams, InvoiceLineItemType,
};
pub use payment_settings::{PaymentMethodType, PaymentSettings, PaymentSettingsParams};
pub use promotion_code::{
    PromotionCode, PromotionCodeId, PromotionCodeList, PromotionCodeListParams, PromotionCodeParams,
};
pub use subscription::{
    BillingCycleAnchor, Subscription, SubscriptionCancelParams, SubscriptionId, SubscriptionList,
    SubscriptionListParams, SubscriptionParams, SubscriptionResumeParams, SubscriptionSearchParams,
    SubscriptionSearchResult, SubscriptionStatus,
};
pub use subscription_item::{
    SubscriptionItem, SubscriptionItemId, SubscriptionItemList, SubscriptionItemListParams,
    SubscriptionItemParams, SubscriptionItemUsageRecordSummariesParams,
};
pub use subscription_schedule::{
    SubscriptionSchedule, SubscriptionScheduleCancelParams, SubscriptionScheduleEndBehavior,
    SubscriptionScheduleId, SubscriptionScheduleList, SubscriptionScheduleListParams,
    SubscriptionScheduleParams, SubscriptionSchedulePhase, SubscriptionScheduleReleaseParams,
    SubscriptionScheduleStatus,
};
pub use usage_record_summary::{UsageRecordSummary, UsageRecordSummaryId, UsageRecordSummaryList};
