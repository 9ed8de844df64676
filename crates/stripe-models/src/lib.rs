//! Typed models for the Stripe REST API.
//!
//! This crate gathers the resource crates behind one import:
//!
//! - **Core**: ids, `Expandable<T>`, `List<T>`, `SearchResult<T>`, params and the form encoder
//! - **Billing** (`billing`): coupons, discounts, invoice items, subscriptions and schedules
//! - **Issuing** (`issuing`): cards, cardholders, authorizations, tokens, transactions
//! - **Treasury** (`treasury`): outbound and received flows, transactions and entries
//!
//! # Decoding and encoding
//!
//! Responses decode with [`from_json`]. Requests encode to a form body with
//! [`to_form`]:
//!
//! ```
//! use stripe_models::{from_json, to_form, Coupon, CouponDuration, CouponParams, ParamsContainer};
//!
//! let coupon: Coupon = from_json(r#"{"id":"cp_123","percent_off":50,"duration":"repeating","duration_in_months":3}"#)?;
//! assert_eq!(coupon.duration, Some(CouponDuration::Repeating));
//!
//! let mut params = CouponParams::default();
//! params.add_metadata("campaign", "spring");
//! assert_eq!(to_form(&params)?.encode(), "metadata[campaign]=spring");
//! # Ok::<(), stripe_models::Error>(())
//! ```
//!
//! No request is sent by this crate. A transport takes the encoded body and
//! the headers from [`ApiConfig::request_headers`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use stripe_models_core::*;

pub use stripe_models_billing as billing;
pub use stripe_models_issuing as issuing;
pub use stripe_models_treasury as treasury;

pub use billing::{
    BillingCycleAnchor, Coupon, CouponDuration, CouponId, CouponList, CouponListParams,
    CouponParams, Discount, DiscountId, InvoiceItem, InvoiceItemId, InvoiceItemList,
    InvoiceItemListParams, InvoiceItemParams, InvoiceLineItem, InvoiceLineItemId,
    InvoiceLineItemList, InvoiceLineItemListParams, PromotionCode, PromotionCodeId,
    PromotionCodeList, PromotionCodeListParams, PromotionCodeParams, Subscription,
    SubscriptionCancelParams, SubscriptionId, SubscriptionItem, SubscriptionItemId,
    SubscriptionItemList, SubscriptionItemListParams, SubscriptionItemParams,
    SubscriptionList, SubscriptionListParams, SubscriptionParams, SubscriptionSchedule,
    SubscriptionScheduleId, SubscriptionScheduleList, SubscriptionScheduleListParams,
    SubscriptionScheduleParams, SubscriptionSearchParams, SubscriptionSearchResult,
    SubscriptionStatus, UsageRecordSummary, UsageRecordSummaryId, UsageRecordSummaryList,
};
pub use issuing::{
    IssuingAuthorization, IssuingAuthorizationId, IssuingAuthorizationList,
    IssuingAuthorizationListParams, IssuingAuthorizationParams, IssuingCard, IssuingCardId,
    IssuingCardList, IssuingCardListParams, IssuingCardParams, IssuingCardholder,
    IssuingCardholderId, IssuingCardholderList, IssuingCardholderListParams,
    IssuingCardholderParams, IssuingToken, IssuingTokenId, IssuingTokenList,
    IssuingTokenListParams, IssuingTokenParams, IssuingTransaction, IssuingTransactionId,
    IssuingTransactionList, IssuingTransactionListParams, IssuingTransactionParams,
};
pub use treasury::{
    TreasuryCreditReversal, TreasuryCreditReversalId, TreasuryCreditReversalList,
    TreasuryCreditReversalListParams, TreasuryCreditReversalParams, TreasuryOutboundPayment,
    TreasuryOutboundPaymentId, TreasuryOutboundPaymentList, TreasuryOutboundPaymentListParams,
    TreasuryOutboundPaymentParams, TreasuryOutboundTransfer, TreasuryOutboundTransferId,
    TreasuryOutboundTransferList, TreasuryOutboundTransferListParams,
    TreasuryOutboundTransferParams, TreasuryReceivedCredit, TreasuryReceivedCreditId,
    TreasuryReceivedCreditList, TreasuryReceivedCreditListParams, TreasuryReceivedDebit,
    TreasuryReceivedDebitId, TreasuryReceivedDebitList, TreasuryReceivedDebitListParams,
    TreasuryTransaction, TreasuryTransactionEntry, TreasuryTransactionEntryId,
    TreasuryTransactionEntryList, TreasuryTransactionEntryListParams, TreasuryTransactionId,
    TreasuryTransactionList, TreasuryTransactionListParams,
};
