//! Outbound payments: money sent from a financial account to a third party.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, Currency, Expandable, List,
    ListParams, Metadata, Params, RangeQuery, Timestamp,
};

use crate::common::{
    BillingDetailsParams, DestinationPaymentMethodDetails, DestinationPaymentMethodOptionsParams,
    DestinationPaymentMethodType, OutboundStatusTransitions, ReturnedDetails, TrackingDetails,
    UsBankAccountHolderType, UsBankAccountType,
};
use crate::transaction::TreasuryTransaction;

def_id!(TreasuryOutboundPaymentId, "Identifier of an outbound payment.", prefix = "obp_");

string_enum! {
    /// Lifecycle state of an outbound payment.
    pub enum TreasuryOutboundPaymentStatus {
        Canceled = "canceled",
        Failed = "failed",
        Posted = "posted",
        Processing = "processing",
        Returned = "returned",
    }
}

impl TreasuryOutboundPaymentStatus {
    /// Whether the payment can still change state. A posted payment may
    /// still be returned.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Canceled | Self::Failed | Self::Returned)
    }
}

/// The person who asked for the payment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndUserDetails {
    /// IP address of the user.
    pub ip_address: Option<String>,
    /// Whether the user was present when the payment was made.
    pub present: bool,
}

/// Money sent to a third party's bank account or financial account.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreasuryOutboundPayment {
    /// Amount sent, in minor units.
    pub amount: i64,
    /// Whether the payment can still be canceled.
    pub cancelable: bool,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Currency of the amount.
    pub currency: Option<Currency>,
    /// Customer that owns the destination.
    pub customer: Option<String>,
    /// Internal description.
    pub description: Option<String>,
    /// Payment method funds are sent to.
    pub destination_payment_method: Option<String>,
    /// Snapshot of the destination.
    pub destination_payment_method_details: Option<DestinationPaymentMethodDetails>,
    /// The user who made the payment.
    pub end_user_details: Option<EndUserDetails>,
    /// Date funds are expected to arrive.
    pub expected_arrival_date: Option<Timestamp>,
    /// Financial account the funds leave.
    pub financial_account: Option<String>,
    /// Public receipt for regulatory purposes.
    pub hosted_regulatory_receipt_url: Option<String>,
    /// Unique identifier for the object.
    pub id: TreasuryOutboundPaymentId,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Key/value pairs attached to the object.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Always `treasury.outbound_payment`.
    pub object: String,
    /// Set when the payment was returned.
    pub returned_details: Option<ReturnedDetails>,
    /// Descriptor on the recipient's statement.
    pub statement_descriptor: Option<String>,
    /// Lifecycle state.
    pub status: Option<TreasuryOutboundPaymentStatus>,
    /// Status change times.
    pub status_transitions: Option<OutboundStatusTransitions>,
    /// Network references, once posted.
    pub tracking_details: Option<TrackingDetails>,
    /// Transaction that moved the funds.
    pub transaction: Option<Expandable<TreasuryTransaction>>,
}

impl_object!(TreasuryOutboundPayment, TreasuryOutboundPaymentId, "treasury.outbound_payment");

/// A page of outbound payments.
pub type TreasuryOutboundPaymentList = List<TreasuryOutboundPayment>;

/// US bank account details for a new destination.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsBankAccountParams {
    /// Owner type.
    pub account_holder_type: Option<UsBankAccountHolderType>,
    /// Account number.
    pub account_number: Option<String>,
    /// Account type.
    pub account_type: Option<UsBankAccountType>,
    /// Financial Connections account to use instead of raw numbers.
    pub financial_connections_account: Option<String>,
    /// Routing number.
    pub routing_number: Option<String>,
}

/// A destination created inline with the payment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutboundPaymentDestinationDataParams {
    /// Billing details.
    pub billing_details: Option<BillingDetailsParams>,
    /// Financial account to pay into.
    pub financial_account: Option<String>,
    /// Metadata of the new payment method.
    pub metadata: Option<Metadata>,
    /// Kind of destination.
    #[serde(rename = "type")]
    pub type_: Option<DestinationPaymentMethodType>,
    /// US bank account to pay into.
    pub us_bank_account: Option<UsBankAccountParams>,
}

/// Details of the user making the payment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EndUserDetailsParams {
    /// IP address of the user. Required when `present` is true.
    pub ip_address: Option<String>,
    /// Whether the user is present.
    pub present: Option<bool>,
}

/// Create or retrieve an outbound payment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryOutboundPaymentParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Amount to send, in minor units.
    pub amount: Option<i64>,
    /// Currency of the amount.
    pub currency: Option<Currency>,
    /// Customer that owns the destination.
    pub customer: Option<String>,
    /// Internal description.
    pub description: Option<String>,
    /// Existing payment method to send to.
    pub destination_payment_method: Option<String>,
    /// Destination created inline.
    pub destination_payment_method_data: Option<OutboundPaymentDestinationDataParams>,
    /// Per-type destination options.
    pub destination_payment_method_options: Option<DestinationPaymentMethodOptionsParams>,
    /// The user making the payment.
    pub end_user_details: Option<EndUserDetailsParams>,
    /// Financial account to send from.
    pub financial_account: Option<String>,
    /// Descriptor on the recipient's statement.
    pub statement_descriptor: Option<String>,
}

impl_params!(TreasuryOutboundPaymentParams);

/// Cancel a processing outbound payment.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryOutboundPaymentCancelParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Payment to cancel.
    #[serde(skip)]
    pub id: String,
}

impl_params!(TreasuryOutboundPaymentCancelParams);

/// List outbound payments of a financial account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryOutboundPaymentListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Filter by customer.
    pub customer: Option<String>,
    /// Financial account to list. Required.
    pub financial_account: Option<String>,
    /// Filter by status.
    pub status: Option<TreasuryOutboundPaymentStatus>,
}

impl_list_params!(TreasuryOutboundPaymentListParams);
