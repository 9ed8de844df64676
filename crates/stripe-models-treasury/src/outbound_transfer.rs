//! Outbound transfers: money moved to the account holder's own external
//! account or another of their financial accounts.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, Currency, Expandable, List,
    ListParams, Metadata, Params, Timestamp,
};

use crate::common::{
    DestinationPaymentMethodDetails, DestinationPaymentMethodOptionsParams,
    DestinationPaymentMethodType, OutboundStatusTransitions, ReturnedDetails, TrackingDetails,
};
use crate::transaction::TreasuryTransaction;

def_id!(TreasuryOutboundTransferId, "Identifier of an outbound transfer.", prefix = "obt_");

string_enum! {
    /// Lifecycle state of an outbound transfer.
    pub enum TreasuryOutboundTransferStatus {
        Canceled = "canceled",
        Failed = "failed",
        Posted = "posted",
        Processing = "processing",
        Returned = "returned",
    }
}

impl TreasuryOutboundTransferStatus {
    /// Whether the transfer can still change state.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Canceled | Self::Failed | Self::Returned)
    }
}

/// Money sent to an account owned by the financial account holder.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreasuryOutboundTransfer {
    /// Amount sent, in minor units.
    pub amount: i64,
    /// Whether the transfer can still be canceled.
    pub cancelable: bool,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Currency of the amount.
    pub currency: Option<Currency>,
    /// Internal description.
    pub description: Option<String>,
    /// Payment method funds are sent to.
    pub destination_payment_method: Option<String>,
    /// Snapshot of the destination.
    pub destination_payment_method_details: Option<DestinationPaymentMethodDetails>,
    /// Date funds are expected to arrive.
    pub expected_arrival_date: Option<Timestamp>,
    /// Financial account the funds leave.
    pub financial_account: Option<String>,
    /// Public receipt for regulatory purposes.
    pub hosted_regulatory_receipt_url: Option<String>,
    /// Unique identifier for the object.
    pub id: TreasuryOutboundTransferId,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Key/value pairs attached to the object.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Always `treasury.outbound_transfer`.
    pub object: String,
    /// Set when the transfer was returned.
    pub returned_details: Option<ReturnedDetails>,
    /// Descriptor on the recipient's statement.
    pub statement_descriptor: Option<String>,
    /// Lifecycle state.
    pub status: Option<TreasuryOutboundTransferStatus>,
    /// Status change times.
    pub status_transitions: Option<OutboundStatusTransitions>,
    /// Network references, once posted.
    pub tracking_details: Option<TrackingDetails>,
    /// Transaction that moved the funds.
    pub transaction: Option<Expandable<TreasuryTransaction>>,
}

impl_object!(TreasuryOutboundTransfer, TreasuryOutboundTransferId, "treasury.outbound_transfer");

/// A page of outbound transfers.
pub type TreasuryOutboundTransferList = List<TreasuryOutboundTransfer>;

/// A financial account destination created inline with the transfer.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutboundTransferDestinationDataParams {
    /// Financial account to move funds into.
    pub financial_account: Option<String>,
    /// Kind of destination. Only `financial_account` is accepted here.
    #[serde(rename = "type")]
    pub type_: Option<DestinationPaymentMethodType>,
}

/// Create or retrieve an outbound transfer.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryOutboundTransferParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Amount to send, in minor units.
    pub amount: Option<i64>,
    /// Currency of the amount.
    pub currency: Option<Currency>,
    /// Internal description.
    pub description: Option<String>,
    /// Existing payment method to send to.
    pub destination_payment_method: Option<String>,
    /// Destination created inline.
    pub destination_payment_method_data: Option<OutboundTransferDestinationDataParams>,
    /// Per-type destination options.
    pub destination_payment_method_options: Option<DestinationPaymentMethodOptionsParams>,
    /// Financial account to send from.
    pub financial_account: Option<String>,
    /// Descriptor on the recipient's statement.
    pub statement_descriptor: Option<String>,
}

impl_params!(TreasuryOutboundTransferParams);

impl TreasuryOutboundTransferParams {
    /// Move `amount` from one financial account to another.
    #[must_use]
    pub fn between_accounts(
        from: impl Into<String>,
        to: impl Into<String>,
        amount: i64,
        currency: Currency,
    ) -> Self {
        Self {
            amount: Some(amount),
            currency: Some(currency),
            destination_payment_method_data: Some(OutboundTransferDestinationDataParams {
                financial_account: Some(to.into()),
                type_: Some(DestinationPaymentMethodType::FinancialAccount),
            }),
            financial_account: Some(from.into()),
            ..Self::default()
        }
    }
}

/// Cancel a processing outbound transfer.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryOutboundTransferCancelParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Transfer to cancel.
    #[serde(skip)]
    pub id: String,
}

impl_params!(TreasuryOutboundTransferCancelParams);

/// List outbound transfers of a financial account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryOutboundTransferListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Financial account to list. Required.
    pub financial_account: Option<String>,
    /// Filter by status.
    pub status: Option<TreasuryOutboundTransferStatus>,
}

impl_list_params!(TreasuryOutboundTransferListParams);
