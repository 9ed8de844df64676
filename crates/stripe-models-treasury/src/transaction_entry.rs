//! Transaction entries: the individual balance movements inside a transaction.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, Currency, Expandable, List,
    ListParams, Params, RangeQuery, Timestamp,
};

use crate::common::{BalanceImpact, FlowDetails, FlowType};
use crate::transaction::TreasuryTransaction;

def_id!(
    TreasuryTransactionEntryId,
    "Identifier of a treasury transaction entry.",
    prefix = "trxne_"
);

string_enum! {
    /// What moved the balance.
    pub enum TreasuryTransactionEntryType {
        CreditReversal = "credit_reversal",
        CreditReversalPosting = "credit_reversal_posting",
        DebitReversal = "debit_reversal",
        InboundTransfer = "inbound_transfer",
        InboundTransferReturn = "inbound_transfer_return",
        IssuingAuthorizationHold = "issuing_authorization_hold",
        IssuingAuthorizationRelease = "issuing_authorization_release",
        Other = "other",
        OutboundPayment = "outbound_payment",
        OutboundPaymentCancellation = "outbound_payment_cancellation",
        OutboundPaymentFailure = "outbound_payment_failure",
        OutboundPaymentPosting = "outbound_payment_posting",
        OutboundPaymentReturn = "outbound_payment_return",
        OutboundTransfer = "outbound_transfer",
        OutboundTransferCancellation = "outbound_transfer_cancellation",
        OutboundTransferFailure = "outbound_transfer_failure",
        OutboundTransferPosting = "outbound_transfer_posting",
        OutboundTransferReturn = "outbound_transfer_return",
        ReceivedCredit = "received_credit",
        ReceivedDebit = "received_debit",
    }
}

impl TreasuryTransactionEntryType {
    /// Whether the entry undoes an earlier one of the same flow.
    #[must_use]
    pub fn is_unwind(&self) -> bool {
        matches!(
            self,
            Self::InboundTransferReturn
                | Self::IssuingAuthorizationRelease
                | Self::OutboundPaymentCancellation
                | Self::OutboundPaymentFailure
                | Self::OutboundPaymentReturn
                | Self::OutboundTransferCancellation
                | Self::OutboundTransferFailure
                | Self::OutboundTransferReturn
        )
    }
}

string_enum! {
    /// Sort order for listing entries.
    pub enum TreasuryTransactionEntryOrderBy {
        Created = "created",
        EffectiveAt = "effective_at",
    }
}

/// One balance movement of a transaction.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreasuryTransactionEntry {
    /// Effect on each balance.
    pub balance_impact: BalanceImpact,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Currency of the balance change.
    pub currency: Option<Currency>,
    /// When the movement applies to the balance.
    pub effective_at: Timestamp,
    /// Financial account the entry is on.
    pub financial_account: Option<String>,
    /// Id of the flow behind the entry.
    pub flow: Option<String>,
    /// The flow itself. Only present when expanded.
    pub flow_details: Option<FlowDetails>,
    /// Kind of flow.
    pub flow_type: Option<FlowType>,
    /// Unique identifier for the object.
    pub id: TreasuryTransactionEntryId,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Always `treasury.transaction_entry`.
    pub object: String,
    /// Transaction the entry belongs to.
    pub transaction: Option<Expandable<TreasuryTransaction>>,
    /// What moved the balance.
    #[serde(rename = "type")]
    pub type_: Option<TreasuryTransactionEntryType>,
}

impl_object!(TreasuryTransactionEntry, TreasuryTransactionEntryId, "treasury.transaction_entry");

/// A page of transaction entries.
pub type TreasuryTransactionEntryList = List<TreasuryTransactionEntry>;

/// Retrieve a transaction entry.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryTransactionEntryParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
}

impl_params!(TreasuryTransactionEntryParams);

/// List entries of a financial account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryTransactionEntryListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Filter on effective time.
    pub effective_at: Option<RangeQuery>,
    /// Financial account to list. Required.
    pub financial_account: Option<String>,
    /// Sort order.
    pub order_by: Option<TreasuryTransactionEntryOrderBy>,
    /// Only entries of this transaction.
    pub transaction: Option<String>,
}

impl_list_params!(TreasuryTransactionEntryListParams);
