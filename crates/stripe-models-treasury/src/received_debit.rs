//! Received debits: funds pulled out of a financial account by an outside party.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, Currency, Expandable, List,
    ListParams, Params, Timestamp,
};

use crate::common::{InitiatingPaymentMethodDetails, ReversalDetails};
use crate::transaction::TreasuryTransaction;

def_id!(TreasuryReceivedDebitId, "Identifier of a received debit.", prefix = "rd_");

string_enum! {
    /// Why a received debit failed.
    pub enum ReceivedDebitFailureCode {
        AccountClosed = "account_closed",
        AccountFrozen = "account_frozen",
        InsufficientFunds = "insufficient_funds",
        InternationalTransaction = "international_transaction",
        Other = "other",
    }
}

string_enum! {
    /// Rail the debit arrived on.
    pub enum ReceivedDebitNetwork {
        Ach = "ach",
        Card = "card",
        Stripe = "stripe",
    }
}

string_enum! {
    /// Outcome of a received debit.
    pub enum TreasuryReceivedDebitStatus {
        Failed = "failed",
        Succeeded = "succeeded",
    }
}

/// Other objects linked to a received debit.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceivedDebitLinkedFlows {
    /// Reversal of this debit.
    pub debit_reversal: Option<String>,
    /// Inbound transfer that pulled the funds.
    pub inbound_transfer: Option<String>,
    /// Card authorization that pulled the funds.
    pub issuing_authorization: Option<String>,
    /// Card transaction that pulled the funds.
    pub issuing_transaction: Option<String>,
    /// Payout that pulled the funds.
    pub payout: Option<String>,
}

/// Funds pulled from a financial account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreasuryReceivedDebit {
    /// Amount pulled, in minor units.
    pub amount: i64,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Currency of the amount.
    pub currency: Option<Currency>,
    /// Description sent by the originator.
    pub description: Option<String>,
    /// Set when the debit failed.
    pub failure_code: Option<ReceivedDebitFailureCode>,
    /// Financial account the funds left.
    pub financial_account: Option<String>,
    /// Public receipt for regulatory purposes.
    pub hosted_regulatory_receipt_url: Option<String>,
    /// Unique identifier for the object.
    pub id: TreasuryReceivedDebitId,
    /// The puller's payment method.
    pub initiating_payment_method_details: Option<InitiatingPaymentMethodDetails>,
    /// Linked objects.
    pub linked_flows: Option<ReceivedDebitLinkedFlows>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Rail used.
    pub network: Option<ReceivedDebitNetwork>,
    /// Always `treasury.received_debit`.
    pub object: String,
    /// Whether the debit can be reversed.
    pub reversal_details: Option<ReversalDetails>,
    /// Outcome.
    pub status: Option<TreasuryReceivedDebitStatus>,
    /// Transaction that moved the funds.
    pub transaction: Option<Expandable<TreasuryTransaction>>,
}

impl_object!(TreasuryReceivedDebit, TreasuryReceivedDebitId, "treasury.received_debit");

impl TreasuryReceivedDebit {
    /// Whether the debit bounced for lack of funds.
    #[must_use]
    pub fn is_insufficient_funds(&self) -> bool {
        self.failure_code == Some(ReceivedDebitFailureCode::InsufficientFunds)
    }

    /// Whether a debit reversal created at `at` would be accepted.
    #[must_use]
    pub fn is_reversible_at(&self, at: Timestamp) -> bool {
        self.status == Some(TreasuryReceivedDebitStatus::Succeeded)
            && self
                .reversal_details
                .as_ref()
                .is_some_and(|details| details.is_reversible_at(at))
    }
}

/// A page of received debits.
pub type TreasuryReceivedDebitList = List<TreasuryReceivedDebit>;

/// Retrieve a received debit.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryReceivedDebitParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
}

impl_params!(TreasuryReceivedDebitParams);

/// List received debits of a financial account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryReceivedDebitListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Financial account to list. Required.
    pub financial_account: Option<String>,
    /// Filter by status.
    pub status: Option<TreasuryReceivedDebitStatus>,
}

impl_list_params!(TreasuryReceivedDebitListParams);
