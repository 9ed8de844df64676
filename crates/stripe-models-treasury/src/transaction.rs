//! Treasury transactions: every change to a financial account balance.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, Currency, List, ListParams,
    Params, RangeQuery, Timestamp,
};

use crate::common::{BalanceImpact, FlowDetails, FlowType};
use crate::transaction_entry::TreasuryTransactionEntry;

def_id!(TreasuryTransactionId, "Identifier of a treasury transaction.", prefix = "trxn_");

string_enum! {
    /// Lifecycle state of a transaction.
    pub enum TreasuryTransactionStatus {
        Open = "open",
        Posted = "posted",
        Void = "void",
    }
}

string_enum! {
    /// Sort order for listing transactions.
    pub enum TreasuryTransactionOrderBy {
        Created = "created",
        PostedAt = "posted_at",
    }
}

/// When a transaction changed status.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionStatusTransitions {
    /// Moved to `posted`.
    pub posted_at: Option<Timestamp>,
    /// Moved to `void`.
    pub void_at: Option<Timestamp>,
}

/// A change to a financial account balance, made up of one or more entries.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreasuryTransaction {
    /// Amount of the transaction, in minor units. Negative when funds leave.
    pub amount: i64,
    /// Effect on each balance.
    pub balance_impact: BalanceImpact,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Currency of the amount.
    pub currency: Option<Currency>,
    /// Description of the transaction.
    pub description: Option<String>,
    /// Entries of the transaction. Only present when expanded.
    pub entries: Option<List<TreasuryTransactionEntry>>,
    /// Financial account the transaction is on.
    pub financial_account: Option<String>,
    /// Id of the flow behind the transaction.
    pub flow: Option<String>,
    /// The flow itself. Only present when expanded.
    pub flow_details: Option<FlowDetails>,
    /// Kind of flow.
    pub flow_type: Option<FlowType>,
    /// Unique identifier for the object.
    pub id: TreasuryTransactionId,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Always `treasury.transaction`.
    pub object: String,
    /// Lifecycle state.
    pub status: Option<TreasuryTransactionStatus>,
    /// Status change times.
    pub status_transitions: Option<TransactionStatusTransitions>,
}

impl_object!(TreasuryTransaction, TreasuryTransactionId, "treasury.transaction");

impl TreasuryTransaction {
    /// Sum of the balance impacts of the expanded entries. `None` unless
    /// `entries` was expanded.
    #[must_use]
    pub fn entries_balance_impact(&self) -> Option<BalanceImpact> {
        self.entries
            .as_ref()
            .map(|entries| entries.iter().map(|entry| entry.balance_impact).sum())
    }

    /// Whether the funds have settled.
    #[must_use]
    pub fn is_posted(&self) -> bool {
        self.status == Some(TreasuryTransactionStatus::Posted)
    }
}

/// A page of transactions.
pub type TreasuryTransactionList = List<TreasuryTransaction>;

/// Retrieve a transaction.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryTransactionParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
}

impl_params!(TreasuryTransactionParams);

/// Filter on status change times.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusTransitionsFilter {
    /// When the transaction posted.
    pub posted_at: Option<RangeQuery>,
}

/// List transactions of a financial account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryTransactionListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Financial account to list. Required.
    pub financial_account: Option<String>,
    /// Sort order.
    pub order_by: Option<TreasuryTransactionOrderBy>,
    /// Filter by status.
    pub status: Option<TreasuryTransactionStatus>,
    /// Filter on status change times.
    pub status_transitions: Option<StatusTransitionsFilter>,
}

impl_list_params!(TreasuryTransactionListParams);
