//! Credit reversals: sending a received credit back to where it came from.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, Currency, Expandable, List,
    ListParams, Metadata, Params, Timestamp,
};

use crate::transaction::TreasuryTransaction;

def_id!(TreasuryCreditReversalId, "Identifier of a credit reversal.", prefix = "credrev_");

string_enum! {
    /// Rail the reversal travels on.
    pub enum CreditReversalNetwork {
        Ach = "ach",
        Stripe = "stripe",
    }
}

string_enum! {
    /// Lifecycle state of a credit reversal.
    pub enum TreasuryCreditReversalStatus {
        Canceled = "canceled",
        Posted = "posted",
        Processing = "processing",
    }
}

/// When a credit reversal changed status.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditReversalStatusTransitions {
    /// Moved to `posted`.
    pub posted_at: Option<Timestamp>,
}

/// Funds from a received credit sent back to the originating account.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreasuryCreditReversal {
    /// Amount reversed, in minor units.
    pub amount: i64,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Currency of the amount.
    pub currency: Option<Currency>,
    /// Financial account the funds leave.
    pub financial_account: Option<String>,
    /// Public receipt for regulatory purposes.
    pub hosted_regulatory_receipt_url: Option<String>,
    /// Unique identifier for the object.
    pub id: TreasuryCreditReversalId,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Key/value pairs attached to the object.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Rail used.
    pub network: Option<CreditReversalNetwork>,
    /// Always `treasury.credit_reversal`.
    pub object: String,
    /// Received credit being reversed.
    pub received_credit: Option<String>,
    /// Lifecycle state.
    pub status: Option<TreasuryCreditReversalStatus>,
    /// Status change times.
    pub status_transitions: Option<CreditReversalStatusTransitions>,
    /// Transaction that moved the funds.
    pub transaction: Option<Expandable<TreasuryTransaction>>,
}

impl_object!(TreasuryCreditReversal, TreasuryCreditReversalId, "treasury.credit_reversal");

impl TreasuryCreditReversal {
    /// When the reversal posted, if it has.
    #[must_use]
    pub fn posted_at(&self) -> Option<Timestamp> {
        self.status_transitions?.posted_at
    }
}

/// A page of credit reversals.
pub type TreasuryCreditReversalList = List<TreasuryCreditReversal>;

/// Reverse a received credit, or retrieve a reversal.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryCreditReversalParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Received credit to reverse.
    pub received_credit: Option<String>,
}

impl_params!(TreasuryCreditReversalParams);

impl TreasuryCreditReversalParams {
    /// Reverse `received_credit`.
    #[must_use]
    pub fn reverse(received_credit: impl Into<String>) -> Self {
        Self {
            received_credit: Some(received_credit.into()),
            ..Self::default()
        }
    }
}

/// List credit reversals of a financial account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryCreditReversalListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Financial account to list. Required.
    pub financial_account: Option<String>,
    /// Filter by received credit.
    pub received_credit: Option<String>,
    /// Filter by status.
    pub status: Option<TreasuryCreditReversalStatus>,
}

impl_list_params!(TreasuryCreditReversalListParams);
