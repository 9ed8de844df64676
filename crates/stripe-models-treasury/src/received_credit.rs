//! Received credits: funds pushed into a financial account from outside.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, Currency, Expandable, List,
    ListParams, Params, Payout, Timestamp,
};

use crate::common::{InitiatingPaymentMethodDetails, ReversalDetails};
use crate::credit_reversal::TreasuryCreditReversal;
use crate::outbound_payment::TreasuryOutboundPayment;
use crate::outbound_transfer::TreasuryOutboundTransfer;
use crate::transaction::TreasuryTransaction;

def_id!(TreasuryReceivedCreditId, "Identifier of a received credit.", prefix = "rc_");

string_enum! {
    /// Why a received credit failed.
    pub enum ReceivedCreditFailureCode {
        AccountClosed = "account_closed",
        AccountFrozen = "account_frozen",
        InternationalTransaction = "international_transaction",
        Other = "other",
    }
}

string_enum! {
    /// Rail the credit arrived on.
    pub enum ReceivedCreditNetwork {
        Ach = "ach",
        Card = "card",
        Stripe = "stripe",
        UsDomesticWire = "us_domestic_wire",
    }
}

string_enum! {
    /// Outcome of a received credit.
    pub enum TreasuryReceivedCreditStatus {
        Failed = "failed",
        Succeeded = "succeeded",
    }
}

string_enum! {
    /// Kind of Stripe flow that sent the credit.
    pub enum SourceFlowType {
        CreditReversal = "credit_reversal",
        Other = "other",
        OutboundPayment = "outbound_payment",
        OutboundTransfer = "outbound_transfer",
        Payout = "payout",
    }
}

/// The Stripe flow that sent the credit. Only present when expanded.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceFlowDetails {
    /// Set for credit reversals.
    pub credit_reversal: Option<Box<TreasuryCreditReversal>>,
    /// Set for outbound payments.
    pub outbound_payment: Option<Box<TreasuryOutboundPayment>>,
    /// Set for outbound transfers.
    pub outbound_transfer: Option<Box<TreasuryOutboundTransfer>>,
    /// Set for payouts.
    pub payout: Option<Box<Payout>>,
    /// Which flow is set.
    #[serde(rename = "type")]
    pub type_: Option<SourceFlowType>,
}

/// Other objects linked to a received credit.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceivedCreditLinkedFlows {
    /// Reversal of this credit.
    pub credit_reversal: Option<String>,
    /// Card authorization that produced the credit.
    pub issuing_authorization: Option<String>,
    /// Card transaction that produced the credit.
    pub issuing_transaction: Option<String>,
    /// Id of the Stripe flow that sent the credit.
    pub source_flow: Option<String>,
    /// The Stripe flow itself, when expanded.
    pub source_flow_details: Option<SourceFlowDetails>,
    /// Kind of `source_flow`.
    pub source_flow_type: Option<SourceFlowType>,
}

/// Funds received into a financial account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreasuryReceivedCredit {
    /// Amount received, in minor units.
    pub amount: i64,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Currency of the amount.
    pub currency: Option<Currency>,
    /// Description sent by the originator.
    pub description: Option<String>,
    /// Set when the credit failed.
    pub failure_code: Option<ReceivedCreditFailureCode>,
    /// Financial account that received the funds.
    pub financial_account: Option<String>,
    /// Public receipt for regulatory purposes.
    pub hosted_regulatory_receipt_url: Option<String>,
    /// Unique identifier for the object.
    pub id: TreasuryReceivedCreditId,
    /// The sender's payment method.
    pub initiating_payment_method_details: Option<InitiatingPaymentMethodDetails>,
    /// Linked objects.
    pub linked_flows: Option<ReceivedCreditLinkedFlows>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Rail used.
    pub network: Option<ReceivedCreditNetwork>,
    /// Always `treasury.received_credit`.
    pub object: String,
    /// Whether the credit can be reversed.
    pub reversal_details: Option<ReversalDetails>,
    /// Outcome.
    pub status: Option<TreasuryReceivedCreditStatus>,
    /// Transaction that moved the funds.
    pub transaction: Option<Expandable<TreasuryTransaction>>,
}

impl_object!(TreasuryReceivedCredit, TreasuryReceivedCreditId, "treasury.received_credit");

impl TreasuryReceivedCredit {
    /// Whether a credit reversal created at `at` would be accepted.
    #[must_use]
    pub fn is_reversible_at(&self, at: Timestamp) -> bool {
        self.status == Some(TreasuryReceivedCreditStatus::Succeeded)
            && self
                .reversal_details
                .as_ref()
                .is_some_and(|details| details.is_reversible_at(at))
    }
}

/// A page of received credits.
pub type TreasuryReceivedCreditList = List<TreasuryReceivedCredit>;

/// Retrieve a received credit.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryReceivedCreditParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
}

impl_params!(TreasuryReceivedCreditParams);

/// Filter on linked flows.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkedFlowsFilter {
    /// Only credits sent by this kind of flow.
    pub source_flow_type: Option<SourceFlowType>,
}

/// List received credits of a financial account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryReceivedCreditListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Financial account to list. Required.
    pub financial_account: Option<String>,
    /// Filter on linked flows.
    pub linked_flows: Option<LinkedFlowsFilter>,
    /// Filter by status.
    pub status: Option<TreasuryReceivedCreditStatus>,
}

impl_list_params!(TreasuryReceivedCreditListParams);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{InitiatingPaymentMethodType, ReversalRestrictedReason};
    use pretty_assertions::assert_eq;
    use stripe_models_core::to_form;

    const PAYOUT_CREDIT: &str = r#"{
        "id": "rc_1",
        "object": "treasury.received_credit",
        "amount": 50000,
        "created": 1700000000,
        "currency": "usd",
        "description": "Stripe payout",
        "failure_code": null,
        "financial_account": "fa_1",
        "hosted_regulatory_receipt_url": null,
        "initiating_payment_method_details": {
            "type": "balance",
            "balance": "payments",
            "billing_details": {"address": {"country": "US"}, "email": null, "name": "Acme"}
        },
        "linked_flows": {
            "credit_reversal": null,
            "issuing_authorization": null,
            "issuing_transaction": null,
            "source_flow": "po_1",
            "source_flow_details": {
                "type": "payout",
                "payout": {"id": "po_1", "object": "payout", "amount": 50000, "method": "standard"}
            },
            "source_flow_type": "payout"
        },
        "livemode": false,
        "network": "stripe",
        "reversal_details": {"deadline": 1700432000, "restricted_reason": null},
        "status": "succeeded",
        "transaction": "trxn_1"
    }"#;

    #[test]
    fn decodes_payout_credit() {
        let credit: TreasuryReceivedCredit = serde_json::from_str(PAYOUT_CREDIT).unwrap();

        assert_eq!(credit.network, Some(ReceivedCreditNetwork::Stripe));
        let method = credit.initiating_payment_method_details.as_ref().unwrap();
        assert_eq!(method.type_, Some(InitiatingPaymentMethodType::Balance));

        let flows = credit.linked_flows.as_ref().unwrap();
        assert_eq!(flows.source_flow_type, Some(SourceFlowType::Payout));
        let payout = flows.source_flow_details.as_ref().unwrap().payout.as_ref().unwrap();
        assert_eq!(payout.id, "po_1");
        assert_eq!(payout.field("method"), Some(&serde_json::json!("standard")));
    }

    #[test]
    fn reversibility_needs_success_and_open_window() {
        let mut credit: TreasuryReceivedCredit = serde_json::from_str(PAYOUT_CREDIT).unwrap();
        assert!(credit.is_reversible_at(1_700_100_000));
        assert!(!credit.is_reversible_at(1_700_500_000));

        credit.reversal_details = Some(ReversalDetails {
            deadline: None,
            restricted_reason: Some(ReversalRestrictedReason::AlreadyReversed),
        });
        assert!(!credit.is_reversible_at(1_700_100_000));

        credit.reversal_details = None;
        assert!(!credit.is_reversible_at(1_700_100_000));

        credit.status = Some(TreasuryReceivedCreditStatus::Failed);
        credit.failure_code = Some(ReceivedCreditFailureCode::AccountFrozen);
        assert!(!credit.is_reversible_at(1_700_100_000));
    }

    #[test]
    fn list_by_source_flow_type() {
        let params = TreasuryReceivedCreditListParams {
            financial_account: Some("fa_1".into()),
            linked_flows: Some(LinkedFlowsFilter {
                source_flow_type: Some(SourceFlowType::OutboundPayment),
            }),
            status: Some(TreasuryReceivedCreditStatus::Succeeded),
            ..TreasuryReceivedCreditListParams::default()
        };
        assert_eq!(
            to_form(&params).unwrap().encode(),
            "financial_account=fa_1&linked_flows[source_flow_type]=outbound_payment&status=succeeded"
        );
    }
}
