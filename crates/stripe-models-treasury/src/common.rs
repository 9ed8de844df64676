//! Shapes shared by several treasury flows.

use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use stripe_models_core::{
    string_enum, Address, AddressParams, Expandable, Mandate, Timestamp, TreasuryDebitReversal,
    TreasuryInboundTransfer,
};
use stripe_models_issuing::IssuingAuthorization;

use crate::credit_reversal::TreasuryCreditReversal;
use crate::outbound_payment::TreasuryOutboundPayment;
use crate::outbound_transfer::TreasuryOutboundTransfer;
use crate::received_credit::TreasuryReceivedCredit;
use crate::received_debit::TreasuryReceivedDebit;
use crate::transaction::TreasuryTransaction;

/// How a flow changes the three balances of a financial account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceImpact {
    /// Change to funds available now.
    pub cash: i64,
    /// Change to funds arriving later.
    pub inbound_pending: i64,
    /// Change to funds leaving later.
    pub outbound_pending: i64,
}

impl BalanceImpact {
    /// Net change across all three balances.
    #[must_use]
    pub const fn total(&self) -> i64 {
        self.cash + self.inbound_pending + self.outbound_pending
    }
}

impl Add for BalanceImpact {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            cash: self.cash + other.cash,
            inbound_pending: self.inbound_pending + other.inbound_pending,
            outbound_pending: self.outbound_pending + other.outbound_pending,
        }
    }
}

impl Sum for BalanceImpact {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

string_enum! {
    /// Kind of money movement behind a transaction.
    pub enum FlowType {
        CreditReversal = "credit_reversal",
        DebitReversal = "debit_reversal",
        InboundTransfer = "inbound_transfer",
        IssuingAuthorization = "issuing_authorization",
        Other = "other",
        OutboundPayment = "outbound_payment",
        OutboundTransfer = "outbound_transfer",
        ReceivedCredit = "received_credit",
        ReceivedDebit = "received_debit",
    }
}

/// The flow object behind a transaction or entry. Only present when
/// expanded; exactly one field matches `type`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowDetails {
    /// Credit reversal flow.
    pub credit_reversal: Option<Box<TreasuryCreditReversal>>,
    /// Debit reversal flow.
    pub debit_reversal: Option<Box<TreasuryDebitReversal>>,
    /// Inbound transfer flow.
    pub inbound_transfer: Option<Box<TreasuryInboundTransfer>>,
    /// Card authorization flow.
    pub issuing_authorization: Option<Box<IssuingAuthorization>>,
    /// Outbound payment flow.
    pub outbound_payment: Option<Box<TreasuryOutboundPayment>>,
    /// Outbound transfer flow.
    pub outbound_transfer: Option<Box<TreasuryOutboundTransfer>>,
    /// Received credit flow.
    pub received_credit: Option<Box<TreasuryReceivedCredit>>,
    /// Received debit flow.
    pub received_debit: Option<Box<TreasuryReceivedDebit>>,
    /// Which flow is set.
    #[serde(rename = "type")]
    pub type_: Option<FlowType>,
}

impl FlowDetails {
    /// Id of the flow named by `type`, if that flow is present.
    #[must_use]
    pub fn flow_id(&self) -> Option<&str> {
        match self.type_.as_ref()? {
            FlowType::CreditReversal => self.credit_reversal.as_ref().map(|f| f.id.as_str()),
            FlowType::DebitReversal => self.debit_reversal.as_ref().map(|f| f.id.as_str()),
            FlowType::InboundTransfer => self.inbound_transfer.as_ref().map(|f| f.id.as_str()),
            FlowType::IssuingAuthorization => {
                self.issuing_authorization.as_ref().map(|f| f.id.as_str())
            }
            FlowType::OutboundPayment => self.outbound_payment.as_ref().map(|f| f.id.as_str()),
            FlowType::OutboundTransfer => self.outbound_transfer.as_ref().map(|f| f.id.as_str()),
            FlowType::ReceivedCredit => self.received_credit.as_ref().map(|f| f.id.as_str()),
            FlowType::ReceivedDebit => self.received_debit.as_ref().map(|f| f.id.as_str()),
            FlowType::Other | FlowType::Unknown(_) => None,
        }
    }
}

string_enum! {
    /// Network used to move money between financial accounts.
    pub enum FinancialAccountNetwork {
        Stripe = "stripe",
    }
}

/// Financial account on the other end of a flow.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialAccountRef {
    /// Financial account id.
    pub id: Option<String>,
    /// Network used.
    pub network: Option<FinancialAccountNetwork>,
}

/// Billing details of a payment method.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingDetails {
    /// Billing address.
    pub address: Option<Address>,
    /// Email address.
    pub email: Option<String>,
    /// Full name.
    pub name: Option<String>,
}

/// Billing details sent with a new payment method.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BillingDetailsParams {
    /// Billing address.
    pub address: Option<AddressParams>,
    /// Email address.
    pub email: Option<String>,
    /// Full name.
    pub name: Option<String>,
    /// Phone number.
    pub phone: Option<String>,
}

string_enum! {
    /// Owner of a US bank account.
    pub enum UsBankAccountHolderType {
        Company = "company",
        Individual = "individual",
    }
}

string_enum! {
    /// Kind of US bank account.
    pub enum UsBankAccountType {
        Checking = "checking",
        Savings = "savings",
    }
}

string_enum! {
    /// Rail used to pay out to a US bank account.
    pub enum UsBankAccountNetwork {
        Ach = "ach",
        UsDomesticWire = "us_domestic_wire",
    }
}

string_enum! {
    /// Where outbound funds go.
    pub enum DestinationPaymentMethodType {
        FinancialAccount = "financial_account",
        UsBankAccount = "us_bank_account",
    }
}

/// US bank account an outbound flow pays into.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationUsBankAccount {
    /// Owner type.
    pub account_holder_type: Option<UsBankAccountHolderType>,
    /// Account type.
    pub account_type: Option<UsBankAccountType>,
    /// Bank name.
    pub bank_name: Option<String>,
    /// Fingerprint of the account number.
    pub fingerprint: Option<String>,
    /// Last four digits of the account number.
    pub last4: Option<String>,
    /// Debit mandate, if any.
    pub mandate: Option<Expandable<Mandate>>,
    /// Rail used.
    pub network: Option<UsBankAccountNetwork>,
    /// Routing number.
    pub routing_number: Option<String>,
}

/// Snapshot of the destination of an outbound flow.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DestinationPaymentMethodDetails {
    /// Billing details.
    pub billing_details: Option<BillingDetails>,
    /// Set when paying into a financial account.
    pub financial_account: Option<FinancialAccountRef>,
    /// Kind of destination.
    #[serde(rename = "type")]
    pub type_: Option<DestinationPaymentMethodType>,
    /// Set when paying into a US bank account.
    pub us_bank_account: Option<DestinationUsBankAccount>,
}

/// Options for a US bank account destination.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsBankAccountOptionsParams {
    /// Rail to use.
    pub network: Option<UsBankAccountNetwork>,
}

/// Per-type options for the destination.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DestinationPaymentMethodOptionsParams {
    /// US bank account options.
    pub us_bank_account: Option<UsBankAccountOptionsParams>,
}

string_enum! {
    /// Why the receiving bank sent an outbound flow back.
    pub enum ReturnedCode {
        AccountClosed = "account_closed",
        AccountFrozen = "account_frozen",
        BankAccountRestricted = "bank_account_restricted",
        BankOwnershipChanged = "bank_ownership_changed",
        Declined = "declined",
        IncorrectAccountHolderName = "incorrect_account_holder_name",
        InvalidAccountNumber = "invalid_account_number",
        InvalidCurrency = "invalid_currency",
        NoAccount = "no_account",
        Other = "other",
    }
}

/// Details of a returned outbound flow.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReturnedDetails {
    /// Reason for the return.
    pub code: Option<ReturnedCode>,
    /// Transaction that put the funds back.
    pub transaction: Option<Expandable<TreasuryTransaction>>,
}

/// When an outbound flow changed status.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutboundStatusTransitions {
    /// Moved to `canceled`.
    pub canceled_at: Option<Timestamp>,
    /// Moved to `failed`.
    pub failed_at: Option<Timestamp>,
    /// Moved to `posted`.
    pub posted_at: Option<Timestamp>,
    /// Moved to `returned`.
    pub returned_at: Option<Timestamp>,
}

string_enum! {
    /// Rail a posted outbound flow travelled on.
    pub enum TrackingType {
        Ach = "ach",
        UsDomesticWire = "us_domestic_wire",
    }
}

/// ACH tracking.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AchTracking {
    /// ACH trace id.
    pub trace_id: Option<String>,
}

/// Wire tracking. Which fields are set depends on the receiving bank.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsDomesticWireTracking {
    /// CHIPS sequence number.
    pub chips: Option<String>,
    /// Input message accountability data.
    pub imad: Option<String>,
    /// Output message accountability data.
    pub omad: Option<String>,
}

/// Network references for tracing a posted outbound flow.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackingDetails {
    /// Set for ACH.
    pub ach: Option<AchTracking>,
    /// Rail used.
    #[serde(rename = "type")]
    pub type_: Option<TrackingType>,
    /// Set for wires.
    pub us_domestic_wire: Option<UsDomesticWireTracking>,
}

impl TrackingDetails {
    /// The reference a bank would ask for: the ACH trace id, or the first
    /// wire reference present.
    #[must_use]
    pub fn reference(&self) -> Option<&str> {
        match self.type_.as_ref()? {
            TrackingType::Ach => self.ach.as_ref()?.trace_id.as_deref(),
            TrackingType::UsDomesticWire => {
                let wire = self.us_domestic_wire.as_ref()?;
                wire.imad
                    .as_deref()
                    .or(wire.omad.as_deref())
                    .or(wire.chips.as_deref())
            }
            TrackingType::Unknown(_) => None,
        }
    }
}

string_enum! {
    /// Balance a received flow was funded from.
    pub enum InitiatingBalance {
        Payments = "payments",
    }
}

string_enum! {
    /// Kind of payment method that started a received flow.
    pub enum InitiatingPaymentMethodType {
        Balance = "balance",
        FinancialAccount = "financial_account",
        IssuingCard = "issuing_card",
        Stripe = "stripe",
        UsBankAccount = "us_bank_account",
    }
}

/// US bank account that started a received flow.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitiatingUsBankAccount {
    /// Bank name.
    pub bank_name: Option<String>,
    /// Last four digits of the account number.
    pub last4: Option<String>,
    /// Routing number.
    pub routing_number: Option<String>,
}

/// The payment method on the other end of a received flow.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InitiatingPaymentMethodDetails {
    /// Set when funded from a Stripe balance.
    pub balance: Option<InitiatingBalance>,
    /// Billing details.
    pub billing_details: Option<BillingDetails>,
    /// Set when sent from another financial account.
    pub financial_account: Option<FinancialAccountRef>,
    /// Issuing card id, when sent by a card.
    pub issuing_card: Option<String>,
    /// Kind of payment method.
    #[serde(rename = "type")]
    pub type_: Option<InitiatingPaymentMethodType>,
    /// Set when sent from a US bank account.
    pub us_bank_account: Option<InitiatingUsBankAccount>,
}

string_enum! {
    /// Why a received flow cannot be reversed.
    pub enum ReversalRestrictedReason {
        AlreadyReversed = "already_reversed",
        DeadlinePassed = "deadline_passed",
        NetworkRestricted = "network_restricted",
        Other = "other",
        SourceFlowRestricted = "source_flow_restricted",
    }
}

/// Whether and until when a received flow can be reversed.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReversalDetails {
    /// Last moment a reversal is accepted.
    pub deadline: Option<Timestamp>,
    /// Set when reversal is not possible.
    pub restricted_reason: Option<ReversalRestrictedReason>,
}

impl ReversalDetails {
    /// Whether a reversal requested at `at` would be accepted.
    #[must_use]
    pub fn is_reversible_at(&self, at: Timestamp) -> bool {
        self.restricted_reason.is_none() && self.deadline.map_or(true, |deadline| at <= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn balance_impacts_add_up() {
        let hold = BalanceImpact {
            cash: -1000,
            inbound_pending: 0,
            outbound_pending: 1000,
        };
        let post = BalanceImpact {
            cash: 0,
            inbound_pending: 0,
            outbound_pending: -1000,
        };

        let net: BalanceImpact = [hold, post].into_iter().sum();
        assert_eq!(
            net,
            BalanceImpact {
                cash: -1000,
                inbound_pending: 0,
                outbound_pending: 0,
            }
        );
        assert_eq!(hold.total(), 0);
        assert_eq!(net.total(), -1000);
    }

    #[test]
    fn tracking_reference_follows_type() {
        let wire: TrackingDetails = serde_json::from_str(
            r#"{"type": "us_domestic_wire", "ach": null,
                "us_domestic_wire": {"chips": "0001", "imad": null, "omad": "20240101B1Q"}}"#,
        )
        .unwrap();
        assert_eq!(wire.reference(), Some("20240101B1Q"));

        let ach: TrackingDetails =
            serde_json::from_str(r#"{"type": "ach", "ach": {"trace_id": "021000021234567"}}"#)
                .unwrap();
        assert_eq!(ach.reference(), Some("021000021234567"));

        let rtp: TrackingDetails = serde_json::from_str(r#"{"type": "rtp"}"#).unwrap();
        assert_eq!(rtp.reference(), None);
    }

    #[test]
    fn reversal_window() {
        let open = ReversalDetails {
            deadline: Some(1_700_086_400),
            restricted_reason: None,
        };
        assert!(open.is_reversible_at(1_700_000_000));
        assert!(open.is_reversible_at(1_700_086_400));
        assert!(!open.is_reversible_at(1_700_086_401));

        let restricted = ReversalDetails {
            deadline: Some(1_700_086_400),
            restricted_reason: Some(ReversalRestrictedReason::NetworkRestricted),
        };
        assert!(!restricted.is_reversible_at(1_700_000_000));
    }

    #[test]
    fn flow_id_matches_type() {
        let details: FlowDetails = serde_json::from_str(
            r#"{"type": "inbound_transfer",
                "inbound_transfer": {"id": "ibt_1", "object": "treasury.inbound_transfer", "amount": 500}}"#,
        )
        .unwrap();
        assert_eq!(details.flow_id(), Some("ibt_1"));
        assert_eq!(
            details.inbound_transfer.as_ref().unwrap().field("amount"),
            Some(&serde_json::json!(500))
        );

        let other: FlowDetails = serde_json::from_str(r#"{"type": "other"}"#).unwrap();
        assert_eq!(other.flow_id(), None);
    }
}
