//! Issuing transactions: captures and refunds on issued cards.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, BalanceTransaction, Currency,
    Expandable, IssuingDispute, List, ListParams, Metadata, Params, RangeQuery, Timestamp,
};

use crate::authorization::IssuingAuthorization;
use crate::card::IssuingCard;
use crate::cardholder::IssuingCardholder;
use crate::common::{AmountDetails, Fleet, Fuel, MerchantData, Wallet};
use crate::token::IssuingToken;

def_id!(IssuingTransactionId, "Identifier of an issuing transaction.", prefix = "ipi_");

string_enum! {
    /// Whether funds left or returned to the card.
    pub enum IssuingTransactionType {
        Capture = "capture",
        Refund = "refund",
    }
}

/// Network details of a transaction.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionNetworkData {
    /// Code the merchant received on approval.
    pub authorization_code: Option<String>,
    /// Date the network processed the transaction, as `YYYY-MM-DD`.
    pub processing_date: Option<String>,
    /// Network transaction id.
    pub transaction_id: Option<String>,
}

/// One leg of a flight.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightSegment {
    /// Arrival airport code.
    pub arrival_airport_code: Option<String>,
    /// Airline.
    pub carrier: Option<String>,
    /// Departure airport code.
    pub departure_airport_code: Option<String>,
    /// Flight number.
    pub flight_number: Option<String>,
    /// Cabin class.
    pub service_class: Option<String>,
    /// Whether a stopover is allowed.
    pub stopover_allowed: Option<bool>,
}

/// Flight purchase details.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Flight {
    /// Departure time.
    pub departure_at: Option<Timestamp>,
    /// Passenger name.
    pub passenger_name: Option<String>,
    /// Whether the ticket is refundable.
    pub refundable: Option<bool>,
    /// Legs of the trip.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub segments: Vec<FlightSegment>,
    /// Agency that booked the trip.
    pub travel_agency: Option<String>,
}

/// Lodging purchase details.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Lodging {
    /// Check-in time.
    pub check_in_at: Option<Timestamp>,
    /// Number of nights.
    pub nights: Option<i64>,
}

/// One line of a merchant receipt.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptLine {
    /// Item description.
    pub description: Option<String>,
    /// Quantity bought.
    pub quantity: Option<f64>,
    /// Line total in minor units.
    pub total: Option<i64>,
    /// Unit cost in minor units.
    pub unit_cost: Option<i64>,
}

/// Itemized details the merchant sent after capture.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseDetails {
    /// Fleet details.
    pub fleet: Option<Fleet>,
    /// Flight details.
    pub flight: Option<Flight>,
    /// Fuel details.
    pub fuel: Option<Fuel>,
    /// Lodging details.
    pub lodging: Option<Lodging>,
    /// Receipt lines.
    pub receipt: Option<Vec<ReceiptLine>>,
    /// Merchant order reference.
    pub reference: Option<String>,
}

/// Treasury flows linked to a transaction.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionTreasury {
    /// Received credit created by a refund.
    pub received_credit: Option<String>,
    /// Received debit created by a capture.
    pub received_debit: Option<String>,
}

/// A capture or refund on an issued card.
///
/// Amounts are signed from the card's point of view: captures are negative
/// and refunds positive.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuingTransaction {
    /// Amount in the card currency.
    pub amount: i64,
    /// Breakdown of the amount.
    pub amount_details: Option<AmountDetails>,
    /// Authorization the transaction settles.
    pub authorization: Option<Expandable<IssuingAuthorization>>,
    /// Balance movement caused by the transaction.
    pub balance_transaction: Option<Expandable<BalanceTransaction>>,
    /// Card the transaction is on.
    pub card: Option<Expandable<IssuingCard>>,
    /// Cardholder of the card.
    pub cardholder: Option<Expandable<IssuingCardholder>>,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Card currency.
    pub currency: Option<Currency>,
    /// Dispute opened on the transaction.
    pub dispute: Option<Expandable<IssuingDispute>>,
    /// Unique identifier for the object.
    pub id: IssuingTransactionId,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Amount in the merchant currency.
    pub merchant_amount: i64,
    /// Merchant currency.
    pub merchant_currency: Option<Currency>,
    /// The merchant.
    pub merchant_data: Option<MerchantData>,
    /// Key/value pairs attached to the object.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Network details.
    pub network_data: Option<TransactionNetworkData>,
    /// Always `issuing.transaction`.
    pub object: String,
    /// Itemized details. Only present when expanded.
    pub purchase_details: Option<PurchaseDetails>,
    /// Network token used, if any.
    pub token: Option<Expandable<IssuingToken>>,
    /// Linked treasury flows.
    pub treasury: Option<TransactionTreasury>,
    /// Capture or refund.
    #[serde(rename = "type")]
    pub type_: Option<IssuingTransactionType>,
    /// Wallet the card was used through.
    pub wallet: Option<Wallet>,
}

impl_object!(IssuingTransaction, IssuingTransactionId, "issuing.transaction");

impl IssuingTransaction {
    /// Whether the transaction returned funds to the card.
    #[must_use]
    pub fn is_refund(&self) -> bool {
        self.type_ == Some(IssuingTransactionType::Refund)
    }
}

/// A page of transactions.
pub type IssuingTransactionList = List<IssuingTransaction>;

/// Update a transaction.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuingTransactionParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
}

impl_params!(IssuingTransactionParams);

/// List transactions.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuingTransactionListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Filter by card.
    pub card: Option<String>,
    /// Filter by cardholder.
    pub cardholder: Option<String>,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Filter by type.
    #[serde(rename = "type")]
    pub type_: Option<IssuingTransactionType>,
}

impl_list_params!(IssuingTransactionListParams);
