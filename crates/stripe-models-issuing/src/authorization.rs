//! Issuing authorizations: attempts to spend with an issued card.
//!
//! An authorization is created when a card is used at a merchant. While
//! `pending_request` is set it can still be approved or declined; after that
//! the outcome of every decision is kept in `request_history`. A declined
//! authorization is an ordinary value with `approved: false`, never an error.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, BalanceTransaction, Currency,
    Expandable, List, ListParams, Metadata, Params, RangeQuery, Timestamp,
};

use crate::card::IssuingCard;
use crate::cardholder::IssuingCardholder;
use crate::common::{AmountDetails, Fleet, Fuel, MerchantData, Wallet};
use crate::token::IssuingToken;
use crate::transaction::IssuingTransaction;

def_id!(IssuingAuthorizationId, "Identifier of an issuing authorization.", prefix = "iauth_");

string_enum! {
    /// How the card details were presented.
    pub enum AuthorizationMethod {
        Chip = "chip",
        Contactless = "contactless",
        KeyedIn = "keyed_in",
        Online = "online",
        Swipe = "swipe",
    }
}

string_enum! {
    /// Channel a fraud challenge was sent over.
    pub enum FraudChallengeChannel {
        Sms = "sms",
    }
}

string_enum! {
    /// Progress of a fraud challenge.
    pub enum FraudChallengeStatus {
        Expired = "expired",
        Pending = "pending",
        Rejected = "rejected",
        Undeliverable = "undeliverable",
        Verified = "verified",
    }
}

string_enum! {
    /// Why a fraud challenge could not be sent.
    pub enum FraudChallengeUndeliverableReason {
        NoPhoneNumber = "no_phone_number",
        UnsupportedPhoneNumber = "unsupported_phone_number",
    }
}

string_enum! {
    /// Why an authorization request was approved or declined.
    pub enum RequestHistoryReason {
        AccountDisabled = "account_disabled",
        CardActive = "card_active",
        CardCanceled = "card_canceled",
        CardExpired = "card_expired",
        CardInactive = "card_inactive",
        CardholderBlocked = "cardholder_blocked",
        CardholderInactive = "cardholder_inactive",
        CardholderVerificationRequired = "cardholder_verification_required",
        InsecureAuthorizationMethod = "insecure_authorization_method",
        InsufficientFunds = "insufficient_funds",
        NotAllowed = "not_allowed",
        PinBlocked = "pin_blocked",
        SpendingControls = "spending_controls",
        SuspectedFraud = "suspected_fraud",
        VerificationFailed = "verification_failed",
        WebhookApproved = "webhook_approved",
        WebhookDeclined = "webhook_declined",
        WebhookError = "webhook_error",
        WebhookTimeout = "webhook_timeout",
    }
}

string_enum! {
    /// Lifecycle state of an authorization.
    pub enum IssuingAuthorizationStatus {
        Closed = "closed",
        Pending = "pending",
        Reversed = "reversed",
    }
}

string_enum! {
    /// Result of comparing presented data with what is on file.
    pub enum VerificationCheck {
        Match = "match",
        Mismatch = "mismatch",
        NotProvided = "not_provided",
    }
}

string_enum! {
    /// Party that claimed a strong customer authentication exemption.
    pub enum ExemptionClaimedBy {
        Acquirer = "acquirer",
        Issuer = "issuer",
    }
}

string_enum! {
    /// Kind of strong customer authentication exemption.
    pub enum ExemptionType {
        LowValueTransaction = "low_value_transaction",
        TransactionRiskAnalysis = "transaction_risk_analysis",
        ExemptionUnknown = "unknown",
    }
}

string_enum! {
    /// Outcome of 3D Secure.
    pub enum ThreeDSecureResult {
        AttemptAcknowledged = "attempt_acknowledged",
        Authenticated = "authenticated",
        Failed = "failed",
        Required = "required",
    }
}

/// A fraud challenge sent to the cardholder.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FraudChallenge {
    /// Channel the challenge was sent over.
    pub channel: Option<FraudChallengeChannel>,
    /// Progress of the challenge.
    pub status: Option<FraudChallengeStatus>,
    /// Why it could not be sent.
    pub undeliverable_reason: Option<FraudChallengeUndeliverableReason>,
}

/// Network details of an authorization.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizationNetworkData {
    /// Acquiring institution id.
    pub acquiring_institution_id: Option<String>,
    /// System trace audit number.
    pub system_trace_audit_number: Option<String>,
    /// Network transaction id.
    pub transaction_id: Option<String>,
}

/// A request awaiting an approve or decline decision.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendingRequest {
    /// Requested amount in the card currency.
    pub amount: i64,
    /// Breakdown of the amount.
    pub amount_details: Option<AmountDetails>,
    /// Card currency.
    pub currency: Option<Currency>,
    /// Whether a partial amount can be approved.
    pub is_amount_controllable: bool,
    /// Requested amount in the merchant currency.
    pub merchant_amount: i64,
    /// Merchant currency.
    pub merchant_currency: Option<Currency>,
    /// Network fraud risk score, 0 to 100.
    pub network_risk_score: Option<i64>,
}

/// One decided request on an authorization.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestHistory {
    /// Amount in the card currency.
    pub amount: i64,
    /// Breakdown of the amount.
    pub amount_details: Option<AmountDetails>,
    /// Whether the request was approved.
    pub approved: bool,
    /// Code sent to the merchant on approval.
    pub authorization_code: Option<String>,
    /// When the decision was made.
    pub created: Timestamp,
    /// Card currency.
    pub currency: Option<Currency>,
    /// Amount in the merchant currency.
    pub merchant_amount: i64,
    /// Merchant currency.
    pub merchant_currency: Option<Currency>,
    /// Network fraud risk score, 0 to 100.
    pub network_risk_score: Option<i64>,
    /// Why the request was approved or declined.
    pub reason: Option<RequestHistoryReason>,
    /// Message from the webhook that decided the request.
    pub reason_message: Option<String>,
    /// When the network received the request.
    pub requested_at: Option<Timestamp>,
}

/// Treasury flows linked to an authorization.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorizationTreasury {
    /// Received credits, from refunds.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub received_credits: Vec<String>,
    /// Received debits, from captures.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub received_debits: Vec<String>,
    /// Treasury transaction holding the funds.
    pub transaction: Option<String>,
}

/// A strong customer authentication exemption.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthenticationExemption {
    /// Party that claimed it.
    pub claimed_by: Option<ExemptionClaimedBy>,
    /// Kind of exemption.
    #[serde(rename = "type")]
    pub type_: Option<ExemptionType>,
}

/// 3D Secure details.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreeDSecure {
    /// Outcome.
    pub result: Option<ThreeDSecureResult>,
}

/// Checks performed on the presented card data.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationData {
    /// Address line 1 check.
    pub address_line1_check: Option<VerificationCheck>,
    /// Postal code check.
    pub address_postal_code_check: Option<VerificationCheck>,
    /// Authentication exemption, if claimed.
    pub authentication_exemption: Option<AuthenticationExemption>,
    /// Security code check.
    pub cvc_check: Option<VerificationCheck>,
    /// Expiry date check.
    pub expiry_check: Option<VerificationCheck>,
    /// Postal code presented.
    pub postal_code: Option<String>,
    /// 3D Secure details.
    pub three_d_secure: Option<ThreeDSecure>,
}

/// An attempt to spend with an issued card.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuingAuthorization {
    /// Amount held, in the card currency.
    pub amount: i64,
    /// Breakdown of the amount.
    pub amount_details: Option<AmountDetails>,
    /// Whether the authorization was approved.
    pub approved: bool,
    /// How the card details were presented.
    pub authorization_method: Option<AuthorizationMethod>,
    /// Balance movements caused by the authorization.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub balance_transactions: Vec<BalanceTransaction>,
    /// The card used, always expanded.
    pub card: Option<IssuingCard>,
    /// The cardholder.
    pub cardholder: Option<Expandable<IssuingCardholder>>,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Card currency.
    pub currency: Option<Currency>,
    /// Fleet details.
    pub fleet: Option<Fleet>,
    /// Fraud challenges sent to the cardholder.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub fraud_challenges: Vec<FraudChallenge>,
    /// Fuel details.
    pub fuel: Option<Fuel>,
    /// Unique identifier for the object.
    pub id: IssuingAuthorizationId,
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
    pub network_data: Option<AuthorizationNetworkData>,
    /// Always `issuing.authorization`.
    pub object: String,
    /// Request awaiting a decision.
    pub pending_request: Option<PendingRequest>,
    /// Decided requests, oldest first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub request_history: Vec<RequestHistory>,
    /// Lifecycle state.
    pub status: Option<IssuingAuthorizationStatus>,
    /// Network token used, if any.
    pub token: Option<Expandable<IssuingToken>>,
    /// Transactions captured against the authorization.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub transactions: Vec<IssuingTransaction>,
    /// Linked treasury flows.
    pub treasury: Option<AuthorizationTreasury>,
    /// Checks performed on the card data.
    pub verification_data: Option<VerificationData>,
    /// Whether a fraud challenge verified the cardholder.
    pub verified_by_fraud_challenge: Option<bool>,
    /// Wallet the card was used through.
    pub wallet: Option<Wallet>,
}

impl_object!(IssuingAuthorization, IssuingAuthorizationId, "issuing.authorization");

impl IssuingAuthorization {
    /// Whether a decision is still awaited.
    #[must_use]
    pub fn is_awaiting_decision(&self) -> bool {
        self.pending_request.is_some()
    }

    /// The most recent decided request.
    #[must_use]
    pub fn latest_request(&self) -> Option<&RequestHistory> {
        self.request_history.iter().max_by_key(|request| request.created)
    }

    /// Reason for the latest decline, if the latest request was declined.
    #[must_use]
    pub fn decline_reason(&self) -> Option<&RequestHistoryReason> {
        self.latest_request()
            .filter(|request| !request.approved)
            .and_then(|request| request.reason.as_ref())
    }

    /// Total captured by the expanded transactions, net of refunds.
    ///
    /// Transactions are signed from the card's point of view, so captures
    /// are negative. The result is positive for a net capture.
    #[must_use]
    pub fn captured_amount(&self) -> i64 {
        -self.transactions.iter().map(|transaction| transaction.amount).sum::<i64>()
    }
}

/// A page of authorizations.
pub type IssuingAuthorizationList = List<IssuingAuthorization>;

/// Update an authorization.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuingAuthorizationParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
}

impl_params!(IssuingAuthorizationParams);

/// Approve a pending authorization.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuingAuthorizationApproveParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Amount to approve, for partial approvals.
    pub amount: Option<i64>,
}

impl_params!(IssuingAuthorizationApproveParams);

/// Decline a pending authorization.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuingAuthorizationDeclineParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
}

impl_params!(IssuingAuthorizationDeclineParams);

/// List authorizations.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuingAuthorizationListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Filter by card.
    pub card: Option<String>,
    /// Filter by cardholder.
    pub cardholder: Option<String>,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Filter by status.
    pub status: Option<IssuingAuthorizationStatus>,
}

impl_list_params!(IssuingAuthorizationListParams);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::FuelType;
    use pretty_assertions::assert_eq;
    use stripe_models_core::{to_form, ParamsContainer};

    const AUTHORIZATION: &str = r#"{
        "id": "iauth_1",
        "object": "issuing.authorization",
        "amount": 0,
        "amount_details": {"atm_fee": null, "cashback_amount": 0},
        "approved": false,
        "authorization_method": "online",
        "balance_transactions": [],
        "card": {"id": "ic_1", "object": "issuing.card", "last4": "4242", "status": "active"},
        "cardholder": "ich_1",
        "created": 1700000000,
        "currency": "usd",
        "fleet": null,
        "fraud_challenges": [{"channel": "sms", "status": "undeliverable", "undeliverable_reason": "no_phone_number"}],
        "fuel": {"type": "unleaded_regular", "unit": "us_gallon", "quantity_decimal": "12.5", "unit_cost_decimal": "350.9"},
        "livemode": false,
        "merchant_amount": 5000,
        "merchant_currency": "usd",
        "merchant_data": {
            "category": "automated_fuel_dispensers",
            "category_code": "5542",
            "city": "San Francisco",
            "country": "US",
            "name": "Fuel Stop",
            "network_id": "1234567890",
            "postal_code": "94103",
            "state": "CA",
            "terminal_id": null
        },
        "metadata": {},
        "network_data": {"acquiring_institution_id": "000123", "system_trace_audit_number": "654321", "transaction_id": null},
        "pending_request": null,
        "request_history": [
            {"amount": 5000, "approved": true, "created": 1700000000, "currency": "usd",
             "merchant_amount": 5000, "merchant_currency": "usd", "reason": "webhook_approved"},
            {"amount": 7500, "approved": false, "created": 1700000100, "currency": "usd",
             "merchant_amount": 7500, "merchant_currency": "usd", "reason": "spending_controls",
             "reason_message": null}
        ],
        "status": "closed",
        "token": null,
        "transactions": [],
        "treasury": null,
        "verification_data": {
            "address_line1_check": "not_provided",
            "address_postal_code_check": "match",
            "authentication_exemption": {"claimed_by": "issuer", "type": "unknown"},
            "cvc_check": "match",
            "expiry_check": "match",
            "three_d_secure": {"result": "authenticated"}
        },
        "verified_by_fraud_challenge": null,
        "wallet": null
    }"#;

    #[test]
    fn decodes_declined_authorization() {
        let authorization: IssuingAuthorization = serde_json::from_str(AUTHORIZATION).unwrap();

        assert!(!authorization.approved);
        assert!(!authorization.is_awaiting_decision());
        assert_eq!(authorization.status, Some(IssuingAuthorizationStatus::Closed));
        assert_eq!(authorization.card.as_ref().unwrap().last4, "4242");
        assert_eq!(authorization.cardholder.as_ref().unwrap().id(), "ich_1");
        assert_eq!(authorization.decline_reason(), Some(&RequestHistoryReason::SpendingControls));
        assert_eq!(authorization.fuel.as_ref().unwrap().type_, Some(FuelType::UnleadedRegular));
        assert_eq!(
            authorization.merchant_data.as_ref().unwrap().category_code,
            "5542"
        );

        let verification = authorization.verification_data.as_ref().unwrap();
        assert_eq!(verification.address_postal_code_check, Some(VerificationCheck::Match));
        let exemption = verification.authentication_exemption.as_ref().unwrap();
        assert_eq!(exemption.type_, Some(ExemptionType::ExemptionUnknown));
        assert!(!exemption.type_.as_ref().unwrap().is_unknown());

        let challenge = &authorization.fraud_challenges[0];
        assert_eq!(
            challenge.undeliverable_reason,
            Some(FraudChallengeUndeliverableReason::NoPhoneNumber)
        );
    }

    #[test]
    fn captured_amount_nets_refunds() {
        let authorization: IssuingAuthorization = serde_json::from_value(serde_json::json!({
            "id": "iauth_2",
            "transactions": [
                {"id": "ipi_1", "amount": -1000, "type": "capture"},
                {"id": "ipi_2", "amount": 250, "type": "refund"}
            ]
        }))
        .unwrap();
        assert_eq!(authorization.captured_amount(), 750);
    }

    #[test]
    fn approve_and_decline() {
        let mut approve = IssuingAuthorizationApproveParams {
            amount: Some(2500),
            ..IssuingAuthorizationApproveParams::default()
        };
        approve.add_metadata("decided_by", "rules");
        assert_eq!(
            to_form(&approve).unwrap().encode(),
            "metadata[decided_by]=rules&amount=2500"
        );

        let decline = IssuingAuthorizationDeclineParams::default();
        assert_eq!(to_form(&decline).unwrap().encode(), "");
    }

    #[test]
    fn list_by_status() {
        let params = IssuingAuthorizationListParams {
            cardholder: Some("ich_1".into()),
            status: Some(IssuingAuthorizationStatus::Pending),
            ..IssuingAuthorizationListParams::default()
        };
        assert_eq!(to_form(&params).unwrap().encode(), "cardholder=ich_1&status=pending");
    }
}
