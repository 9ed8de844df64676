//! Issuing tokens: network tokens provisioned for a card in a digital wallet.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, Expandable, List, ListParams,
    Params, RangeQuery, Timestamp,
};

use crate::card::IssuingCard;

def_id!(IssuingTokenId, "Identifier of an issuing token.", prefix = "intok_");

string_enum! {
    /// Card network that issued the token.
    pub enum TokenNetwork {
        Mastercard = "mastercard",
        Visa = "visa",
    }
}

string_enum! {
    /// Kind of device the token lives on.
    pub enum TokenDeviceType {
        Other = "other",
        Phone = "phone",
        Watch = "watch",
    }
}

string_enum! {
    /// How the card number was entered into the wallet.
    pub enum CardNumberSource {
        App = "app",
        Manual = "manual",
        OnFile = "on_file",
        Other = "other",
    }
}

string_enum! {
    /// Signal reported by the wallet provider about a provisioning request.
    pub enum WalletProviderReasonCode {
        AccountCardTooNew = "account_card_too_new",
        AccountRecentlyChanged = "account_recently_changed",
        AccountTooNew = "account_too_new",
        AccountTooNewSinceLaunch = "account_too_new_since_launch",
        AdditionalDevice = "additional_device",
        DataExpired = "data_expired",
        DeferIdVDecision = "defer_id_v_decision",
        DeviceRecentlyLost = "device_recently_lost",
        GoodActivityHistory = "good_activity_history",
        HasSuspendedTokens = "has_suspended_tokens",
        HighRisk = "high_risk",
        InactiveAccount = "inactive_account",
        LongAccountTenure = "long_account_tenure",
        LowAccountScore = "low_account_score",
        LowDeviceScore = "low_device_score",
        LowPhoneNumberScore = "low_phone_number_score",
        NetworkServiceError = "network_service_error",
        OutsideHomeTerritory = "outside_home_territory",
        ProvisioningCardholderMismatch = "provisioning_cardholder_mismatch",
        ProvisioningDeviceAndCardholderMismatch = "provisioning_device_and_cardholder_mismatch",
        ProvisioningDeviceMismatch = "provisioning_device_mismatch",
        SameDeviceNoPriorAuthentication = "same_device_no_prior_authentication",
        SameDeviceSuccessfulPriorAuthentication = "same_device_successful_prior_authentication",
        SoftwareUpdate = "software_update",
        SuspiciousActivity = "suspicious_activity",
        TooManyDifferentCardholders = "too_many_different_cardholders",
        TooManyRecentAttempts = "too_many_recent_attempts",
        TooManyRecentTokens = "too_many_recent_tokens",
    }
}

string_enum! {
    /// What the wallet provider recommends doing with a provisioning request.
    pub enum SuggestedDecision {
        Approve = "approve",
        Decline = "decline",
        RequireAuth = "require_auth",
    }
}

string_enum! {
    /// Lifecycle state of a token.
    pub enum IssuingTokenStatus {
        Active = "active",
        Deleted = "deleted",
        Requested = "requested",
        Suspended = "suspended",
    }
}

string_enum! {
    /// Wallet the token was provisioned into.
    pub enum TokenWalletProvider {
        ApplePay = "apple_pay",
        GooglePay = "google_pay",
        SamsungPay = "samsung_pay",
    }
}

/// The device a token was provisioned to.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenDevice {
    /// Device fingerprint.
    pub device_fingerprint: Option<String>,
    /// IP address of the device at provisioning.
    pub ip_address: Option<String>,
    /// Geographic location of the device, as `lat,long`.
    pub location: Option<String>,
    /// Device name.
    pub name: Option<String>,
    /// Phone number of the device.
    pub phone_number: Option<String>,
    /// Kind of device.
    #[serde(rename = "type")]
    pub type_: Option<TokenDeviceType>,
}

/// Network references of a token.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenNetworkReference {
    /// Network reference of the card.
    pub card_reference_id: Option<String>,
    /// Network reference of the token.
    pub token_reference_id: Option<String>,
    /// Id of the party that requested the token.
    pub token_requestor_id: Option<String>,
    /// Name of the party that requested the token. Mastercard only.
    pub token_requestor_name: Option<String>,
    /// Risk score assigned by the network. Visa only.
    pub token_risk_score: Option<String>,
}

/// Cardholder address known to the wallet provider.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletProviderAddress {
    /// Street address.
    pub line1: Option<String>,
    /// Postal code.
    pub postal_code: Option<String>,
}

/// Risk signals from the wallet provider.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletProvider {
    /// Wallet account id.
    pub account_id: Option<String>,
    /// Trust score of the wallet account.
    pub account_trust_score: Option<i64>,
    /// Address the wallet holds for the cardholder.
    pub cardholder_address: Option<WalletProviderAddress>,
    /// Name the wallet holds for the cardholder.
    pub cardholder_name: Option<String>,
    /// How the card number was entered.
    pub card_number_source: Option<CardNumberSource>,
    /// Trust score of the device.
    pub device_trust_score: Option<i64>,
    /// Hash of the wallet account email.
    pub hashed_account_email_address: Option<String>,
    /// Signals behind the suggestion.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub reason_codes: Vec<WalletProviderReasonCode>,
    /// Recommended decision.
    pub suggested_decision: Option<SuggestedDecision>,
    /// Version of the decision model.
    pub suggested_decision_version: Option<String>,
}

/// Network data of a token.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenNetworkData {
    /// Device details.
    pub device: Option<TokenDevice>,
    /// Mastercard references.
    pub mastercard: Option<TokenNetworkReference>,
    /// Network of the token.
    #[serde(rename = "type")]
    pub type_: Option<TokenNetwork>,
    /// Visa references.
    pub visa: Option<TokenNetworkReference>,
    /// Wallet provider signals.
    pub wallet_provider: Option<WalletProvider>,
}

/// A network token for an issued card.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuingToken {
    /// Card the token represents.
    pub card: Option<Expandable<IssuingCard>>,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Fingerprint of the device.
    pub device_fingerprint: Option<String>,
    /// Unique identifier for the object.
    pub id: IssuingTokenId,
    /// Last four digits of the token number.
    pub last4: Option<String>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Card network.
    pub network: Option<TokenNetwork>,
    /// Network data. Only present when expanded.
    pub network_data: Option<TokenNetworkData>,
    /// When the network last updated the token.
    pub network_updated_at: Timestamp,
    /// Always `issuing.token`.
    pub object: String,
    /// Lifecycle state.
    pub status: Option<IssuingTokenStatus>,
    /// Wallet the token lives in.
    pub wallet_provider: Option<TokenWalletProvider>,
}

impl_object!(IssuingToken, IssuingTokenId, "issuing.token");

impl IssuingToken {
    /// The wallet provider's recommendation, when network data was expanded.
    #[must_use]
    pub fn suggested_decision(&self) -> Option<&SuggestedDecision> {
        self.network_data
            .as_ref()?
            .wallet_provider
            .as_ref()?
            .suggested_decision
            .as_ref()
    }
}

/// A page of tokens.
pub type IssuingTokenList = List<IssuingToken>;

/// Activate, suspend or delete a token.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuingTokenParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// New status: `active`, `deleted` or `suspended`.
    pub status: Option<IssuingTokenStatus>,
}

impl_params!(IssuingTokenParams);

impl IssuingTokenParams {
    /// Move the token to `status`.
    #[must_use]
    pub fn status(status: IssuingTokenStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

/// List the tokens of a card.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuingTokenListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Card whose tokens to list. Required.
    pub card: Option<String>,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Filter by status.
    pub status: Option<IssuingTokenStatus>,
}

impl_list_params!(IssuingTokenListParams);
