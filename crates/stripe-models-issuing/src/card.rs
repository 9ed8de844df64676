//! Issuing cards: physical and virtual cards issued to cardholders.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, Address, AddressParams,
    Currency, Expandable, IssuingPersonalizationDesign, List, ListParams, Metadata, Params,
    RangeQuery, Timestamp,
};

use crate::cardholder::IssuingCardholder;
use crate::common::{SpendingControls, SpendingControlsParams};

def_id!(IssuingCardId, "Identifier of an issuing card.", prefix = "ic_");

string_enum! {
    /// Why a card was canceled.
    pub enum CardCancellationReason {
        DesignRejected = "design_rejected",
        Lost = "lost",
        Stolen = "stolen",
    }
}

string_enum! {
    /// Why a card was replaced.
    pub enum CardReplacementReason {
        Damaged = "damaged",
        Expired = "expired",
        Lost = "lost",
        Stolen = "stolen",
    }
}

string_enum! {
    /// How the shipping address is checked.
    pub enum AddressValidationMode {
        Disabled = "disabled",
        NormalizationOnly = "normalization_only",
        ValidationAndNormalization = "validation_and_normalization",
    }
}

string_enum! {
    /// Outcome of shipping address validation.
    pub enum AddressValidationResult {
        Indeterminate = "indeterminate",
        LikelyDeliverable = "likely_deliverable",
        LikelyUndeliverable = "likely_undeliverable",
    }
}

string_enum! {
    /// Delivery company.
    pub enum ShippingCarrier {
        Dhl = "dhl",
        Fedex = "fedex",
        RoyalMail = "royal_mail",
        Usps = "usps",
    }
}

string_enum! {
    /// Delivery speed.
    pub enum ShippingService {
        Express = "express",
        Priority = "priority",
        Standard = "standard",
    }
}

string_enum! {
    /// Delivery progress.
    pub enum ShippingStatus {
        Canceled = "canceled",
        Delivered = "delivered",
        Failure = "failure",
        Pending = "pending",
        Returned = "returned",
        Shipped = "shipped",
        Submitted = "submitted",
    }
}

string_enum! {
    /// Whether cards ship together or one by one.
    pub enum ShippingType {
        Bulk = "bulk",
        Individual = "individual",
    }
}

string_enum! {
    /// Whether a card can be used.
    pub enum IssuingCardStatus {
        Active = "active",
        Canceled = "canceled",
        Inactive = "inactive",
    }
}

string_enum! {
    /// Physical or virtual card.
    pub enum IssuingCardType {
        Physical = "physical",
        Virtual = "virtual",
    }
}

string_enum! {
    /// Why a card cannot be added to a wallet.
    pub enum WalletIneligibleReason {
        MissingAgreement = "missing_agreement",
        MissingCardholderContact = "missing_cardholder_contact",
        UnsupportedRegion = "unsupported_region",
    }
}

/// Validation of the shipping address.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressValidation {
    /// How the address is checked.
    pub mode: Option<AddressValidationMode>,
    /// The address after normalization.
    pub normalized_address: Option<Address>,
    /// Outcome of the check.
    pub result: Option<AddressValidationResult>,
}

/// Customs details for international shipping.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShippingCustoms {
    /// Economic Operators Registration and Identification number.
    pub eori_number: Option<String>,
}

/// Delivery of a physical card.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardShipping {
    /// Delivery address.
    pub address: Address,
    /// Validation of the address.
    pub address_validation: Option<AddressValidation>,
    /// Delivery company.
    pub carrier: Option<ShippingCarrier>,
    /// Customs details.
    pub customs: Option<ShippingCustoms>,
    /// Estimated delivery time.
    pub eta: Option<Timestamp>,
    /// Recipient name.
    pub name: String,
    /// Recipient phone number.
    pub phone_number: Option<String>,
    /// Whether delivery needs a signature.
    pub require_signature: Option<bool>,
    /// Delivery speed.
    pub service: Option<ShippingService>,
    /// Delivery progress.
    pub status: Option<ShippingStatus>,
    /// Carrier tracking number.
    pub tracking_number: Option<String>,
    /// Carrier tracking page.
    pub tracking_url: Option<String>,
    /// Bulk or individual.
    #[serde(rename = "type")]
    pub type_: Option<ShippingType>,
}

/// Eligibility of a card for one wallet.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletEligibility {
    /// Whether the card can be added.
    pub eligible: bool,
    /// Why it cannot.
    pub ineligible_reason: Option<WalletIneligibleReason>,
}

/// Digital wallet eligibility of a card.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardWallets {
    /// Apple Pay.
    pub apple_pay: Option<WalletEligibility>,
    /// Google Pay.
    pub google_pay: Option<WalletEligibility>,
    /// Unique identifier for a card used with digital wallets.
    pub primary_account_identifier: Option<String>,
}

/// A card issued to a cardholder.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuingCard {
    /// Card brand.
    pub brand: String,
    /// Why the card was canceled.
    pub cancellation_reason: Option<CardCancellationReason>,
    /// The cardholder, always expanded.
    pub cardholder: Option<IssuingCardholder>,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Currency of the card.
    pub currency: Option<Currency>,
    /// Card security code. Only present when expanded.
    pub cvc: Option<String>,
    /// Expiration month.
    pub exp_month: i64,
    /// Expiration year.
    pub exp_year: i64,
    /// Treasury financial account the card draws on.
    pub financial_account: Option<String>,
    /// Unique identifier for the object.
    pub id: IssuingCardId,
    /// Last four digits of the card number.
    pub last4: String,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Key/value pairs attached to the object.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Full card number. Only present when expanded.
    pub number: Option<String>,
    /// Always `issuing.card`.
    pub object: String,
    /// Design printed on a physical card.
    pub personalization_design: Option<Expandable<IssuingPersonalizationDesign>>,
    /// The card that replaced this one.
    pub replaced_by: Option<Expandable<IssuingCard>>,
    /// The card this one replaces.
    pub replacement_for: Option<Expandable<IssuingCard>>,
    /// Why this card replaces another.
    pub replacement_reason: Option<CardReplacementReason>,
    /// Delivery of a physical card.
    pub shipping: Option<CardShipping>,
    /// Restrictions on the card.
    pub spending_controls: Option<SpendingControls>,
    /// Whether the card can be used.
    pub status: Option<IssuingCardStatus>,
    /// Physical or virtual.
    #[serde(rename = "type")]
    pub type_: Option<IssuingCardType>,
    /// Digital wallet eligibility.
    pub wallets: Option<CardWallets>,
}

impl_object!(IssuingCard, IssuingCardId, "issuing.card");

impl IssuingCard {
    /// Whether the card has expired by the given year and month.
    #[must_use]
    pub fn is_expired_at(&self, year: i64, month: i64) -> bool {
        (self.exp_year, self.exp_month) < (year, month)
    }
}

/// A page of cards.
pub type IssuingCardList = List<IssuingCard>;

/// A new PIN, encrypted for the issuing PIN endpoint.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PinParams {
    /// The encrypted PIN.
    pub encrypted_number: Option<String>,
}

/// Validation of the shipping address.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AddressValidationParams {
    /// How the address is checked.
    pub mode: Option<AddressValidationMode>,
}

/// Customs details for international shipping.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShippingCustomsParams {
    /// Economic Operators Registration and Identification number.
    pub eori_number: Option<String>,
}

/// Delivery of a physical card.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardShippingParams {
    /// Delivery address.
    pub address: Option<AddressParams>,
    /// Validation of the address.
    pub address_validation: Option<AddressValidationParams>,
    /// Customs details.
    pub customs: Option<ShippingCustomsParams>,
    /// Recipient name.
    pub name: Option<String>,
    /// Recipient phone number.
    pub phone_number: Option<String>,
    /// Whether delivery needs a signature.
    pub require_signature: Option<bool>,
    /// Delivery speed.
    pub service: Option<ShippingService>,
    /// Bulk or individual.
    #[serde(rename = "type")]
    pub type_: Option<ShippingType>,
}

/// Create or update a card.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuingCardParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Reason given when canceling.
    pub cancellation_reason: Option<CardCancellationReason>,
    /// Cardholder to issue to. Required on create.
    pub cardholder: Option<String>,
    /// Currency of the card. Required on create.
    pub currency: Option<Currency>,
    /// Treasury financial account to draw on.
    pub financial_account: Option<String>,
    /// Design printed on a physical card.
    pub personalization_design: Option<String>,
    /// New PIN.
    pub pin: Option<PinParams>,
    /// Card this one replaces.
    pub replacement_for: Option<String>,
    /// Why this card replaces another.
    pub replacement_reason: Option<CardReplacementReason>,
    /// Second line printed on a physical card.
    pub second_line: Option<String>,
    /// Delivery of a physical card.
    pub shipping: Option<CardShippingParams>,
    /// Restrictions on the card.
    pub spending_controls: Option<SpendingControlsParams>,
    /// Activate, deactivate or cancel the card.
    pub status: Option<IssuingCardStatus>,
    /// Physical or virtual. Required on create.
    #[serde(rename = "type")]
    pub type_: Option<IssuingCardType>,
}

impl_params!(IssuingCardParams);

impl IssuingCardParams {
    /// Issue a virtual card to `cardholder`.
    #[must_use]
    pub fn virtual_card(cardholder: impl Into<String>, currency: Currency) -> Self {
        Self {
            cardholder: Some(cardholder.into()),
            currency: Some(currency),
            type_: Some(IssuingCardType::Virtual),
            ..Self::default()
        }
    }
}

/// List cards.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuingCardListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Filter by cardholder.
    pub cardholder: Option<String>,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Filter by expiration month.
    pub exp_month: Option<i64>,
    /// Filter by expiration year.
    pub exp_year: Option<i64>,
    /// Filter by last four digits.
    pub last4: Option<String>,
    /// Filter by design.
    pub personalization_design: Option<String>,
    /// Filter by status.
    pub status: Option<IssuingCardStatus>,
    /// Filter by type.
    #[serde(rename = "type")]
    pub type_: Option<IssuingCardType>,
}

impl_list_params!(IssuingCardListParams);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stripe_models_core::{to_form, ListParamsContainer, Object};

    #[test]
    fn decodes_physical_card() {
        let card: IssuingCard = serde_json::from_str(
            r#"{
                "id": "ic_1",
                "object": "issuing.card",
                "brand": "Visa",
                "cancellation_reason": null,
                "cardholder": {"id": "ich_1", "object": "issuing.cardholder", "name": "Jenny Rosen", "status": "active"},
                "created": 1700000000,
                "currency": "usd",
                "exp_month": 8,
                "exp_year": 2027,
                "last4": "4242",
                "livemode": false,
                "metadata": {},
                "personalization_design": "ipcd_1",
                "replaced_by": null,
                "replacement_for": {"id": "ic_0", "object": "issuing.card", "status": "canceled"},
                "replacement_reason": "damaged",
                "shipping": {
                    "address": {"city": "London", "country": "GB", "line1": "1 Main St", "postal_code": "N1 1AA"},
                    "address_validation": {"mode": "normalization_only", "normalized_address": null, "result": "likely_deliverable"},
                    "carrier": "royal_mail",
                    "eta": 1700600000,
                    "name": "Jenny Rosen",
                    "service": "standard",
                    "status": "shipped",
                    "tracking_number": "RM123",
                    "type": "individual"
                },
                "spending_controls": {"spending_limits": []},
                "status": "active",
                "type": "physical",
                "wallets": {"apple_pay": {"eligible": false, "ineligible_reason": "missing_agreement"},
                            "google_pay": {"eligible": true, "ineligible_reason": null},
                            "primary_account_identifier": null}
            }"#,
        )
        .unwrap();

        assert_eq!(card.type_, Some(IssuingCardType::Physical));
        assert_eq!(card.cardholder.as_ref().unwrap().name, "Jenny Rosen");
        assert_eq!(card.personalization_design.as_ref().unwrap().id(), "ipcd_1");

        let previous = card.replacement_for.as_ref().unwrap().as_object().unwrap();
        assert_eq!(previous.status, Some(IssuingCardStatus::Canceled));

        let shipping = card.shipping.as_ref().unwrap();
        assert_eq!(shipping.carrier, Some(ShippingCarrier::RoyalMail));
        assert_eq!(shipping.status, Some(ShippingStatus::Shipped));

        let wallets = card.wallets.as_ref().unwrap();
        assert_eq!(
            wallets.apple_pay.as_ref().unwrap().ineligible_reason,
            Some(WalletIneligibleReason::MissingAgreement)
        );

        assert!(!card.is_expired_at(2027, 8));
        assert!(card.is_expired_at(2027, 9));
    }

    #[test]
    fn bare_id_reference() {
        let card: Expandable<IssuingCard> = serde_json::from_str(r#""ic_9""#).unwrap();
        assert_eq!(card.into_object(), IssuingCard::from_id("ic_9".into()));
    }

    #[test]
    fn encodes_virtual_card() {
        let mut params = IssuingCardParams::virtual_card("ich_1", Currency::EUR);
        params.pin = Some(PinParams {
            encrypted_number: Some("enc_abc".into()),
        });
        assert_eq!(
            to_form(&params).unwrap().encode(),
            "cardholder=ich_1&currency=eur&pin[encrypted_number]=enc_abc&type=virtual"
        );
    }

    #[test]
    fn encodes_list_filters() {
        let mut params = IssuingCardListParams {
            status: Some(IssuingCardStatus::Active),
            last4: Some("4242".into()),
            ..IssuingCardListParams::default()
        };
        params.set_limit(5);
        assert_eq!(to_form(&params).unwrap().encode(), "limit=5&last4=4242&status=active");
    }
}
