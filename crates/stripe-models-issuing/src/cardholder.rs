//! Issuing cardholders: the people or companies cards are issued to.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, Address, AddressParams,
    Expandable, File, List, ListParams, Metadata, Params, RangeQuery, Timestamp,
};

use crate::common::{SpendingControls, SpendingControlsParams};

def_id!(IssuingCardholderId, "Identifier of an issuing cardholder.", prefix = "ich_");

string_enum! {
    /// Language a cardholder prefers for notifications.
    pub enum PreferredLocale {
        De = "de",
        En = "en",
        Es = "es",
        Fr = "fr",
        It = "it",
    }
}

string_enum! {
    /// Why a cardholder cannot use their cards.
    pub enum CardholderDisabledReason {
        Listed = "listed",
        RejectedListed = "rejected.listed",
        RequirementsPastDue = "requirements.past_due",
        UnderReview = "under_review",
    }
}

string_enum! {
    /// Whether a cardholder can be issued cards and authorize with them.
    pub enum IssuingCardholderStatus {
        Active = "active",
        Blocked = "blocked",
        Inactive = "inactive",
    }
}

string_enum! {
    /// Whether the cardholder is a person or a business.
    pub enum IssuingCardholderType {
        Company = "company",
        Individual = "individual",
    }
}

/// Billing details of a cardholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardholderBilling {
    /// Billing address.
    pub address: Address,
}

/// Company details of a cardholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardholderCompany {
    /// Whether a tax id was provided.
    pub tax_id_provided: bool,
}

/// Record of the cardholder accepting the issuing terms.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserTermsAcceptance {
    /// When the terms were accepted.
    pub date: Option<Timestamp>,
    /// IP address the terms were accepted from.
    pub ip: Option<String>,
    /// User agent the terms were accepted with.
    pub user_agent: Option<String>,
}

/// Card issuing terms for an individual.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardIssuing {
    /// Acceptance of the user terms.
    pub user_terms_acceptance: Option<UserTermsAcceptance>,
}

/// A date of birth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateOfBirth {
    /// Day of the month, 1 to 31.
    pub day: i64,
    /// Month, 1 to 12.
    pub month: i64,
    /// Four-digit year.
    pub year: i64,
}

/// Images of an identity document.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationDocument {
    /// Back of the document.
    pub back: Option<Expandable<File>>,
    /// Front of the document.
    pub front: Option<Expandable<File>>,
}

/// Identity verification of an individual.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndividualVerification {
    /// Document images.
    pub document: Option<VerificationDocument>,
}

/// Personal details of an individual cardholder.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardholderIndividual {
    /// Issuing terms acceptance.
    pub card_issuing: Option<CardIssuing>,
    /// Date of birth.
    pub dob: Option<DateOfBirth>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Identity verification.
    pub verification: Option<IndividualVerification>,
}

/// Information still needed before the cardholder can be activated.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardholderRequirements {
    /// Why the cardholder is disabled.
    pub disabled_reason: Option<CardholderDisabledReason>,
    /// Fields that must be collected.
    pub past_due: Option<Vec<String>>,
}

/// A person or business cards are issued to.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuingCardholder {
    /// Billing details.
    pub billing: Option<CardholderBilling>,
    /// Company details, for company cardholders.
    pub company: Option<CardholderCompany>,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Email address.
    pub email: Option<String>,
    /// Unique identifier for the object.
    pub id: IssuingCardholderId,
    /// Personal details, for individual cardholders.
    pub individual: Option<CardholderIndividual>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Key/value pairs attached to the object.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Name printed on cards.
    pub name: String,
    /// Always `issuing.cardholder`.
    pub object: String,
    /// Phone number, in E.164 format.
    pub phone_number: Option<String>,
    /// Preferred notification languages.
    pub preferred_locales: Option<Vec<PreferredLocale>>,
    /// Outstanding verification requirements.
    pub requirements: Option<CardholderRequirements>,
    /// Restrictions applied to all the cardholder's cards.
    pub spending_controls: Option<SpendingControls>,
    /// Whether the cardholder can use cards.
    pub status: Option<IssuingCardholderStatus>,
    /// Person or business.
    #[serde(rename = "type")]
    pub type_: Option<IssuingCardholderType>,
}

impl_object!(IssuingCardholder, IssuingCardholderId, "issuing.cardholder");

impl IssuingCardholder {
    /// Whether authorizations on the cardholder's cards can succeed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == Some(IssuingCardholderStatus::Active)
            && self
                .requirements
                .as_ref()
                .map_or(true, |requirements| requirements.disabled_reason.is_none())
    }
}

/// A page of cardholders.
pub type IssuingCardholderList = List<IssuingCardholder>;

/// Billing details of a cardholder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardholderBillingParams {
    /// Billing address.
    pub address: AddressParams,
}

/// Company details of a cardholder.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardholderCompanyParams {
    /// Business tax id.
    pub tax_id: Option<String>,
}

/// Record of the cardholder accepting the issuing terms.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserTermsAcceptanceParams {
    /// When the terms were accepted.
    pub date: Option<Timestamp>,
    /// IP address the terms were accepted from.
    pub ip: Option<String>,
    /// User agent the terms were accepted with.
    pub user_agent: Option<String>,
}

/// Card issuing terms for an individual.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardIssuingParams {
    /// Acceptance of the user terms.
    pub user_terms_acceptance: Option<UserTermsAcceptanceParams>,
}

/// Images of an identity document, as uploaded file ids.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VerificationDocumentParams {
    /// Back of the document.
    pub back: Option<String>,
    /// Front of the document.
    pub front: Option<String>,
}

/// Identity verification of an individual.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IndividualVerificationParams {
    /// Document images.
    pub document: Option<VerificationDocumentParams>,
}

/// Personal details of an individual cardholder.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardholderIndividualParams {
    /// Issuing terms acceptance.
    pub card_issuing: Option<CardIssuingParams>,
    /// Date of birth.
    pub dob: Option<DateOfBirth>,
    /// First name.
    pub first_name: Option<String>,
    /// Last name.
    pub last_name: Option<String>,
    /// Identity verification.
    pub verification: Option<IndividualVerificationParams>,
}

/// Create or update a cardholder.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuingCardholderParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Billing details. Required on create.
    pub billing: Option<CardholderBillingParams>,
    /// Company details.
    pub company: Option<CardholderCompanyParams>,
    /// Email address.
    pub email: Option<String>,
    /// Personal details.
    pub individual: Option<CardholderIndividualParams>,
    /// Name printed on cards. Required on create.
    pub name: Option<String>,
    /// Phone number, in E.164 format.
    pub phone_number: Option<String>,
    /// Preferred notification languages.
    pub preferred_locales: Option<Vec<PreferredLocale>>,
    /// Restrictions applied to all the cardholder's cards.
    pub spending_controls: Option<SpendingControlsParams>,
    /// Activate or deactivate the cardholder.
    pub status: Option<IssuingCardholderStatus>,
    /// Person or business.
    #[serde(rename = "type")]
    pub type_: Option<IssuingCardholderType>,
}

impl_params!(IssuingCardholderParams);

/// List cardholders.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssuingCardholderListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Filter by email.
    pub email: Option<String>,
    /// Filter by phone number.
    pub phone_number: Option<String>,
    /// Filter by status.
    pub status: Option<IssuingCardholderStatus>,
    /// Filter by type.
    #[serde(rename = "type")]
    pub type_: Option<IssuingCardholderType>,
}

impl_list_params!(IssuingCardholderListParams);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{SpendingLimitInterval, SpendingLimitParams};
    use pretty_assertions::assert_eq;
    use stripe_models_core::{to_form, Currency, ParamsContainer};

    #[test]
    fn decodes_individual() {
        let cardholder: IssuingCardholder = serde_json::from_str(
            r#"{
                "id": "ich_1",
                "object": "issuing.cardholder",
                "billing": {"address": {"city": "San Francisco", "country": "US", "line1": "1234 Main Street",
                            "line2": null, "postal_code": "94111", "state": "CA"}},
                "company": null,
                "created": 1700000000,
                "email": "jenny.rosen@example.com",
                "individual": {
                    "card_issuing": {"user_terms_acceptance": {"date": 1700000000, "ip": "127.0.0.1", "user_agent": null}},
                    "dob": {"day": 1, "month": 1, "year": 1980},
                    "first_name": "Jenny",
                    "last_name": "Rosen",
                    "verification": {"document": {"back": null, "front": "file_1"}}
                },
                "livemode": false,
                "metadata": {},
                "name": "Jenny Rosen",
                "phone_number": "+18888675309",
                "preferred_locales": ["en", "xx"],
                "requirements": {"disabled_reason": null, "past_due": []},
                "spending_controls": {"allowed_categories": [], "blocked_categories": [],
                                      "spending_limits": [], "spending_limits_currency": null},
                "status": "active",
                "type": "individual"
            }"#,
        )
        .unwrap();

        assert!(cardholder.is_active());
        assert_eq!(cardholder.type_, Some(IssuingCardholderType::Individual));
        assert_eq!(cardholder.billing.as_ref().unwrap().address.postal_code.as_deref(), Some("94111"));

        let individual = cardholder.individual.as_ref().unwrap();
        assert_eq!(individual.dob.unwrap().year, 1980);
        let front = individual.verification.as_ref().unwrap().document.as_ref().unwrap().front.as_ref();
        assert_eq!(front.unwrap().id(), "file_1");

        let locales = cardholder.preferred_locales.as_ref().unwrap();
        assert_eq!(locales[0], PreferredLocale::En);
        assert!(locales[1].is_unknown());
    }

    #[test]
    fn disabled_requirements_deactivate() {
        let cardholder: IssuingCardholder = serde_json::from_str(
            r#"{"id": "ich_2", "status": "active",
                "requirements": {"disabled_reason": "requirements.past_due", "past_due": ["individual.dob.day"]}}"#,
        )
        .unwrap();
        assert!(!cardholder.is_active());
        assert_eq!(
            cardholder.requirements.unwrap().disabled_reason,
            Some(CardholderDisabledReason::RequirementsPastDue)
        );
    }

    #[test]
    fn encodes_create() {
        let mut params = IssuingCardholderParams {
            name: Some("Jenny Rosen".into()),
            type_: Some(IssuingCardholderType::Individual),
            billing: Some(CardholderBillingParams {
                address: AddressParams {
                    country: Some("US".into()),
                    line1: Some("1234 Main Street".into()),
                    ..AddressParams::default()
                },
            }),
            preferred_locales: Some(vec![PreferredLocale::En, PreferredLocale::Fr]),
            spending_controls: Some(SpendingControlsParams {
                spending_limits: Some(vec![SpendingLimitParams::new(
                    25_000,
                    SpendingLimitInterval::Weekly,
                )]),
                spending_limits_currency: Some(Currency::USD),
                ..SpendingControlsParams::default()
            }),
            ..IssuingCardholderParams::default()
        };
        params.add_metadata("team", "ops");

        assert_eq!(
            to_form(&params).unwrap().encode(),
            "metadata[team]=ops\
             &billing[address][country]=US&billing[address][line1]=1234+Main+Street\
             &name=Jenny+Rosen&preferred_locales[0]=en&preferred_locales[1]=fr\
             &spending_controls[spending_limits][0][amount]=25000\
             &spending_controls[spending_limits][0][interval]=weekly\
             &spending_controls[spending_limits_currency]=usd&type=individual"
        );
    }
}
