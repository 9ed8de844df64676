//! Promotion codes: customer-facing codes that redeem a coupon.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, Currency, Customer, Expandable, List,
    ListParams, Metadata, Params, RangeQuery, Timestamp,
};

use crate::coupon::Coupon;

def_id!(PromotionCodeId, "Identifier of a promotion code.", prefix = "promo_");

/// Per-currency minimum order amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionCodeCurrencyOptions {
    /// Minimum amount, in minor units, required to redeem the code.
    pub minimum_amount: i64,
}

/// Conditions a redemption must meet.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionCodeRestrictions {
    /// Minimum amounts in other currencies.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub currency_options: BTreeMap<Currency, PromotionCodeCurrencyOptions>,
    /// Only customers without a prior successful payment can redeem.
    pub first_time_transaction: bool,
    /// Minimum amount required to redeem the code.
    pub minimum_amount: Option<i64>,
    /// Currency of `minimum_amount`.
    pub minimum_amount_currency: Option<Currency>,
}

/// A code customers enter to redeem a coupon.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromotionCode {
    /// Whether the code can currently be redeemed.
    pub active: bool,
    /// The customer-facing code.
    pub code: String,
    /// The coupon the code redeems.
    pub coupon: Option<Coupon>,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Customer the code is restricted to.
    pub customer: Option<Expandable<Customer>>,
    /// When the code stops being redeemable.
    pub expires_at: Option<Timestamp>,
    /// Unique identifier for the object.
    pub id: PromotionCodeId,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Maximum number of redemptions.
    pub max_redemptions: Option<i64>,
    /// Key/value pairs attached to the object.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Always `promotion_code`.
    pub object: String,
    /// Redemption conditions.
    pub restrictions: Option<PromotionCodeRestrictions>,
    /// Number of times the code has been redeemed.
    pub times_redeemed: i64,
}

impl_object!(PromotionCode, PromotionCodeId, "promotion_code");

/// A page of promotion codes.
pub type PromotionCodeList = List<PromotionCode>;

/// Request form of [`PromotionCodeCurrencyOptions`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromotionCodeCurrencyOptionsParams {
    /// Minimum amount, in minor units.
    pub minimum_amount: Option<i64>,
}

/// Request form of [`PromotionCodeRestrictions`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromotionCodeRestrictionsParams {
    /// Minimum amounts in other currencies.
    pub currency_options: Option<BTreeMap<Currency, PromotionCodeCurrencyOptionsParams>>,
    /// Restrict to first-time customers.
    pub first_time_transaction: Option<bool>,
    /// Minimum amount required to redeem the code.
    pub minimum_amount: Option<i64>,
    /// Currency of `minimum_amount`.
    pub minimum_amount_currency: Option<Currency>,
}

/// Create or update a promotion code.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromotionCodeParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Whether the code can be redeemed.
    pub active: Option<bool>,
    /// Customer-facing code. Generated when absent.
    pub code: Option<String>,
    /// Coupon to redeem. Required on create.
    pub coupon: Option<String>,
    /// Customer the code is restricted to.
    pub customer: Option<String>,
    /// When the code stops being redeemable.
    pub expires_at: Option<Timestamp>,
    /// Maximum number of redemptions.
    pub max_redemptions: Option<i64>,
    /// Redemption conditions.
    pub restrictions: Option<PromotionCodeRestrictionsParams>,
}

impl_params!(PromotionCodeParams);

/// List promotion codes.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PromotionCodeListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Filter by active state.
    pub active: Option<bool>,
    /// Filter by code, case-insensitively.
    pub code: Option<String>,
    /// Filter by coupon.
    pub coupon: Option<String>,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Filter by restricted customer.
    pub customer: Option<String>,
}

impl_list_params!(PromotionCodeListParams);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stripe_models_core::{to_form, ListParamsContainer, RangeBounds};

    #[test]
    fn decodes_restrictions() {
        let code: PromotionCode = serde_json::from_str(
            r#"{
                "id": "promo_1",
                "object": "promotion_code",
                "active": true,
                "code": "SPRING",
                "coupon": {"id": "SPRING25", "object": "coupon", "percent_off": 25},
                "customer": null,
                "restrictions": {
                    "currency_options": {"eur": {"minimum_amount": 900}},
                    "first_time_transaction": true,
                    "minimum_amount": 1000,
                    "minimum_amount_currency": "USD"
                },
                "times_redeemed": 4
            }"#,
        )
        .unwrap();

        assert_eq!(code.coupon.as_ref().unwrap().percent_off, Some(25.0));
        let restrictions = code.restrictions.unwrap();
        assert!(restrictions.first_time_transaction);
        assert_eq!(restrictions.minimum_amount_currency, Some(Currency::USD));
        assert_eq!(restrictions.currency_options[&Currency::EUR].minimum_amount, 900);
    }

    #[test]
    fn encodes_list_filters() {
        let mut params = PromotionCodeListParams {
            active: Some(true),
            coupon: Some("SPRING25".into()),
            created: Some(RangeBounds::default().with_gte(1_700_000_000).into()),
            ..PromotionCodeListParams::default()
        };
        params.set_limit(10);

        let form = to_form(&params).unwrap();
        assert_eq!(
            form.encode(),
            "limit=10&active=true&coupon=SPRING25&created[gte]=1700000000"
        );
    }
}
