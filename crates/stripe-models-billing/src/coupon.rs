//! Coupons: reusable discount definitions.
//!
//! A coupon is either an `amount_off` in a currency or a `percent_off`, and
//! applies `once`, `forever` or for `duration_in_months` (`repeating`).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, Currency, List, ListParams,
    Metadata, Params, RangeQuery, Timestamp,
};

def_id!(CouponId, "Identifier of a coupon. Coupon ids may be chosen by the merchant.");

string_enum! {
    /// How long a coupon stays applied once redeemed.
    pub enum CouponDuration {
        Forever = "forever",
        Once = "once",
        Repeating = "repeating",
    }
}

/// Products a coupon is restricted to.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouponAppliesTo {
    /// Ids of the products the coupon applies to.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub products: Vec<String>,
}

/// Per-currency discount amount.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouponCurrencyOptions {
    /// Amount, in minor units of that currency, subtracted from the total.
    pub amount_off: i64,
}

/// A discount definition that can be applied to customers, subscriptions,
/// invoices and checkout sessions.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coupon {
    /// Amount, in minor units of `currency`, subtracted from the total.
    pub amount_off: Option<i64>,
    /// Products the coupon is restricted to.
    pub applies_to: Option<CouponAppliesTo>,
    /// Time of creation, in seconds since the Unix epoch.
    pub created: Timestamp,
    /// Currency of `amount_off`.
    pub currency: Option<Currency>,
    /// Amounts off in other currencies, keyed by currency code.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub currency_options: BTreeMap<Currency, CouponCurrencyOptions>,
    /// Set on the object returned by a delete request.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
    /// How long the discount lasts once applied.
    pub duration: Option<CouponDuration>,
    /// Number of months a `repeating` coupon applies for.
    pub duration_in_months: Option<i64>,
    /// Unique identifier for the object.
    pub id: CouponId,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Maximum number of redemptions across all customers.
    pub max_redemptions: Option<i64>,
    /// Key/value pairs attached to the object.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Name shown to customers on invoices and receipts.
    pub name: Option<String>,
    /// Always `coupon`.
    pub object: String,
    /// Percentage, between 0 and 100, taken off the subtotal.
    pub percent_off: Option<f64>,
    /// Last time the coupon can be redeemed.
    pub redeem_by: Option<Timestamp>,
    /// Number of times the coupon has been applied.
    pub times_redeemed: i64,
    /// Whether the coupon can still be applied.
    pub valid: bool,
}

impl_object!(Coupon, CouponId, "coupon");

/// A page of coupons.
pub type CouponList = List<Coupon>;

/// Request form of [`CouponAppliesTo`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CouponAppliesToParams {
    /// Product ids the coupon is restricted to.
    pub products: Option<Vec<String>>,
}

/// Request form of [`CouponCurrencyOptions`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CouponCurrencyOptionsParams {
    /// Amount, in minor units, subtracted from the total.
    pub amount_off: Option<i64>,
}

/// Create or update a coupon.
///
/// Only `metadata` and `name` can change after creation.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CouponParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Amount, in minor units of `currency`, subtracted from the total.
    pub amount_off: Option<i64>,
    /// Products the coupon is restricted to.
    pub applies_to: Option<CouponAppliesToParams>,
    /// Currency of `amount_off`. Required when `amount_off` is set.
    pub currency: Option<Currency>,
    /// Amounts off in other currencies.
    pub currency_options: Option<BTreeMap<Currency, CouponCurrencyOptionsParams>>,
    /// How long the discount lasts once applied.
    pub duration: Option<CouponDuration>,
    /// Required when `duration` is `repeating`.
    pub duration_in_months: Option<i64>,
    /// Merchant-chosen id. Generated when absent.
    pub id: Option<String>,
    /// Maximum number of redemptions across all customers.
    pub max_redemptions: Option<i64>,
    /// Name shown to customers.
    pub name: Option<String>,
    /// Percentage, between 0 and 100, taken off the subtotal.
    pub percent_off: Option<f64>,
    /// Last time the coupon can be redeemed.
    pub redeem_by: Option<Timestamp>,
}

impl_params!(CouponParams);

impl CouponParams {
    /// Params for a coupon taking `percent` off, applied `duration`.
    #[must_use]
    pub fn percent_off(percent: f64, duration: CouponDuration) -> Self {
        Self {
            percent_off: Some(percent),
            duration: Some(duration),
            ..Self::default()
        }
    }

    /// Params for a coupon taking a fixed amount off, applied `duration`.
    #[must_use]
    pub fn amount_off(amount: i64, currency: Currency, duration: CouponDuration) -> Self {
        Self {
            amount_off: Some(amount),
            currency: Some(currency),
            duration: Some(duration),
            ..Self::default()
        }
    }
}

/// List coupons.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CouponListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
}

impl_list_params!(CouponListParams);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stripe_models_core::{to_form, ParamsContainer};

    #[test]
    fn decodes_percent_off_coupon() {
        let coupon: Coupon = serde_json::from_str(
            r#"{
                "id": "25OFF",
                "object": "coupon",
                "amount_off": null,
                "created": 1700000000,
                "currency": null,
                "duration": "repeating",
                "duration_in_months": 3,
                "livemode": false,
                "max_redemptions": null,
                "metadata": {},
                "name": "25% off",
                "percent_off": 25.5,
                "redeem_by": null,
                "times_redeemed": 0,
                "valid": true
            }"#,
        )
        .unwrap();

        assert_eq!(coupon.id, "25OFF");
        assert_eq!(coupon.percent_off, Some(25.5));
        assert_eq!(coupon.amount_off, None);
        assert_eq!(coupon.duration, Some(CouponDuration::Repeating));
        assert_eq!(coupon.duration_in_months, Some(3));
        assert!(coupon.valid);
    }

    #[test]
    fn decodes_currency_options() {
        let coupon: Coupon = serde_json::from_str(
            r#"{"id":"c","amount_off":500,"currency":"usd","currency_options":{"eur":{"amount_off":450}}}"#,
        )
        .unwrap();
        assert_eq!(coupon.currency, Some(Currency::USD));
        assert_eq!(coupon.currency_options[&Currency::EUR].amount_off, 450);
    }

    #[test]
    fn deleted_coupon() {
        let coupon: Coupon =
            serde_json::from_str(r#"{"id":"c","object":"coupon","deleted":true}"#).unwrap();
        assert!(coupon.deleted);
        assert!(coupon.metadata.is_empty());
    }

    #[test]
    fn encodes_create_params() {
        let mut params = CouponParams::amount_off(500, Currency::USD, CouponDuration::Once);
        params.applies_to = Some(CouponAppliesToParams {
            products: Some(vec!["prod_1".into()]),
        });
        params.currency_options = Some(BTreeMap::from([(
            Currency::EUR,
            CouponCurrencyOptionsParams {
                amount_off: Some(450),
            },
        )]));
        params.add_metadata("campaign", "spring");

        let form = to_form(&params).unwrap();
        assert_eq!(
            form.encode(),
            "metadata[campaign]=spring&amount_off=500&applies_to[products][0]=prod_1\
             &currency=usd&currency_options[eur][amount_off]=450&duration=once"
        );
    }

    #[test]
    fn encodes_percent_off_with_fixed_precision() {
        let form = to_form(&CouponParams::percent_off(12.5, CouponDuration::Forever)).unwrap();
        assert_eq!(form.get("percent_off"), Some("12.5000"));
    }
}
