//! Shapes shared by authorizations, transactions, cards and cardholders.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{string_enum, Currency, Decimal};

string_enum! {
    /// Digital wallet a card was used through.
    pub enum Wallet {
        ApplePay = "apple_pay",
        GooglePay = "google_pay",
        SamsungPay = "samsung_pay",
    }
}

string_enum! {
    /// What a fleet purchase was for.
    pub enum FleetPurchaseType {
        FuelAndNonFuelPurchase = "fuel_and_non_fuel_purchase",
        FuelPurchase = "fuel_purchase",
        NonFuelPurchase = "non_fuel_purchase",
    }
}

string_enum! {
    /// Service level at a fuel pump.
    pub enum FleetServiceType {
        FullService = "full_service",
        NonFuelTransaction = "non_fuel_transaction",
        SelfService = "self_service",
    }
}

string_enum! {
    /// Kind of fuel purchased.
    pub enum FuelType {
        Diesel = "diesel",
        Other = "other",
        UnleadedPlus = "unleaded_plus",
        UnleadedRegular = "unleaded_regular",
        UnleadedSuper = "unleaded_super",
    }
}

string_enum! {
    /// Unit fuel was sold in.
    pub enum FuelUnit {
        ChargingMinute = "charging_minute",
        ImperialGallon = "imperial_gallon",
        Kilogram = "kilogram",
        KilowattHour = "kilowatt_hour",
        Liter = "liter",
        Other = "other",
        Pound = "pound",
        UsGallon = "us_gallon",
    }
}

string_enum! {
    /// Window a spending limit applies over.
    pub enum SpendingLimitInterval {
        AllTime = "all_time",
        Daily = "daily",
        Monthly = "monthly",
        PerAuthorization = "per_authorization",
        Weekly = "weekly",
        Yearly = "yearly",
    }
}

/// Breakdown of the amount into ATM fee and cashback.
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmountDetails {
    /// Fee charged by the ATM.
    pub atm_fee: Option<i64>,
    /// Cashback requested at the point of sale.
    pub cashback_amount: Option<i64>,
}

/// The merchant a card was used at.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantData {
    /// Merchant category name.
    pub category: String,
    /// Merchant category code (MCC).
    pub category_code: String,
    /// City the merchant is in.
    pub city: Option<String>,
    /// Country the merchant is in.
    pub country: Option<String>,
    /// Merchant name.
    pub name: Option<String>,
    /// Identifier assigned by the card network.
    pub network_id: String,
    /// Postal code of the merchant.
    pub postal_code: Option<String>,
    /// State the merchant is in.
    pub state: Option<String>,
    /// Merchant tax id.
    pub tax_id: Option<String>,
    /// Terminal the card was presented at.
    pub terminal_id: Option<String>,
    /// Merchant website.
    pub url: Option<String>,
}

/// Data a fleet card prompts the cardholder for.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetCardholderPromptData {
    /// Alphanumeric id entered at the terminal.
    pub alphanumeric_id: Option<String>,
    /// Driver id.
    pub driver_id: Option<String>,
    /// Vehicle odometer reading.
    pub odometer: Option<i64>,
    /// Id of unknown meaning entered at the terminal.
    pub unspecified_id: Option<String>,
    /// User id.
    pub user_id: Option<String>,
    /// Vehicle number.
    pub vehicle_number: Option<String>,
}

/// A gross amount reported by the merchant.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrossAmount {
    /// Gross amount in minor units, with sub-minor-unit precision.
    pub gross_amount_decimal: Option<Decimal>,
}

/// Taxes reported by the merchant.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetTax {
    /// Local tax amount in minor units.
    pub local_amount_decimal: Option<Decimal>,
    /// National tax amount in minor units.
    pub national_amount_decimal: Option<Decimal>,
}

/// Merchant-reported split of a fleet purchase.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleetReportedBreakdown {
    /// Fuel portion.
    pub fuel: Option<GrossAmount>,
    /// Non-fuel portion.
    pub non_fuel: Option<GrossAmount>,
    /// Taxes.
    pub tax: Option<FleetTax>,
}

/// Fleet-specific data of a purchase.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fleet {
    /// Data the cardholder entered at the terminal.
    pub cardholder_prompt_data: Option<FleetCardholderPromptData>,
    /// What the purchase was for.
    pub purchase_type: Option<FleetPurchaseType>,
    /// Merchant-reported split of the amount.
    pub reported_breakdown: Option<FleetReportedBreakdown>,
    /// Service level at the pump.
    pub service_type: Option<FleetServiceType>,
}

/// Fuel bought in a purchase.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Fuel {
    /// Conexxus product code.
    pub industry_product_code: Option<String>,
    /// Quantity in `unit`.
    pub quantity_decimal: Option<Decimal>,
    /// Kind of fuel.
    #[serde(rename = "type")]
    pub type_: Option<FuelType>,
    /// Unit the quantity is in.
    pub unit: Option<FuelUnit>,
    /// Cost per unit in minor units.
    pub unit_cost_decimal: Option<Decimal>,
}

/// A cap on spending over an interval.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpendingLimit {
    /// Maximum amount in minor units.
    pub amount: i64,
    /// Merchant categories the limit applies to. Empty means all.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub categories: Vec<String>,
    /// Window the limit applies over.
    pub interval: SpendingLimitInterval,
}

/// Restrictions on where and how much a card can spend.
///
/// Categories are merchant category names such as `airlines_air_carriers`.
/// Countries are two-letter codes.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpendingControls {
    /// Only these categories are allowed, when set.
    pub allowed_categories: Option<Vec<String>>,
    /// Only these merchant countries are allowed, when set.
    pub allowed_merchant_countries: Option<Vec<String>>,
    /// These categories are declined.
    pub blocked_categories: Option<Vec<String>>,
    /// These merchant countries are declined.
    pub blocked_merchant_countries: Option<Vec<String>>,
    /// Spending limits.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub spending_limits: Vec<SpendingLimit>,
    /// Currency the limits are expressed in.
    pub spending_limits_currency: Option<Currency>,
}

impl SpendingControls {
    /// Whether a purchase in `category` from a merchant in `country` passes
    /// the allow and block lists. An empty list does not restrict. Spending
    /// limits are not evaluated.
    #[must_use]
    pub fn permits(&self, category: &str, country: &str) -> bool {
        let listed = |list: &Option<Vec<String>>, value: &str| {
            list.as_ref()
                .filter(|list| !list.is_empty())
                .map(|list| list.iter().any(|item| item == value))
        };

        listed(&self.allowed_categories, category) != Some(false)
            && listed(&self.allowed_merchant_countries, country) != Some(false)
            && listed(&self.blocked_categories, category) != Some(true)
            && listed(&self.blocked_merchant_countries, country) != Some(true)
    }
}

/// Request form of [`SpendingLimit`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpendingLimitParams {
    /// Maximum amount in minor units.
    pub amount: Option<i64>,
    /// Merchant categories the limit applies to.
    pub categories: Option<Vec<String>>,
    /// Window the limit applies over.
    pub interval: Option<SpendingLimitInterval>,
}

impl SpendingLimitParams {
    /// Cap spending at `amount` per `interval`.
    #[must_use]
    pub fn new(amount: i64, interval: SpendingLimitInterval) -> Self {
        Self {
            amount: Some(amount),
            interval: Some(interval),
            ..Self::default()
        }
    }
}

/// Request form of [`SpendingControls`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SpendingControlsParams {
    /// Only these categories are allowed.
    pub allowed_categories: Option<Vec<String>>,
    /// Only these merchant countries are allowed.
    pub allowed_merchant_countries: Option<Vec<String>>,
    /// These categories are declined.
    pub blocked_categories: Option<Vec<String>>,
    /// These merchant countries are declined.
    pub blocked_merchant_countries: Option<Vec<String>>,
    /// Spending limits.
    pub spending_limits: Option<Vec<SpendingLimitParams>>,
    /// Currency of the limits. Cardholders only.
    pub spending_limits_currency: Option<Currency>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stripe_models_core::to_form;

    #[test]
    fn allow_and_block_lists() {
        let controls: SpendingControls = serde_json::from_str(
            r#"{
                "allowed_categories": null,
                "allowed_merchant_countries": ["US", "CA"],
                "blocked_categories": ["gambling"],
                "blocked_merchant_countries": null,
                "spending_limits": [{"amount": 50000, "categories": [], "interval": "monthly"}],
                "spending_limits_currency": "usd"
            }"#,
        )
        .unwrap();

        assert!(controls.permits("grocery_stores_supermarkets", "US"));
        assert!(!controls.permits("gambling", "US"));
        assert!(!controls.permits("grocery_stores_supermarkets", "FR"));
        assert_eq!(controls.spending_limits[0].interval, SpendingLimitInterval::Monthly);
    }

    #[test]
    fn fuel_quantities_keep_precision() {
        let fuel: Fuel = serde_json::from_str(
            r#"{"industry_product_code": "001", "quantity_decimal": "10.125", "type": "diesel",
                "unit": "liter", "unit_cost_decimal": "189.9"}"#,
        )
        .unwrap();
        assert_eq!(fuel.type_, Some(FuelType::Diesel));
        assert_eq!(fuel.quantity_decimal.unwrap().to_plain_string(), "10.125");
    }

    #[test]
    fn encodes_limits() {
        let params = SpendingControlsParams {
            blocked_categories: Some(vec!["gambling".into()]),
            spending_limits: Some(vec![SpendingLimitParams::new(
                10_000,
                SpendingLimitInterval::PerAuthorization,
            )]),
            ..SpendingControlsParams::default()
        };
        assert_eq!(
            to_form(&params).unwrap().encode(),
            "blocked_categories[0]=gambling\
             &spending_limits[0][amount]=10000&spending_limits[0][interval]=per_authorization"
        );
    }
}
