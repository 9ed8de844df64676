//! Invoice line items: the individual rows of an invoice.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, string_enum, CreditBalanceTransaction,
    Currency, Decimal, Expandable, List, ListParams, Metadata, Params, Period, Plan, Price,
    TaxRate,
};

use crate::common::TaxBehavior;
use crate::discount::{Discount, DiscountParams};
use crate::invoice_item::InvoiceItem;
use crate::subscription::Subscription;
use crate::subscription_item::SubscriptionItem;

def_id!(InvoiceLineItemId, "Identifier of an invoice line item.", prefix = "il_");

string_enum! {
    /// What generated a line item.
    pub enum InvoiceLineItemType {
        InvoiceItem = "invoiceitem",
        Subscription = "subscription",
    }
}

string_enum! {
    /// Source of a pretax credit.
    pub enum PretaxCreditAmountType {
        CreditBalanceTransaction = "credit_balance_transaction",
        Discount = "discount",
    }
}

string_enum! {
    /// Why a tax amount was or was not charged.
    pub enum TaxabilityReason {
        CustomerExempt = "customer_exempt",
        NotCollecting = "not_collecting",
        NotSubjectToTax = "not_subject_to_tax",
        NotSupported = "not_supported",
        PortionProductExempt = "portion_product_exempt",
        PortionReducedRated = "portion_reduced_rated",
        PortionStandardRated = "portion_standard_rated",
        ProductExempt = "product_exempt",
        ProductExemptHoliday = "product_exempt_holiday",
        ProportionallyRated = "proportionally_rated",
        ReducedRated = "reduced_rated",
        ReverseCharge = "reverse_charge",
        StandardRated = "standard_rated",
        TaxableBasisReduced = "taxable_basis_reduced",
        ZeroRated = "zero_rated",
    }
}

/// Amount taken off the line by one discount.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountAmount {
    /// Amount, in minor units, of the discount.
    pub amount: i64,
    /// The discount applied.
    pub discount: Option<Expandable<Discount>>,
}

/// Amount taken off the line before tax.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PretaxCreditAmount {
    /// Amount, in minor units, of the credit.
    pub amount: i64,
    /// Credit balance transaction, when `type` is `credit_balance_transaction`.
    pub credit_balance_transaction: Option<Expandable<CreditBalanceTransaction>>,
    /// Discount, when `type` is `discount`.
    pub discount: Option<Expandable<Discount>>,
    /// Source of the credit.
    #[serde(rename = "type")]
    pub type_: Option<PretaxCreditAmountType>,
}

/// The line items a proration credits.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditedItems {
    /// Invoice containing the credited items.
    pub invoice: String,
    /// Credited line item ids.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub invoice_line_items: Vec<String>,
}

/// Extra detail on proration lines.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProrationDetails {
    /// Items this proration credits.
    pub credited_items: Option<CreditedItems>,
}

/// Tax charged on a line.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxAmount {
    /// Amount of tax, in minor units.
    pub amount: i64,
    /// Whether the tax is included in the line amount.
    pub inclusive: bool,
    /// The tax rate applied.
    pub tax_rate: Option<Expandable<TaxRate>>,
    /// Why the tax was or was not charged.
    pub taxability_reason: Option<TaxabilityReason>,
    /// Amount the tax was computed on.
    pub taxable_amount: Option<i64>,
}

/// A row of an invoice.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceLineItem {
    /// Amount, in minor units.
    pub amount: i64,
    /// Amount, in minor units, excluding inclusive tax.
    pub amount_excluding_tax: Option<i64>,
    /// Currency of the amounts.
    pub currency: Option<Currency>,
    /// Shown on the invoice.
    pub description: Option<String>,
    /// Per-discount amounts taken off the line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub discount_amounts: Vec<DiscountAmount>,
    /// Whether invoice-level discounts apply to the line.
    pub discountable: bool,
    /// Discounts applied to the line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub discounts: Vec<Expandable<Discount>>,
    /// Unique identifier for the object.
    pub id: InvoiceLineItemId,
    /// Invoice the line belongs to.
    pub invoice: Option<String>,
    /// Invoice item the line came from, when `type` is `invoiceitem`.
    pub invoice_item: Option<Expandable<InvoiceItem>>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Key/value pairs attached to the line.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Always `line_item`.
    pub object: String,
    /// Service period covered by the line.
    pub period: Option<Period>,
    /// Legacy plan billed.
    pub plan: Option<Plan>,
    /// Pretax credits applied to the line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub pretax_credit_amounts: Vec<PretaxCreditAmount>,
    /// Price billed.
    pub price: Option<Price>,
    /// Whether the line is a proration.
    pub proration: bool,
    /// Proration detail.
    pub proration_details: Option<ProrationDetails>,
    /// Quantity of units.
    pub quantity: Option<i64>,
    /// Subscription the line came from.
    pub subscription: Option<Expandable<Subscription>>,
    /// Subscription item the line came from.
    pub subscription_item: Option<Expandable<SubscriptionItem>>,
    /// Tax charged on the line.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tax_amounts: Vec<TaxAmount>,
    /// Tax rates applied.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tax_rates: Vec<TaxRate>,
    /// What generated the line.
    #[serde(rename = "type")]
    pub type_: Option<InvoiceLineItemType>,
    /// Unit amount, excluding inclusive tax, with sub-minor-unit precision.
    pub unit_amount_excluding_tax: Option<Decimal>,
}

impl_object!(InvoiceLineItem, InvoiceLineItemId, "line_item");

impl InvoiceLineItem {
    /// Total of all discount amounts on the line.
    #[must_use]
    pub fn total_discount_amount(&self) -> i64 {
        self.discount_amounts.iter().map(|d| d.amount).sum()
    }
}

/// A page of invoice line items.
pub type InvoiceLineItemList = List<InvoiceLineItem>;

/// Product created inline with a line item price.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductDataParams {
    /// Product description.
    pub description: Option<String>,
    /// Image URLs, up to eight.
    pub images: Option<Vec<String>>,
    /// Key/value pairs attached to the product.
    pub metadata: Option<Metadata>,
    /// Product name.
    pub name: Option<String>,
    /// Product tax code.
    pub tax_code: Option<String>,
}

/// An inline price for a line item.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvoiceLineItemPriceDataParams {
    /// Currency of the price.
    pub currency: Option<Currency>,
    /// Existing product.
    pub product: Option<String>,
    /// Product created inline. Excludes `product`.
    pub product_data: Option<ProductDataParams>,
    /// Whether the price is tax-inclusive.
    pub tax_behavior: Option<TaxBehavior>,
    /// Unit amount, in minor units.
    pub unit_amount: Option<i64>,
    /// Unit amount with sub-minor-unit precision.
    pub unit_amount_decimal: Option<Decimal>,
}

/// A tax rate created inline with a tax amount.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaxRateDataParams {
    /// Two-letter country code.
    pub country: Option<String>,
    /// Internal description.
    pub description: Option<String>,
    /// Name shown to customers.
    pub display_name: Option<String>,
    /// Whether the tax is included in the amount.
    pub inclusive: Option<bool>,
    /// Tax jurisdiction.
    pub jurisdiction: Option<String>,
    /// Rate, as a percentage.
    pub percentage: Option<f64>,
    /// ISO 3166-2 subdivision code.
    pub state: Option<String>,
    /// Kind of tax, such as `vat` or `sales_tax`.
    pub tax_type: Option<String>,
}

/// A tax amount computed outside Stripe.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceLineItemTaxAmountParams {
    /// Amount of tax, in minor units.
    pub amount: Option<i64>,
    /// The rate the amount was computed with.
    pub tax_rate_data: Option<TaxRateDataParams>,
    /// Amount the tax was computed on.
    pub taxable_amount: Option<i64>,
}

/// Update a line item on a draft invoice.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceLineItemParams {
    /// Invoice holding the line. Part of the request path.
    #[serde(skip)]
    pub invoice: String,
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Amount, in minor units.
    pub amount: Option<i64>,
    /// Shown on the invoice.
    pub description: Option<String>,
    /// Whether invoice-level discounts apply.
    pub discountable: Option<bool>,
    /// Discounts to apply. An empty list removes them.
    pub discounts: Option<Vec<DiscountParams>>,
    /// Service period covered by the line.
    pub period: Option<Period>,
    /// Existing price to bill.
    pub price: Option<String>,
    /// Inline price to bill.
    pub price_data: Option<InvoiceLineItemPriceDataParams>,
    /// Quantity of units.
    pub quantity: Option<i64>,
    /// Tax amounts computed outside Stripe.
    pub tax_amounts: Option<Vec<InvoiceLineItemTaxAmountParams>>,
    /// Tax rates to apply.
    pub tax_rates: Option<Vec<String>>,
}

impl_params!(InvoiceLineItemParams);

/// List the lines of an invoice.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvoiceLineItemListParams {
    /// Invoice whose lines to list. Part of the request path.
    #[serde(skip)]
    pub invoice: String,
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
}

impl_list_params!(InvoiceLineItemListParams);
