//! Invoice items: one-off charges or credits added to a customer's next
//! invoice, or to a specific draft invoice.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, skip_serializing_none, DefaultOnNull};
use stripe_models_core::{
    def_id, impl_list_params, impl_object, impl_params, Currency, Customer, Decimal, Expandable,
    Invoice, List, ListParams, Metadata, Params, Period, Plan, Price, RangeQuery, TaxRate,
    TestClock, Timestamp,
};

use crate::common::TaxBehavior;
use crate::discount::{Discount, DiscountParams};
use crate::subscription::Subscription;

def_id!(InvoiceItemId, "Identifier of an invoice item.", prefix = "ii_");

/// A pending charge or credit that will be pulled into an invoice.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceItem {
    /// Amount, in minor units of `currency`. Negative for credits.
    pub amount: i64,
    /// Currency of `amount`.
    pub currency: Option<Currency>,
    /// Customer the item is billed to.
    pub customer: Option<Expandable<Customer>>,
    /// When the item was added.
    pub date: Timestamp,
    /// Set on the object returned by a delete request.
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub deleted: bool,
    /// Shown on the invoice line.
    pub description: Option<String>,
    /// Whether invoice-level discounts apply to this item.
    pub discountable: bool,
    /// Discounts applied to this item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub discounts: Vec<Expandable<Discount>>,
    /// Unique identifier for the object.
    pub id: InvoiceItemId,
    /// Invoice the item belongs to, once invoiced.
    pub invoice: Option<Expandable<Invoice>>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Key/value pairs attached to the object.
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub metadata: Metadata,
    /// Always `invoiceitem`.
    pub object: String,
    /// Service period covered by the item.
    pub period: Option<Period>,
    /// Legacy plan, if the item came from one.
    pub plan: Option<Plan>,
    /// Price of the item.
    pub price: Option<Price>,
    /// Whether the item is a proration.
    pub proration: bool,
    /// Quantity of units.
    pub quantity: i64,
    /// Subscription that generated the item.
    pub subscription: Option<Expandable<Subscription>>,
    /// Subscription item that generated the item.
    pub subscription_item: Option<String>,
    /// Tax rates applied to the item.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde_as(deserialize_as = "DefaultOnNull")]
    pub tax_rates: Vec<TaxRate>,
    /// Test clock the item belongs to.
    pub test_clock: Option<Expandable<TestClock>>,
    /// Unit amount, in minor units.
    pub unit_amount: Option<i64>,
    /// Unit amount with sub-minor-unit precision.
    pub unit_amount_decimal: Option<Decimal>,
}

impl_object!(InvoiceItem, InvoiceItemId, "invoiceitem");

/// A page of invoice items.
pub type InvoiceItemList = List<InvoiceItem>;

/// An inline price for a one-off item.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvoiceItemPriceDataParams {
    /// Currency of the price.
    pub currency: Option<Currency>,
    /// Product the price belongs to.
    pub product: Option<String>,
    /// Whether the price is tax-inclusive.
    pub tax_behavior: Option<TaxBehavior>,
    /// Unit amount, in minor units.
    pub unit_amount: Option<i64>,
    /// Unit amount with sub-minor-unit precision. Excludes `unit_amount`.
    pub unit_amount_decimal: Option<Decimal>,
}

/// Create or update an invoice item.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceItemParams {
    /// Expand, metadata and extra parameters.
    #[serde(flatten)]
    pub params: Params,
    /// Amount, in minor units. Negative for credits.
    pub amount: Option<i64>,
    /// Currency of `amount`.
    pub currency: Option<Currency>,
    /// Customer to bill. Required on create.
    pub customer: Option<String>,
    /// Shown on the invoice line.
    pub description: Option<String>,
    /// Whether invoice-level discounts apply.
    pub discountable: Option<bool>,
    /// Discounts to apply. An empty list removes them.
    pub discounts: Option<Vec<DiscountParams>>,
    /// Draft invoice to add the item to.
    pub invoice: Option<String>,
    /// Service period covered by the item.
    pub period: Option<Period>,
    /// Existing price to bill.
    pub price: Option<String>,
    /// Inline price to bill.
    pub price_data: Option<InvoiceItemPriceDataParams>,
    /// Quantity of units.
    pub quantity: Option<i64>,
    /// Subscription to attach the item to.
    pub subscription: Option<String>,
    /// Whether the amount is tax-inclusive.
    pub tax_behavior: Option<TaxBehavior>,
    /// Product tax code.
    pub tax_code: Option<String>,
    /// Tax rates to apply. An empty list removes them.
    pub tax_rates: Option<Vec<String>>,
    /// Unit amount, in minor units.
    pub unit_amount: Option<i64>,
    /// Unit amount with sub-minor-unit precision.
    pub unit_amount_decimal: Option<Decimal>,
}

impl_params!(InvoiceItemParams);

/// List invoice items.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InvoiceItemListParams {
    /// Pagination and expansion.
    #[serde(flatten)]
    pub list: ListParams,
    /// Filter on creation time.
    pub created: Option<RangeQuery>,
    /// Filter by customer.
    pub customer: Option<String>,
    /// Filter by invoice.
    pub invoice: Option<String>,
    /// Only items not yet attached to an invoice.
    pub pending: Option<bool>,
}

impl_list_params!(InvoiceItemListParams);

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use stripe_models_core::to_form;

    #[test]
    fn decodes_expanded_and_collapsed_references() {
        let item: InvoiceItem = serde_json::from_str(
            r#"{
                "id": "ii_1",
                "object": "invoiceitem",
                "amount": -500,
                "currency": "eur",
                "customer": {"id": "cus_1", "object": "customer", "email": "a@b.c"},
                "date": 1700000000,
                "discountable": false,
                "discounts": ["di_1"],
                "invoice": null,
                "period": {"end": 1702592000, "start": 1700000000},
                "proration": false,
                "quantity": 1,
                "subscription": "sub_1",
                "tax_rates": [],
                "unit_amount": -500,
                "unit_amount_decimal": "-500"
            }"#,
        )
        .unwrap();

        assert_eq!(item.amount, -500);
        assert_eq!(item.currency, Some(Currency::EUR));
        assert!(item.customer.as_ref().unwrap().is_object());
        assert_eq!(item.discounts[0].id(), "di_1");
        assert_eq!(item.subscription.as_ref().unwrap().id(), "sub_1");
        assert_eq!(item.period.unwrap().duration().unwrap().num_days(), 30);
        assert_eq!(item.unit_amount_decimal, Some(Decimal::from(-500)));
    }

    #[test]
    fn encodes_inline_price_with_decimal_unit_amount() {
        let params = InvoiceItemParams {
            customer: Some("cus_1".into()),
            price_data: Some(InvoiceItemPriceDataParams {
                currency: Some(Currency::USD),
                product: Some("prod_1".into()),
                unit_amount_decimal: Some("0.0125".parse().unwrap()),
                ..InvoiceItemPriceDataParams::default()
            }),
            quantity: Some(1000),
            discounts: Some(vec![DiscountParams::coupon("SUMMER")]),
            ..InvoiceItemParams::default()
        };

        let form = to_form(&params).unwrap();
        assert_eq!(
            form.encode(),
            "customer=cus_1&discounts[0][coupon]=SUMMER&price_data[currency]=usd\
             &price_data[product]=prod_1&price_data[unit_amount_decimal]=0.0125&quantity=1000"
        );
    }

    #[test]
    fn pending_filter() {
        let params = InvoiceItemListParams {
            customer: Some("cus_1".into()),
            pending: Some(true),
            ..InvoiceItemListParams::default()
        };
        assert_eq!(to_form(&params).unwrap().encode(), "customer=cus_1&pending=true");
    }
}
