//! Response decoding across billing, issuing and treasury.

use pretty_assertions::assert_eq;
use serde_json::json;
use stripe_models::issuing::IssuingAuthorizationStatus;
use stripe_models::treasury::FlowType;
use stripe_models::{
    from_json, from_slice, Coupon, CouponDuration, Currency, Error, InvoiceItem, InvoiceLineItem,
    IssuingAuthorization, PromotionCode, Subscription, SubscriptionList, SubscriptionSearchResult,
    SubscriptionStatus, TreasuryOutboundPayment, TreasuryTransaction, UsageRecordSummaryList,
};

// ============================================================================
// Coupons
// ============================================================================

#[test]
fn repeating_percent_coupon() {
    let coupon: Coupon =
        from_json(r#"{"percent_off":50,"duration":"repeating","duration_in_months":3}"#).unwrap();

    assert_eq!(coupon.percent_off, Some(50.0));
    assert_eq!(coupon.duration, Some(CouponDuration::Repeating));
    assert_eq!(coupon.duration_in_months, Some(3));
    assert!(coupon.id.is_empty());
}

#[test]
fn amount_coupon_keeps_lowercase_currency() {
    let coupon: Coupon = from_slice(
        br#"{"id":"cp_1","object":"coupon","amount_off":500,"currency":"USD","duration":"once","valid":true}"#,
    )
    .unwrap();

    assert_eq!(coupon.amount_off, Some(500));
    assert_eq!(coupon.currency, Some(Currency::USD));
    assert_eq!(coupon.currency.as_ref().unwrap().as_str(), "usd");
    assert!(coupon.valid);
}

#[test]
fn mismatched_shape_is_a_json_error() {
    let err = from_json::<Coupon>(r#"{"percent_off": "half"}"#).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
}

// ============================================================================
// Lists and search
// ============================================================================

#[test]
fn subscription_page_exposes_next_cursor() {
    let page: SubscriptionList = serde_json::from_value(json!({
        "object": "list",
        "url": "/v1/subscriptions",
        "has_more": true,
        "data": [
            {"id": "sub_1", "object": "subscription", "status": "active"},
            {"id": "sub_2", "object": "subscription", "status": "past_due"}
        ]
    }))
    .unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.next_cursor().map(|id| id.as_str()), Some("sub_2"));

    let statuses: Vec<_> = page.iter().filter_map(|s| s.status.clone()).collect();
    assert_eq!(statuses, vec![SubscriptionStatus::Active, SubscriptionStatus::PastDue]);
}

#[test]
fn last_page_has_no_cursor() {
    let page: UsageRecordSummaryList = serde_json::from_value(json!({
        "object": "list",
        "url": "/v1/subscription_items/si_1/usage_record_summaries",
        "has_more": false,
        "data": [{"id": "sis_1", "object": "usage_record_summary", "subscription_item": "si_1",
                  "total_usage": 42, "period": {"start": 1700000000, "end": 1702592000}}]
    }))
    .unwrap();

    assert_eq!(page.next_cursor(), None);
    assert_eq!(page.data[0].total_usage, 42);
}

#[test]
fn search_result_exposes_next_page() {
    let result: SubscriptionSearchResult = serde_json::from_value(json!({
        "object": "search_result",
        "url": "/v1/subscriptions/search",
        "has_more": true,
        "next_page": "page_abc",
        "total_count": 3,
        "data": [{"id": "sub_1", "object": "subscription"}]
    }))
    .unwrap();

    assert_eq!(result.next_page(), Some("page_abc"));
    assert_eq!(result.meta.total_count, Some(3));
}

// ============================================================================
// Unknown values
// ============================================================================

#[test]
fn unknown_values_survive_in_every_crate() {
    let authorization: IssuingAuthorization = serde_json::from_value(json!({
        "id": "iauth_1",
        "object": "issuing.authorization",
        "status": "escalated"
    }))
    .unwrap();
    let status = authorization.status.as_ref().unwrap();
    assert!(status.is_unknown());
    assert_eq!(*status, IssuingAuthorizationStatus::Unknown("escalated".into()));

    let transaction: TreasuryTransaction = serde_json::from_value(json!({
        "id": "trxn_1",
        "object": "treasury.transaction",
        "flow_type": "instant_payout"
    }))
    .unwrap();
    assert_eq!(
        transaction.flow_type.as_ref().map(FlowType::as_str),
        Some("instant_payout")
    );

    let encoded = serde_json::to_value(&transaction).unwrap();
    assert_eq!(encoded["flow_type"], "instant_payout");
}

// ============================================================================
// Null collections
// ============================================================================

#[test]
fn null_collections_decode_as_empty() {
    let coupon: Coupon =
        from_json(r#"{"id":"cp_1","object":"coupon","metadata":null,"currency_options":null}"#)
            .unwrap();
    assert!(coupon.metadata.is_empty());
    assert!(coupon.currency_options.is_empty());

    let code: PromotionCode = serde_json::from_value(json!({
        "id": "promo_1",
        "object": "promotion_code",
        "metadata": null
    }))
    .unwrap();
    assert!(code.metadata.is_empty());

    let item: InvoiceItem = serde_json::from_value(json!({
        "id": "ii_1",
        "object": "invoiceitem",
        "discounts": null,
        "metadata": null,
        "tax_rates": null
    }))
    .unwrap();
    assert!(item.tax_rates.is_empty());
    assert!(item.discounts.is_empty());

    let subscription: Subscription = serde_json::from_value(json!({
        "id": "sub_1",
        "object": "subscription",
        "default_tax_rates": null,
        "discounts": null,
        "metadata": null
    }))
    .unwrap();
    assert!(subscription.default_tax_rates.is_empty());
    assert!(subscription.metadata.is_empty());

    let line: InvoiceLineItem = serde_json::from_value(json!({
        "id": "il_1",
        "object": "line_item",
        "discount_amounts": null,
        "pretax_credit_amounts": null,
        "tax_amounts": null,
        "tax_rates": null
    }))
    .unwrap();
    assert!(line.discount_amounts.is_empty());
    assert!(line.pretax_credit_amounts.is_empty());
}

#[test]
fn null_collections_decode_in_issuing_and_treasury() {
    let authorization: IssuingAuthorization = serde_json::from_value(json!({
        "id": "iauth_1",
        "object": "issuing.authorization",
        "balance_transactions": null,
        "metadata": null,
        "request_history": null,
        "transactions": null
    }))
    .unwrap();
    assert!(authorization.request_history.is_empty());

    let payment: TreasuryOutboundPayment = serde_json::from_value(json!({
        "id": "obp_1",
        "object": "treasury.outbound_payment",
        "metadata": null
    }))
    .unwrap();
    assert!(payment.metadata.is_empty());
}

// ============================================================================
// Decode then re-encode
// ============================================================================

#[test]
fn reencoding_keeps_known_fields() {
    let original = json!({
        "id": "sub_1",
        "object": "subscription",
        "cancel_at_period_end": true,
        "collection_method": "send_invoice",
        "currency": "eur",
        "customer": "cus_1",
        "days_until_due": 30,
        "metadata": {"plan": "team"},
        "status": "trialing",
        "trial_end": 1700086400
    });

    let subscription: stripe_models::Subscription = serde_json::from_value(original.clone()).unwrap();
    let encoded = serde_json::to_value(&subscription).unwrap();

    for (key, value) in original.as_object().unwrap() {
        assert_eq!(&encoded[key], value, "field {key}");
    }
}
