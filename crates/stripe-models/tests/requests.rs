//! Request building: params containers, form bodies and headers.

use pretty_assertions::assert_eq;
use stripe_models::billing::subscription::SubscriptionItemsParams;
use stripe_models::issuing::common::{SpendingControlsParams, SpendingLimitParams};
use stripe_models::issuing::SpendingLimitInterval;
use stripe_models::treasury::TreasuryCreditReversalStatus;
use stripe_models::{
    to_form, to_form_with, ApiConfig, Clearable, CouponListParams, Currency, FormConfig,
    IssuingCardParams, ListParamsContainer, ParamsContainer, RangeQuery, SubscriptionParams,
    TimestampOrNow, TreasuryCreditReversalListParams, TreasuryCreditReversalParams, API_VERSION,
};

// ============================================================================
// Params containers
// ============================================================================

#[test]
fn add_metadata_initializes_then_appends() {
    let mut params = TreasuryCreditReversalParams::reverse("rc_1");
    assert!(params.params.metadata.is_none());

    params.add_metadata("ticket", "T-1");
    params.add_metadata("agent", "ops");

    let metadata = params.params.metadata.as_ref().unwrap();
    assert_eq!(metadata.len(), 2);
    assert_eq!(metadata["ticket"], "T-1");
}

#[test]
fn add_expand_appends_in_order() {
    let mut params = IssuingCardParams::default();
    params.add_expand("cardholder");
    params.add_expand("replaced_by");
    assert_eq!(params.params.expand, vec!["cardholder", "replaced_by"]);

    let mut list = CouponListParams::default();
    list.add_expand("data.applies_to");
    assert_eq!(list.list.expand, vec!["data.applies_to"]);
}

#[test]
fn extra_params_are_sent_verbatim() {
    let mut params = TreasuryCreditReversalParams::reverse("rc_1");
    params.add_extra("network_details[ach][addenda]", "note");
    let body = to_form(&params).unwrap();
    assert_eq!(body.get("network_details[ach][addenda]"), Some("note"));
    assert_eq!(body.get("received_credit"), Some("rc_1"));
}

// ============================================================================
// Form bodies
// ============================================================================

#[test]
fn subscription_create_with_sentinels_and_clears() {
    let mut params = SubscriptionParams::new("cus_1", vec![SubscriptionItemsParams::price("price_1")]);
    params.trial_end = Some(TimestampOrNow::Now);
    params.cancel_at = Some(Clearable::Clear);
    params.application_fee_percent = Some(12.5);

    let body = to_form(&params).unwrap();
    assert_eq!(body.get("customer"), Some("cus_1"));
    assert_eq!(body.get("items[0][price]"), Some("price_1"));
    assert_eq!(body.get("trial_end"), Some("now"));
    assert_eq!(body.get("cancel_at"), Some(""));
    assert_eq!(body.get("application_fee_percent"), Some("12.5000"));

    let shortest = to_form_with(&params, &FormConfig { float_decimals: None }).unwrap();
    assert_eq!(shortest.get("application_fee_percent"), Some("12.5"));
}

#[test]
fn card_spending_controls_nest_and_index() {
    let params = IssuingCardParams {
        spending_controls: Some(SpendingControlsParams {
            blocked_categories: Some(vec!["gambling".into()]),
            spending_limits: Some(vec![
                SpendingLimitParams::new(50_000, SpendingLimitInterval::Monthly),
                SpendingLimitParams::new(5_000, SpendingLimitInterval::PerAuthorization),
            ]),
            ..SpendingControlsParams::default()
        }),
        ..IssuingCardParams::virtual_card("ich_1", Currency::USD)
    };

    let body = to_form(&params).unwrap();
    assert_eq!(body.get("type"), Some("virtual"));
    assert_eq!(body.get("spending_controls[blocked_categories][0]"), Some("gambling"));
    assert_eq!(body.get("spending_controls[spending_limits][1][amount]"), Some("5000"));
    assert_eq!(
        body.get("spending_controls[spending_limits][1][interval]"),
        Some("per_authorization")
    );
}

#[test]
fn empty_list_param_clears_the_field() {
    let params = IssuingCardParams {
        spending_controls: Some(SpendingControlsParams {
            allowed_categories: Some(Vec::new()),
            ..SpendingControlsParams::default()
        }),
        ..IssuingCardParams::default()
    };
    assert_eq!(
        to_form(&params).unwrap().encode(),
        "spending_controls[allowed_categories]="
    );
}

#[test]
fn list_filters_and_cursors() {
    let mut params = TreasuryCreditReversalListParams {
        financial_account: Some("fa_1".into()),
        status: Some(TreasuryCreditReversalStatus::Posted),
        ..TreasuryCreditReversalListParams::default()
    };
    params.set_limit(3);
    params.add_filter("created", "gte", "1700000000");

    let body = to_form(&params).unwrap();
    assert_eq!(body.get("limit"), Some("3"));
    assert_eq!(body.get("created[gte]"), Some("1700000000"));
    assert_eq!(body.get("status"), Some("posted"));
}

#[test]
fn range_query_encodes_exact_or_bounds() {
    let mut coupons = CouponListParams::default();
    coupons.created = Some(RangeQuery::from(1_700_000_000));
    assert_eq!(to_form(&coupons).unwrap().encode(), "created=1700000000");

    coupons.created = Some(RangeQuery::between(1_700_000_000, 1_700_086_400));
    assert_eq!(
        to_form(&coupons).unwrap().encode(),
        "created[gte]=1700000000&created[lt]=1700086400"
    );
}

// ============================================================================
// Headers
// ============================================================================

#[test]
fn headers_follow_config_and_request_options() {
    let config = ApiConfig::default()
        .with_stripe_account("acct_platform")
        .with_idempotency_prefix("retry-");

    let mut params = TreasuryCreditReversalParams::reverse("rc_1");
    params.set_stripe_account("acct_connected");
    config.ensure_idempotency_key(&mut params.params.options);

    let headers = config.request_headers(&params.params.options);
    assert_eq!(headers[0], ("Stripe-Version".to_string(), API_VERSION.to_string()));
    assert_eq!(headers[1], ("Stripe-Account".to_string(), "acct_connected".to_string()));
    assert_eq!(headers[2].0, "Idempotency-Key");
    assert!(headers[2].1.starts_with("retry-"));

    let key = headers[2].1.clone();
    config.ensure_idempotency_key(&mut params.params.options);
    assert_eq!(params.params.options.idempotency_key, Some(key));
}
