//! Usage record summaries: metered usage of a subscription item per period.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use stripe_models_core::{def_id, impl_object, List, Period};

def_id!(UsageRecordSummaryId, "Identifier of a usage record summary.", prefix = "sis_");

/// Total usage reported for a subscription item over one billing period.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsageRecordSummary {
    /// Unique identifier for the object.
    pub id: UsageRecordSummaryId,
    /// Invoice the usage was billed on, once invoiced.
    pub invoice: Option<String>,
    /// Whether the object exists in live mode.
    pub livemode: bool,
    /// Always `usage_record_summary`.
    pub object: String,
    /// Billing period the usage covers.
    pub period: Period,
    /// Subscription item the usage was reported for.
    pub subscription_item: String,
    /// Units used in the period.
    pub total_usage: i64,
}

impl_object!(UsageRecordSummary, UsageRecordSummaryId, "usage_record_summary");

impl UsageRecordSummary {
    /// Whether the summary has been billed.
    #[must_use]
    pub fn is_invoiced(&self) -> bool {
        self.invoice.is_some()
    }
}

/// A page of usage record summaries.
pub type UsageRecordSummaryList = List<UsageRecordSummary>;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_summary_page() {
        let page: UsageRecordSummaryList = serde_json::from_str(
            r#"{
                "object": "list",
                "url": "/v1/subscription_items/si_1/usage_record_summaries",
                "has_more": true,
                "data": [
                    {
                        "id": "sis_1",
                        "object": "usage_record_summary",
                        "invoice": null,
                        "livemode": false,
                        "period": {"end": null, "start": null},
                        "subscription_item": "si_1",
                        "total_usage": 42
                    },
                    {
                        "id": "sis_0",
                        "object": "usage_record_summary",
                        "invoice": "in_9",
                        "livemode": false,
                        "period": {"end": 1702592000, "start": 1700000000},
                        "subscription_item": "si_1",
                        "total_usage": 1300
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(page.len(), 2);
        assert!(!page.data[0].is_invoiced());
        assert_eq!(page.data[0].period.duration(), None);

        let billed = &page.data[1];
        assert!(billed.is_invoiced());
        assert_eq!(billed.total_usage, 1300);
        assert_eq!(billed.period.duration().unwrap().num_days(), 30);
        assert_eq!(page.next_cursor().unwrap(), "sis_0");
    }
}
