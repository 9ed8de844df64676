//! Shapes shared by several billing resources.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use stripe_models_core::{string_enum, Account, Expandable};

string_enum! {
    /// Whether the account or the platform is liable for a tax or invoice.
    pub enum LiabilityType {
        Account = "account",
        Self_ = "self",
    }
}

string_enum! {
    /// Why automatic tax is switched off.
    pub enum AutomaticTaxDisabledReason {
        RequiresLocationInputs = "requires_location_inputs",
    }
}

string_enum! {
    /// How invoices are paid.
    pub enum CollectionMethod {
        ChargeAutomatically = "charge_automatically",
        SendInvoice = "send_invoice",
    }
}

string_enum! {
    /// How prorations are handled when billing changes.
    pub enum ProrationBehavior {
        AlwaysInvoice = "always_invoice",
        CreateProrations = "create_prorations",
        None = "none",
    }
}

string_enum! {
    /// What to do when the first payment of an update fails.
    pub enum PaymentBehavior {
        AllowIncomplete = "allow_incomplete",
        DefaultIncomplete = "default_incomplete",
        ErrorIfIncomplete = "error_if_incomplete",
        PendingIfIncomplete = "pending_if_incomplete",
    }
}

string_enum! {
    /// Whether a price is tax-inclusive.
    pub enum TaxBehavior {
        Exclusive = "exclusive",
        Inclusive = "inclusive",
        Unspecified = "unspecified",
    }
}

string_enum! {
    /// Unit of a billing interval.
    pub enum RecurringInterval {
        Day = "day",
        Month = "month",
        Week = "week",
        Year = "year",
    }
}

/// The party liable for tax or invoice issuing.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Liability {
    /// The connected account, when `type` is `account`.
    pub account: Option<Expandable<Account>>,
    /// Type of the liable party.
    #[serde(rename = "type")]
    pub type_: Option<LiabilityType>,
}

/// Request form of [`Liability`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LiabilityParams {
    /// The connected account being referenced when `type` is `account`.
    pub account: Option<String>,
    /// Type of the liable party.
    #[serde(rename = "type")]
    pub type_: Option<LiabilityType>,
}

/// Automatic tax settings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomaticTax {
    /// Why automatic tax is disabled, if it is.
    pub disabled_reason: Option<AutomaticTaxDisabledReason>,
    /// Whether Stripe computes tax automatically.
    pub enabled: bool,
    /// Who is liable for tax.
    pub liability: Option<Liability>,
}

/// Request form of [`AutomaticTax`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AutomaticTaxParams {
    /// Enable automatic tax calculation.
    pub enabled: Option<bool>,
    /// Who is liable for tax.
    pub liability: Option<LiabilityParams>,
}

/// Thresholds that trigger an invoice before the end of the period.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingThresholds {
    /// Amount due, in minor units, at which to invoice.
    pub amount_gte: Option<i64>,
    /// Whether reaching the threshold resets the billing cycle anchor.
    pub reset_billing_cycle_anchor: bool,
}

/// Request form of [`BillingThresholds`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BillingThresholdsParams {
    /// Amount due, in minor units, at which to invoice.
    pub amount_gte: Option<i64>,
    /// Reset the billing cycle anchor when the threshold is reached.
    pub reset_billing_cycle_anchor: Option<bool>,
}

/// Who issues invoices and whose tax ids appear on them.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceSettings {
    /// Tax ids shown on invoices.
    pub account_tax_ids: Option<Vec<Expandable<stripe_models_core::TaxId>>>,
    /// Number of days a `send_invoice` invoice stays open.
    pub days_until_due: Option<i64>,
    /// The invoice issuer.
    pub issuer: Option<Liability>,
}

/// Request form of [`InvoiceSettings`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InvoiceSettingsParams {
    /// Tax ids shown on invoices.
    pub account_tax_ids: Option<Vec<String>>,
    /// Number of days a `send_invoice` invoice stays open.
    pub days_until_due: Option<i64>,
    /// The invoice issuer.
    pub issuer: Option<LiabilityParams>,
}

/// Funds routed to a connected account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferData {
    /// Percentage of each invoice total transferred.
    pub amount_percent: Option<f64>,
    /// The destination account.
    pub destination: Option<Expandable<Account>>,
}

/// Request form of [`TransferData`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransferDataParams {
    /// Percentage of each invoice total transferred.
    pub amount_percent: Option<f64>,
    /// The destination account id.
    pub destination: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn liability_self_round_trips() {
        let liability: Liability = serde_json::from_str(r#"{"type":"self"}"#).unwrap();
        assert_eq!(liability.type_, Some(LiabilityType::Self_));
        assert_eq!(
            serde_json::to_string(&liability).unwrap(),
            r#"{"type":"self"}"#
        );
    }

    #[test]
    fn expanded_issuer_account() {
        let liability: Liability = serde_json::from_str(
            r#"{"type":"account","account":{"id":"acct_1","object":"account"}}"#,
        )
        .unwrap();
        let account = liability.account.unwrap();
        assert!(account.is_object());
        assert_eq!(account.id(), "acct_1");
    }
}
