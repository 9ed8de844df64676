//! Resources referenced by the modelled objects but not modelled themselves.
//!
//! Each one keeps its id and `object` discriminator as typed fields and every
//! other field as raw JSON, so that an expanded reference still decodes and
//! nothing the API sent is lost.

use serde::{Deserialize, Serialize};

/// Define a loosely-typed resource with a typed id.
macro_rules! external_object {
    ($(#[$meta:meta])* $name:ident, $id:ident, $object:literal $(, prefix = $prefix:literal)?) => {
        $crate::def_id!($id, concat!("Identifier of a `", $object, "` object.") $(, prefix = $prefix)?);

        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default)]
        pub struct $name {
            /// Unique identifier for the object.
            pub id: $id,
            /// String representing the object's type.
            pub object: String,
            /// Every other field, undecoded.
            #[serde(flatten)]
            pub fields: serde_json::Map<String, serde_json::Value>,
        }

        impl $name {
            /// Look up an undecoded field by name.
            #[must_use]
            pub fn field(&self, name: &str) -> Option<&serde_json::Value> {
                self.fields.get(name)
            }
        }

        $crate::impl_object!($name, $id, $object);
    };
}

external_object!(
    /// A Connect account.
    Account, AccountId, "account", prefix = "acct_"
);
external_object!(
    /// A Connect application.
    Application, ApplicationId, "application"
);
external_object!(
    /// A movement of funds on the account balance.
    BalanceTransaction, BalanceTransactionId, "balance_transaction", prefix = "txn_"
);
external_object!(
    /// A customer credit balance transaction.
    CreditBalanceTransaction, CreditBalanceTransactionId, "billing.credit_balance_transaction"
);
external_object!(
    /// A customer.
    Customer, CustomerId, "customer", prefix = "cus_"
);
external_object!(
    /// An uploaded file, such as an identity document.
    File, FileId, "file", prefix = "file_"
);
external_object!(
    /// An invoice.
    Invoice, InvoiceId, "invoice", prefix = "in_"
);
external_object!(
    /// A dispute on an issuing transaction.
    IssuingDispute, IssuingDisputeId, "issuing.dispute", prefix = "idp_"
);
external_object!(
    /// A physical card design.
    IssuingPersonalizationDesign, IssuingPersonalizationDesignId, "issuing.personalization_design"
);
external_object!(
    /// A mandate authorizing debits.
    Mandate, MandateId, "mandate", prefix = "mandate_"
);
external_object!(
    /// A payment method.
    PaymentMethod, PaymentMethodId, "payment_method", prefix = "pm_"
);
external_object!(
    /// A legacy payment source (card, bank account or source).
    PaymentSource, PaymentSourceId, "source"
);
external_object!(
    /// A payout to an external account.
    Payout, PayoutId, "payout", prefix = "po_"
);
external_object!(
    /// A legacy recurring price.
    Plan, PlanId, "plan"
);
external_object!(
    /// A price.
    Price, PriceId, "price"
);
external_object!(
    /// A product.
    Product, ProductId, "product"
);
external_object!(
    /// A setup intent.
    SetupIntent, SetupIntentId, "setup_intent", prefix = "seti_"
);
external_object!(
    /// A customer tax id.
    TaxId, TaxIdId, "tax_id", prefix = "txi_"
);
external_object!(
    /// A tax rate.
    TaxRate, TaxRateId, "tax_rate", prefix = "txr_"
);
external_object!(
    /// A test clock.
    TestClock, TestClockId, "test_helpers.test_clock", prefix = "clock_"
);
external_object!(
    /// A reversal of a received debit.
    TreasuryDebitReversal, TreasuryDebitReversalId, "treasury.debit_reversal", prefix = "debrev_"
);
external_object!(
    /// A transfer into a financial account.
    TreasuryInboundTransfer, TreasuryInboundTransferId, "treasury.inbound_transfer", prefix = "ibt_"
);
external_object!(
    /// A treasury financial account.
    TreasuryFinancialAccount, TreasuryFinancialAccountId, "treasury.financial_account", prefix = "fa_"
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Expandable, Object};

    #[test]
    fn unknown_fields_are_kept() {
        let customer: Customer =
            serde_json::from_str(r#"{"id":"cus_1","object":"customer","email":"jenny@example.com"}"#).unwrap();
        assert_eq!(customer.id, "cus_1");
        assert_eq!(customer.field("email"), Some(&serde_json::json!("jenny@example.com")));
    }

    #[test]
    fn expands_like_any_other_object() {
        let customer: Expandable<Customer> = serde_json::from_str(r#""cus_1""#).unwrap();
        assert_eq!(customer.into_object(), Customer::from_id("cus_1".into()));
        assert_eq!(Customer::OBJECT, "customer");
    }

    #[test]
    fn prefixes_are_enforced_on_parse() {
        assert!("cus_1".parse::<CustomerId>().is_ok());
        assert!("acct_1".parse::<CustomerId>().is_err());
        assert!("gold".parse::<PlanId>().is_ok());
    }
}
