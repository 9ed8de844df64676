//! Payment settings applied to the invoices a subscription generates.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use stripe_models_core::string_enum;

string_enum! {
    /// Payment method types an invoice can be paid with.
    pub enum PaymentMethodType {
        AchCreditTransfer = "ach_credit_transfer",
        AchDebit = "ach_debit",
        AcssDebit = "acss_debit",
        AmazonPay = "amazon_pay",
        AuBecsDebit = "au_becs_debit",
        BacsDebit = "bacs_debit",
        Bancontact = "bancontact",
        Boleto = "boleto",
        Card = "card",
        Cashapp = "cashapp",
        CustomerBalance = "customer_balance",
        Eps = "eps",
        Fpx = "fpx",
        Giropay = "giropay",
        Grabpay = "grabpay",
        Ideal = "ideal",
        JpCreditTransfer = "jp_credit_transfer",
        KakaoPay = "kakao_pay",
        Konbini = "konbini",
        KrCard = "kr_card",
        Link = "link",
        Multibanco = "multibanco",
        NaverPay = "naver_pay",
        P24 = "p24",
        Payco = "payco",
        Paynow = "paynow",
        Paypal = "paypal",
        Promptpay = "promptpay",
        RevolutPay = "revolut_pay",
        SepaCreditTransfer = "sepa_credit_transfer",
        SepaDebit = "sepa_debit",
        Sofort = "sofort",
        Swish = "swish",
        UsBankAccount = "us_bank_account",
        WechatPay = "wechat_pay",
    }
}

string_enum! {
    /// Whether a successful payment becomes the subscription's default.
    pub enum SaveDefaultPaymentMethod {
        Off = "off",
        OnSubscription = "on_subscription",
    }
}

string_enum! {
    /// Whether a card mandate amount is exact or a ceiling.
    pub enum MandateAmountType {
        Fixed = "fixed",
        Maximum = "maximum",
    }
}

string_enum! {
    /// Card network to route a payment through.
    pub enum CardNetwork {
        Amex = "amex",
        CartesBancaires = "cartes_bancaires",
        Diners = "diners",
        Discover = "discover",
        EftposAu = "eftpos_au",
        Girocard = "girocard",
        Interac = "interac",
        Jcb = "jcb",
        Link = "link",
        Mastercard = "mastercard",
        Unionpay = "unionpay",
        NetworkUnknown = "unknown",
        Visa = "visa",
    }
}

string_enum! {
    /// When to request 3D Secure authentication.
    pub enum RequestThreeDSecure {
        Any = "any",
        Automatic = "automatic",
        Challenge = "challenge",
    }
}

string_enum! {
    /// Kind of account behind a pre-authorized debit mandate.
    pub enum MandateTransactionType {
        Business = "business",
        Personal = "personal",
    }
}

string_enum! {
    /// How a bank account is verified.
    pub enum VerificationMethod {
        Automatic = "automatic",
        Instant = "instant",
        Microdeposits = "microdeposits",
    }
}

string_enum! {
    /// How a customer balance is funded.
    pub enum FundingType {
        BankTransfer = "bank_transfer",
    }
}

string_enum! {
    /// Account subcategories Financial Connections may link.
    pub enum AccountSubcategory {
        Checking = "checking",
        Savings = "savings",
    }
}

string_enum! {
    /// Data Financial Connections may access.
    pub enum FinancialConnectionsPermission {
        Balances = "balances",
        Ownership = "ownership",
        PaymentMethod = "payment_method",
        Transactions = "transactions",
    }
}

string_enum! {
    /// Data Financial Connections fetches on link.
    pub enum FinancialConnectionsPrefetch {
        Balances = "balances",
        Ownership = "ownership",
        Transactions = "transactions",
    }
}

/// Card mandate terms.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardMandateOptions {
    /// Amount, in minor units, the mandate covers.
    pub amount: Option<i64>,
    /// Whether `amount` is exact or a ceiling.
    pub amount_type: Option<MandateAmountType>,
    /// Shown to the customer.
    pub description: Option<String>,
}

/// Card payment options.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardOptions {
    /// Mandate terms for recurring card payments.
    pub mandate_options: Option<CardMandateOptions>,
    /// Network to route through.
    pub network: Option<CardNetwork>,
    /// When to request 3D Secure.
    pub request_three_d_secure: Option<RequestThreeDSecure>,
}

/// Pre-authorized debit mandate terms.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcssDebitMandateOptions {
    /// Kind of account debited.
    pub transaction_type: Option<MandateTransactionType>,
}

/// Canadian pre-authorized debit options.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcssDebitOptions {
    /// Mandate terms.
    pub mandate_options: Option<AcssDebitMandateOptions>,
    /// How the bank account is verified.
    pub verification_method: Option<VerificationMethod>,
}

/// Bancontact options.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BancontactOptions {
    /// Language of the authorization page: `de`, `en`, `fr` or `nl`.
    pub preferred_language: Option<String>,
}

/// EU bank transfer settings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EuBankTransfer {
    /// Country of the bank account to transfer to.
    pub country: Option<String>,
}

/// Bank transfer settings for customer balance payments.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankTransfer {
    /// EU transfer settings.
    pub eu_bank_transfer: Option<EuBankTransfer>,
    /// Kind of bank transfer.
    #[serde(rename = "type")]
    pub type_: Option<String>,
}

/// Customer balance options.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerBalanceOptions {
    /// Bank transfer settings.
    pub bank_transfer: Option<BankTransfer>,
    /// How the balance is funded.
    pub funding_type: Option<FundingType>,
}

/// Konbini options. Carries no settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KonbiniOptions {}

/// SEPA Direct Debit options. Carries no settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SepaDebitOptions {}

/// Account filters for Financial Connections.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialConnectionsFilters {
    /// Subcategories that may be linked.
    pub account_subcategories: Option<Vec<AccountSubcategory>>,
}

/// Financial Connections settings for bank account payments.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialConnections {
    /// Account filters.
    pub filters: Option<FinancialConnectionsFilters>,
    /// Data that may be accessed.
    pub permissions: Option<Vec<FinancialConnectionsPermission>>,
    /// Data fetched on link.
    pub prefetch: Option<Vec<FinancialConnectionsPrefetch>>,
}

/// US bank account options.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UsBankAccountOptions {
    /// Financial Connections settings.
    pub financial_connections: Option<FinancialConnections>,
    /// How the bank account is verified.
    pub verification_method: Option<VerificationMethod>,
}

/// Options per payment method type.
///
/// The same shape is used in requests: every field is optional and unset
/// fields are omitted.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethodOptions {
    /// Canadian pre-authorized debit.
    pub acss_debit: Option<AcssDebitOptions>,
    /// Bancontact.
    pub bancontact: Option<BancontactOptions>,
    /// Cards.
    pub card: Option<CardOptions>,
    /// Customer balance.
    pub customer_balance: Option<CustomerBalanceOptions>,
    /// Konbini.
    pub konbini: Option<KonbiniOptions>,
    /// SEPA Direct Debit.
    pub sepa_debit: Option<SepaDebitOptions>,
    /// US bank accounts.
    pub us_bank_account: Option<UsBankAccountOptions>,
}

/// Payment settings for generated invoices.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentSettings {
    /// Options per payment method type.
    pub payment_method_options: Option<PaymentMethodOptions>,
    /// Accepted payment method types. `None` means the invoice settings decide.
    pub payment_method_types: Option<Vec<PaymentMethodType>>,
    /// Whether a successful payment becomes the default.
    pub save_default_payment_method: Option<SaveDefaultPaymentMethod>,
}

/// Request form of [`PaymentSettings`].
pub type PaymentSettingsParams = PaymentSettings;
