//! Treasury resources for stripe-models.
//!
//! Money moving in and out of financial accounts, and the ledger that records it:
//!
//! - **Outbound flows**: `TreasuryOutboundPayment`, `TreasuryOutboundTransfer`
//! - **Inbound flows**: `TreasuryReceivedCredit`, `TreasuryReceivedDebit`
//! - **Reversals**: `TreasuryCreditReversal`
//! - **Ledger**: `TreasuryTransaction`, `TreasuryTransactionEntry`
//!
//! # Balance impact
//!
//! Every transaction and entry reports how it moved the `cash`,
//! `inbound_pending` and `outbound_pending` balances. The entries of a
//! transaction add up to the transaction itself:
//!
//! ```
//! use stripe_models_treasury::BalanceImpact;
//!
//! let hold = BalanceImpact { cash: -1000, inbound_pending: 0, outbound_pending: 1000 };
//! let post = BalanceImpact { cash: 0, inbound_pending: 0, outbound_pending: -1000 };
//! let net: BalanceImpact = [hold, post].into_iter().sum();
//! assert_eq!(net.cash, -1000);
//! assert_eq!(net.outbound_pending, 0);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod common;
pub mod credit_reversal;
pub mod outbound_payment;
pub mod outbound_transfer;
pub mod received_credit;
pub mod received_debit;
pub mod transaction;
pub mod transaction_entry;

pub use common::{BalanceImpact, FlowDetails, FlowType, ReturnedCode, ReversalDetails};
pub use credit_reversal::{
    TreasuryCreditReversal, TreasuryCreditReversalId, TreasuryCreditReversalList,
    TreasuryCreditReversalListParams, TreasuryCreditReversalParams, TreasuryCreditReversalStatus,
};
pub use outbound_payment::{
    TreasuryOutboundPayment, TreasuryOutboundPaymentCancelParams, TreasuryOutboundPaymentId,
    TreasuryOutboundPaymentList, TreasuryOutboundPaymentListParams, TreasuryOutboundPaymentParams,
    TreasuryOutboundPaymentStatus,
};
pub use outbound_transfer::{
    TreasuryOutboundTransfer, TreasuryOutboundTransferCancelParams, TreasuryOutboundTransferId,
    TreasuryOutboundTransferList, TreasuryOutboundTransferListParams,
    TreasuryOutboundTransferParams, TreasuryOutboundTransferStatus,
};
pub use received_credit::{
    TreasuryReceivedCredit, TreasuryReceivedCreditId, TreasuryReceivedCreditList,
    TreasuryReceivedCreditListParams, TreasuryReceivedCreditParams, TreasuryReceivedCreditStatus,
};
pub use received_debit::{
    TreasuryReceivedDebit, TreasuryReceivedDebitId, TreasuryReceivedDebitList,
    TreasuryReceivedDebitListParams, TreasuryReceivedDebitParams, TreasuryReceivedDebitStatus,
};
pub use transaction::{
    TreasuryTransaction, TreasuryTransactionId, TreasuryTransactionList,
    TreasuryTransactionListParams, TreasuryTransactionParams, TreasuryTransactionStatus,
};
pub use transaction_entry::{
    TreasuryTransactionEntry, TreasuryTransactionEntryId, TreasuryTransactionEntryList,
    TreasuryTransactionEntryListParams, TreasuryTransactionEntryParams,
    TreasuryTransactionEntryType,
};
