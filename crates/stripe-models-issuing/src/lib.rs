//! Issuing resources for stripe-models.
//!
//! Cards issued by the platform and everything that happens when they are used:
//!
//! - **Holders and cards**: `IssuingCardholder`, `IssuingCard`, `IssuingToken`
//! - **Spending**: `IssuingAuthorization`, `IssuingTransaction`
//! - **Controls**: `SpendingControls`, `SpendingLimit`
//!
//! # Signs
//!
//! Authorization amounts are positive holds. Transaction amounts are signed
//! from the card's point of view:
//!
//! - a $10.00 capture is `amount: -1000`
//! - a $2.50 refund is `amount: 250`

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod authorization;
pub mod card;
pub mod cardholder;
pub mod common;
pub mod token;
pub mod transaction;

pub use authorization::{
    IssuingAuthorization, IssuingAuthorizationApproveParams, IssuingAuthorizationDeclineParams,
    IssuingAuthorizationId, IssuingAuthorizationList, IssuingAuthorizationListParams,
    IssuingAuthorizationParams, IssuingAuthorizationStatus, RequestHistoryReason,
};
pub use card::{
    IssuingCard, IssuingCardId, IssuingCardList, IssuingCardListParams, IssuingCardParams,
    IssuingCardStatus, IssuingCardType,
};
pub use cardholder::{
    IssuingCardholder, IssuingCardholderId, IssuingCardholderList, IssuingCardholderListParams,
    IssuingCardholderParams, IssuingCardholderStatus, IssuingCardholderType,
};
pub use common::{
    MerchantData, SpendingControls, SpendingControlsParams, SpendingLimit, SpendingLimitInterval,
    SpendingLimitParams, Wallet,
};
pub use token::{
    IssuingToken, IssuingTokenId, IssuingTokenList, IssuingTokenListParams, IssuingTokenParams,
    IssuingTokenStatus,
};
pub use transaction::{
    IssuingTransaction, IssuingTransactionId, IssuingTransactionList, IssuingTransactionListParams,
    IssuingTransactionParams, IssuingTransactionType,
};
