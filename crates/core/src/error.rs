//! Wallet error taxonomy.
//!
//! Every failure the wallet core can surface, tagged so the transport layer
//! can pattern-match for the status code. Causes are attached as `source`
//! chains; the transport layer walks them to build the `details` list of the
//! error response.

use rust_decimal::Decimal;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type used across the wallet core.
pub type WalletResult<T> = Result<T, WalletError>;

/// Classified wallet failure.
///
/// Validation failures (currency, amount, funds) are fatal to the request.
/// `Conflict` means the state did not change and the caller may retry after
/// re-reading. `Internal` is a storage-level failure.
#[derive(Debug, Error)]
pub enum WalletError {
    /// Currency code is not in the ISO 4217 table.
    #[error("can't process operation with currency {code}")]
    InvalidCurrency {
        code: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Negative opening balance or non-positive transfer amount.
    #[error("invalid amount {amount}")]
    InvalidAmount { amount: Decimal },

    /// Payer and receiver hold balances in different currencies.
    #[error("accounts {from} and {to} have different balance currencies, payment can't be processed")]
    CurrencyMismatch { from: String, to: String },

    /// Effective balance of the payer is below the transfer amount.
    #[error("account {account} has not enough money")]
    InsufficientFunds { account: String },

    /// Referenced account does not exist.
    #[error("account {account} not found")]
    NotFound { account: String },

    /// Duplicate account id or a concurrent commit changed an account
    /// version stamp.
    #[error("{message}")]
    Conflict {
        message: String,
        #[source]
        source: Option<BoxError>,
    },

    /// Storage failure; state of the request is unchanged.
    #[error("{message}")]
    Internal {
        message: String,
        #[source]
        source: Option<BoxError>,
    },
}

impl WalletError {
    pub fn invalid_currency(code: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::InvalidCurrency {
            code: code.into(),
            source: Some(source.into()),
        }
    }

    pub fn invalid_amount(amount: Decimal) -> Self {
        Self::InvalidAmount { amount }
    }

    pub fn not_found(account: impl Into<String>) -> Self {
        Self::NotFound {
            account: account.into(),
        }
    }

    pub fn conflict(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Conflict {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn internal(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Internal {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// HTTP status code for this error kind.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidCurrency { .. }
            | Self::InvalidAmount { .. }
            | Self::CurrencyMismatch { .. }
            | Self::InsufficientFunds { .. } => 400,
            Self::NotFound { .. } => 404,
            Self::Conflict { .. } => 409,
            Self::Internal { .. } => 500,
        }
    }

    /// Whether the caller may retry the request unchanged.
    pub fn retriable(&self) -> bool {
        matches!(self, Self::Conflict { .. } | Self::Internal { .. })
    }
}
