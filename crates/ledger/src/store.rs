//! The ledger capability set and its error model.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use tinypay_core::{Account, NewAccount, NewPayment, Payment, VersionStamp};

/// Ledger store operation error.
///
/// These are infrastructure outcomes (missing rows, stale stamps, storage
/// faults); the wallet core classifies them into the public error taxonomy.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// No row with the requested id.
    #[error("not found")]
    NotFound,

    /// Unique-key constraint rejected an insert.
    #[error("row already exists")]
    AlreadyExists,

    /// The compare-and-swap predicate matched zero rows: another commit
    /// changed the account since it was read. State is unchanged.
    #[error("version stamp mismatch: account changed since it was read")]
    VersionMismatch,

    /// Storage-level failure (connection loss, serialization failure,
    /// deadlock). State is unchanged; the caller may retry.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// Durable account/payment storage with serializable transactions.
///
/// All mutation goes through `create_account` and `commit_payment`, each a
/// single atomic transaction. Payments are append-only; implementations must
/// never update or delete them.
#[async_trait]
pub trait Ledger: Send + Sync {
    /// All accounts, with derived effective balances. No ordering guarantee.
    async fn list_accounts(&self) -> Result<Vec<Account>, LedgerError>;

    /// All payments, ordered by `(from_id, trx_time)`, with the payer
    /// account's currency attached.
    async fn list_payments(&self) -> Result<Vec<Payment>, LedgerError>;

    /// One account with its derived balance and current version stamp.
    async fn get_account(&self, id: &str) -> Result<Account, LedgerError>;

    /// Insert a new account. The store assigns the version stamp and the
    /// balance checkpoint date. Duplicate ids yield `AlreadyExists`.
    async fn create_account(&self, account: NewAccount) -> Result<Account, LedgerError>;

    /// The commit primitive: inside one serializable transaction, stamp both
    /// accounts via compare-and-swap against the expected version stamps,
    /// then append the payment row. A stale stamp yields `VersionMismatch`
    /// and leaves state unchanged.
    async fn commit_payment(
        &self,
        payment: NewPayment,
        expected_from: VersionStamp,
        expected_to: VersionStamp,
    ) -> Result<Payment, LedgerError>;
}

#[async_trait]
impl<L> Ledger for Arc<L>
where
    L: Ledger + ?Sized,
{
    async fn list_accounts(&self) -> Result<Vec<Account>, LedgerError> {
        (**self).list_accounts().await
    }

    async fn list_payments(&self) -> Result<Vec<Payment>, LedgerError> {
        (**self).list_payments().await
    }

    async fn get_account(&self, id: &str) -> Result<Account, LedgerError> {
        (**self).get_account(id).await
    }

    async fn create_account(&self, account: NewAccount) -> Result<Account, LedgerError> {
        (**self).create_account(account).await
    }

    async fn commit_payment(
        &self,
        payment: NewPayment,
        expected_from: VersionStamp,
        expected_to: VersionStamp,
    ) -> Result<Payment, LedgerError> {
        (**self)
            .commit_payment(payment, expected_from, expected_to)
            .await
    }
}
