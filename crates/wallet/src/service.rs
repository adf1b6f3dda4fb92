//! Wallet operations over an abstract ledger.

use rust_decimal::Decimal;

use tinypay_core::{Account, NewAccount, NewPayment, Payment, WalletError, WalletResult};
use tinypay_currency::{self as currency, Currency};
use tinypay_ledger::{Ledger, LedgerError};

/// The wallet core.
///
/// Generic over the ledger so tests can run against the in-memory store.
/// Each operation is an independent flow of control; the only shared mutable
/// resource is the ledger itself.
#[derive(Debug, Clone)]
pub struct WalletService<L> {
    ledger: L,
}

impl<L: Ledger> WalletService<L> {
    pub fn new(ledger: L) -> Self {
        Self { ledger }
    }

    /// All accounts with derived balances.
    pub async fn list_accounts(&self) -> WalletResult<Vec<Account>> {
        self.ledger.list_accounts().await.map_err(unexpected)
    }

    /// All payments, ordered by `(from_id, trx_time)`.
    pub async fn list_payments(&self) -> WalletResult<Vec<Payment>> {
        self.ledger.list_payments().await.map_err(unexpected)
    }

    /// Create a new account with an opening balance in major units.
    pub async fn create_account(
        &self,
        id: &str,
        balance: Decimal,
        currency_code: &str,
    ) -> WalletResult<Account> {
        let curr = Currency::parse(currency_code)
            .map_err(|e| WalletError::invalid_currency(currency_code, e))?;

        if balance < Decimal::ZERO {
            return Err(WalletError::invalid_amount(balance));
        }
        let minor =
            currency::to_minor(balance, curr).ok_or(WalletError::invalid_amount(balance))?;

        let account = NewAccount {
            id: id.to_string(),
            currency: curr,
            balance: minor,
        };

        match self.ledger.create_account(account).await {
            Ok(created) => Ok(created),
            Err(e @ LedgerError::AlreadyExists) => Err(WalletError::conflict(
                format!("account {id} already exists"),
                e,
            )),
            Err(e) => Err(WalletError::internal("account creation failed", e)),
        }
    }

    /// Process a transfer between two accounts.
    ///
    /// The read phase (two account lookups plus all validation) runs with no
    /// transaction open; the ledger's commit primitive then compare-and-swaps
    /// both version stamps read here. Any payment that raced with this one
    /// changed a stamp, the commit is rejected as `Conflict`, and the caller
    /// decides whether to retry. Nothing is retried here.
    pub async fn post_payment(
        &self,
        from_id: &str,
        to_id: &str,
        amount: Decimal,
    ) -> WalletResult<Payment> {
        let from = self.get_account(from_id).await?;
        let to = self.get_account(to_id).await?;

        if from.currency != to.currency {
            return Err(WalletError::CurrencyMismatch {
                from: from.id,
                to: to.id,
            });
        }

        let minor =
            currency::to_minor(amount, from.currency).ok_or(WalletError::invalid_amount(amount))?;
        if minor <= 0 {
            return Err(WalletError::invalid_amount(amount));
        }

        if from.balance < minor {
            return Err(WalletError::InsufficientFunds { account: from.id });
        }

        let payment = NewPayment {
            from_id: from.id,
            to_id: to.id,
            amount: minor,
            currency: from.currency,
        };

        match self
            .ledger
            .commit_payment(payment, from.version, to.version)
            .await
        {
            Ok(committed) => {
                tracing::debug!(payment_id = committed.id, "payment committed");
                Ok(committed)
            }
            Err(e @ LedgerError::VersionMismatch) => Err(WalletError::conflict(
                "accounts were changed by a concurrent payment, try again",
                e,
            )),
            Err(e) => Err(WalletError::internal("payment processing failed", e)),
        }
    }

    async fn get_account(&self, id: &str) -> WalletResult<Account> {
        match self.ledger.get_account(id).await {
            Ok(account) => Ok(account),
            Err(LedgerError::NotFound) => Err(WalletError::not_found(id)),
            Err(e) => Err(unexpected(e)),
        }
    }
}

fn unexpected(err: LedgerError) -> WalletError {
    WalletError::internal("unexpected error", err)
}
