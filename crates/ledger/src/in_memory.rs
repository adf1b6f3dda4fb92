//! In-memory ledger store for tests and local development.
//!
//! Mirrors the Postgres semantics: derived balances, append-only payments,
//! and a compare-and-swap commit. The whole commit runs under one lock, so
//! concurrent commits observe the same linearization guarantees the
//! serializable transaction gives the production store.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use tinypay_core::{Account, NewAccount, NewPayment, Payment, VersionStamp};
use tinypay_currency::Currency;

use crate::store::{Ledger, LedgerError};

#[derive(Debug)]
struct StoredAccount {
    currency: Currency,
    balance_base: i64,
    balance_date: DateTime<Utc>,
    last_update: VersionStamp,
}

#[derive(Debug, Default)]
struct State {
    accounts: HashMap<String, StoredAccount>,
    payments: Vec<Payment>,
    next_payment_id: i64,
}

impl State {
    fn effective_balance(&self, id: &str, acc: &StoredAccount) -> i64 {
        let mut balance = acc.balance_base;
        for p in &self.payments {
            if p.trx_time < acc.balance_date {
                continue;
            }
            if p.to_id == id {
                balance += p.amount;
            }
            if p.from_id == id {
                balance -= p.amount;
            }
        }
        balance
    }

    fn account_view(&self, id: &str, acc: &StoredAccount) -> Account {
        Account {
            id: id.to_string(),
            currency: acc.currency,
            balance: self.effective_balance(id, acc),
            version: acc.last_update,
        }
    }
}

/// Lock-guarded ledger double.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    inner: Mutex<State>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Ledger for InMemoryLedger {
    async fn list_accounts(&self) -> Result<Vec<Account>, LedgerError> {
        let state = self.inner.lock().expect("ledger lock poisoned");
        Ok(state
            .accounts
            .iter()
            .map(|(id, acc)| state.account_view(id, acc))
            .collect())
    }

    async fn list_payments(&self) -> Result<Vec<Payment>, LedgerError> {
        let state = self.inner.lock().expect("ledger lock poisoned");
        let mut payments = state.payments.clone();
        payments.sort_by(|a, b| (&a.from_id, a.trx_time).cmp(&(&b.from_id, b.trx_time)));
        Ok(payments)
    }

    async fn get_account(&self, id: &str) -> Result<Account, LedgerError> {
        let state = self.inner.lock().expect("ledger lock poisoned");
        state
            .accounts
            .get(id)
            .map(|acc| state.account_view(id, acc))
            .ok_or(LedgerError::NotFound)
    }

    async fn create_account(&self, account: NewAccount) -> Result<Account, LedgerError> {
        let mut state = self.inner.lock().expect("ledger lock poisoned");
        if state.accounts.contains_key(&account.id) {
            return Err(LedgerError::AlreadyExists);
        }

        let now = Utc::now();
        state.accounts.insert(
            account.id.clone(),
            StoredAccount {
                currency: account.currency,
                balance_base: account.balance,
                balance_date: now,
                last_update: Some(now),
            },
        );

        Ok(Account {
            id: account.id,
            currency: account.currency,
            balance: account.balance,
            version: Some(now),
        })
    }

    async fn commit_payment(
        &self,
        payment: NewPayment,
        expected_from: VersionStamp,
        expected_to: VersionStamp,
    ) -> Result<Payment, LedgerError> {
        let mut state = self.inner.lock().expect("ledger lock poisoned");
        let now = Utc::now();

        let from = state
            .accounts
            .get(&payment.from_id)
            .ok_or(LedgerError::NotFound)?;
        if from.last_update != expected_from {
            return Err(LedgerError::VersionMismatch);
        }

        if payment.to_id != payment.from_id {
            let to = state
                .accounts
                .get(&payment.to_id)
                .ok_or(LedgerError::NotFound)?;
            if to.last_update != expected_to {
                return Err(LedgerError::VersionMismatch);
            }
        }

        // Both stamps verified; apply under the same lock hold.
        state
            .accounts
            .get_mut(&payment.from_id)
            .expect("checked above")
            .last_update = Some(now);
        if payment.to_id != payment.from_id {
            state
                .accounts
                .get_mut(&payment.to_id)
                .expect("checked above")
                .last_update = Some(now);
        }

        state.next_payment_id += 1;
        let committed = Payment {
            id: state.next_payment_id,
            from_id: payment.from_id,
            to_id: payment.to_id,
            amount: payment.amount,
            trx_time: now,
            currency: payment.currency,
        };
        state.payments.push(committed.clone());
        Ok(committed)
    }
}
