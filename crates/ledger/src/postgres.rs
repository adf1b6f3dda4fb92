//! Postgres-backed ledger store.
//!
//! Accounts and payments live in two tables plus a view (`v_accounts`) that
//! derives each account's effective balance. The commit protocol runs inside
//! a single serializable transaction: compare-and-swap on both account
//! version stamps, then an append-only insert into `payments`.
//!
//! ## Error mapping
//!
//! | SQLSTATE | Meaning | `LedgerError` |
//! |----------|---------------------------------|-----------------|
//! | `23xxx`  | integrity constraint violation  | `AlreadyExists` (inserts) |
//! | `40001`  | serialization failure           | `Storage` |
//! | `40P01`  | deadlock detected               | `Storage` |
//! | other    | anything else                   | `Storage` |
//!
//! A CAS update matching zero rows is not a database error at all; it is
//! reported as `VersionMismatch` and the transaction is rolled back.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::{FromRow, Row};
use tracing::instrument;

use tinypay_core::{Account, NewAccount, NewPayment, Payment, VersionStamp};
use tinypay_currency::Currency;

use crate::store::{Ledger, LedgerError};

/// Postgres ledger store.
///
/// Cloneable; all operations go through the shared connection pool, which is
/// the only shared mutable resource in the process.
#[derive(Debug, Clone)]
pub struct PgLedger {
    pool: PgPool,
}

impl PgLedger {
    /// Connect to the database and verify the connection with a ping.
    ///
    /// With `wait` set, an unreachable database is polled once a second until
    /// it comes up; the caller bounds the wait by racing this future against
    /// its shutdown signal. With `wait` unset, the first failed ping is fatal.
    pub async fn connect(dsn: &str, pool_size: u32, wait: bool) -> Result<Self, LedgerError> {
        let pool = PgPoolOptions::new()
            .max_connections(pool_size)
            .connect_lazy(dsn)
            .map_err(|e| map_sqlx_error("connect", e))?;

        let mut attempt = 0u32;
        loop {
            match sqlx::query("SELECT 1").execute(&pool).await {
                Ok(_) => break,
                Err(e) if wait => {
                    attempt += 1;
                    tracing::warn!(error = %e, "waiting for a database connection... [{attempt}]");
                    tokio::time::sleep(Duration::from_secs(1)).await;
                }
                Err(e) => return Err(map_sqlx_error("ping", e)),
            }
        }

        Ok(Self { pool })
    }

    /// Apply the embedded schema migrations.
    pub async fn migrate(&self) -> Result<(), LedgerError> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| LedgerError::Storage(format!("migration failed: {e}")))
    }
}

#[async_trait]
impl Ledger for PgLedger {
    #[instrument(skip(self), err)]
    async fn list_accounts(&self) -> Result<Vec<Account>, LedgerError> {
        let rows = sqlx::query(
            r#"
            SELECT id, last_update, balance, currency
              FROM v_accounts
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_accounts", e))?;

        rows.iter().map(account_from_row).collect()
    }

    #[instrument(skip(self), err)]
    async fn list_payments(&self) -> Result<Vec<Payment>, LedgerError> {
        // The payment row carries no currency; it comes from the payer account.
        let rows = sqlx::query(
            r#"
            SELECT p.id, p.account_from_id, p.account_to_id, p.amount, p.trx_time, a.currency
              FROM payments AS p
                   INNER JOIN accounts AS a ON a.id = p.account_from_id
             ORDER BY p.account_from_id, p.trx_time
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_payments", e))?;

        rows.iter().map(payment_from_row).collect()
    }

    #[instrument(skip(self), err)]
    async fn get_account(&self, id: &str) -> Result<Account, LedgerError> {
        let row = sqlx::query(
            r#"
            SELECT id, last_update, balance, currency
              FROM v_accounts
             WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_account", e))?;

        match row {
            Some(row) => account_from_row(&row),
            None => Err(LedgerError::NotFound),
        }
    }

    #[instrument(skip(self, account), fields(account_id = %account.id), err)]
    async fn create_account(&self, account: NewAccount) -> Result<Account, LedgerError> {
        let now = Utc::now();
        let row = sqlx::query(
            r#"
            INSERT INTO accounts (id, last_update, currency, balance, balance_date)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, last_update, balance, currency
            "#,
        )
        .bind(&account.id)
        .bind(now)
        .bind(account.currency.code())
        .bind(account.balance)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_integrity_violation(&e) {
                LedgerError::AlreadyExists
            } else {
                map_sqlx_error("create_account", e)
            }
        })?;

        account_from_row(&row)
    }

    #[instrument(
        skip(self, payment),
        fields(from_id = %payment.from_id, to_id = %payment.to_id, amount = payment.amount),
        err
    )]
    async fn commit_payment(
        &self,
        payment: NewPayment,
        expected_from: VersionStamp,
        expected_to: VersionStamp,
    ) -> Result<Payment, LedgerError> {
        let now = Utc::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("begin", e))?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL SERIALIZABLE")
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("set_isolation", e))?;

        // CAS on the payer: stamp the row only if nobody else stamped it
        // since the wallet core read it. IS NOT DISTINCT FROM makes the
        // predicate deterministic for never-stamped rows.
        let res = sqlx::query(
            r#"
            UPDATE accounts
               SET last_update = $1
             WHERE id = $2
               AND last_update IS NOT DISTINCT FROM $3
            "#,
        )
        .bind(now)
        .bind(&payment.from_id)
        .bind(expected_from)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("stamp_from", e))?;

        if res.rows_affected() == 0 {
            tx.rollback()
                .await
                .map_err(|e| map_sqlx_error("rollback", e))?;
            return Err(LedgerError::VersionMismatch);
        }

        // Self-transfers share one row, already stamped above.
        if payment.to_id != payment.from_id {
            let res = sqlx::query(
                r#"
                UPDATE accounts
                   SET last_update = $1
                 WHERE id = $2
                   AND last_update IS NOT DISTINCT FROM $3
                "#,
            )
            .bind(now)
            .bind(&payment.to_id)
            .bind(expected_to)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error("stamp_to", e))?;

            if res.rows_affected() == 0 {
                tx.rollback()
                    .await
                    .map_err(|e| map_sqlx_error("rollback", e))?;
                return Err(LedgerError::VersionMismatch);
            }
        }

        let row = sqlx::query(
            r#"
            INSERT INTO payments (account_from_id, account_to_id, amount, trx_time)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&payment.from_id)
        .bind(&payment.to_id)
        .bind(payment.amount)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("insert_payment", e))?;

        let id: i64 = row
            .try_get("id")
            .map_err(|e| LedgerError::Storage(format!("failed to read payment id: {e}")))?;

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error("commit", e))?;

        Ok(Payment {
            id,
            from_id: payment.from_id,
            to_id: payment.to_id,
            amount: payment.amount,
            trx_time: now,
            currency: payment.currency,
        })
    }
}

// Row mapping

#[derive(Debug)]
struct AccountRow {
    id: String,
    last_update: Option<DateTime<Utc>>,
    balance: i64,
    currency: String,
}

impl<'r> FromRow<'r, PgRow> for AccountRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(AccountRow {
            id: row.try_get("id")?,
            last_update: row.try_get("last_update")?,
            balance: row.try_get("balance")?,
            currency: row.try_get("currency")?,
        })
    }
}

fn account_from_row(row: &PgRow) -> Result<Account, LedgerError> {
    let raw = AccountRow::from_row(row)
        .map_err(|e| LedgerError::Storage(format!("failed to decode account row: {e}")))?;
    let currency = parse_stored_currency(&raw.currency, &raw.id)?;
    Ok(Account {
        id: raw.id,
        currency,
        balance: raw.balance,
        version: raw.last_update,
    })
}

fn payment_from_row(row: &PgRow) -> Result<Payment, LedgerError> {
    let id: i64 = row
        .try_get("id")
        .map_err(|e| LedgerError::Storage(format!("failed to decode payment row: {e}")))?;
    let from_id: String = row
        .try_get("account_from_id")
        .map_err(|e| LedgerError::Storage(format!("failed to decode payment row: {e}")))?;
    let to_id: String = row
        .try_get("account_to_id")
        .map_err(|e| LedgerError::Storage(format!("failed to decode payment row: {e}")))?;
    let amount: i64 = row
        .try_get("amount")
        .map_err(|e| LedgerError::Storage(format!("failed to decode payment row: {e}")))?;
    let trx_time: DateTime<Utc> = row
        .try_get("trx_time")
        .map_err(|e| LedgerError::Storage(format!("failed to decode payment row: {e}")))?;
    let currency: String = row
        .try_get("currency")
        .map_err(|e| LedgerError::Storage(format!("failed to decode payment row: {e}")))?;
    let currency = parse_stored_currency(&currency, &from_id)?;

    Ok(Payment {
        id,
        from_id,
        to_id,
        amount,
        trx_time,
        currency,
    })
}

fn parse_stored_currency(code: &str, account_id: &str) -> Result<Currency, LedgerError> {
    Currency::parse(code).map_err(|e| {
        LedgerError::Storage(format!("account {account_id} has a corrupt currency code: {e}"))
    })
}

fn map_sqlx_error(operation: &str, err: sqlx::Error) -> LedgerError {
    match err {
        sqlx::Error::RowNotFound => LedgerError::NotFound,
        sqlx::Error::Database(db_err) => LedgerError::Storage(format!(
            "database error in {operation}: {} (sqlstate {})",
            db_err.message(),
            db_err.code().as_deref().unwrap_or("unknown"),
        )),
        sqlx::Error::PoolClosed => {
            LedgerError::Storage(format!("connection pool closed in {operation}"))
        }
        other => LedgerError::Storage(format!("sqlx error in {operation}: {other}")),
    }
}

/// SQLSTATE class 23 covers unique/foreign-key/check violations; for the
/// single-insert paths this means the row already exists.
fn is_integrity_violation(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        if let Some(code) = db_err.code() {
            return code.starts_with("23");
        }
    }
    false
}
