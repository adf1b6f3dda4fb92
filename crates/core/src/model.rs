//! Account and payment entities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tinypay_currency::Currency;

/// Per-account version stamp used for compare-and-swap commits.
///
/// The store bumps it to the commit time on every successful payment that
/// touches the account. Equality is the only operation the commit protocol
/// needs; `None` means the account row has never been stamped.
pub type VersionStamp = Option<DateTime<Utc>>;

/// A financial account with its derived (effective) balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Opaque, client-supplied identifier. Unique.
    pub id: String,
    /// Balance currency. Immutable after creation.
    pub currency: Currency,
    /// Effective balance in minor units: the checkpointed base plus all
    /// payments at or after the checkpoint date.
    pub balance: i64,
    /// CAS stamp; changes on every commit touching this account.
    pub version: VersionStamp,
}

/// Input for account creation. The store assigns the version stamp and the
/// balance checkpoint date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub id: String,
    pub currency: Currency,
    /// Opening balance in minor units.
    pub balance: i64,
}

/// A committed transfer between two accounts. Append-only; never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    /// Monotonic integer id assigned by the store.
    pub id: i64,
    pub from_id: String,
    pub to_id: String,
    /// Positive amount in minor units of the payer's currency.
    pub amount: i64,
    /// Commit time, assigned by the store.
    pub trx_time: DateTime<Utc>,
    /// Currency of the payer account (payments themselves are single-currency).
    pub currency: Currency,
}

/// Input for the payment commit primitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPayment {
    pub from_id: String,
    pub to_id: String,
    /// Positive amount in minor units.
    pub amount: i64,
    /// Currency of the payer account, echoed on the committed payment.
    pub currency: Currency,
}
