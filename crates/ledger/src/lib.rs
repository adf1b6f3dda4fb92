//! `tinypay-ledger` — persistent account/payment storage.
//!
//! The [`Ledger`] trait is the capability set the wallet core depends on;
//! [`PgLedger`] is the production Postgres implementation carrying the
//! serializable compare-and-swap commit protocol, and [`InMemoryLedger`] is a
//! test double with the same atomicity guarantees.

pub mod in_memory;
pub mod postgres;
pub mod store;

pub use in_memory::InMemoryLedger;
pub use postgres::PgLedger;
pub use store::{Ledger, LedgerError};
