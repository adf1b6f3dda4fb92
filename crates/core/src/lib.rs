//! `tinypay-core` — domain model and error taxonomy.
//!
//! Pure domain types shared by the ledger store, the wallet core and the
//! transport layer. No IO, no persistence concerns.

pub mod error;
pub mod model;

pub use error::{WalletError, WalletResult};
pub use model::{Account, NewAccount, NewPayment, Payment, VersionStamp};
