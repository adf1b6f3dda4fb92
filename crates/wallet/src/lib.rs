//! `tinypay-wallet` — the business-logic layer.
//!
//! Validates transfers and account creation, orchestrates the ledger's
//! commit primitive, and classifies outcomes into the wallet error taxonomy.
//! Holds no state of its own beyond the ledger handle.

pub mod service;

pub use service::WalletService;
