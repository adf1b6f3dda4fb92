//! `tinypay-api` — HTTP transport for the wallet.
//!
//! Stateless request decoding and response encoding over the wallet core.
//! The wire format keeps the hyphenated field names (`account-from`,
//! `account-to`) and the `{code, error: {text, details}}` error envelope of
//! the public API; amounts cross the wire as decimal numbers in major units.

pub mod app;
pub mod config;
