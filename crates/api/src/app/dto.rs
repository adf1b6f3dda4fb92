//! Wire-format request and response bodies.
//!
//! Amounts are decimal numbers in major units on the wire; the wallet core
//! converts to and from minor units at the currency's scale.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tinypay_core::{Account, Payment};
use tinypay_currency::{self as currency, Currency};

#[derive(Debug, Deserialize)]
pub struct PostPaymentRequest {
    #[serde(rename = "account-from")]
    pub account_from: String,
    #[serde(rename = "account-to")]
    pub account_to: String,
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct PostAccountRequest {
    pub id: String,
    pub balance: Decimal,
    pub currency: String,
}

#[derive(Debug, Serialize)]
pub struct AccountBody {
    pub id: String,
    pub balance: Decimal,
    pub currency: Currency,
}

impl From<Account> for AccountBody {
    fn from(a: Account) -> Self {
        Self {
            id: a.id,
            balance: currency::to_major(a.balance, a.currency),
            currency: a.currency,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PaymentBody {
    #[serde(rename = "account-from")]
    pub account_from: String,
    #[serde(rename = "account-to")]
    pub account_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
    pub amount: Decimal,
    pub currency: Currency,
}

impl From<Payment> for PaymentBody {
    fn from(p: Payment) -> Self {
        Self {
            account_from: p.from_id,
            account_to: p.to_id,
            time: Some(p.trx_time),
            amount: currency::to_major(p.amount, p.currency),
            currency: p.currency,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AccountsResponse {
    pub accounts: Vec<AccountBody>,
}

#[derive(Debug, Serialize)]
pub struct PaymentsResponse {
    pub payments: Vec<PaymentBody>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: u16,
    pub error: ErrorMessage,
}

#[derive(Debug, Serialize)]
pub struct ErrorMessage {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}
