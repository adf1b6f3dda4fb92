use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use tinypay_ledger::Ledger;
use tinypay_wallet::WalletService;

pub mod dto;
pub mod errors;
pub mod routes;

/// Published API documentation, target of `GET /api`.
pub(crate) const URL_API_DOC: &str =
    "https://github.com/tinypay/tinypay/blob/master/api/api.md";
/// Project page, default target of `GET /`.
pub(crate) const URL_PROJECT: &str = "https://github.com/tinypay/tinypay";

/// The wallet behind the router, type-erased over the ledger backend so the
/// same router serves Postgres in production and the in-memory store in the
/// black-box tests.
pub type AppService = WalletService<Arc<dyn Ledger>>;

/// Where the landing routes send the browser.
#[derive(Debug, Clone, Default)]
pub struct RedirectTargets {
    /// Overrides the project page for `GET /` when set (`REDIRECT_MAIN`).
    pub main: Option<String>,
}

pub fn build_router(service: Arc<AppService>, redirects: RedirectTargets) -> Router {
    Router::new()
        .route("/api/payments", get(routes::list_payments))
        .route("/api/accounts", get(routes::list_accounts))
        .route("/api/payment", post(routes::post_payment))
        .route("/api/account", post(routes::post_account))
        .route("/api", get(routes::redirect_api))
        .route("/", get(routes::redirect_main))
        .layer(Extension(service))
        .layer(Extension(redirects))
}
