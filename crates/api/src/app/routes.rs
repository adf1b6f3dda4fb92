use std::sync::Arc;

use axum::extract::Extension;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::app::dto::{
    AccountBody, AccountsResponse, PaymentBody, PaymentsResponse, PostAccountRequest,
    PostPaymentRequest,
};
use crate::app::errors::wallet_error_response;
use crate::app::{AppService, RedirectTargets, URL_API_DOC, URL_PROJECT};

pub async fn list_accounts(Extension(service): Extension<Arc<AppService>>) -> Response {
    match service.list_accounts().await {
        Ok(accounts) => Json(AccountsResponse {
            accounts: accounts.into_iter().map(AccountBody::from).collect(),
        })
        .into_response(),
        Err(e) => wallet_error_response(e),
    }
}

pub async fn list_payments(Extension(service): Extension<Arc<AppService>>) -> Response {
    match service.list_payments().await {
        Ok(payments) => Json(PaymentsResponse {
            payments: payments.into_iter().map(PaymentBody::from).collect(),
        })
        .into_response(),
        Err(e) => wallet_error_response(e),
    }
}

pub async fn post_account(
    Extension(service): Extension<Arc<AppService>>,
    Json(req): Json<PostAccountRequest>,
) -> Response {
    match service
        .create_account(&req.id, req.balance, &req.currency)
        .await
    {
        Ok(account) => Json(AccountBody::from(account)).into_response(),
        Err(e) => wallet_error_response(e),
    }
}

pub async fn post_payment(
    Extension(service): Extension<Arc<AppService>>,
    Json(req): Json<PostPaymentRequest>,
) -> Response {
    match service
        .post_payment(&req.account_from, &req.account_to, req.amount)
        .await
    {
        Ok(payment) => Json(PaymentBody::from(payment)).into_response(),
        Err(e) => wallet_error_response(e),
    }
}

pub async fn redirect_api() -> Response {
    moved_permanently(URL_API_DOC)
}

pub async fn redirect_main(Extension(redirects): Extension<RedirectTargets>) -> Response {
    let url = redirects
        .main
        .unwrap_or_else(|| URL_PROJECT.to_string());
    moved_permanently(&url)
}

// The public contract is a plain 301; axum's `Redirect::permanent` answers
// 308, so the response is built by hand.
fn moved_permanently(url: &str) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, url.to_string())],
    )
        .into_response()
}
