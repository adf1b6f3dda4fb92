use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use tinypay_core::WalletError;

use crate::app::dto::{ErrorBody, ErrorMessage};

/// Encode a wallet failure as the `{code, error: {text, details}}` envelope.
///
/// `details` is the flattened cause chain, outermost first, so a client sees
/// both the classification and what actually went wrong underneath.
pub fn wallet_error_response(err: WalletError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut details = Vec::new();
    let mut cause = std::error::Error::source(&err);
    while let Some(e) = cause {
        details.push(e.to_string());
        cause = e.source();
    }

    let body = ErrorBody {
        code: status.as_u16(),
        error: ErrorMessage {
            text: err.to_string(),
            details,
        },
    };

    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinypay_ledger::LedgerError;

    #[test]
    fn status_and_body_code_agree() {
        let res = wallet_error_response(WalletError::not_found("ghost"));
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = WalletError::conflict("account a already exists", LedgerError::AlreadyExists);
        let res = wallet_error_response(err);
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }
}
