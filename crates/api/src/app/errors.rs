use std::str::FromStr;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use libris_core::DomainError;
use libris_infra::handlers::{HandlerError, HandlerResult, Outcome, Rejection};

use crate::app::dto::CommandResponse;

/// Turn a handler result into a response: `success` status plus the
/// rendered payload, or the rejection/fault mapping below.
pub fn outcome_to_response<T>(
    result: HandlerResult<T>,
    success: StatusCode,
    render: impl FnOnce(T) -> CommandResponse,
) -> axum::response::Response {
    match result {
        Ok(Outcome::Accepted(value)) => (success, axum::Json(render(value))).into_response(),
        Ok(Outcome::Rejected(rejection)) => rejection_to_response(rejection),
        Err(err) => handler_error_to_response(err),
    }
}

pub fn rejection_to_response(rejection: Rejection) -> axum::response::Response {
    let status = if rejection.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    (status, axum::Json(CommandResponse::rejected(rejection.code()))).into_response()
}

pub fn handler_error_to_response(err: HandlerError) -> axum::response::Response {
    let status = match &err {
        HandlerError::Domain(DomainError::InvalidArgument(_) | DomainError::InvalidId(_)) => {
            StatusCode::BAD_REQUEST
        }
        HandlerError::Domain(DomainError::InvalidState(_)) => StatusCode::CONFLICT,
        HandlerError::Domain(DomainError::NotFound) => StatusCode::NOT_FOUND,
        HandlerError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        tracing::error!(code = err.code(), error = %err, "handler fault");
    } else {
        tracing::warn!(code = err.code(), error = %err, "handler fault");
    }

    (
        status,
        axum::Json(CommandResponse::fault(err.code(), err.to_string())),
    )
        .into_response()
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Parse a path segment into a typed id, or answer 400 `invalid_id`.
pub fn parse_id<T: FromStr>(raw: &str, what: &str) -> Result<T, axum::response::Response> {
    raw.parse()
        .map_err(|_| json_error(StatusCode::BAD_REQUEST, "invalid_id", format!("invalid {what} id")))
}
