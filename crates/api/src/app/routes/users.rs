use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use libris_core::UserAccountId;
use libris_infra::handlers::RegisterUser;

use crate::app::dto::{self, CommandResponse};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_users).post(register_user))
        .route("/:id", get(get_user))
        .route("/:id/loans", get(list_active_loans))
}

pub async fn register_user(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<RegisterUser>,
) -> axum::response::Response {
    errors::outcome_to_response(
        services.handlers.register_user(body),
        StatusCode::CREATED,
        CommandResponse::accepted,
    )
}

pub async fn list_users(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.handlers.list_users() {
        Ok(users) => Json(users.iter().map(dto::account_to_json).collect::<Vec<_>>()).into_response(),
        Err(e) => errors::handler_error_to_response(e),
    }
}

pub async fn get_user(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let user_id: UserAccountId = match errors::parse_id(&id, "user") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.handlers.user_summary(user_id) {
        Ok(Some(summary)) => Json(dto::user_to_json(&summary)).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
        Err(e) => errors::handler_error_to_response(e),
    }
}

pub async fn list_active_loans(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let user_id: UserAccountId = match errors::parse_id(&id, "user") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.handlers.user_summary(user_id) {
        Ok(Some(summary)) => Json(
            summary
                .active_loans
                .iter()
                .map(dto::loan_to_json)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "user not found"),
        Err(e) => errors::handler_error_to_response(e),
    }
}
