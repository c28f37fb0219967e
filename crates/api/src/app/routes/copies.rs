use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, routing::post, Json, Router};

use libris_infra::handlers::AddBookCopy;

use crate::app::dto::CommandResponse;
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", post(add_book_copy))
}

pub async fn add_book_copy(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<AddBookCopy>,
) -> axum::response::Response {
    errors::outcome_to_response(
        services.handlers.add_book_copy(body),
        StatusCode::CREATED,
        CommandResponse::accepted,
    )
}
