use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use libris_core::BookId;
use libris_infra::handlers::RegisterBook;

use crate::app::dto::CommandResponse;
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_books).post(register_book))
        .route("/:id/copies", get(list_copies))
}

pub async fn register_book(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<RegisterBook>,
) -> axum::response::Response {
    errors::outcome_to_response(
        services.handlers.register_book(body),
        StatusCode::CREATED,
        CommandResponse::accepted,
    )
}

pub async fn list_books(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.handlers.list_books() {
        Ok(books) => Json(books).into_response(),
        Err(e) => errors::handler_error_to_response(e),
    }
}

/// Every copy of the book, wherever it is shelved, with its status.
pub async fn list_copies(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let book_id: BookId = match errors::parse_id(&id, "book") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match services.handlers.copies_of_book(book_id) {
        Ok(Some(copies)) => Json(copies).into_response(),
        Ok(None) => errors::json_error(StatusCode::NOT_FOUND, "not_found", "book not found"),
        Err(e) => errors::handler_error_to_response(e),
    }
}
