use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use libris_core::LoanId;
use libris_infra::handlers::{BorrowBook, ReturnBook};

use crate::app::dto::CommandResponse;
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(borrow_book))
        .route("/:id/return", post(return_book))
}

pub async fn borrow_book(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<BorrowBook>,
) -> axum::response::Response {
    errors::outcome_to_response(
        services.handlers.borrow_book(body),
        StatusCode::CREATED,
        CommandResponse::accepted,
    )
}

pub async fn return_book(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let loan_id: LoanId = match errors::parse_id(&id, "loan") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    errors::outcome_to_response(
        services.handlers.return_book(ReturnBook { loan_id }),
        StatusCode::OK,
        |penalty| CommandResponse::accepted(loan_id).with_penalty(penalty),
    )
}
