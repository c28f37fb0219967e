use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    routing::post,
    Json, Router,
};

use libris_core::BookCopyId;
use libris_infra::handlers::{ReceiveTransfer, RequestTransfer};

use crate::app::dto::{CommandResponse, ReceiveTransferRequest};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", post(request_transfer))
        .route("/:copy_id/receive", post(receive_transfer))
}

pub async fn request_transfer(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<RequestTransfer>,
) -> axum::response::Response {
    errors::outcome_to_response(
        services.handlers.request_transfer(body),
        StatusCode::OK,
        CommandResponse::accepted,
    )
}

pub async fn receive_transfer(
    Extension(services): Extension<Arc<AppServices>>,
    Path(copy_id): Path<String>,
    Json(body): Json<ReceiveTransferRequest>,
) -> axum::response::Response {
    let book_copy_id: BookCopyId = match errors::parse_id(&copy_id, "copy") {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    errors::outcome_to_response(
        services.handlers.receive_transfer(ReceiveTransfer {
            book_copy_id,
            target_site_id: body.target_site_id,
        }),
        StatusCode::OK,
        CommandResponse::accepted,
    )
}
