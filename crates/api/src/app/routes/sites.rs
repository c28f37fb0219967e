use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, routing::get, Json, Router};

use libris_infra::handlers::CreateSite;

use crate::app::dto::CommandResponse;
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(list_sites).post(create_site))
}

pub async fn create_site(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<CreateSite>,
) -> axum::response::Response {
    errors::outcome_to_response(
        services.handlers.create_site(body),
        StatusCode::CREATED,
        CommandResponse::accepted,
    )
}

pub async fn list_sites(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.handlers.list_sites() {
        Ok(sites) => Json(sites).into_response(),
        Err(e) => errors::handler_error_to_response(e),
    }
}
