use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

pub static HEALTH_TAG: &str = "health";

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/api/v1/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is running", body = MessageDto)
    ),
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(MessageDto::new("ok")))
}
