use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;

use crate::{
    model::{api::ErrorDto, billing::WebhookAckDto},
    server::{
        error::AppError,
        service::webhook::{verify_signature, WebhookService},
        state::AppState,
    },
};

pub static WEBHOOK_TAG: &str = "webhook";

const SIGNATURE_HEADER: &str = "stripe-signature";

/// Receive a billing provider event.
///
/// Responds with a bare `{"received": true}` body rather than the usual envelope.
#[utoipa::path(
    post,
    path = "/api/v1/webhooks/stripe",
    tag = WEBHOOK_TAG,
    request_body(content = String, description = "Raw event payload"),
    responses(
        (status = 200, description = "Event acknowledged", body = WebhookAckDto),
        (status = 400, description = "Missing or invalid signature, or malformed payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn stripe_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let signature = headers
        .get(SIGNATURE_HEADER)
        .and_then(|value| value.to_str().ok());

    verify_signature(&body, signature, &state.stripe_webhook_secret, Utc::now())?;

    let service = WebhookService::new(&state.db);

    service.handle_payload(&body).await?;

    Ok((StatusCode::OK, Json(WebhookAckDto { received: true })))
}
