use std::time::Duration;

use serde_json::{json, Value};
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

use crate::{
    client::{ApiClient, AuthStore},
    model::auth::AuthTokensDto,
};


const BASE: &str = "/api/v1";

fn profile_json(role: &str) -> Value {
    json!({
        "id": 3,
        "email": "reader@example.com",
        "role": role,
        "first_name": "Ada",
        "last_name": "Reader",
        "admin_id": null,
        "created_at": "2026-01-05T10:00:00Z",
        "updated_at": "2026-01-05T10:00:00Z"
    })
}

fn tokens_json(access_token: &str, refresh_token: Option<&str>, role: &str) -> Value {
    json!({
        "status": "success",
        "message": "Tokens issued",
        "data": {
            "access_token": access_token,
            "token_type": "Bearer",
            "expires_in": 900,
            "refresh_token": refresh_token,
            "profile": profile_json(role)
        }
    })
}

fn error_json(message: &str) -> Value {
    json!({ "status": "error", "message": message, "data": null })
}

/// Client pointed at `server` with a student already signed in as `access_token`.
async fn signed_in_client(server: &MockServer, access_token: &str) -> ApiClient {
    let store = AuthStore::new();
    let tokens: AuthTokensDto =
        serde_json::from_value(tokens_json(access_token, Some("refresh-1"), "student")["data"].clone())
            .unwrap();
    store.apply(tokens).await;

    ApiClient::with_store(&format!("{}{}", server.uri(), BASE), store).unwrap()
}
