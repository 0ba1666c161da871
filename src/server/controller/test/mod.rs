use axum::{
    body::Body,
    http::{header, Request, Response, StatusCode},
    Router,
};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::server::{config::Config, router::router, state::AppState};
use test_utils::{builder::TestBuilder, factory, fixture::stripe};


fn config() -> Config {
    Config {
        database_url: "sqlite::memory:".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        app_url: "http://localhost:3000".to_string(),
        jwt_secret: "controller-test-secret".to_string(),
        access_token_ttl_minutes: 15,
        refresh_token_ttl_days: 30,
        cookie_secure: false,
        stripe_webhook_secret: stripe::TEST_WEBHOOK_SECRET.to_string(),
        super_admin: None,
    }
}

fn app(db: &DatabaseConnection) -> Router {
    router(AppState::new(db.clone(), &config())).unwrap()
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn read_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Logs in and returns the response body.
async fn login(app: &Router, email: &str, password: &str) -> Value {
    let response = app
        .clone()
        .oneshot(request(
            "POST",
            "/api/v1/auth/login",
            None,
            Some(json!({ "email": email, "password": password })),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    read_json(response).await
}

fn access_token(body: &Value) -> String {
    body["data"]["access_token"].as_str().unwrap().to_string()
}
