use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Utc;

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard, Permission},
    model::profile::{Profile, Role},
    service::token::TokenService,
};
use test_utils::{builder::TestBuilder, factory};

mod require;

fn tokens() -> TokenService {
    TokenService::new("guard-test-secret", 15, 30)
}

fn headers_for(tokens: &TokenService, profile: &entity::profile::Model) -> HeaderMap {
    let profile = Profile::from_entity(profile.clone()).unwrap();
    let token = tokens.issue_access_token(&profile, Utc::now()).unwrap();

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}

/// Tests bearer token extraction from the Authorization header.
///
/// Expected: token for `Bearer`, None for other schemes or empty tokens
#[test]
fn extracts_bearer_token() {
    let mut headers = HeaderMap::new();
    assert_eq!(bearer_token(&headers), None);

    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
    assert_eq!(bearer_token(&headers), Some("abc.def"));

    headers.insert(AUTHORIZATION, HeaderValue::from_static("bearer abc"));
    assert_eq!(bearer_token(&headers), Some("abc"));

    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
    assert_eq!(bearer_token(&headers), None);

    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer "));
    assert_eq!(bearer_token(&headers), None);
}
