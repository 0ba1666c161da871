use axum::{
    http::{header, HeaderValue, Method},
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::server::{
    controller::{
        auth::{login, logout, me, refresh, signup},
        health::health,
        plan::{create_plan, get_plans},
        profile::{get_own_profile, get_profiles, update_own_profile},
        progress::{
            get_module_progress, get_own_activity, get_own_progress, record_time,
            start_progress, submit_paragraph, update_progress,
        },
        reading_module::{create_module, delete_module, get_module, get_modules, update_module},
        student::{
            create_student, delete_student, get_student, get_student_activity,
            get_student_progress, get_students, update_student,
        },
        webhook::stripe_webhook,
    },
    error::{config::ConfigError, AppError},
    openapi::ApiDoc,
    state::AppState,
};

async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Routes mounted under `/api/v1`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/refresh", post(refresh))
        .route("/auth/logout", post(logout))
        .route("/auth/me", get(me))
        .route("/profiles/me", get(get_own_profile).put(update_own_profile))
        .route("/profiles", get(get_profiles))
        .route("/students", get(get_students).post(create_student))
        .route(
            "/students/{student_id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/students/{student_id}/progress", get(get_student_progress))
        .route("/students/{student_id}/activity", get(get_student_activity))
        .route("/modules", get(get_modules).post(create_module))
        .route(
            "/modules/{module_id}",
            get(get_module).put(update_module).delete(delete_module),
        )
        .route("/progress/start", post(start_progress))
        .route("/progress", get(get_own_progress))
        .route("/progress/activity", get(get_own_activity))
        .route("/progress/modules/{module_id}", get(get_module_progress))
        .route(
            "/progress/modules/{module_id}/submissions",
            post(submit_paragraph),
        )
        .route("/progress/modules/{module_id}/time", post(record_time))
        .route("/progress/{progress_id}", put(update_progress))
        .route("/plans", get(get_plans).post(create_plan))
        .route("/webhooks/stripe", post(stripe_webhook))
        .route("/health", get(health))
        .route("/openapi.json", get(openapi_json))
}

/// Builds the application with CORS for the frontend origin and request tracing.
///
/// # Returns
/// - `Ok(Router)` - Router with state applied
/// - `Err(ConfigError::InvalidEnvVar)` - `APP_URL` is not a valid origin header value
pub fn router(state: AppState) -> Result<Router, AppError> {
    let origin = HeaderValue::from_str(state.app_url.trim_end_matches('/')).map_err(|_| {
        ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            value: state.app_url.clone(),
        }
    })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    Ok(Router::new()
        .nest("/api/v1", api_router())
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
