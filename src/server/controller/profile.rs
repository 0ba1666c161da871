use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        profile::{PaginatedProfilesDto, ProfileDto, ProfileViewDto, UpdateProfileDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        extract::{Json, Query},
        middleware::auth::{AuthGuard, Permission},
        service::profile::ProfileService,
        state::AppState,
    },
};

pub static PROFILE_TAG: &str = "profile";

/// Get the caller's profile with its governing subscription.
///
/// For students the subscription fields describe the managing admin's subscription.
#[utoipa::path(
    get,
    path = "/api/v1/profiles/me",
    tag = PROFILE_TAG,
    responses(
        (status = 200, description = "Profile retrieved", body = ApiResponse<ProfileViewDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let profile = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = ProfileService::new(&state.db);

    let view = service.get_view(profile).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Profile retrieved", view.into_dto())),
    ))
}

/// Update the caller's names.
#[utoipa::path(
    put,
    path = "/api/v1/profiles/me",
    tag = PROFILE_TAG,
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Profile updated", body = ApiResponse<ProfileDto>),
        (status = 400, description = "Invalid profile data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_own_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    let profile = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = ProfileService::new(&state.db);

    let updated = service.update_own(profile.id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Profile updated", updated.into_dto())),
    ))
}

/// List every profile.
///
/// # Access Control
/// - `SuperAdmin`
#[utoipa::path(
    get,
    path = "/api/v1/profiles",
    tag = PROFILE_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Profiles retrieved", body = ApiResponse<PaginatedProfilesDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a super-admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profiles(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = ProfileService::new(&state.db);

    let profiles = service.list_all(params.page, params.per_page()).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Profiles retrieved", profiles.into_dto())),
    ))
}
