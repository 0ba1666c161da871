use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        profile::{CreateStudentDto, PaginatedProfilesDto, ProfileDto, UpdateStudentDto},
        progress::{ActivityDto, ProgressDto},
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        extract::{Json, Path, Query},
        middleware::auth::{AuthGuard, Permission},
        model::progress::StudentProgress,
        service::{
            profile::{CreateStudentParams, ProfileService, UpdateStudentParams},
            progress::ProgressService,
        },
        state::AppState,
    },
};

pub static STUDENT_TAG: &str = "student";

#[derive(Deserialize)]
pub struct ActivityParams {
    pub days: Option<u32>,
}

/// Create a student managed by the caller.
///
/// Enforces the admin's plan limit when the admin has an active subscription.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    post,
    path = "/api/v1/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student created", body = ApiResponse<ProfileDto>),
        (status = 400, description = "Invalid data, duplicate email or plan limit reached", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ProfileService::new(&state.db);

    let student = service
        .create_student(&admin, CreateStudentParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Student created", student.into_dto())),
    ))
}

/// List the caller's students.
#[utoipa::path(
    get,
    path = "/api/v1/students",
    tag = STUDENT_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Students retrieved", body = ApiResponse<PaginatedProfilesDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ProfileService::new(&state.db);

    let students = service
        .list_students(&admin, params.page, params.per_page())
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Students retrieved", students.into_dto())),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/students/{student_id}",
    tag = STUDENT_TAG,
    params(("student_id" = i32, Path, description = "Student profile ID")),
    responses(
        (status = 200, description = "Student retrieved", body = ApiResponse<ProfileDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Student is managed by another admin", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ProfileService::new(&state.db);

    let student = service.get_managed_student(&admin, student_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Student retrieved", student.into_dto())),
    ))
}

#[utoipa::path(
    put,
    path = "/api/v1/students/{student_id}",
    tag = STUDENT_TAG,
    params(("student_id" = i32, Path, description = "Student profile ID")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = ApiResponse<ProfileDto>),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Student is managed by another admin", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<i32>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ProfileService::new(&state.db);

    let student = service
        .update_student(&admin, UpdateStudentParams::from_dto(student_id, payload))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Student updated", student.into_dto())),
    ))
}

/// Delete a student and all of their progress.
#[utoipa::path(
    delete,
    path = "/api/v1/students/{student_id}",
    tag = STUDENT_TAG,
    params(("student_id" = i32, Path, description = "Student profile ID")),
    responses(
        (status = 200, description = "Student deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Student is managed by another admin", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ProfileService::new(&state.db);

    service.delete_student(&admin, student_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Student deleted"))))
}

/// List a managed student's progress records.
#[utoipa::path(
    get,
    path = "/api/v1/students/{student_id}/progress",
    tag = STUDENT_TAG,
    params(("student_id" = i32, Path, description = "Student profile ID")),
    responses(
        (status = 200, description = "Progress retrieved", body = ApiResponse<Vec<ProgressDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Student is managed by another admin", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let student = ProfileService::new(&state.db)
        .get_managed_student(&admin, student_id)
        .await?;
    let progress = ProgressService::new(&state.db).list(student.id).await?;

    let dtos: Vec<ProgressDto> = progress
        .into_iter()
        .map(StudentProgress::into_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Progress retrieved", dtos)),
    ))
}

/// Activity statistics of a managed student.
#[utoipa::path(
    get,
    path = "/api/v1/students/{student_id}/activity",
    tag = STUDENT_TAG,
    params(
        ("student_id" = i32, Path, description = "Student profile ID"),
        ("days" = Option<u32>, Query, description = "Calendar window in days (default: 90, max: 366)")
    ),
    responses(
        (status = 200, description = "Activity retrieved", body = ApiResponse<ActivityDto>),
        (status = 400, description = "Invalid calendar window", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Student is managed by another admin", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(student_id): Path<i32>,
    Query(params): Query<ActivityParams>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let student = ProfileService::new(&state.db)
        .get_managed_student(&admin, student_id)
        .await?;
    let activity = ProgressService::new(&state.db)
        .activity(student.id, params.days)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Activity retrieved", activity.into_dto())),
    ))
}
