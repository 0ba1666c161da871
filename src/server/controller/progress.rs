use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        progress::{
            ActivityDto, ProgressDetailDto, ProgressDto, RecordTimeDto, StartProgressDto,
            SubmitParagraphDto, UpdateProgressDto,
        },
    },
    server::{
        controller::student::ActivityParams,
        error::AppError,
        extract::{Json, Path, Query},
        middleware::auth::{AuthGuard, Permission},
        model::progress::{StudentProgress, SubmitParagraphParams, UpdateProgressParams},
        service::progress::ProgressService,
        state::AppState,
    },
};

pub static PROGRESS_TAG: &str = "progress";

/// Start a module. Returns the existing record if the module was already started.
///
/// # Access Control
/// - `Student`
#[utoipa::path(
    post,
    path = "/api/v1/progress/start",
    tag = PROGRESS_TAG,
    request_body = StartProgressDto,
    responses(
        (status = 200, description = "Progress record", body = ApiResponse<ProgressDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<StartProgressDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Student])
        .await?;

    let service = ProgressService::new(&state.db);

    let progress = service.start(&student, payload.module_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Module started", progress.into_dto())),
    ))
}

/// List the caller's progress records, most recently updated first.
#[utoipa::path(
    get,
    path = "/api/v1/progress",
    tag = PROGRESS_TAG,
    responses(
        (status = 200, description = "Progress retrieved", body = ApiResponse<Vec<ProgressDto>>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Student])
        .await?;

    let service = ProgressService::new(&state.db);

    let dtos: Vec<ProgressDto> = service
        .list(student.id)
        .await?
        .into_iter()
        .map(StudentProgress::into_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Progress retrieved", dtos)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/progress/activity",
    tag = PROGRESS_TAG,
    params(
        ("days" = Option<u32>, Query, description = "Calendar window in days (default: 90, max: 366)")
    ),
    responses(
        (status = 200, description = "Activity retrieved", body = ApiResponse<ActivityDto>),
        (status = 400, description = "Invalid calendar window", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_own_activity(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ActivityParams>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Student])
        .await?;

    let service = ProgressService::new(&state.db);

    let activity = service.activity(student.id, params.days).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Activity retrieved", activity.into_dto())),
    ))
}

/// Progress on one module with its submissions.
#[utoipa::path(
    get,
    path = "/api/v1/progress/modules/{module_id}",
    tag = PROGRESS_TAG,
    params(("module_id" = i32, Path, description = "Reading module ID")),
    responses(
        (status = 200, description = "Progress retrieved", body = ApiResponse<ProgressDetailDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 404, description = "Module not started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_module_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(module_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Student])
        .await?;

    let service = ProgressService::new(&state.db);

    let detail = service.get_detail(student.id, module_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Progress retrieved", detail.into_dto())),
    ))
}

/// Submit a paragraph summary.
///
/// Submitting the last paragraph completes the module and stores the cumulative summary
/// as the final summary.
#[utoipa::path(
    post,
    path = "/api/v1/progress/modules/{module_id}/submissions",
    tag = PROGRESS_TAG,
    params(("module_id" = i32, Path, description = "Reading module ID")),
    request_body = SubmitParagraphDto,
    responses(
        (status = 201, description = "Submission recorded", body = ApiResponse<ProgressDto>),
        (status = 400, description = "Module completed, index out of range or blank summary", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 404, description = "Module not started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_paragraph(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(module_id): Path<i32>,
    Json(payload): Json<SubmitParagraphDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Student])
        .await?;

    let service = ProgressService::new(&state.db);

    let params = SubmitParagraphParams::from_dto(student.id, module_id, payload);
    let progress = service.submit(params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Summary submitted", progress.into_dto())),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/progress/modules/{module_id}/time",
    tag = PROGRESS_TAG,
    params(("module_id" = i32, Path, description = "Reading module ID")),
    request_body = RecordTimeDto,
    responses(
        (status = 200, description = "Time recorded", body = ApiResponse<ProgressDto>),
        (status = 400, description = "Minutes out of range", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a student", body = ErrorDto),
        (status = 404, description = "Module not started", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_time(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(module_id): Path<i32>,
    Json(payload): Json<RecordTimeDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Student])
        .await?;

    let service = ProgressService::new(&state.db);

    let progress = service
        .record_time(student.id, module_id, payload.minutes)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Time recorded", progress.into_dto())),
    ))
}

/// Review a student's progress: score, feedback and completion.
///
/// # Access Control
/// - `Admin` - Only the student's managing admin (or a super-admin)
#[utoipa::path(
    put,
    path = "/api/v1/progress/{progress_id}",
    tag = PROGRESS_TAG,
    params(("progress_id" = i32, Path, description = "Progress record ID")),
    request_body = UpdateProgressDto,
    responses(
        (status = 200, description = "Progress updated", body = ApiResponse<ProgressDto>),
        (status = 400, description = "Invalid score or module not finished", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Student is managed by another admin", body = ErrorDto),
        (status = 404, description = "Progress not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_progress(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(progress_id): Path<i32>,
    Json(payload): Json<UpdateProgressDto>,
) -> Result<impl IntoResponse, AppError> {
    let admin = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ProgressService::new(&state.db);

    let params = UpdateProgressParams::from_dto(progress_id, payload);
    let progress = service.update(&admin, params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Progress updated", progress.into_dto())),
    ))
}
