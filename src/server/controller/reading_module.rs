use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        reading_module::{
            CreateReadingModuleDto, PaginatedReadingModulesDto, ReadingModuleDetailDto,
            UpdateReadingModuleDto,
        },
    },
    server::{
        controller::{default_entries, PaginationParams},
        error::AppError,
        extract::{Json, Path, Query},
        middleware::auth::{AuthGuard, Permission},
        model::reading_module::{
            CreateReadingModuleParams, ModuleFilter, UpdateReadingModuleParams,
        },
        service::reading_module::ReadingModuleService,
        state::AppState,
    },
};

pub static MODULE_TAG: &str = "module";

#[derive(Deserialize)]
pub struct ModuleQuery {
    pub level: Option<String>,
    pub genre: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

impl ModuleQuery {
    fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            entries: self.entries,
        }
    }
}

/// List reading modules visible to the caller.
///
/// Curated modules are visible to everyone. Custom modules are visible to their creator and
/// the creator's students. Super-admins see every module.
#[utoipa::path(
    get,
    path = "/api/v1/modules",
    tag = MODULE_TAG,
    params(
        ("level" = Option<String>, Query, description = "Filter by reading level"),
        ("genre" = Option<String>, Query, description = "Filter by genre"),
        ("language" = Option<String>, Query, description = "Filter by language"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10)")
    ),
    responses(
        (status = 200, description = "Modules retrieved", body = ApiResponse<PaginatedReadingModulesDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_modules(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ModuleQuery>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = ReadingModuleService::new(&state.db);

    let pagination = query.pagination();
    let filter = ModuleFilter {
        level: query.level,
        genre: query.genre,
        language: query.language,
    };
    let modules = service
        .list(
            &caller,
            filter,
            pagination.page,
            pagination.per_page(),
        )
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Modules retrieved", modules.into_dto())),
    ))
}

/// Get a module with its ordered paragraphs.
#[utoipa::path(
    get,
    path = "/api/v1/modules/{module_id}",
    tag = MODULE_TAG,
    params(("module_id" = i32, Path, description = "Reading module ID")),
    responses(
        (status = 200, description = "Module retrieved", body = ApiResponse<ReadingModuleDetailDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_module(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(module_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let service = ReadingModuleService::new(&state.db);

    let module = service.get(&caller, module_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Module retrieved", module.into_dto())),
    ))
}

/// Create a reading module.
///
/// # Access Control
/// - `Admin` - Custom modules
/// - `SuperAdmin` - Curated modules (`curated: true`)
#[utoipa::path(
    post,
    path = "/api/v1/modules",
    tag = MODULE_TAG,
    request_body = CreateReadingModuleDto,
    responses(
        (status = 201, description = "Module created", body = ApiResponse<ReadingModuleDetailDto>),
        (status = 400, description = "Invalid module data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller may not create this module", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_module(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateReadingModuleDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ReadingModuleService::new(&state.db);

    let params = CreateReadingModuleParams::from_dto(caller.id, payload);
    let module = service.create(&caller, params).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Module created", module.into_dto())),
    ))
}

/// Update module metadata and optionally replace its paragraphs.
///
/// Paragraphs cannot be replaced once a student has started the module.
#[utoipa::path(
    put,
    path = "/api/v1/modules/{module_id}",
    tag = MODULE_TAG,
    params(("module_id" = i32, Path, description = "Reading module ID")),
    request_body = UpdateReadingModuleDto,
    responses(
        (status = 200, description = "Module updated", body = ApiResponse<ReadingModuleDetailDto>),
        (status = 400, description = "Invalid data or module already started", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller did not create this module", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_module(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(module_id): Path<i32>,
    Json(payload): Json<UpdateReadingModuleDto>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ReadingModuleService::new(&state.db);

    let params = UpdateReadingModuleParams::from_dto(module_id, payload);
    let module = service.update(&caller, params).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Module updated", module.into_dto())),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/v1/modules/{module_id}",
    tag = MODULE_TAG,
    params(("module_id" = i32, Path, description = "Reading module ID")),
    responses(
        (status = 200, description = "Module deleted", body = MessageDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller did not create this module", body = ErrorDto),
        (status = 404, description = "Module not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_module(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(module_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let caller = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let service = ReadingModuleService::new(&state.db);

    service.delete(&caller, module_id).await?;

    Ok((StatusCode::OK, Json(MessageDto::new("Module deleted"))))
}
