use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        billing::{CreatePlanDto, PlanDto},
    },
    server::{
        error::AppError,
        extract::Json,
        middleware::auth::{AuthGuard, Permission},
        model::billing::{CreatePlanParams, SubscriptionPlan},
        service::billing::BillingService,
        state::AppState,
    },
};

pub static PLAN_TAG: &str = "plan";

/// List subscription plans. Public.
#[utoipa::path(
    get,
    path = "/api/v1/plans",
    tag = PLAN_TAG,
    responses(
        (status = 200, description = "Plans retrieved", body = ApiResponse<Vec<PlanDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_plans(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = BillingService::new(&state.db);

    let plans: Vec<PlanDto> = service
        .list_plans()
        .await?
        .into_iter()
        .map(SubscriptionPlan::into_dto)
        .collect();

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Plans retrieved", plans)),
    ))
}

/// Map a billing provider price to a plan.
///
/// # Access Control
/// - `SuperAdmin`
#[utoipa::path(
    post,
    path = "/api/v1/plans",
    tag = PLAN_TAG,
    request_body = CreatePlanDto,
    responses(
        (status = 201, description = "Plan created", body = ApiResponse<PlanDto>),
        (status = 400, description = "Invalid plan data", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Caller is not a super-admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_plan(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreatePlanDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::SuperAdmin])
        .await?;

    let service = BillingService::new(&state.db);

    let plan = service
        .create_plan(CreatePlanParams::from_dto(payload))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success("Plan created", plan.into_dto())),
    ))
}
