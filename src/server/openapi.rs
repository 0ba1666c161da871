//! OpenAPI document served at `/api/v1/openapi.json`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::{
    model::{
        api::{ApiStatus, ErrorDto, MessageDto},
        auth::{AuthTokensDto, LoginDto, RefreshTokenDto, SignupDto},
        billing::{CreatePlanDto, PlanDto, WebhookAckDto},
        profile::{
            CreateStudentDto, PaginatedProfilesDto, ProfileDto, ProfileViewDto, RoleDto,
            UpdateProfileDto, UpdateStudentDto,
        },
        progress::{
            ActivityDayDto, ActivityDto, ProgressDetailDto, ProgressDto, RecordTimeDto,
            StartProgressDto, SubmissionDto, SubmitParagraphDto, UpdateProgressDto,
        },
        reading_module::{
            CreateReadingModuleDto, PaginatedReadingModulesDto, ParagraphDto,
            ReadingModuleDetailDto, ReadingModuleDto, UpdateReadingModuleDto,
        },
    },
    server::controller::{
        auth, health, plan, profile, progress, reading_module, student, webhook,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NoteEarly API",
        description = "Reading comprehension platform: reading modules, paragraph summaries and progress tracking"
    ),
    tags(
        (name = "auth", description = "Signup, login and token refresh"),
        (name = "profile", description = "Own profile and profile administration"),
        (name = "student", description = "Students managed by an admin"),
        (name = "module", description = "Reading modules and their paragraphs"),
        (name = "progress", description = "Reading progress and paragraph summaries"),
        (name = "plan", description = "Subscription plans"),
        (name = "webhook", description = "Billing provider events"),
        (name = "health", description = "Liveness")
    ),
    paths(
        auth::signup,
        auth::login,
        auth::refresh,
        auth::logout,
        auth::me,
        profile::get_own_profile,
        profile::update_own_profile,
        profile::get_profiles,
        student::create_student,
        student::get_students,
        student::get_student,
        student::update_student,
        student::delete_student,
        student::get_student_progress,
        student::get_student_activity,
        reading_module::get_modules,
        reading_module::get_module,
        reading_module::create_module,
        reading_module::update_module,
        reading_module::delete_module,
        progress::start_progress,
        progress::get_own_progress,
        progress::get_own_activity,
        progress::get_module_progress,
        progress::submit_paragraph,
        progress::record_time,
        progress::update_progress,
        plan::get_plans,
        plan::create_plan,
        webhook::stripe_webhook,
        health::health,
    ),
    components(
        schemas(
            ApiStatus, ErrorDto, MessageDto,
            SignupDto, LoginDto, RefreshTokenDto, AuthTokensDto,
            RoleDto, ProfileDto, ProfileViewDto, UpdateProfileDto, CreateStudentDto,
            UpdateStudentDto, PaginatedProfilesDto,
            ReadingModuleDto, ParagraphDto, ReadingModuleDetailDto, CreateReadingModuleDto,
            UpdateReadingModuleDto, PaginatedReadingModulesDto,
            StartProgressDto, SubmitParagraphDto, RecordTimeDto, UpdateProgressDto,
            ProgressDto, SubmissionDto, ProgressDetailDto, ActivityDayDto, ActivityDto,
            PlanDto, CreatePlanDto, WebhookAckDto
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
