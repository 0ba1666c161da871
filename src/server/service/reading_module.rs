//! Curated and custom reading modules.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::reading_module::ReadingModuleRepository,
    error::{auth::AuthError, AppError},
    model::{
        profile::{Profile, Role},
        reading_module::{
            CreateReadingModuleParams, ModuleFilter, ModuleVisibility, PaginatedReadingModules,
            ReadingModule, ReadingModuleDetail, UpdateReadingModuleParams,
        },
    },
    service::profile::total_pages,
    util::parse::require_non_blank,
};

/// Modules visible to `profile`.
///
/// Students see their managing admin's custom modules; a student without an admin sees
/// curated modules only.
pub fn visibility_for(profile: &Profile) -> ModuleVisibility {
    match profile.role {
        Role::SuperAdmin => ModuleVisibility::All,
        Role::Admin => ModuleVisibility::CuratedAndOwnedBy(profile.id),
        Role::Student => profile
            .admin_id
            .map(ModuleVisibility::CuratedAndOwnedBy)
            .unwrap_or(ModuleVisibility::CuratedOnly),
    }
}

pub struct ReadingModuleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReadingModuleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        caller: &Profile,
        filter: ModuleFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedReadingModules, AppError> {
        let repo = ReadingModuleRepository::new(self.db);

        let (modules, total) = repo
            .get_paginated(visibility_for(caller), filter, page, per_page)
            .await?;

        Ok(PaginatedReadingModules {
            modules,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Gets a module with its paragraphs. Invisible modules are reported as missing.
    pub async fn get(&self, caller: &Profile, id: i32) -> Result<ReadingModuleDetail, AppError> {
        let repo = ReadingModuleRepository::new(self.db);

        repo.get_detail(id)
            .await?
            .filter(|detail| visibility_for(caller).allows(&detail.module))
            .ok_or_else(|| AppError::NotFound("Reading module not found".to_string()))
    }

    /// Gets a module visible to `caller` without its paragraphs.
    pub async fn get_visible(&self, caller: &Profile, id: i32) -> Result<ReadingModule, AppError> {
        let repo = ReadingModuleRepository::new(self.db);

        repo.find_by_id(id)
            .await?
            .filter(|module| visibility_for(caller).allows(module))
            .ok_or_else(|| AppError::NotFound("Reading module not found".to_string()))
    }

    /// Creates a module. Only super-admins may create curated modules.
    pub async fn create(
        &self,
        caller: &Profile,
        params: CreateReadingModuleParams,
    ) -> Result<ReadingModuleDetail, AppError> {
        let repo = ReadingModuleRepository::new(self.db);

        if params.created_by.is_none() && caller.role != Role::SuperAdmin {
            return Err(AuthError::AccessDenied(
                caller.id,
                "Only super-admins can create curated modules".to_string(),
            )
            .into());
        }

        let params = CreateReadingModuleParams {
            title: require_non_blank("title", &params.title)?,
            description: params
                .description
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty()),
            level: require_non_blank("level", &params.level)?,
            genre: require_non_blank("genre", &params.genre)?,
            language: require_non_blank("language", &params.language)?,
            created_by: params.created_by,
            paragraphs: validate_paragraphs(params.paragraphs)?,
        };

        let detail = repo.create(params).await?;

        tracing::info!(
            "Profile {} created reading module {} with {} paragraphs",
            caller.id,
            detail.module.id,
            detail.module.paragraph_count
        );

        Ok(detail)
    }

    /// Updates module metadata and optionally replaces its paragraphs.
    ///
    /// Paragraphs cannot be replaced once any student has started the module.
    pub async fn update(
        &self,
        caller: &Profile,
        params: UpdateReadingModuleParams,
    ) -> Result<ReadingModuleDetail, AppError> {
        let repo = ReadingModuleRepository::new(self.db);

        let module = self.get_visible(caller, params.id).await?;
        ensure_can_edit(caller, &module)?;

        let paragraphs = params.paragraphs.clone().map(validate_paragraphs).transpose()?;
        let params = UpdateReadingModuleParams {
            id: module.id,
            title: params
                .title
                .map(|v| require_non_blank("title", &v))
                .transpose()?,
            description: params.description.map(|d| d.trim().to_string()),
            level: params
                .level
                .map(|v| require_non_blank("level", &v))
                .transpose()?,
            genre: params
                .genre
                .map(|v| require_non_blank("genre", &v))
                .transpose()?,
            language: params
                .language
                .map(|v| require_non_blank("language", &v))
                .transpose()?,
            paragraphs: None,
        };

        if let Some(paragraphs) = paragraphs {
            repo.replace_paragraphs_if_unstarted(module.id, paragraphs)
                .await?
                .ok_or_else(|| {
                    AppError::BadRequest(
                        "Paragraphs cannot be replaced after students have started this module"
                            .to_string(),
                    )
                })?;
        }

        repo.update(&params)
            .await?
            .ok_or_else(|| AppError::NotFound("Reading module not found".to_string()))?;

        repo.get_detail(module.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reading module not found".to_string()))
    }

    pub async fn delete(&self, caller: &Profile, id: i32) -> Result<(), AppError> {
        let repo = ReadingModuleRepository::new(self.db);

        let module = self.get_visible(caller, id).await?;
        ensure_can_edit(caller, &module)?;

        repo.delete(module.id).await?;

        tracing::info!("Profile {} deleted reading module {}", caller.id, module.id);

        Ok(())
    }
}

/// Creators edit their custom modules; super-admins edit everything.
fn ensure_can_edit(caller: &Profile, module: &ReadingModule) -> Result<(), AppError> {
    if caller.role == Role::SuperAdmin {
        return Ok(());
    }

    if module.is_custom && module.created_by == Some(caller.id) {
        return Ok(());
    }

    Err(AuthError::AccessDenied(
        caller.id,
        format!("Profile cannot modify reading module {}", module.id),
    )
    .into())
}

fn validate_paragraphs(paragraphs: Vec<String>) -> Result<Vec<String>, AppError> {
    if paragraphs.is_empty() {
        return Err(AppError::BadRequest(
            "A reading module needs at least one paragraph".to_string(),
        ));
    }

    paragraphs
        .iter()
        .enumerate()
        .map(|(offset, text)| require_non_blank(&format!("paragraphs[{}]", offset), text))
        .collect()
}
