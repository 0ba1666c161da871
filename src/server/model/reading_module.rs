//! Reading module domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::reading_module::{
    CreateReadingModuleDto, PaginatedReadingModulesDto, ParagraphDto, ReadingModuleDetailDto,
    ReadingModuleDto, UpdateReadingModuleDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ReadingModule {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub level: String,
    pub genre: String,
    pub language: String,
    pub is_custom: bool,
    pub created_by: Option<i32>,
    pub paragraph_count: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReadingModule {
    pub fn from_entity(entity: entity::reading_module::Model, paragraph_count: i32) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            level: entity.level,
            genre: entity.genre,
            language: entity.language,
            is_custom: entity.is_custom,
            created_by: entity.created_by,
            paragraph_count,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ReadingModuleDto {
        ReadingModuleDto {
            id: self.id,
            title: self.title,
            description: self.description,
            level: self.level,
            genre: self.genre,
            language: self.language,
            is_custom: self.is_custom,
            created_by: self.created_by,
            paragraph_count: self.paragraph_count,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleParagraph {
    pub paragraph_index: i32,
    pub content: String,
}

impl ModuleParagraph {
    pub fn from_entity(entity: entity::module_paragraph::Model) -> Self {
        Self {
            paragraph_index: entity.paragraph_index,
            content: entity.content,
        }
    }

    pub fn into_dto(self) -> ParagraphDto {
        ParagraphDto {
            paragraph_index: self.paragraph_index,
            content: self.content,
        }
    }
}

/// Module with its paragraphs ordered by index.
#[derive(Debug, Clone)]
pub struct ReadingModuleDetail {
    pub module: ReadingModule,
    pub paragraphs: Vec<ModuleParagraph>,
}

impl ReadingModuleDetail {
    pub fn into_dto(self) -> ReadingModuleDetailDto {
        ReadingModuleDetailDto {
            module: self.module.into_dto(),
            paragraphs: self
                .paragraphs
                .into_iter()
                .map(ModuleParagraph::into_dto)
                .collect(),
        }
    }
}

/// Which modules a caller may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleVisibility {
    /// Every module (super-admin).
    All,
    /// Curated modules plus custom modules created by the given admin.
    CuratedAndOwnedBy(i32),
    /// Curated modules only.
    CuratedOnly,
}

impl ModuleVisibility {
    pub fn allows(&self, module: &ReadingModule) -> bool {
        if !module.is_custom {
            return true;
        }
        match self {
            Self::All => true,
            Self::CuratedAndOwnedBy(admin_id) => module.created_by == Some(*admin_id),
            Self::CuratedOnly => false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModuleFilter {
    pub level: Option<String>,
    pub genre: Option<String>,
    pub language: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateReadingModuleParams {
    pub title: String,
    pub description: Option<String>,
    pub level: String,
    pub genre: String,
    pub language: String,
    /// `None` creates a curated module.
    pub created_by: Option<i32>,
    pub paragraphs: Vec<String>,
}

impl CreateReadingModuleParams {
    /// Builds creation parameters; curated modules carry no creator.
    pub fn from_dto(creator_id: i32, dto: CreateReadingModuleDto) -> Self {
        Self {
            title: dto.title,
            description: dto.description,
            level: dto.level,
            genre: dto.genre,
            language: dto.language,
            created_by: if dto.curated { None } else { Some(creator_id) },
            paragraphs: dto.paragraphs,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateReadingModuleParams {
    pub id: i32,
    pub title: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
    pub genre: Option<String>,
    pub language: Option<String>,
    pub paragraphs: Option<Vec<String>>,
}

impl UpdateReadingModuleParams {
    pub fn from_dto(id: i32, dto: UpdateReadingModuleDto) -> Self {
        Self {
            id,
            title: dto.title,
            description: dto.description,
            level: dto.level,
            genre: dto.genre,
            language: dto.language,
            paragraphs: dto.paragraphs,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedReadingModules {
    pub modules: Vec<ReadingModule>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedReadingModules {
    pub fn into_dto(self) -> PaginatedReadingModulesDto {
        PaginatedReadingModulesDto {
            modules: self
                .modules
                .into_iter()
                .map(ReadingModule::into_dto)
                .collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
