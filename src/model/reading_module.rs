use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ReadingModuleDto {
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

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ParagraphDto {
    pub paragraph_index: i32,
    pub content: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ReadingModuleDetailDto {
    pub module: ReadingModuleDto,
    pub paragraphs: Vec<ParagraphDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreateReadingModuleDto {
    pub title: String,
    pub description: Option<String>,
    pub level: String,
    pub genre: String,
    pub language: String,
    /// Paragraph texts in reading order.
    pub paragraphs: Vec<String>,
    /// Create a curated module instead of a custom one (super-admin only).
    #[serde(default)]
    pub curated: bool,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateReadingModuleDto {
    pub title: Option<String>,
    pub description: Option<String>,
    pub level: Option<String>,
    pub genre: Option<String>,
    pub language: Option<String>,
    /// Replaces every paragraph when present.
    pub paragraphs: Option<Vec<String>>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct PaginatedReadingModulesDto {
    pub modules: Vec<ReadingModuleDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
