//! Reading module factory, inserting a module together with its paragraphs.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating reading modules with numbered paragraphs.
///
/// Paragraphs are inserted with indexes `1..=paragraph_count` and placeholder text.
pub struct ReadingModuleFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    level: String,
    genre: String,
    language: String,
    created_by: Option<i32>,
    paragraph_count: i32,
}

impl<'a> ReadingModuleFactory<'a> {
    /// Creates a new factory for a curated module with three paragraphs.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Module {}", next_id()),
            level: "beginner".to_string(),
            genre: "fiction".to_string(),
            language: "en".to_string(),
            created_by: None,
            paragraph_count: 3,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Marks the module as a custom module owned by `admin_id`.
    pub fn custom(mut self, admin_id: i32) -> Self {
        self.created_by = Some(admin_id);
        self
    }

    pub fn paragraphs(mut self, paragraph_count: i32) -> Self {
        self.paragraph_count = paragraph_count;
        self
    }

    /// Builds and inserts the module and its paragraphs.
    pub async fn build(self) -> Result<entity::reading_module::Model, DbErr> {
        let now = Utc::now();
        let module = entity::reading_module::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(None),
            level: ActiveValue::Set(self.level),
            genre: ActiveValue::Set(self.genre),
            language: ActiveValue::Set(self.language),
            is_custom: ActiveValue::Set(self.created_by.is_some()),
            created_by: ActiveValue::Set(self.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for index in 1..=self.paragraph_count {
            entity::module_paragraph::ActiveModel {
                module_id: ActiveValue::Set(module.id),
                paragraph_index: ActiveValue::Set(index),
                content: ActiveValue::Set(format!("Paragraph {} of {}.", index, module.title)),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(module)
    }
}

/// Creates a curated module with `paragraph_count` paragraphs.
pub async fn create_module(
    db: &DatabaseConnection,
    paragraph_count: i32,
) -> Result<entity::reading_module::Model, DbErr> {
    ReadingModuleFactory::new(db)
        .paragraphs(paragraph_count)
        .build()
        .await
}

/// Creates a custom module owned by `admin_id`.
pub async fn create_custom_module(
    db: &DatabaseConnection,
    admin_id: i32,
    paragraph_count: i32,
) -> Result<entity::reading_module::Model, DbErr> {
    ReadingModuleFactory::new(db)
        .custom(admin_id)
        .paragraphs(paragraph_count)
        .build()
        .await
}
