//! Reading module repository.
//!
//! Modules are stored with their paragraphs in `module_paragraph`, indexed from 1. The
//! paragraph count exposed on `ReadingModule` is derived from those rows.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection,
    DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::reading_module::{
    CreateReadingModuleParams, ModuleFilter, ModuleParagraph, ModuleVisibility, ReadingModule,
    ReadingModuleDetail, UpdateReadingModuleParams,
};

pub struct ReadingModuleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReadingModuleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a module and its paragraphs, numbering paragraphs 1..n in the given order.
    ///
    /// # Returns
    /// - `Ok(ReadingModuleDetail)` - The created module with its paragraphs
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateReadingModuleParams,
    ) -> Result<ReadingModuleDetail, DbErr> {
        let now = Utc::now();
        let module = entity::reading_module::ActiveModel {
            title: ActiveValue::Set(params.title),
            description: ActiveValue::Set(params.description),
            level: ActiveValue::Set(params.level),
            genre: ActiveValue::Set(params.genre),
            language: ActiveValue::Set(params.language),
            is_custom: ActiveValue::Set(params.created_by.is_some()),
            created_by: ActiveValue::Set(params.created_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let paragraphs = insert_paragraphs(self.db, module.id, params.paragraphs).await?;

        Ok(ReadingModuleDetail {
            module: ReadingModule::from_entity(module, paragraphs.len() as i32),
            paragraphs,
        })
    }

    /// Finds a module by id with its paragraph count.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<ReadingModule>, DbErr> {
        let Some(module) = entity::prelude::ReadingModule::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let paragraph_count = self.paragraph_count(id).await?;

        Ok(Some(ReadingModule::from_entity(module, paragraph_count)))
    }

    /// Finds a module by id with its paragraphs ordered by index.
    pub async fn get_detail(&self, id: i32) -> Result<Option<ReadingModuleDetail>, DbErr> {
        let Some(module) = entity::prelude::ReadingModule::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let paragraphs: Vec<ModuleParagraph> = entity::prelude::ModuleParagraph::find()
            .filter(entity::module_paragraph::Column::ModuleId.eq(id))
            .order_by_asc(entity::module_paragraph::Column::ParagraphIndex)
            .all(self.db)
            .await?
            .into_iter()
            .map(ModuleParagraph::from_entity)
            .collect();

        Ok(Some(ReadingModuleDetail {
            module: ReadingModule::from_entity(module, paragraphs.len() as i32),
            paragraphs,
        }))
    }

    /// Gets visible modules matching `filter`, newest first.
    ///
    /// # Returns
    /// - `Ok((modules, total))` - Modules on the requested page and total matching count
    pub async fn get_paginated(
        &self,
        visibility: ModuleVisibility,
        filter: ModuleFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<ReadingModule>, u64), DbErr> {
        let mut query = entity::prelude::ReadingModule::find();

        match visibility {
            ModuleVisibility::All => {}
            ModuleVisibility::CuratedAndOwnedBy(admin_id) => {
                query = query.filter(
                    Condition::any()
                        .add(entity::reading_module::Column::IsCustom.eq(false))
                        .add(entity::reading_module::Column::CreatedBy.eq(admin_id)),
                );
            }
            ModuleVisibility::CuratedOnly => {
                query = query.filter(entity::reading_module::Column::IsCustom.eq(false));
            }
        }

        if let Some(level) = filter.level {
            query = query.filter(entity::reading_module::Column::Level.eq(level));
        }
        if let Some(genre) = filter.genre {
            query = query.filter(entity::reading_module::Column::Genre.eq(genre));
        }
        if let Some(language) = filter.language {
            query = query.filter(entity::reading_module::Column::Language.eq(language));
        }

        let paginator = query
            .order_by_desc(entity::reading_module::Column::CreatedAt)
            .order_by_desc(entity::reading_module::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        let ids: Vec<i32> = entities.iter().map(|m| m.id).collect();
        let counts = self.paragraph_counts(ids).await?;

        let modules = entities
            .into_iter()
            .map(|m| {
                let count = counts.get(&m.id).copied().unwrap_or(0);
                ReadingModule::from_entity(m, count)
            })
            .collect();

        Ok((modules, total))
    }

    /// Updates module metadata. Paragraphs are replaced separately.
    pub async fn update(
        &self,
        params: &UpdateReadingModuleParams,
    ) -> Result<Option<ReadingModule>, DbErr> {
        let Some(existing) = entity::prelude::ReadingModule::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::reading_module::ActiveModel = existing.into();
        if let Some(title) = &params.title {
            active.title = ActiveValue::Set(title.clone());
        }
        if let Some(description) = &params.description {
            active.description = ActiveValue::Set(Some(description.clone()));
        }
        if let Some(level) = &params.level {
            active.level = ActiveValue::Set(level.clone());
        }
        if let Some(genre) = &params.genre {
            active.genre = ActiveValue::Set(genre.clone());
        }
        if let Some(language) = &params.language {
            active.language = ActiveValue::Set(language.clone());
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let module = active.update(self.db).await?;
        let paragraph_count = self.paragraph_count(module.id).await?;

        Ok(Some(ReadingModule::from_entity(module, paragraph_count)))
    }

    /// Deletes every paragraph of the module and inserts `paragraphs` as 1..n, unless a
    /// student has already started the module.
    ///
    /// The progress check and the replacement share one transaction.
    ///
    /// # Returns
    /// - `Ok(Some(paragraphs))` - Paragraphs replaced
    /// - `Ok(None)` - The module has progress records; nothing changed
    pub async fn replace_paragraphs_if_unstarted(
        &self,
        module_id: i32,
        paragraphs: Vec<String>,
    ) -> Result<Option<Vec<ModuleParagraph>>, DbErr> {
        let txn = self.db.begin().await?;

        let started = entity::prelude::StudentProgress::find()
            .filter(entity::student_progress::Column::ModuleId.eq(module_id))
            .count(&txn)
            .await?;
        if started > 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        entity::prelude::ModuleParagraph::delete_many()
            .filter(entity::module_paragraph::Column::ModuleId.eq(module_id))
            .exec(&txn)
            .await?;
        let inserted = insert_paragraphs(&txn, module_id, paragraphs).await?;

        txn.commit().await?;

        Ok(Some(inserted))
    }

    /// Deletes a module; paragraphs and progress rows cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ReadingModule::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn paragraph_count(&self, module_id: i32) -> Result<i32, DbErr> {
        let count = entity::prelude::ModuleParagraph::find()
            .filter(entity::module_paragraph::Column::ModuleId.eq(module_id))
            .count(self.db)
            .await?;

        Ok(count as i32)
    }

    async fn paragraph_counts(&self, module_ids: Vec<i32>) -> Result<HashMap<i32, i32>, DbErr> {
        if module_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let module_ids: Vec<i32> = entity::prelude::ModuleParagraph::find()
            .select_only()
            .column(entity::module_paragraph::Column::ModuleId)
            .filter(entity::module_paragraph::Column::ModuleId.is_in(module_ids))
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts = HashMap::new();
        for module_id in module_ids {
            *counts.entry(module_id).or_insert(0) += 1;
        }

        Ok(counts)
    }
}

async fn insert_paragraphs<C: ConnectionTrait>(
    db: &C,
    module_id: i32,
    paragraphs: Vec<String>,
) -> Result<Vec<ModuleParagraph>, DbErr> {
    let mut inserted = Vec::with_capacity(paragraphs.len());

    for (offset, content) in paragraphs.into_iter().enumerate() {
        let paragraph = entity::module_paragraph::ActiveModel {
            module_id: ActiveValue::Set(module_id),
            paragraph_index: ActiveValue::Set(offset as i32 + 1),
            content: ActiveValue::Set(content),
            ..Default::default()
        }
        .insert(db)
        .await?;

        inserted.push(ModuleParagraph::from_entity(paragraph));
    }

    Ok(inserted)
}
