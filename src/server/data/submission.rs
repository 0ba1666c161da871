//! Paragraph submission repository. Submissions are append-only.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::progress::ParagraphSubmission;

pub struct SubmissionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubmissionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        progress_id: i32,
        paragraph_index: i32,
        paragraph_summary: String,
        cumulative_summary: String,
    ) -> Result<ParagraphSubmission, DbErr> {
        let entity = entity::paragraph_submission::ActiveModel {
            progress_id: ActiveValue::Set(progress_id),
            paragraph_index: ActiveValue::Set(paragraph_index),
            paragraph_summary: ActiveValue::Set(paragraph_summary),
            cumulative_summary: ActiveValue::Set(cumulative_summary),
            submitted_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(ParagraphSubmission::from_entity(entity))
    }

    /// Gets a record's submissions ordered by paragraph index, then submission time.
    pub async fn get_by_progress(
        &self,
        progress_id: i32,
    ) -> Result<Vec<ParagraphSubmission>, DbErr> {
        let entities = entity::prelude::ParagraphSubmission::find()
            .filter(entity::paragraph_submission::Column::ProgressId.eq(progress_id))
            .order_by_asc(entity::paragraph_submission::Column::ParagraphIndex)
            .order_by_asc(entity::paragraph_submission::Column::SubmittedAt)
            .order_by_asc(entity::paragraph_submission::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ParagraphSubmission::from_entity)
            .collect())
    }

    /// Gets every submission made by a student across all modules.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<ParagraphSubmission>, DbErr> {
        let entities = entity::prelude::ParagraphSubmission::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::paragraph_submission::Relation::StudentProgress.def(),
            )
            .filter(entity::student_progress::Column::StudentId.eq(student_id))
            .order_by_asc(entity::paragraph_submission::Column::SubmittedAt)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(ParagraphSubmission::from_entity)
            .collect())
    }
}
