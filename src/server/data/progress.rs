//! Student progress repository.
//!
//! Holds one row per (student, module). Business rules for advancing and reviewing a
//! record live in `ProgressService`; this repository only persists the values it decides.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::progress::{
    AdvanceProgressParams, ReviewProgressParams, StudentProgress,
};

pub struct ProgressRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a fresh record with no paragraph reached yet.
    pub async fn create(&self, student_id: i32, module_id: i32) -> Result<StudentProgress, DbErr> {
        let now = Utc::now();
        let entity = entity::student_progress::ActiveModel {
            student_id: ActiveValue::Set(student_id),
            module_id: ActiveValue::Set(module_id),
            highest_paragraph_index_reached: ActiveValue::Set(0),
            completed: ActiveValue::Set(false),
            completed_at: ActiveValue::Set(None),
            score: ActiveValue::Set(None),
            teacher_feedback: ActiveValue::Set(None),
            teacher_feedback_at: ActiveValue::Set(None),
            final_summary: ActiveValue::Set(None),
            time_spent_minutes: ActiveValue::Set(0),
            started_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(StudentProgress::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<StudentProgress>, DbErr> {
        let entity = entity::prelude::StudentProgress::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(StudentProgress::from_entity))
    }

    pub async fn find_by_student_and_module(
        &self,
        student_id: i32,
        module_id: i32,
    ) -> Result<Option<StudentProgress>, DbErr> {
        let entity = entity::prelude::StudentProgress::find()
            .filter(entity::student_progress::Column::StudentId.eq(student_id))
            .filter(entity::student_progress::Column::ModuleId.eq(module_id))
            .one(self.db)
            .await?;

        Ok(entity.map(StudentProgress::from_entity))
    }

    /// Gets every record of a student, most recently updated first.
    pub async fn get_by_student(&self, student_id: i32) -> Result<Vec<StudentProgress>, DbErr> {
        let entities = entity::prelude::StudentProgress::find()
            .filter(entity::student_progress::Column::StudentId.eq(student_id))
            .order_by_desc(entity::student_progress::Column::UpdatedAt)
            .order_by_desc(entity::student_progress::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(StudentProgress::from_entity)
            .collect())
    }

    /// Raises the highest paragraph reached and, when `final_summary` is set, completes the record.
    ///
    /// Both writes are conditional updates against the stored row, so overlapping
    /// submissions never lower the highest index and a completed record is left as is.
    pub async fn advance(
        &self,
        params: AdvanceProgressParams,
    ) -> Result<Option<StudentProgress>, DbErr> {
        entity::prelude::StudentProgress::update_many()
            .col_expr(
                entity::student_progress::Column::HighestParagraphIndexReached,
                Expr::value(params.highest_paragraph_index_reached),
            )
            .col_expr(
                entity::student_progress::Column::UpdatedAt,
                Expr::value(params.now),
            )
            .filter(entity::student_progress::Column::Id.eq(params.progress_id))
            .filter(entity::student_progress::Column::Completed.eq(false))
            .filter(
                entity::student_progress::Column::HighestParagraphIndexReached
                    .lt(params.highest_paragraph_index_reached),
            )
            .exec(self.db)
            .await?;

        if let Some(final_summary) = params.final_summary {
            entity::prelude::StudentProgress::update_many()
                .col_expr(entity::student_progress::Column::Completed, Expr::value(true))
                .col_expr(
                    entity::student_progress::Column::CompletedAt,
                    Expr::value(Some(params.now)),
                )
                .col_expr(
                    entity::student_progress::Column::FinalSummary,
                    Expr::value(Some(final_summary)),
                )
                .col_expr(
                    entity::student_progress::Column::UpdatedAt,
                    Expr::value(params.now),
                )
                .filter(entity::student_progress::Column::Id.eq(params.progress_id))
                .filter(entity::student_progress::Column::Completed.eq(false))
                .exec(self.db)
                .await?;
        }

        self.find_by_id(params.progress_id).await
    }

    /// Writes the review fields exactly as given.
    pub async fn save_review(
        &self,
        params: ReviewProgressParams,
    ) -> Result<Option<StudentProgress>, DbErr> {
        let Some(existing) = entity::prelude::StudentProgress::find_by_id(params.progress_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::student_progress::ActiveModel = existing.into();
        active.score = ActiveValue::Set(params.score);
        active.teacher_feedback = ActiveValue::Set(params.teacher_feedback);
        active.teacher_feedback_at = ActiveValue::Set(params.teacher_feedback_at);
        active.completed = ActiveValue::Set(params.completed);
        active.completed_at = ActiveValue::Set(params.completed_at);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(StudentProgress::from_entity(entity)))
    }

    /// Adds `minutes` to the record's reading time.
    pub async fn add_time_spent(
        &self,
        id: i32,
        minutes: i32,
    ) -> Result<Option<StudentProgress>, DbErr> {
        let Some(existing) = entity::prelude::StudentProgress::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let total = existing.time_spent_minutes.saturating_add(minutes);
        let mut active: entity::student_progress::ActiveModel = existing.into();
        active.time_spent_minutes = ActiveValue::Set(total);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(StudentProgress::from_entity(entity)))
    }
}
