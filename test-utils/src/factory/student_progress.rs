//! Student progress factory.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating progress rows in arbitrary states.
pub struct StudentProgressFactory<'a> {
    db: &'a DatabaseConnection,
    student_id: i32,
    module_id: i32,
    highest_paragraph_index_reached: i32,
    completed_at: Option<DateTime<Utc>>,
    final_summary: Option<String>,
    score: Option<i32>,
    time_spent_minutes: i32,
}

impl<'a> StudentProgressFactory<'a> {
    /// Creates a factory for a not-yet-advanced progress row.
    pub fn new(db: &'a DatabaseConnection, student_id: i32, module_id: i32) -> Self {
        Self {
            db,
            student_id,
            module_id,
            highest_paragraph_index_reached: 0,
            completed_at: None,
            final_summary: None,
            score: None,
            time_spent_minutes: 0,
        }
    }

    pub fn highest_paragraph(mut self, index: i32) -> Self {
        self.highest_paragraph_index_reached = index;
        self
    }

    /// Marks the row completed at `index` with the given final summary.
    pub fn completed(mut self, index: i32, final_summary: impl Into<String>) -> Self {
        self.highest_paragraph_index_reached = index;
        self.completed_at = Some(Utc::now());
        self.final_summary = Some(final_summary.into());
        self
    }

    pub fn score(mut self, score: i32) -> Self {
        self.score = Some(score);
        self
    }

    pub fn time_spent(mut self, minutes: i32) -> Self {
        self.time_spent_minutes = minutes;
        self
    }

    /// Builds and inserts the progress row.
    pub async fn build(self) -> Result<entity::student_progress::Model, DbErr> {
        let now = Utc::now();
        entity::student_progress::ActiveModel {
            student_id: ActiveValue::Set(self.student_id),
            module_id: ActiveValue::Set(self.module_id),
            highest_paragraph_index_reached: ActiveValue::Set(self.highest_paragraph_index_reached),
            completed: ActiveValue::Set(self.completed_at.is_some()),
            completed_at: ActiveValue::Set(self.completed_at),
            score: ActiveValue::Set(self.score),
            teacher_feedback: ActiveValue::Set(None),
            teacher_feedback_at: ActiveValue::Set(None),
            final_summary: ActiveValue::Set(self.final_summary),
            time_spent_minutes: ActiveValue::Set(self.time_spent_minutes),
            started_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a fresh progress row for `student_id` on `module_id`.
pub async fn create_progress(
    db: &DatabaseConnection,
    student_id: i32,
    module_id: i32,
) -> Result<entity::student_progress::Model, DbErr> {
    StudentProgressFactory::new(db, student_id, module_id)
        .build()
        .await
}
