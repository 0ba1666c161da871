//! Paragraph submission factory, mainly used to shape activity history.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a submission for `progress_id` at `paragraph_index` stamped `submitted_at`.
pub async fn create_submission_at(
    db: &DatabaseConnection,
    progress_id: i32,
    paragraph_index: i32,
    submitted_at: DateTime<Utc>,
) -> Result<entity::paragraph_submission::Model, DbErr> {
    entity::paragraph_submission::ActiveModel {
        progress_id: ActiveValue::Set(progress_id),
        paragraph_index: ActiveValue::Set(paragraph_index),
        paragraph_summary: ActiveValue::Set(format!("Summary of paragraph {}", paragraph_index)),
        cumulative_summary: ActiveValue::Set(format!("Summary up to {}", paragraph_index)),
        submitted_at: ActiveValue::Set(submitted_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
