use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct StartProgressDto {
    pub module_id: i32,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SubmitParagraphDto {
    pub paragraph_index: i32,
    pub paragraph_summary: String,
    pub cumulative_summary: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct RecordTimeDto {
    pub minutes: i32,
}

/// Admin feedback on a progress record. Absent fields are left untouched.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct UpdateProgressDto {
    pub score: Option<i32>,
    pub teacher_feedback: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ProgressDto {
    pub id: i32,
    pub student_id: i32,
    pub module_id: i32,
    pub highest_paragraph_index_reached: i32,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub score: Option<i32>,
    pub teacher_feedback: Option<String>,
    pub teacher_feedback_at: Option<DateTime<Utc>>,
    pub final_summary: Option<String>,
    pub time_spent_minutes: i32,
    pub started_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SubmissionDto {
    pub id: i32,
    pub paragraph_index: i32,
    pub paragraph_summary: String,
    pub cumulative_summary: String,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ProgressDetailDto {
    pub progress: ProgressDto,
    pub paragraph_count: i32,
    pub submissions: Vec<SubmissionDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct ActivityDayDto {
    pub date: NaiveDate,
    pub submissions: u64,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ActivityDto {
    pub modules_started: u64,
    pub modules_completed: u64,
    pub total_submissions: u64,
    pub total_time_spent_minutes: i64,
    pub average_score: Option<f64>,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub calendar: Vec<ActivityDayDto>,
}
