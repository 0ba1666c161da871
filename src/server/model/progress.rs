//! Progress domain models, submission records and activity statistics.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::progress::{
    ActivityDayDto, ActivityDto, ProgressDetailDto, ProgressDto, SubmissionDto,
    SubmitParagraphDto, UpdateProgressDto,
};

#[derive(Debug, Clone, PartialEq)]
pub struct StudentProgress {
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

impl StudentProgress {
    pub fn from_entity(entity: entity::student_progress::Model) -> Self {
        Self {
            id: entity.id,
            student_id: entity.student_id,
            module_id: entity.module_id,
            highest_paragraph_index_reached: entity.highest_paragraph_index_reached,
            completed: entity.completed,
            completed_at: entity.completed_at,
            score: entity.score,
            teacher_feedback: entity.teacher_feedback,
            teacher_feedback_at: entity.teacher_feedback_at,
            final_summary: entity.final_summary,
            time_spent_minutes: entity.time_spent_minutes,
            started_at: entity.started_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ProgressDto {
        ProgressDto {
            id: self.id,
            student_id: self.student_id,
            module_id: self.module_id,
            highest_paragraph_index_reached: self.highest_paragraph_index_reached,
            completed: self.completed,
            completed_at: self.completed_at,
            score: self.score,
            teacher_feedback: self.teacher_feedback,
            teacher_feedback_at: self.teacher_feedback_at,
            final_summary: self.final_summary,
            time_spent_minutes: self.time_spent_minutes,
            started_at: self.started_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphSubmission {
    pub id: i32,
    pub progress_id: i32,
    pub paragraph_index: i32,
    pub paragraph_summary: String,
    pub cumulative_summary: String,
    pub submitted_at: DateTime<Utc>,
}

impl ParagraphSubmission {
    pub fn from_entity(entity: entity::paragraph_submission::Model) -> Self {
        Self {
            id: entity.id,
            progress_id: entity.progress_id,
            paragraph_index: entity.paragraph_index,
            paragraph_summary: entity.paragraph_summary,
            cumulative_summary: entity.cumulative_summary,
            submitted_at: entity.submitted_at,
        }
    }

    pub fn into_dto(self) -> SubmissionDto {
        SubmissionDto {
            id: self.id,
            paragraph_index: self.paragraph_index,
            paragraph_summary: self.paragraph_summary,
            cumulative_summary: self.cumulative_summary,
            submitted_at: self.submitted_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProgressDetail {
    pub progress: StudentProgress,
    pub paragraph_count: i32,
    pub submissions: Vec<ParagraphSubmission>,
}

impl ProgressDetail {
    pub fn into_dto(self) -> ProgressDetailDto {
        ProgressDetailDto {
            progress: self.progress.into_dto(),
            paragraph_count: self.paragraph_count,
            submissions: self
                .submissions
                .into_iter()
                .map(ParagraphSubmission::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SubmitParagraphParams {
    pub student_id: i32,
    pub module_id: i32,
    pub paragraph_index: i32,
    pub paragraph_summary: String,
    pub cumulative_summary: String,
}

impl SubmitParagraphParams {
    pub fn from_dto(student_id: i32, module_id: i32, dto: SubmitParagraphDto) -> Self {
        Self {
            student_id,
            module_id,
            paragraph_index: dto.paragraph_index,
            paragraph_summary: dto.paragraph_summary,
            cumulative_summary: dto.cumulative_summary,
        }
    }
}

/// Admin review of a progress record.
#[derive(Debug, Clone, Default)]
pub struct UpdateProgressParams {
    pub progress_id: i32,
    pub score: Option<i32>,
    pub teacher_feedback: Option<String>,
    pub completed: Option<bool>,
}

impl UpdateProgressParams {
    pub fn from_dto(progress_id: i32, dto: UpdateProgressDto) -> Self {
        Self {
            progress_id,
            score: dto.score,
            teacher_feedback: dto.teacher_feedback,
            completed: dto.completed,
        }
    }
}

/// Values written when a submission advances a progress record.
#[derive(Debug, Clone)]
pub struct AdvanceProgressParams {
    pub progress_id: i32,
    /// Paragraph reached by the submission; the stored value only ever grows.
    pub highest_paragraph_index_reached: i32,
    /// Set when the submission completes the module.
    pub final_summary: Option<String>,
    pub now: DateTime<Utc>,
}

/// Review fields as they should be stored after an admin update.
#[derive(Debug, Clone)]
pub struct ReviewProgressParams {
    pub progress_id: i32,
    pub score: Option<i32>,
    pub teacher_feedback: Option<String>,
    pub teacher_feedback_at: Option<DateTime<Utc>>,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityDay {
    pub date: NaiveDate,
    pub submissions: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Activity {
    pub modules_started: u64,
    pub modules_completed: u64,
    pub total_submissions: u64,
    pub total_time_spent_minutes: i64,
    pub average_score: Option<f64>,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub calendar: Vec<ActivityDay>,
}

impl Activity {
    pub fn into_dto(self) -> ActivityDto {
        ActivityDto {
            modules_started: self.modules_started,
            modules_completed: self.modules_completed,
            total_submissions: self.total_submissions,
            total_time_spent_minutes: self.total_time_spent_minutes,
            average_score: self.average_score,
            current_streak: self.current_streak,
            longest_streak: self.longest_streak,
            calendar: self
                .calendar
                .into_iter()
                .map(|day| ActivityDayDto {
                    date: day.date,
                    submissions: day.submissions,
                })
                .collect(),
        }
    }
}
