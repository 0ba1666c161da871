//! Progress state machine: `not-started → in-progress → completed`.
//!
//! Starting is idempotent. Each paragraph submission is appended; the highest paragraph
//! reached never decreases and submitting the final paragraph completes the record.
//! Admins review records of students they manage.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        profile::ProfileRepository, progress::ProgressRepository,
        reading_module::ReadingModuleRepository, submission::SubmissionRepository,
    },
    error::{auth::AuthError, AppError},
    model::{
        profile::Profile,
        progress::{
            Activity, AdvanceProgressParams, ProgressDetail, ReviewProgressParams,
            StudentProgress, SubmitParagraphParams, UpdateProgressParams,
        },
    },
    service::{
        activity::{compute_activity, DEFAULT_CALENDAR_DAYS, MAX_CALENDAR_DAYS},
        reading_module::ReadingModuleService,
    },
    util::parse::require_non_blank,
};

/// Accepted range for a single time-spent report, in minutes.
pub const TIME_SPENT_RANGE: std::ops::RangeInclusive<i32> = 1..=600;

/// Accepted score range.
pub const SCORE_RANGE: std::ops::RangeInclusive<i32> = 0..=100;

pub struct ProgressService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProgressService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Starts a module for `student`, returning the existing record if there is one.
    ///
    /// # Returns
    /// - `Ok(StudentProgress)` - Existing or newly created record
    /// - `Err(AppError::NotFound)` - Module missing or not visible to the student
    pub async fn start(
        &self,
        student: &Profile,
        module_id: i32,
    ) -> Result<StudentProgress, AppError> {
        let repo = ProgressRepository::new(self.db);

        let module = ReadingModuleService::new(self.db)
            .get_visible(student, module_id)
            .await?;

        if let Some(existing) = repo.find_by_student_and_module(student.id, module.id).await? {
            return Ok(existing);
        }

        match repo.create(student.id, module.id).await {
            Ok(progress) => {
                tracing::debug!(
                    "Student {} started module {} (progress {})",
                    student.id,
                    module.id,
                    progress.id
                );
                Ok(progress)
            }
            // A concurrent start won the unique (student, module) index.
            Err(err) => match repo.find_by_student_and_module(student.id, module.id).await? {
                Some(existing) => Ok(existing),
                None => Err(err.into()),
            },
        }
    }

    /// Records a paragraph summary and advances the record.
    ///
    /// # Returns
    /// - `Ok(StudentProgress)` - Record after the submission
    /// - `Err(AppError::NotFound)` - Module was never started
    /// - `Err(AppError::BadRequest)` - Record completed, index out of range or blank summary
    pub async fn submit(&self, params: SubmitParagraphParams) -> Result<StudentProgress, AppError> {
        let repo = ProgressRepository::new(self.db);
        let module_repo = ReadingModuleRepository::new(self.db);
        let submission_repo = SubmissionRepository::new(self.db);

        let progress = repo
            .find_by_student_and_module(params.student_id, params.module_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Progress not found for this module".to_string()))?;

        if progress.completed {
            return Err(AppError::BadRequest(
                "This module has already been completed".to_string(),
            ));
        }

        let paragraph_count = module_repo.paragraph_count(progress.module_id).await?;
        if params.paragraph_index < 1 || params.paragraph_index > paragraph_count {
            return Err(AppError::BadRequest(format!(
                "paragraph_index must be between 1 and {}",
                paragraph_count
            )));
        }

        let paragraph_summary = require_non_blank("paragraph_summary", &params.paragraph_summary)?;
        let cumulative_summary =
            require_non_blank("cumulative_summary", &params.cumulative_summary)?;

        submission_repo
            .create(
                progress.id,
                params.paragraph_index,
                paragraph_summary,
                cumulative_summary.clone(),
            )
            .await?;

        let completes = params.paragraph_index >= paragraph_count;
        let advanced = repo
            .advance(AdvanceProgressParams {
                progress_id: progress.id,
                highest_paragraph_index_reached: params.paragraph_index,
                final_summary: completes.then_some(cumulative_summary),
                now: Utc::now(),
            })
            .await?
            .ok_or_else(|| AppError::NotFound("Progress not found for this module".to_string()))?;

        if completes {
            tracing::info!(
                "Student {} completed module {}",
                advanced.student_id,
                advanced.module_id
            );
        }

        Ok(advanced)
    }

    /// Admin review: score, feedback and completion flag.
    ///
    /// # Returns
    /// - `Ok(StudentProgress)` - Updated record
    /// - `Err(AppError::NotFound)` - No such record
    /// - `Err(AuthError::AccessDenied)` - Caller does not manage the record's student
    /// - `Err(AppError::BadRequest)` - Score out of range or completing an unfinished module
    pub async fn update(
        &self,
        caller: &Profile,
        params: UpdateProgressParams,
    ) -> Result<StudentProgress, AppError> {
        let repo = ProgressRepository::new(self.db);
        let profile_repo = ProfileRepository::new(self.db);
        let module_repo = ReadingModuleRepository::new(self.db);

        let progress = repo
            .find_by_id(params.progress_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Progress not found".to_string()))?;

        let student = profile_repo
            .find_by_id(progress.student_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Progress not found".to_string()))?;

        if !caller.manages(&student) {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!(
                    "Profile does not manage student {} of progress {}",
                    student.id, progress.id
                ),
            )
            .into());
        }

        if let Some(score) = params.score {
            if !SCORE_RANGE.contains(&score) {
                return Err(AppError::BadRequest(
                    "score must be between 0 and 100".to_string(),
                ));
            }
        }

        let now = Utc::now();
        let (teacher_feedback, teacher_feedback_at) = match params.teacher_feedback {
            Some(feedback) => (Some(feedback.trim().to_string()), Some(now)),
            None => (progress.teacher_feedback.clone(), progress.teacher_feedback_at),
        };

        let (completed, completed_at) = match params.completed {
            None => (progress.completed, progress.completed_at),
            Some(false) => (false, None),
            Some(true) => {
                let paragraph_count = module_repo.paragraph_count(progress.module_id).await?;
                if progress.highest_paragraph_index_reached < paragraph_count
                    || progress.final_summary.is_none()
                {
                    return Err(AppError::BadRequest(
                        "A module can only be marked completed after its final paragraph"
                            .to_string(),
                    ));
                }
                (true, progress.completed_at.or(Some(now)))
            }
        };

        repo.save_review(ReviewProgressParams {
            progress_id: progress.id,
            score: params.score.or(progress.score),
            teacher_feedback,
            teacher_feedback_at,
            completed,
            completed_at,
        })
        .await?
        .ok_or_else(|| AppError::NotFound("Progress not found".to_string()))
    }

    /// Adds reading time to an existing record.
    pub async fn record_time(
        &self,
        student_id: i32,
        module_id: i32,
        minutes: i32,
    ) -> Result<StudentProgress, AppError> {
        let repo = ProgressRepository::new(self.db);

        if !TIME_SPENT_RANGE.contains(&minutes) {
            return Err(AppError::BadRequest(
                "minutes must be between 1 and 600".to_string(),
            ));
        }

        let progress = repo
            .find_by_student_and_module(student_id, module_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Progress not found for this module".to_string()))?;

        repo.add_time_spent(progress.id, minutes)
            .await?
            .ok_or_else(|| AppError::NotFound("Progress not found for this module".to_string()))
    }

    pub async fn list(&self, student_id: i32) -> Result<Vec<StudentProgress>, AppError> {
        let repo = ProgressRepository::new(self.db);

        Ok(repo.get_by_student(student_id).await?)
    }

    /// Gets a record with its submissions ordered by index, then time.
    pub async fn get_detail(
        &self,
        student_id: i32,
        module_id: i32,
    ) -> Result<ProgressDetail, AppError> {
        let repo = ProgressRepository::new(self.db);
        let module_repo = ReadingModuleRepository::new(self.db);
        let submission_repo = SubmissionRepository::new(self.db);

        let progress = repo
            .find_by_student_and_module(student_id, module_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Progress not found for this module".to_string()))?;

        let paragraph_count = module_repo.paragraph_count(progress.module_id).await?;
        let submissions = submission_repo.get_by_progress(progress.id).await?;

        Ok(ProgressDetail {
            progress,
            paragraph_count,
            submissions,
        })
    }

    /// Activity statistics as of today (UTC).
    ///
    /// `days` defaults to 90 and may not exceed 366.
    pub async fn activity(
        &self,
        student_id: i32,
        days: Option<u32>,
    ) -> Result<Activity, AppError> {
        let repo = ProgressRepository::new(self.db);
        let submission_repo = SubmissionRepository::new(self.db);

        let days = days.unwrap_or(DEFAULT_CALENDAR_DAYS);
        if days == 0 || days > MAX_CALENDAR_DAYS {
            return Err(AppError::BadRequest(format!(
                "days must be between 1 and {}",
                MAX_CALENDAR_DAYS
            )));
        }

        let progress = repo.get_by_student(student_id).await?;
        let submitted_at: Vec<_> = submission_repo
            .get_by_student(student_id)
            .await?
            .into_iter()
            .map(|s| s.submitted_at)
            .collect();

        Ok(compute_activity(
            &progress,
            &submitted_at,
            Utc::now().date_naive(),
            days,
        ))
    }
}
