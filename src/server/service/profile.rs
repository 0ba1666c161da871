//! Profile management: own profile, managed students, super-admin listing.

use sea_orm::DatabaseConnection;

use crate::{
    model::profile::{CreateStudentDto, UpdateProfileDto, UpdateStudentDto},
    server::{
        data::{profile::ProfileRepository, subscription::SubscriptionRepository},
        error::{auth::AuthError, AppError},
        model::profile::{
            CreateProfileParams, PaginatedProfiles, Profile, ProfileView, Role,
            SubscriptionSummary, UpdateProfileParams,
        },
        service::password::{hash_password, normalize_email, validate_password},
        util::parse::require_non_blank,
    },
};

#[derive(Debug, Clone)]
pub struct CreateStudentParams {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl CreateStudentParams {
    pub fn from_dto(dto: CreateStudentDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateStudentParams {
    pub student_id: i32,
    pub email: Option<String>,
    pub password: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl UpdateStudentParams {
    pub fn from_dto(student_id: i32, dto: UpdateStudentDto) -> Self {
        Self {
            student_id,
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

pub struct ProfileService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Joins a profile with the subscription that governs it.
    ///
    /// Students are governed by their managing admin's subscription.
    pub async fn get_view(&self, profile: Profile) -> Result<ProfileView, AppError> {
        let subscription_repo = SubscriptionRepository::new(self.db);

        let owner_id = match profile.role {
            Role::Student => profile.admin_id,
            Role::Admin | Role::SuperAdmin => Some(profile.id),
        };

        let subscription = match owner_id {
            Some(owner_id) => subscription_repo
                .find_latest_for_profile(owner_id)
                .await?
                .map(|found| SubscriptionSummary {
                    plan_name: found.plan.as_ref().map(|p| p.name.clone()),
                    max_students: found.plan.as_ref().and_then(|p| p.max_students),
                    status: found.subscription.status,
                    current_period_end: found.subscription.current_period_end,
                    cancel_at_period_end: found.subscription.cancel_at_period_end,
                }),
            None => None,
        };

        Ok(ProfileView {
            profile,
            subscription,
        })
    }

    /// Updates the caller's own names.
    pub async fn update_own(
        &self,
        profile_id: i32,
        dto: UpdateProfileDto,
    ) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);

        let params = UpdateProfileParams {
            id: profile_id,
            first_name: dto
                .first_name
                .map(|v| require_non_blank("first_name", &v))
                .transpose()?,
            last_name: dto
                .last_name
                .map(|v| require_non_blank("last_name", &v))
                .transpose()?,
            ..Default::default()
        };

        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
    }

    /// Creates a student managed by `admin`.
    ///
    /// When the admin has an active subscription whose plan limits students, the limit
    /// is enforced.
    pub async fn create_student(
        &self,
        admin: &Profile,
        params: CreateStudentParams,
    ) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);

        let email = normalize_email(&params.email)?;
        validate_password(&params.password)?;
        let first_name = require_non_blank("first_name", &params.first_name)?;
        let last_name = require_non_blank("last_name", &params.last_name)?;

        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(
                "An account with this email already exists".to_string(),
            ));
        }

        self.ensure_student_capacity(admin).await?;

        let student = repo
            .create(CreateProfileParams {
                email,
                password_hash: hash_password(&params.password)?,
                role: Role::Student,
                first_name,
                last_name,
                admin_id: Some(admin.id),
            })
            .await?;

        tracing::info!("Admin {} created student {}", admin.id, student.id);

        Ok(student)
    }

    /// Lists students managed by `admin`.
    pub async fn list_students(
        &self,
        admin: &Profile,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedProfiles, AppError> {
        let repo = ProfileRepository::new(self.db);

        let (profiles, total) = repo.get_students_paginated(admin.id, page, per_page).await?;

        Ok(PaginatedProfiles {
            profiles,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Lists every profile (super-admin).
    pub async fn list_all(&self, page: u64, per_page: u64) -> Result<PaginatedProfiles, AppError> {
        let repo = ProfileRepository::new(self.db);

        let (profiles, total) = repo.get_all_paginated(page, per_page).await?;

        Ok(PaginatedProfiles {
            profiles,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Loads a student the caller manages.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The student
    /// - `Err(AppError::NotFound)` - No student with that id
    /// - `Err(AuthError::AccessDenied)` - Student belongs to another admin
    pub async fn get_managed_student(
        &self,
        caller: &Profile,
        student_id: i32,
    ) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);

        let student = repo
            .find_by_id(student_id)
            .await?
            .filter(|p| p.role == Role::Student)
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        if !caller.manages(&student) {
            return Err(AuthError::AccessDenied(
                caller.id,
                format!("Profile does not manage student {}", student_id),
            )
            .into());
        }

        Ok(student)
    }

    pub async fn update_student(
        &self,
        caller: &Profile,
        params: UpdateStudentParams,
    ) -> Result<Profile, AppError> {
        let repo = ProfileRepository::new(self.db);

        let student = self.get_managed_student(caller, params.student_id).await?;

        let email = match params.email {
            Some(email) => {
                let email = normalize_email(&email)?;
                if email != student.email && repo.find_by_email(&email).await?.is_some() {
                    return Err(AppError::BadRequest(
                        "An account with this email already exists".to_string(),
                    ));
                }
                Some(email)
            }
            None => None,
        };

        let password_hash = match params.password {
            Some(password) => {
                validate_password(&password)?;
                Some(hash_password(&password)?)
            }
            None => None,
        };

        let update = UpdateProfileParams {
            id: student.id,
            email,
            password_hash,
            first_name: params
                .first_name
                .map(|v| require_non_blank("first_name", &v))
                .transpose()?,
            last_name: params
                .last_name
                .map(|v| require_non_blank("last_name", &v))
                .transpose()?,
        };

        repo.update(update)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    /// Deletes a managed student together with its progress and submissions.
    pub async fn delete_student(&self, caller: &Profile, student_id: i32) -> Result<(), AppError> {
        let repo = ProfileRepository::new(self.db);

        let student = self.get_managed_student(caller, student_id).await?;
        repo.delete(student.id).await?;

        tracing::info!("Profile {} deleted student {}", caller.id, student.id);

        Ok(())
    }

    async fn ensure_student_capacity(&self, admin: &Profile) -> Result<(), AppError> {
        let subscription_repo = SubscriptionRepository::new(self.db);
        let repo = ProfileRepository::new(self.db);

        let Some(found) = subscription_repo.find_latest_for_profile(admin.id).await? else {
            return Ok(());
        };

        if !found.subscription.is_active() {
            return Ok(());
        }

        let Some(max_students) = found.plan.and_then(|p| p.max_students) else {
            return Ok(());
        };

        let current = repo.count_students(admin.id).await?;
        if current >= max_students.max(0) as u64 {
            return Err(AppError::BadRequest(format!(
                "Your plan allows at most {} students",
                max_students
            )));
        }

        Ok(())
    }
}

pub(crate) fn total_pages(total: u64, per_page: u64) -> u64 {
    if per_page > 0 {
        total.div_ceil(per_page)
    } else {
        0
    }
}
