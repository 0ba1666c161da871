//! Profile data repository for database operations.
//!
//! Provides the `ProfileRepository` for admins, students and super-admins, including
//! the managed-student queries used by admin endpoints.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::profile::{CreateProfileParams, Profile, Role, UpdateProfileParams},
};

/// Repository providing database operations for profiles.
pub struct ProfileRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProfileRepository<'a> {
    /// Creates a new ProfileRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ProfileRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new profile.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The created profile
    /// - `Err(AppError::DbErr)` - Insert failed (including duplicate email)
    pub async fn create(&self, params: CreateProfileParams) -> Result<Profile, AppError> {
        let now = Utc::now();
        let entity = entity::profile::ActiveModel {
            email: ActiveValue::Set(params.email),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            admin_id: ActiveValue::Set(params.admin_id),
            stripe_customer_id: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Profile::from_entity(entity)
    }

    /// Finds a profile by id.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Profile>, AppError> {
        entity::prelude::Profile::find_by_id(id)
            .one(self.db)
            .await?
            .map(Profile::from_entity)
            .transpose()
    }

    /// Finds a profile by its (normalised) email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, AppError> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::Email.eq(email))
            .one(self.db)
            .await?
            .map(Profile::from_entity)
            .transpose()
    }

    /// Finds the profile linked to a billing provider customer id.
    pub async fn find_by_stripe_customer_id(
        &self,
        customer_id: &str,
    ) -> Result<Option<Profile>, AppError> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::StripeCustomerId.eq(customer_id))
            .one(self.db)
            .await?
            .map(Profile::from_entity)
            .transpose()
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Profile))` - The updated profile
    /// - `Ok(None)` - No profile with that id
    /// - `Err(AppError)` - Database error
    pub async fn update(&self, params: UpdateProfileParams) -> Result<Option<Profile>, AppError> {
        let Some(existing) = entity::prelude::Profile::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::profile::ActiveModel = existing.into();
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = params.password_hash {
            active.password_hash = ActiveValue::Set(password_hash);
        }
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Profile::from_entity(entity).map(Some)
    }

    /// Links a profile to a billing provider customer id.
    pub async fn set_stripe_customer_id(
        &self,
        id: i32,
        customer_id: String,
    ) -> Result<Option<Profile>, AppError> {
        let Some(existing) = entity::prelude::Profile::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::profile::ActiveModel = existing.into();
        active.stripe_customer_id = ActiveValue::Set(Some(customer_id));
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Profile::from_entity(entity).map(Some)
    }

    /// Deletes a profile. Progress, submissions and refresh tokens cascade.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Profile::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the students managed by `admin_id`, ordered by last then first name.
    ///
    /// # Arguments
    /// - `admin_id` - Managing admin's profile id
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of students per page
    ///
    /// # Returns
    /// - `Ok((students, total))` - Students on the requested page and total student count
    pub async fn get_students_paginated(
        &self,
        admin_id: i32,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Profile>, u64), AppError> {
        let paginator = entity::prelude::Profile::find()
            .filter(entity::profile::Column::AdminId.eq(admin_id))
            .filter(entity::profile::Column::Role.eq(Role::Student.as_str()))
            .order_by_asc(entity::profile::Column::LastName)
            .order_by_asc(entity::profile::Column::FirstName)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let profiles = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Profile::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((profiles, total))
    }

    /// Gets every profile ordered by id.
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Profile>, u64), AppError> {
        let paginator = entity::prelude::Profile::find()
            .order_by_asc(entity::profile::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let profiles = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(Profile::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((profiles, total))
    }

    /// Counts the students managed by `admin_id`.
    pub async fn count_students(&self, admin_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Profile::find()
            .filter(entity::profile::Column::AdminId.eq(admin_id))
            .filter(entity::profile::Column::Role.eq(Role::Student.as_str()))
            .count(self.db)
            .await
    }

    /// Checks whether any super-admin exists.
    pub async fn super_admin_exists(&self) -> Result<bool, DbErr> {
        let count = entity::prelude::Profile::find()
            .filter(entity::profile::Column::Role.eq(Role::SuperAdmin.as_str()))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
