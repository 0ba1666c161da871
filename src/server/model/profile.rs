//! Profile domain models and parameters.
//!
//! Profiles represent admins (teachers), their students, and platform super-admins.
//! The subscription read model joins a profile with the subscription that governs it.

use chrono::{DateTime, Utc};

use crate::{
    model::profile::{PaginatedProfilesDto, ProfileDto, ProfileViewDto, RoleDto},
    server::{error::AppError, util::parse::parse_role_from_string},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Student,
    SuperAdmin,
}

impl Role {
    /// Value stored in the `profile.role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Student => "student",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Admins and super-admins both manage students and modules.
    pub fn is_staff(&self) -> bool {
        matches!(self, Self::Admin | Self::SuperAdmin)
    }

    pub fn into_dto(self) -> RoleDto {
        match self {
            Self::Admin => RoleDto::Admin,
            Self::Student => RoleDto::Student,
            Self::SuperAdmin => RoleDto::SuperAdmin,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub id: i32,
    pub email: String,
    /// Argon2 PHC string.
    pub password_hash: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    /// Managing admin, set for students only.
    pub admin_id: Option<i32>,
    pub stripe_customer_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Converts an entity model to a profile domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The converted profile
    /// - `Err(AppError::InternalErr(ParseRole))` - Stored role is not recognised
    pub fn from_entity(entity: entity::profile::Model) -> Result<Self, AppError> {
        let role = parse_role_from_string(entity.role)?;

        Ok(Self {
            id: entity.id,
            email: entity.email,
            password_hash: entity.password_hash,
            role,
            first_name: entity.first_name,
            last_name: entity.last_name,
            admin_id: entity.admin_id,
            stripe_customer_id: entity.stripe_customer_id,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    /// Whether this profile may act on `student` as its managing admin.
    ///
    /// Super-admins manage every student.
    pub fn manages(&self, student: &Profile) -> bool {
        match self.role {
            Role::SuperAdmin => student.role == Role::Student,
            Role::Admin => student.role == Role::Student && student.admin_id == Some(self.id),
            Role::Student => false,
        }
    }

    pub fn into_dto(self) -> ProfileDto {
        ProfileDto {
            id: self.id,
            email: self.email,
            role: self.role.into_dto(),
            first_name: self.first_name,
            last_name: self.last_name,
            admin_id: self.admin_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Subscription fields displayed alongside a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionSummary {
    pub plan_name: Option<String>,
    pub status: String,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
    pub max_students: Option<i32>,
}

/// Profile joined with its governing subscription.
#[derive(Debug, Clone)]
pub struct ProfileView {
    pub profile: Profile,
    pub subscription: Option<SubscriptionSummary>,
}

impl ProfileView {
    pub fn into_dto(self) -> ProfileViewDto {
        let profile = self.profile;
        let subscription = self.subscription;

        ProfileViewDto {
            id: profile.id,
            email: profile.email,
            role: profile.role.into_dto(),
            first_name: profile.first_name,
            last_name: profile.last_name,
            admin_id: profile.admin_id,
            plan_name: subscription.as_ref().and_then(|s| s.plan_name.clone()),
            subscription_status: subscription.as_ref().map(|s| s.status.clone()),
            current_period_end: subscription.as_ref().and_then(|s| s.current_period_end),
            cancel_at_period_end: subscription.as_ref().map(|s| s.cancel_at_period_end),
            max_students: subscription.as_ref().and_then(|s| s.max_students),
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

/// Parameters for inserting a profile. The password is already hashed.
#[derive(Debug, Clone)]
pub struct CreateProfileParams {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub first_name: String,
    pub last_name: String,
    pub admin_id: Option<i32>,
}

/// Partial profile update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub id: i32,
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PaginatedProfiles {
    pub profiles: Vec<Profile>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProfiles {
    pub fn into_dto(self) -> PaginatedProfilesDto {
        PaginatedProfilesDto {
            profiles: self.profiles.into_iter().map(Profile::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}
