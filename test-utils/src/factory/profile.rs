//! Profile factory for creating admin, student and super-admin rows.

use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Placeholder stored when a test does not need to log in.
pub const UNUSABLE_PASSWORD_HASH: &str = "!unusable";

/// Factory for creating test profiles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = ProfileFactory::new(&db)
///     .email("teacher@example.com")
///     .password("hunter22")
///     .build()
///     .await?;
/// ```
pub struct ProfileFactory<'a> {
    db: &'a DatabaseConnection,
    email: String,
    password_hash: String,
    role: String,
    first_name: String,
    last_name: String,
    admin_id: Option<i32>,
    stripe_customer_id: Option<String>,
}

impl<'a> ProfileFactory<'a> {
    /// Creates a new ProfileFactory with default values.
    ///
    /// Defaults:
    /// - email: `"user{id}@example.com"`
    /// - role: `"admin"`
    /// - first_name / last_name: `"User"` / `"{id}"`
    /// - password_hash: unusable placeholder
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            email: format!("user{}@example.com", id),
            password_hash: UNUSABLE_PASSWORD_HASH.to_string(),
            role: "admin".to_string(),
            first_name: "User".to_string(),
            last_name: id.to_string(),
            admin_id: None,
            stripe_customer_id: None,
        }
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Makes the profile a student managed by `admin_id`.
    pub fn student_of(mut self, admin_id: i32) -> Self {
        self.role = "student".to_string();
        self.admin_id = Some(admin_id);
        self
    }

    pub fn stripe_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.stripe_customer_id = Some(customer_id.into());
        self
    }

    /// Hashes `password` with argon2 so the profile can log in.
    ///
    /// Uses a fixed salt; hashes are still verifiable by the production verifier.
    pub fn password(mut self, password: &str) -> Self {
        let salt = SaltString::encode_b64(b"noteearly-test-salt").expect("valid test salt");
        self.password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .expect("argon2 hashing succeeds for test passwords")
            .to_string();
        self
    }

    /// Builds and inserts the profile entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::profile::Model)` - Created profile
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::profile::Model, DbErr> {
        let now = Utc::now();
        entity::profile::ActiveModel {
            email: ActiveValue::Set(self.email),
            password_hash: ActiveValue::Set(self.password_hash),
            role: ActiveValue::Set(self.role),
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            admin_id: ActiveValue::Set(self.admin_id),
            stripe_customer_id: ActiveValue::Set(self.stripe_customer_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin profile with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db).build().await
}

/// Creates a super-admin profile with default values.
pub async fn create_super_admin(
    db: &DatabaseConnection,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db).role("super_admin").build().await
}

/// Creates a student managed by `admin_id`.
pub async fn create_student(
    db: &DatabaseConnection,
    admin_id: i32,
) -> Result<entity::profile::Model, DbErr> {
    ProfileFactory::new(db).student_of(admin_id).build().await
}
