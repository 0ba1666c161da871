//! Profile fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::profile;

/// Default test profile email.
pub const DEFAULT_EMAIL: &str = "teacher@example.com";

/// Default test profile role.
pub const DEFAULT_ROLE: &str = "admin";

fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Creates a profile entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - email: `"teacher@example.com"`
/// - role: `"admin"`
/// - admin_id: `None`
/// - stripe_customer_id: `None`
pub fn entity() -> profile::Model {
    entity_builder().build()
}

/// Creates a profile entity builder for customization.
pub fn entity_builder() -> ProfileEntityBuilder {
    ProfileEntityBuilder {
        id: 1,
        email: DEFAULT_EMAIL.to_string(),
        role: DEFAULT_ROLE.to_string(),
        first_name: "Test".to_string(),
        last_name: "Teacher".to_string(),
        admin_id: None,
        stripe_customer_id: None,
    }
}

/// Builder for creating customized profile entity models.
pub struct ProfileEntityBuilder {
    id: i32,
    email: String,
    role: String,
    first_name: String,
    last_name: String,
    admin_id: Option<i32>,
    stripe_customer_id: Option<String>,
}

impl ProfileEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn admin_id(mut self, admin_id: Option<i32>) -> Self {
        self.admin_id = admin_id;
        self
    }

    pub fn stripe_customer_id(mut self, customer_id: Option<String>) -> Self {
        self.stripe_customer_id = customer_id;
        self
    }

    /// Builds the in-memory profile model.
    pub fn build(self) -> profile::Model {
        let now = fixed_timestamp();
        profile::Model {
            id: self.id,
            email: self.email,
            password_hash: crate::factory::profile::UNUSABLE_PASSWORD_HASH.to_string(),
            role: self.role,
            first_name: self.first_name,
            last_name: self.last_name,
            admin_id: self.admin_id,
            stripe_customer_id: self.stripe_customer_id,
            created_at: now,
            updated_at: now,
        }
    }
}
