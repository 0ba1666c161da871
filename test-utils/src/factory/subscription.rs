//! Billing factories for plans and subscriptions.

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a monthly plan bound to `stripe_price_id`.
pub async fn create_plan(
    db: &DatabaseConnection,
    stripe_price_id: impl Into<String>,
    max_students: Option<i32>,
) -> Result<entity::subscription_plan::Model, DbErr> {
    entity::subscription_plan::ActiveModel {
        name: ActiveValue::Set(format!("Plan {}", next_id())),
        stripe_price_id: ActiveValue::Set(stripe_price_id.into()),
        amount_cents: ActiveValue::Set(1999),
        currency: ActiveValue::Set("usd".to_string()),
        interval: ActiveValue::Set("month".to_string()),
        max_students: ActiveValue::Set(max_students),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for subscription rows.
pub struct SubscriptionFactory<'a> {
    db: &'a DatabaseConnection,
    profile_id: i32,
    plan_id: Option<i32>,
    status: String,
    stripe_customer_id: String,
}

impl<'a> SubscriptionFactory<'a> {
    /// Creates a factory for an active subscription without a plan.
    pub fn new(db: &'a DatabaseConnection, profile_id: i32) -> Self {
        Self {
            db,
            profile_id,
            plan_id: None,
            status: "active".to_string(),
            stripe_customer_id: format!("cus_test_{}", next_id()),
        }
    }

    pub fn plan(mut self, plan_id: i32) -> Self {
        self.plan_id = Some(plan_id);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn customer(mut self, stripe_customer_id: impl Into<String>) -> Self {
        self.stripe_customer_id = stripe_customer_id.into();
        self
    }

    pub async fn build(self) -> Result<entity::subscription::Model, DbErr> {
        let now = Utc::now();
        entity::subscription::ActiveModel {
            profile_id: ActiveValue::Set(self.profile_id),
            stripe_subscription_id: ActiveValue::Set(format!("sub_test_{}", next_id())),
            stripe_customer_id: ActiveValue::Set(self.stripe_customer_id),
            plan_id: ActiveValue::Set(self.plan_id),
            status: ActiveValue::Set(self.status),
            current_period_end: ActiveValue::Set(Some(now + Duration::days(30))),
            cancel_at_period_end: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active subscription on `plan_id` for `profile_id`.
pub async fn create_subscription(
    db: &DatabaseConnection,
    profile_id: i32,
    plan_id: i32,
) -> Result<entity::subscription::Model, DbErr> {
    SubscriptionFactory::new(db, profile_id)
        .plan(plan_id)
        .build()
        .await
}
