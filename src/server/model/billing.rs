//! Subscription plans, subscriptions and payments mirrored from the billing provider.

use chrono::{DateTime, Utc};

use crate::model::billing::{CreatePlanDto, PlanDto};

/// Subscription status written when the provider reports a failed invoice.
pub const STATUS_PAST_DUE: &str = "past_due";

/// Subscription status written on `customer.subscription.deleted`.
pub const STATUS_CANCELED: &str = "canceled";

/// Statuses under which plan limits are enforced.
pub const ACTIVE_STATUSES: [&str; 2] = ["active", "trialing"];

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionPlan {
    pub id: i32,
    pub name: String,
    pub stripe_price_id: String,
    pub amount_cents: i64,
    pub currency: String,
    pub interval: String,
    pub max_students: Option<i32>,
}

impl SubscriptionPlan {
    pub fn from_entity(entity: entity::subscription_plan::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            stripe_price_id: entity.stripe_price_id,
            amount_cents: entity.amount_cents,
            currency: entity.currency,
            interval: entity.interval,
            max_students: entity.max_students,
        }
    }

    pub fn into_dto(self) -> PlanDto {
        PlanDto {
            id: self.id,
            name: self.name,
            stripe_price_id: self.stripe_price_id,
            amount_cents: self.amount_cents,
            currency: self.currency,
            interval: self.interval,
            max_students: self.max_students,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePlanParams {
    pub name: String,
    pub stripe_price_id: String,
    pub amount_cents: i64,
    pub currency: String,
    pub interval: String,
    pub max_students: Option<i32>,
}

impl CreatePlanParams {
    pub fn from_dto(dto: CreatePlanDto) -> Self {
        Self {
            name: dto.name,
            stripe_price_id: dto.stripe_price_id,
            amount_cents: dto.amount_cents,
            currency: dto.currency.to_lowercase(),
            interval: dto.interval,
            max_students: dto.max_students,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub id: i32,
    pub profile_id: i32,
    pub stripe_subscription_id: String,
    pub stripe_customer_id: String,
    pub plan_id: Option<i32>,
    pub status: String,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Subscription {
    pub fn from_entity(entity: entity::subscription::Model) -> Self {
        Self {
            id: entity.id,
            profile_id: entity.profile_id,
            stripe_subscription_id: entity.stripe_subscription_id,
            stripe_customer_id: entity.stripe_customer_id,
            plan_id: entity.plan_id,
            status: entity.status,
            current_period_end: entity.current_period_end,
            cancel_at_period_end: entity.cancel_at_period_end,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn is_active(&self) -> bool {
        ACTIVE_STATUSES.contains(&self.status.as_str())
    }
}

/// Subscription with its plan, if the plan is known locally.
#[derive(Debug, Clone)]
pub struct SubscriptionWithPlan {
    pub subscription: Subscription,
    pub plan: Option<SubscriptionPlan>,
}

#[derive(Debug, Clone)]
pub struct UpsertSubscriptionParams {
    pub profile_id: i32,
    pub stripe_subscription_id: String,
    pub stripe_customer_id: String,
    pub plan_id: Option<i32>,
    pub status: String,
    pub current_period_end: Option<DateTime<Utc>>,
    pub cancel_at_period_end: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i32,
    pub profile_id: Option<i32>,
    pub stripe_invoice_id: String,
    pub stripe_subscription_id: Option<String>,
    pub amount_cents: i64,
    pub currency: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl Payment {
    pub fn from_entity(entity: entity::payment::Model) -> Self {
        Self {
            id: entity.id,
            profile_id: entity.profile_id,
            stripe_invoice_id: entity.stripe_invoice_id,
            stripe_subscription_id: entity.stripe_subscription_id,
            amount_cents: entity.amount_cents,
            currency: entity.currency,
            status: entity.status,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertPaymentParams {
    pub profile_id: Option<i32>,
    pub stripe_invoice_id: String,
    pub stripe_subscription_id: Option<String>,
    pub amount_cents: i64,
    pub currency: String,
    pub status: PaymentStatus,
}
