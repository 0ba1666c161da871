use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq)]
pub struct PlanDto {
    pub id: i32,
    pub name: String,
    pub stripe_price_id: String,
    pub amount_cents: i64,
    pub currency: String,
    pub interval: String,
    /// `None` means unlimited students.
    pub max_students: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct CreatePlanDto {
    pub name: String,
    pub stripe_price_id: String,
    pub amount_cents: i64,
    pub currency: String,
    pub interval: String,
    pub max_students: Option<i32>,
}

/// Raw acknowledgement body returned to the billing provider.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct WebhookAckDto {
    pub received: bool,
}
