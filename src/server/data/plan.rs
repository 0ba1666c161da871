//! Subscription plan repository.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::billing::{CreatePlanParams, SubscriptionPlan};

pub struct PlanRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreatePlanParams) -> Result<SubscriptionPlan, DbErr> {
        let entity = entity::subscription_plan::ActiveModel {
            name: ActiveValue::Set(params.name),
            stripe_price_id: ActiveValue::Set(params.stripe_price_id),
            amount_cents: ActiveValue::Set(params.amount_cents),
            currency: ActiveValue::Set(params.currency),
            interval: ActiveValue::Set(params.interval),
            max_students: ActiveValue::Set(params.max_students),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(SubscriptionPlan::from_entity(entity))
    }

    /// Gets all plans, cheapest first.
    pub async fn get_all(&self) -> Result<Vec<SubscriptionPlan>, DbErr> {
        let entities = entity::prelude::SubscriptionPlan::find()
            .order_by_asc(entity::subscription_plan::Column::AmountCents)
            .order_by_asc(entity::subscription_plan::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(SubscriptionPlan::from_entity)
            .collect())
    }

    pub async fn find_by_price_id(
        &self,
        stripe_price_id: &str,
    ) -> Result<Option<SubscriptionPlan>, DbErr> {
        let entity = entity::prelude::SubscriptionPlan::find()
            .filter(entity::subscription_plan::Column::StripePriceId.eq(stripe_price_id))
            .one(self.db)
            .await?;

        Ok(entity.map(SubscriptionPlan::from_entity))
    }
}
