//! Subscription repository, keyed by the billing provider's subscription id.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::billing::{
    Subscription, SubscriptionPlan, SubscriptionWithPlan, UpsertSubscriptionParams,
};

pub struct SubscriptionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SubscriptionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a subscription or updates the existing row with the same provider id.
    ///
    /// # Returns
    /// - `Ok(Subscription)` - The created or updated subscription
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, params: UpsertSubscriptionParams) -> Result<Subscription, DbErr> {
        let now = Utc::now();
        let entity = entity::prelude::Subscription::insert(entity::subscription::ActiveModel {
            profile_id: ActiveValue::Set(params.profile_id),
            stripe_subscription_id: ActiveValue::Set(params.stripe_subscription_id),
            stripe_customer_id: ActiveValue::Set(params.stripe_customer_id),
            plan_id: ActiveValue::Set(params.plan_id),
            status: ActiveValue::Set(params.status),
            current_period_end: ActiveValue::Set(params.current_period_end),
            cancel_at_period_end: ActiveValue::Set(params.cancel_at_period_end),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::subscription::Column::StripeSubscriptionId)
                .update_columns([
                    entity::subscription::Column::ProfileId,
                    entity::subscription::Column::StripeCustomerId,
                    entity::subscription::Column::PlanId,
                    entity::subscription::Column::Status,
                    entity::subscription::Column::CurrentPeriodEnd,
                    entity::subscription::Column::CancelAtPeriodEnd,
                    entity::subscription::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(Subscription::from_entity(entity))
    }

    pub async fn find_by_stripe_id(
        &self,
        stripe_subscription_id: &str,
    ) -> Result<Option<Subscription>, DbErr> {
        let entity = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::StripeSubscriptionId.eq(stripe_subscription_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Subscription::from_entity))
    }

    /// Gets the most recently updated subscription of a profile with its plan.
    pub async fn find_latest_for_profile(
        &self,
        profile_id: i32,
    ) -> Result<Option<SubscriptionWithPlan>, DbErr> {
        let result = entity::prelude::Subscription::find()
            .filter(entity::subscription::Column::ProfileId.eq(profile_id))
            .order_by_desc(entity::subscription::Column::UpdatedAt)
            .order_by_desc(entity::subscription::Column::Id)
            .find_also_related(entity::prelude::SubscriptionPlan)
            .one(self.db)
            .await?;

        Ok(result.map(|(subscription, plan)| SubscriptionWithPlan {
            subscription: Subscription::from_entity(subscription),
            plan: plan.map(SubscriptionPlan::from_entity),
        }))
    }

    /// Sets the status of the subscription with the given provider id.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was updated
    /// - `Ok(false)` - No subscription with that provider id
    pub async fn set_status(
        &self,
        stripe_subscription_id: &str,
        status: &str,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Subscription::update_many()
            .col_expr(entity::subscription::Column::Status, Expr::value(status))
            .col_expr(entity::subscription::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::subscription::Column::StripeSubscriptionId.eq(stripe_subscription_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
