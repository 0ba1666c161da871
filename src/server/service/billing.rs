use sea_orm::DatabaseConnection;

use crate::server::{
    data::plan::PlanRepository,
    error::AppError,
    model::billing::{CreatePlanParams, SubscriptionPlan},
    util::parse::require_non_blank,
};

/// Billing intervals the provider supports for recurring prices.
const INTERVALS: [&str; 4] = ["day", "week", "month", "year"];

pub struct BillingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BillingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists plans from cheapest to most expensive.
    pub async fn list_plans(&self) -> Result<Vec<SubscriptionPlan>, AppError> {
        let repo = PlanRepository::new(self.db);

        Ok(repo.get_all().await?)
    }

    /// Creates a plan mirroring a provider price.
    ///
    /// # Returns
    /// - `Ok(SubscriptionPlan)` - The created plan
    /// - `Err(AppError::BadRequest)` - Invalid fields or the price id is already mapped
    pub async fn create_plan(
        &self,
        params: CreatePlanParams,
    ) -> Result<SubscriptionPlan, AppError> {
        let repo = PlanRepository::new(self.db);

        let name = require_non_blank("name", &params.name)?;
        let stripe_price_id = require_non_blank("stripe_price_id", &params.stripe_price_id)?;

        if params.amount_cents < 0 {
            return Err(AppError::BadRequest(
                "amount_cents must not be negative".to_string(),
            ));
        }
        if params.currency.len() != 3 || !params.currency.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(AppError::BadRequest(
                "currency must be a three-letter ISO code".to_string(),
            ));
        }
        if !INTERVALS.contains(&params.interval.as_str()) {
            return Err(AppError::BadRequest(format!(
                "interval must be one of {}",
                INTERVALS.join(", ")
            )));
        }
        if matches!(params.max_students, Some(max) if max < 1) {
            return Err(AppError::BadRequest(
                "max_students must be at least 1".to_string(),
            ));
        }

        if repo.find_by_price_id(&stripe_price_id).await?.is_some() {
            return Err(AppError::BadRequest(format!(
                "A plan for price {} already exists",
                stripe_price_id
            )));
        }

        let plan = repo
            .create(CreatePlanParams {
                name,
                stripe_price_id,
                ..params
            })
            .await?;

        tracing::info!("Created plan {} ({})", plan.name, plan.stripe_price_id);

        Ok(plan)
    }
}
