use crate::{
    client::{model::error::ApiError, ApiClient},
    model::billing::{CreatePlanDto, PlanDto},
};

impl ApiClient {
    pub async fn get_plans(&self) -> Result<Vec<PlanDto>, ApiError> {
        self.get("plans").await
    }

    /// Super-admin only.
    pub async fn create_plan(&self, payload: &CreatePlanDto) -> Result<PlanDto, ApiError> {
        self.post("plans", payload).await
    }
}
