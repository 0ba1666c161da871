use crate::{
    client::{model::error::ApiError, ApiClient},
    model::progress::{
        ActivityDto, ProgressDetailDto, ProgressDto, RecordTimeDto, StartProgressDto,
        SubmitParagraphDto, UpdateProgressDto,
    },
};

impl ApiClient {
    /// Starts a module for the signed-in student; returns the existing record if any.
    pub async fn start_progress(&self, module_id: i32) -> Result<ProgressDto, ApiError> {
        self.post("progress/start", &StartProgressDto { module_id })
            .await
    }

    pub async fn get_own_progress(&self) -> Result<Vec<ProgressDto>, ApiError> {
        self.get("progress").await
    }

    pub async fn get_own_activity(&self, days: Option<u32>) -> Result<ActivityDto, ApiError> {
        let query: Vec<(&str, String)> = days.map(|d| ("days", d.to_string())).into_iter().collect();

        self.get_with_query("progress/activity", &query).await
    }

    pub async fn get_module_progress(&self, module_id: i32) -> Result<ProgressDetailDto, ApiError> {
        self.get(&format!("progress/modules/{}", module_id)).await
    }

    pub async fn submit_paragraph(
        &self,
        module_id: i32,
        payload: &SubmitParagraphDto,
    ) -> Result<ProgressDto, ApiError> {
        self.post(&format!("progress/modules/{}/submissions", module_id), payload)
            .await
    }

    pub async fn record_time(&self, module_id: i32, minutes: i32) -> Result<ProgressDto, ApiError> {
        self.post(
            &format!("progress/modules/{}/time", module_id),
            &RecordTimeDto { minutes },
        )
        .await
    }

    /// Admin review of a student's record.
    pub async fn update_progress(
        &self,
        progress_id: i32,
        payload: &UpdateProgressDto,
    ) -> Result<ProgressDto, ApiError> {
        self.put(&format!("progress/{}", progress_id), payload).await
    }
}
