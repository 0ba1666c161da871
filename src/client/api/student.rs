use crate::{
    client::{api::Page, model::error::ApiError, ApiClient},
    model::{
        profile::{CreateStudentDto, PaginatedProfilesDto, ProfileDto, UpdateStudentDto},
        progress::{ActivityDto, ProgressDto},
    },
};

impl ApiClient {
    pub async fn create_student(&self, payload: &CreateStudentDto) -> Result<ProfileDto, ApiError> {
        self.post("students", payload).await
    }

    pub async fn get_students(&self, page: Page) -> Result<PaginatedProfilesDto, ApiError> {
        self.get_with_query("students", &page.query()).await
    }

    pub async fn get_student(&self, student_id: i32) -> Result<ProfileDto, ApiError> {
        self.get(&format!("students/{}", student_id)).await
    }

    pub async fn update_student(
        &self,
        student_id: i32,
        payload: &UpdateStudentDto,
    ) -> Result<ProfileDto, ApiError> {
        self.put(&format!("students/{}", student_id), payload).await
    }

    pub async fn delete_student(&self, student_id: i32) -> Result<(), ApiError> {
        self.delete(&format!("students/{}", student_id)).await
    }

    pub async fn get_student_progress(&self, student_id: i32) -> Result<Vec<ProgressDto>, ApiError> {
        self.get(&format!("students/{}/progress", student_id)).await
    }

    pub async fn get_student_activity(
        &self,
        student_id: i32,
        days: Option<u32>,
    ) -> Result<ActivityDto, ApiError> {
        let query: Vec<(&str, String)> = days.map(|d| ("days", d.to_string())).into_iter().collect();

        self.get_with_query(&format!("students/{}/activity", student_id), &query)
            .await
    }
}
