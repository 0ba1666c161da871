use crate::{
    client::{api::Page, model::error::ApiError, ApiClient},
    model::profile::{PaginatedProfilesDto, ProfileDto, ProfileViewDto, UpdateProfileDto},
};

impl ApiClient {
    /// Own profile joined with the governing subscription.
    pub async fn get_own_profile(&self) -> Result<ProfileViewDto, ApiError> {
        self.get("profiles/me").await
    }

    pub async fn update_own_profile(
        &self,
        payload: &UpdateProfileDto,
    ) -> Result<ProfileDto, ApiError> {
        self.put("profiles/me", payload).await
    }

    /// Every profile; super-admin only.
    pub async fn get_profiles(&self, page: Page) -> Result<PaginatedProfilesDto, ApiError> {
        self.get_with_query("profiles", &page.query()).await
    }
}
