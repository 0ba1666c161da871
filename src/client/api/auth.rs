use crate::{
    client::{model::error::ApiError, ApiClient},
    model::{
        auth::{AuthTokensDto, LoginDto, RefreshTokenDto, SignupDto},
        profile::ProfileDto,
    },
};

impl ApiClient {
    /// Registers an admin account and signs it in.
    pub async fn signup(&self, payload: &SignupDto) -> Result<ProfileDto, ApiError> {
        let tokens: AuthTokensDto = self.post("auth/signup", payload).await?;
        let profile = tokens.profile.clone();
        self.store().apply(tokens).await;

        Ok(profile)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<ProfileDto, ApiError> {
        let payload = LoginDto {
            email: email.to_string(),
            password: password.to_string(),
        };

        let tokens: AuthTokensDto = self.post("auth/login", &payload).await?;
        let profile = tokens.profile.clone();
        self.store().apply(tokens).await;

        Ok(profile)
    }

    /// Revokes the session on the server and forgets it locally.
    ///
    /// The local state is cleared even when the server call fails.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let payload = RefreshTokenDto {
            refresh_token: self.store().refresh_token().await,
        };

        let result = self.post_empty("auth/logout", &payload).await;
        self.store().clear().await;

        result
    }

    /// Fetches the signed-in profile and updates the stored copy.
    pub async fn me(&self) -> Result<ProfileDto, ApiError> {
        let profile: ProfileDto = self.get("auth/me").await?;
        self.store().set_profile(profile.clone()).await;

        Ok(profile)
    }
}
