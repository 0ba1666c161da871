use std::sync::Arc;

use tokio::sync::RwLock;

use crate::model::{
    auth::AuthTokensDto,
    profile::{ProfileDto, RoleDto},
};

/// Credentials of the signed-in profile.
#[derive(Clone, Debug)]
pub struct AuthState {
    pub access_token: String,
    /// Only students hold their refresh token; staff rely on the httpOnly cookie.
    pub refresh_token: Option<String>,
    pub profile: ProfileDto,
}

impl AuthState {
    pub fn is_staff(&self) -> bool {
        matches!(self.profile.role, RoleDto::Admin | RoleDto::SuperAdmin)
    }
}

/// Local auth state shared by every clone of an [`ApiClient`](crate::client::ApiClient).
#[derive(Clone, Default)]
pub struct AuthStore {
    inner: Arc<RwLock<Option<AuthState>>>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<AuthState> {
        self.inner.read().await.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.is_some()
    }

    pub async fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .map(|state| state.access_token.clone())
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .as_ref()
            .and_then(|state| state.refresh_token.clone())
    }

    /// Stores freshly issued tokens.
    ///
    /// A response without a refresh token keeps the one already held.
    pub async fn apply(&self, tokens: AuthTokensDto) {
        let mut inner = self.inner.write().await;
        let refresh_token = tokens
            .refresh_token
            .or_else(|| inner.as_ref().and_then(|state| state.refresh_token.clone()));

        *inner = Some(AuthState {
            access_token: tokens.access_token,
            refresh_token,
            profile: tokens.profile,
        });
    }

    pub async fn set_profile(&self, profile: ProfileDto) {
        if let Some(state) = self.inner.write().await.as_mut() {
            state.profile = profile;
        }
    }

    pub async fn clear(&self) {
        *self.inner.write().await = None;
    }
}
