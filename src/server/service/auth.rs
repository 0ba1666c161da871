//! Signup, login, refresh-token rotation and logout.

use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

use crate::{
    model::auth::{AuthTokensDto, SignupDto},
    server::{
        data::{profile::ProfileRepository, refresh_token::RefreshTokenRepository},
        error::{auth::AuthError, AppError},
        model::{
            auth::CreateRefreshTokenParams,
            profile::{CreateProfileParams, Profile, Role},
        },
        service::{
            password::{hash_password, normalize_email, validate_password, verify_password},
            token::TokenService,
        },
        util::parse::require_non_blank,
    },
};

/// Tokens issued to an authenticated profile.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub access_token: String,
    pub expires_in: i64,
    /// Plaintext refresh token; only its hash is stored.
    pub refresh_token: String,
    pub refresh_expires_at: DateTime<Utc>,
    pub profile: Profile,
}

impl AuthSession {
    /// Whether the refresh token travels in an httpOnly cookie rather than the body.
    pub fn uses_refresh_cookie(&self) -> bool {
        self.profile.role.is_staff()
    }

    pub fn into_dto(self) -> AuthTokensDto {
        let refresh_token = if self.uses_refresh_cookie() {
            None
        } else {
            Some(self.refresh_token)
        };

        AuthTokensDto {
            access_token: self.access_token,
            token_type: "Bearer".to_string(),
            expires_in: self.expires_in,
            refresh_token,
            profile: self.profile.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SignupParams {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

impl SignupParams {
    pub fn from_dto(dto: SignupDto) -> Self {
        Self {
            email: dto.email,
            password: dto.password,
            first_name: dto.first_name,
            last_name: dto.last_name,
        }
    }
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new admin and logs it in.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - Tokens for the new admin
    /// - `Err(AppError::BadRequest)` - Invalid input or email already registered
    pub async fn signup(&self, params: SignupParams) -> Result<AuthSession, AppError> {
        let repo = ProfileRepository::new(self.db);

        let email = normalize_email(&params.email)?;
        validate_password(&params.password)?;
        let first_name = require_non_blank("first_name", &params.first_name)?;
        let last_name = require_non_blank("last_name", &params.last_name)?;

        if repo.find_by_email(&email).await?.is_some() {
            return Err(AppError::BadRequest(
                "An account with this email already exists".to_string(),
            ));
        }

        let profile = repo
            .create(CreateProfileParams {
                email,
                password_hash: hash_password(&params.password)?,
                role: Role::Admin,
                first_name,
                last_name,
                admin_id: None,
            })
            .await?;

        tracing::info!("Admin {} signed up", profile.id);

        self.issue_session(profile).await
    }

    /// Verifies credentials and issues a token pair.
    ///
    /// Unknown emails and wrong passwords are indistinguishable to the caller.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthSession, AppError> {
        let repo = ProfileRepository::new(self.db);

        let email = email.trim().to_lowercase();
        let Some(profile) = repo.find_by_email(&email).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &profile.password_hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        self.issue_session(profile).await
    }

    /// Rotates a refresh token: the presented token is revoked and a new pair issued.
    ///
    /// # Returns
    /// - `Ok(AuthSession)` - New tokens
    /// - `Err(AuthError::InvalidRefreshToken)` - Unknown, expired or revoked token
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthSession, AppError> {
        let token_repo = RefreshTokenRepository::new(self.db);
        let profile_repo = ProfileRepository::new(self.db);
        let now = Utc::now();

        let hash = TokenService::hash_refresh_token(refresh_token);
        let Some(stored) = token_repo.find_by_hash(&hash).await? else {
            return Err(AuthError::InvalidRefreshToken.into());
        };

        if !stored.is_active(now) {
            if stored.revoked_at.is_some() {
                tracing::warn!(
                    "Revoked refresh token {} presented for profile {}",
                    stored.id,
                    stored.profile_id
                );
            }
            return Err(AuthError::InvalidRefreshToken.into());
        }

        token_repo.revoke(stored.id, now).await?;

        let Some(profile) = profile_repo.find_by_id(stored.profile_id).await? else {
            return Err(AuthError::InvalidRefreshToken.into());
        };

        self.issue_session(profile).await
    }

    /// Revokes the presented refresh token if it is known. Never fails on bad tokens.
    pub async fn logout(&self, refresh_token: Option<&str>) -> Result<(), AppError> {
        let Some(refresh_token) = refresh_token else {
            return Ok(());
        };

        let token_repo = RefreshTokenRepository::new(self.db);
        let hash = TokenService::hash_refresh_token(refresh_token);

        if let Some(stored) = token_repo.find_by_hash(&hash).await? {
            token_repo.revoke(stored.id, Utc::now()).await?;
        }

        Ok(())
    }

    async fn issue_session(&self, profile: Profile) -> Result<AuthSession, AppError> {
        let token_repo = RefreshTokenRepository::new(self.db);
        let now = Utc::now();

        let access_token = self.tokens.issue_access_token(&profile, now)?;
        let refresh_token = TokenService::generate_refresh_token();
        let refresh_expires_at = now + self.tokens.refresh_ttl();

        token_repo
            .create(CreateRefreshTokenParams {
                profile_id: profile.id,
                token_hash: TokenService::hash_refresh_token(&refresh_token),
                expires_at: refresh_expires_at,
            })
            .await?;

        Ok(AuthSession {
            access_token,
            expires_in: self.tokens.access_ttl_seconds(),
            refresh_token,
            refresh_expires_at,
            profile,
        })
    }
}
