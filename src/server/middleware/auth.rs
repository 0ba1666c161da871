use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::profile::ProfileRepository,
    error::{auth::AuthError, AppError},
    model::profile::{Profile, Role},
    service::token::TokenService,
};

/// Role requirements checked by [`AuthGuard::require`].
///
/// A super-admin satisfies `Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Admin,
    Student,
    SuperAdmin,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { db, tokens, headers }
    }

    /// Authenticates the bearer token and checks every permission.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The authenticated profile
    /// - `Err(AuthError::MissingToken | InvalidToken | UserNotInDatabase)` - 401
    /// - `Err(AuthError::AccessDenied)` - 403
    pub async fn require(&self, permissions: &[Permission]) -> Result<Profile, AppError> {
        let profile_repo = ProfileRepository::new(self.db);

        let token = bearer_token(self.headers).ok_or(AuthError::MissingToken)?;
        let claims = self.tokens.verify_access_token(token)?;

        let profile_id: i32 = claims
            .sub
            .parse()
            .map_err(|_| AuthError::InvalidToken(format!("Invalid subject {}", claims.sub)))?;

        let Some(profile) = profile_repo.find_by_id(profile_id).await? else {
            return Err(AuthError::UserNotInDatabase(profile_id).into());
        };

        for permission in permissions {
            let allowed = match permission {
                Permission::Admin => matches!(profile.role, Role::Admin | Role::SuperAdmin),
                Permission::Student => profile.role == Role::Student,
                Permission::SuperAdmin => profile.role == Role::SuperAdmin,
            };

            if !allowed {
                return Err(AuthError::AccessDenied(
                    profile.id,
                    format!(
                        "Profile with role {} lacks {:?} permission",
                        profile.role.as_str(),
                        permission
                    ),
                )
                .into());
            }
        }

        Ok(profile)
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
