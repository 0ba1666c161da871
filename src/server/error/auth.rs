use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carried no `Authorization: Bearer` header.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// Access token failed signature, expiry or claim validation.
    #[error("Access token rejected: {0}")]
    InvalidToken(String),

    /// Token subject no longer exists.
    #[error("Profile {0} from access token not found in database")]
    UserNotInDatabase(i32),

    /// Email unknown or password mismatch.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Refresh token unknown, expired or revoked.
    #[error("Refresh token is invalid, expired or revoked")]
    InvalidRefreshToken,

    /// Authenticated profile lacks the role or ownership required.
    ///
    /// # Fields
    /// - Profile id of the caller
    /// - Detail logged server-side
    #[error("Profile {0} denied access: {1}")]
    AccessDenied(i32, String),
}

/// Converts authentication errors into HTTP responses.
///
/// - Token, credential and refresh failures → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// The detailed reason is logged at debug level; clients only see a generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("You do not have permission to perform this action")),
            )
                .into_response(),
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Invalid email or password")),
            )
                .into_response(),
            Self::MissingToken
            | Self::InvalidToken(_)
            | Self::UserNotInDatabase(_)
            | Self::InvalidRefreshToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Not authenticated")),
            )
                .into_response(),
        }
    }
}
