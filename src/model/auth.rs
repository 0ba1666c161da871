use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::profile::ProfileDto;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct SignupDto {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

/// Body accepted by refresh and logout.
///
/// Admins normally rely on the refresh cookie and send an empty body; students send the
/// token they received at login.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Default)]
pub struct RefreshTokenDto {
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// Issued on signup, login and refresh.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AuthTokensDto {
    pub access_token: String,
    pub token_type: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    /// Present only for students; admins receive it as an httpOnly cookie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub profile: ProfileDto,
}
