use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::{
    model::{
        api::{ApiResponse, ErrorDto, MessageDto},
        auth::{AuthTokensDto, LoginDto, RefreshTokenDto, SignupDto},
        profile::ProfileDto,
    },
    server::{
        error::{auth::AuthError, AppError},
        extract::Json,
        middleware::auth::AuthGuard,
        service::auth::{AuthService, AuthSession, SignupParams},
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Name of the httpOnly cookie carrying staff refresh tokens.
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Cookie path; the browser only sends the refresh token to auth endpoints.
const REFRESH_COOKIE_PATH: &str = "/api/v1/auth";

fn refresh_cookie(session: &AuthSession, secure: bool) -> Cookie<'static> {
    let max_age = (session.refresh_expires_at - chrono::Utc::now()).num_seconds();

    Cookie::build((REFRESH_COOKIE, session.refresh_token.clone()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Strict)
        .path(REFRESH_COOKIE_PATH)
        .max_age(time::Duration::seconds(max_age.max(0)))
        .build()
}

fn removal_cookie() -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, "")).path(REFRESH_COOKIE_PATH).build()
}

/// Sets the refresh cookie for staff sessions and wraps the tokens in the envelope.
fn session_response(
    jar: CookieJar,
    session: AuthSession,
    secure: bool,
    status: StatusCode,
    message: &str,
) -> impl IntoResponse {
    let jar = if session.uses_refresh_cookie() {
        jar.add(refresh_cookie(&session, secure))
    } else {
        jar
    };

    (status, jar, Json(ApiResponse::success(message, session.into_dto())))
}

/// Presented refresh token: cookie first, then the JSON body.
fn presented_refresh_token(jar: &CookieJar, body: &Bytes) -> Result<Option<String>, AppError> {
    if let Some(cookie) = jar.get(REFRESH_COOKIE) {
        if !cookie.value().is_empty() {
            return Ok(Some(cookie.value().to_string()));
        }
    }

    if body.is_empty() {
        return Ok(None);
    }

    let dto: RefreshTokenDto = serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid request body: {}", e)))?;

    Ok(dto.refresh_token.filter(|token| !token.is_empty()))
}

/// Register a new admin account.
///
/// # Returns
/// - `201 Created` - Account created, tokens issued (refresh token set as cookie)
/// - `400 Bad Request` - Invalid input or email already registered
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    tag = AUTH_TAG,
    request_body = SignupDto,
    responses(
        (status = 201, description = "Account created", body = ApiResponse<AuthTokensDto>),
        (status = 400, description = "Invalid signup data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<SignupDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let session = service.signup(SignupParams::from_dto(payload)).await?;

    Ok(session_response(
        jar,
        session,
        state.cookie_secure,
        StatusCode::CREATED,
        "Account created",
    ))
}

/// Log in with email and password.
///
/// Staff receive the refresh token as an httpOnly cookie; students receive it in the body.
#[utoipa::path(
    post,
    path = "/api/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = ApiResponse<AuthTokensDto>),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let session = service.login(&payload.email, &payload.password).await?;

    Ok(session_response(
        jar,
        session,
        state.cookie_secure,
        StatusCode::OK,
        "Logged in",
    ))
}

/// Exchange a refresh token for a new token pair.
///
/// The token is read from the refresh cookie or the `refresh_token` body field. The
/// presented token is revoked.
#[utoipa::path(
    post,
    path = "/api/v1/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "Tokens refreshed", body = ApiResponse<AuthTokensDto>),
        (status = 401, description = "Refresh token invalid, expired or revoked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let Some(token) = presented_refresh_token(&jar, &body)? else {
        return Err(AuthError::InvalidRefreshToken.into());
    };

    let session = service.refresh(&token).await?;

    Ok(session_response(
        jar,
        session,
        state.cookie_secure,
        StatusCode::OK,
        "Tokens refreshed",
    ))
}

/// Revoke the presented refresh token and clear the refresh cookie.
#[utoipa::path(
    post,
    path = "/api/v1/auth/logout",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "Logged out", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let token = presented_refresh_token(&jar, &body).unwrap_or(None);
    service.logout(token.as_deref()).await?;

    Ok((
        StatusCode::OK,
        jar.remove(removal_cookie()),
        Json(MessageDto::new("Logged out")),
    ))
}

/// Get the authenticated profile.
#[utoipa::path(
    get,
    path = "/api/v1/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Authenticated profile", body = ApiResponse<ProfileDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let profile = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::success("Profile retrieved", profile.into_dto())),
    ))
}
