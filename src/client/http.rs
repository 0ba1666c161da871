//! Request pipeline with silent token refresh.
//!
//! Every request carries the stored access token. When the server answers `401` the
//! client renews the token and retries the request exactly once. Concurrent requests
//! that fail while a renewal is running wait for that renewal instead of starting their
//! own, and share its outcome. A failed renewal clears the local auth state.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::{oneshot, Mutex};
use url::Url;

use crate::{
    client::model::{auth::AuthStore, error::ApiError},
    model::{
        api::{ApiResponse, ErrorDto},
        auth::{AuthTokensDto, RefreshTokenDto},
    },
};

/// Requests under this prefix are never retried after a refresh.
const AUTH_PREFIX: &str = "auth/";

const REFRESH_PATH: &str = "auth/refresh";

type RefreshOutcome = Result<(), ApiError>;

#[derive(Default)]
struct RefreshState {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<RefreshOutcome>>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    store: AuthStore,
    refresh: Arc<Mutex<RefreshState>>,
}

impl ApiClient {
    /// Creates a client for the API mounted at `base_url` (e.g. `https://host/api/v1`).
    ///
    /// The underlying HTTP client keeps cookies so staff refresh cookies are replayed.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_store(base_url, AuthStore::new())
    }

    pub fn with_store(base_url: &str, store: AuthStore) -> Result<Self, ApiError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|e| ApiError::internal(format!("Invalid base URL {}: {}", base_url, e)))?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|e| ApiError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url,
            store,
            refresh: Arc::new(Mutex::new(RefreshState::default())),
        })
    }

    pub fn store(&self) -> &AuthStore {
        &self.store
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.send(Method::GET, path, None::<&()>, &[]).await?;
        parse_response(response).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self.send(Method::GET, path, None::<&()>, query).await?;
        parse_response(response).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(Method::POST, path, Some(body), &[]).await?;
        parse_response(response).await
    }

    /// POST whose success response carries no data (logout).
    pub(crate) async fn post_empty<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        let response = self.send(Method::POST, path, Some(body), &[]).await?;
        parse_empty_response(response).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self.send(Method::PUT, path, Some(body), &[]).await?;
        parse_response(response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.send(Method::DELETE, path, None::<&()>, &[]).await?;
        parse_empty_response(response).await
    }

    /// Sends a request, refreshing the access token and retrying once on `401`.
    async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> Result<Response, ApiError> {
        let url = self.url(path)?;

        let token = self.store.access_token().await;
        let response = self
            .build(method.clone(), url.clone(), body, query, token.as_deref())
            .send()
            .await
            .map_err(send_error)?;

        if response.status() != StatusCode::UNAUTHORIZED
            || path.trim_start_matches('/').starts_with(AUTH_PREFIX)
            || token.is_none()
        {
            return Ok(response);
        }

        self.refresh_session(token.as_deref()).await?;

        let token = self.store.access_token().await;
        self.build(method, url, body, query, token.as_deref())
            .send()
            .await
            .map_err(send_error)
    }

    fn build<B: Serialize>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
        query: &[(&str, String)],
        token: Option<&str>,
    ) -> RequestBuilder {
        let mut request = self.http.request(method, url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        request
    }

    /// Renews the access token that failed as `stale`.
    ///
    /// Only one renewal runs at a time; callers arriving meanwhile wait for its result.
    /// A caller whose token was already replaced returns immediately. The renewal runs on
    /// its own task, so a caller that is cancelled mid-refresh does not strand the others.
    async fn refresh_session(&self, stale: Option<&str>) -> RefreshOutcome {
        let receiver = {
            let mut state = self.refresh.lock().await;

            if !state.in_flight {
                match self.store.access_token().await {
                    None => return Err(ApiError::new(401, "Not authenticated")),
                    Some(current) if Some(current.as_str()) != stale => return Ok(()),
                    Some(_) => {}
                }

                state.in_flight = true;
                tokio::spawn(self.clone().run_refresh());
            }

            let (sender, receiver) = oneshot::channel();
            state.waiters.push(sender);
            receiver
        };

        receiver
            .await
            .unwrap_or_else(|_| Err(ApiError::new(401, "Session refresh was abandoned")))
    }

    /// Performs the renewal and hands its outcome to every waiting caller.
    async fn run_refresh(self) {
        let outcome = self.request_new_tokens().await;
        if let Err(error) = &outcome {
            tracing::debug!("Session refresh failed: {}", error);
            self.store.clear().await;
        }

        let waiters = {
            let mut state = self.refresh.lock().await;
            state.in_flight = false;
            std::mem::take(&mut state.waiters)
        };
        for waiter in waiters {
            let _ = waiter.send(outcome.clone());
        }
    }

    async fn request_new_tokens(&self) -> RefreshOutcome {
        let body = RefreshTokenDto {
            refresh_token: self.store.refresh_token().await,
        };

        let response = self
            .http
            .post(self.url(REFRESH_PATH)?)
            .json(&body)
            .send()
            .await
            .map_err(send_error)?;

        let tokens: AuthTokensDto = parse_response(response).await?;
        self.store.apply(tokens).await;

        Ok(())
    }

    fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::internal(format!("Invalid request path {}: {}", path, e)))
    }
}

fn send_error(error: reqwest::Error) -> ApiError {
    ApiError::internal(format!("Failed to send request: {}", error))
}

/// Unwraps the `data` field of a success envelope.
pub(crate) async fn parse_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = u64::from(response.status().as_u16());

    if !response.status().is_success() {
        return Err(error_from(status, response).await);
    }

    let envelope = response
        .json::<ApiResponse<T>>()
        .await
        .map_err(|e| ApiError::internal(format!("Failed to parse response: {}", e)))?;

    envelope
        .data
        .ok_or_else(|| ApiError::internal("Response envelope carried no data"))
}

pub(crate) async fn parse_empty_response(response: Response) -> Result<(), ApiError> {
    let status = u64::from(response.status().as_u16());

    if response.status().is_success() {
        Ok(())
    } else {
        Err(error_from(status, response).await)
    }
}

async fn error_from(status: u64, response: Response) -> ApiError {
    let text = response.text().await.unwrap_or_default();

    let message = match serde_json::from_str::<ErrorDto>(&text) {
        Ok(error) => error.message,
        Err(_) if text.is_empty() => "Unknown error".to_string(),
        Err(_) => text,
    };

    ApiError { status, message }
}
