use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome marker carried by every enveloped response.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

/// Response envelope wrapping every JSON body returned by the API.
///
/// ```json
/// { "status": "success", "message": "Profile retrieved", "data": { ... } }
/// ```
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ApiResponse<T> {
    pub status: ApiStatus,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: ApiStatus::Success,
            message: message.into(),
            data: Some(data),
        }
    }
}

/// Error body: same envelope, `data` is always `null`.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct ErrorDto {
    pub status: ApiStatus,
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Error,
            message: message.into(),
            data: None,
        }
    }
}

/// Successful response with no payload (delete, logout).
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct MessageDto {
    pub status: ApiStatus,
    pub message: String,
    #[schema(value_type = Option<Object>)]
    pub data: Option<serde_json::Value>,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: ApiStatus::Success,
            message: message.into(),
            data: None,
        }
    }
}
