//! HTTP handlers for the `/api/v1` surface.
//!
//! Handlers authenticate through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! convert DTOs into service parameters and wrap results in the response envelope.

use serde::Deserialize;

pub mod auth;
pub mod health;
pub mod plan;
pub mod profile;
pub mod progress;
pub mod reading_module;
pub mod student;
pub mod webhook;

#[cfg(test)]
mod test;

/// Largest page size a client may request.
const MAX_ENTRIES: u64 = 100;

/// Zero-based page selection shared by the list endpoints.
#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

pub(crate) fn default_entries() -> u64 {
    10
}

impl PaginationParams {
    /// Page size clamped to `1..=100`.
    pub fn per_page(&self) -> u64 {
        self.entries.clamp(1, MAX_ENTRIES)
    }
}
