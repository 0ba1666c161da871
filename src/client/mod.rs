//! Typed HTTP client for the NoteEarly API.
//!
//! [`ApiClient`] attaches the bearer token of the signed-in profile and renews it once
//! through a single shared refresh when a request comes back `401`. The endpoint wrappers
//! live in [`api`], grouped the same way as the server controllers.

pub mod api;
pub mod http;
pub mod model;

pub use http::ApiClient;
pub use model::{auth::AuthStore, error::ApiError};

#[cfg(test)]
mod test;
