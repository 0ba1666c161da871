//! Data transfer objects exchanged between the API and its clients.
//!
//! Every type here is serialized as JSON on the wire and described in the OpenAPI
//! document through `utoipa::ToSchema`.

pub mod api;
pub mod auth;
pub mod billing;
pub mod profile;
pub mod progress;
pub mod reading_module;
