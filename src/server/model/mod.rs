//! Domain models and operation parameter types.
//!
//! Domain models are produced by repositories through `from_entity` and converted to
//! wire DTOs with `into_dto`. Parameter structs carry validated input from controllers
//! and services down to repositories.

pub mod auth;
pub mod billing;
pub mod profile;
pub mod progress;
pub mod reading_module;
