//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer:
//!
//! - **Business Logic**: validation, ownership checks and the progress state machine
//! - **Orchestration**: coordinating multiple repository calls
//! - **Domain Models**: working with domain models rather than DTOs or entity models

pub mod activity;
pub mod auth;
pub mod billing;
pub mod password;
pub mod profile;
pub mod progress;
pub mod reading_module;
pub mod token;
pub mod webhook;

#[cfg(test)]
mod test;
