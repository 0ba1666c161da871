//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations (CRUD) for each domain in the
//! application. Repositories use SeaORM entity models internally and return domain
//! models to keep entity types out of the business logic layer.

pub mod payment;
pub mod plan;
pub mod profile;
pub mod progress;
pub mod reading_module;
pub mod refresh_token;
pub mod submission;
pub mod subscription;
