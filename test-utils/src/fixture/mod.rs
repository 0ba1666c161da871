//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models and raw payloads for unit tests. Unlike
//! factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let student = fixture::profile::entity_builder()
//!     .role("student")
//!     .admin_id(Some(1))
//!     .build();
//!
//! let payload = fixture::stripe::subscription_event("customer.subscription.created", "sub_1", "cus_1", "price_1", "active");
//! let header = fixture::stripe::signature_header("whsec_test", &payload, chrono::Utc::now().timestamp());
//! ```

pub mod profile;
pub mod stripe;
pub mod student_progress;

pub use profile::{entity as profile_entity, entity_builder as profile_entity_builder};
pub use student_progress::entity as student_progress_entity;
