//! NoteEarly Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the NoteEarly
//! API. This crate offers a builder pattern for creating test contexts with in-memory SQLite
//! databases, factories that insert rows with sensible defaults, and fixtures that build
//! in-memory models and signed billing payloads.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Database-inserting builders (profiles, modules, progress, billing)
//! - **fixture**: In-memory models and Stripe webhook payloads
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn test_progress() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_progress_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let (admin, student) = factory::helpers::create_admin_with_student(db).await?;
//!     let module = factory::reading_module::create_module(db, 3).await?;
//!     // Perform progress operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
