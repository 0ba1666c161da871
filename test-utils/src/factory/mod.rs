//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults, reducing boilerplate in tests. Each
//! entity has a `Factory` struct for customization and a `create_*` convenience function
//! for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let admin = factory::profile::create_admin(&db).await?;
//! let student = factory::profile::create_student(&db, admin.id).await?;
//! let module = factory::reading_module::create_module(&db, 3).await?;
//! let progress = factory::student_progress::create_progress(&db, student.id, module.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let student = factory::profile::ProfileFactory::new(&db)
//!     .student_of(admin.id)
//!     .email("reader@example.com")
//!     .password("correct horse")
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod paragraph_submission;
pub mod profile;
pub mod reading_module;
pub mod student_progress;
pub mod subscription;

pub use profile::{create_admin, create_student, create_super_admin};
pub use reading_module::create_module;
pub use student_progress::create_progress;
pub use subscription::{create_plan, create_subscription};
