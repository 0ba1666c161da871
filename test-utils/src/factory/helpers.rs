//! Shared helper utilities for factory methods.
//!
//! Provides ID generation and convenience methods for creating entities together with
//! their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an admin and a student managed by that admin.
///
/// # Returns
/// - `Ok((admin, student))` - Both created profiles
/// - `Err(DbErr)` - Database error during creation
pub async fn create_admin_with_student(
    db: &DatabaseConnection,
) -> Result<(entity::profile::Model, entity::profile::Model), DbErr> {
    let admin = crate::factory::profile::create_admin(db).await?;
    let student = crate::factory::profile::create_student(db, admin.id).await?;

    Ok((admin, student))
}

/// Creates a complete progress hierarchy.
///
/// This convenience method creates:
/// 1. Admin profile
/// 2. Student managed by the admin
/// 3. Curated reading module with `paragraph_count` paragraphs
/// 4. A fresh progress row for the student on that module
///
/// # Returns
/// - `Ok((admin, student, module, progress))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_progress_with_dependencies(
    db: &DatabaseConnection,
    paragraph_count: i32,
) -> Result<
    (
        entity::profile::Model,
        entity::profile::Model,
        entity::reading_module::Model,
        entity::student_progress::Model,
    ),
    DbErr,
> {
    let (admin, student) = create_admin_with_student(db).await?;
    let module = crate::factory::reading_module::create_module(db, paragraph_count).await?;
    let progress =
        crate::factory::student_progress::create_progress(db, student.id, module.id).await?;

    Ok((admin, student, module, progress))
}
