pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_profile_table;
mod m20260105_000002_create_reading_module_table;
mod m20260105_000003_create_module_paragraph_table;
mod m20260106_000004_create_student_progress_table;
mod m20260106_000005_create_paragraph_submission_table;
mod m20260112_000006_create_refresh_token_table;
mod m20260120_000007_create_subscription_plan_table;
mod m20260120_000008_create_subscription_table;
mod m20260120_000009_create_payment_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_profile_table::Migration),
            Box::new(m20260105_000002_create_reading_module_table::Migration),
            Box::new(m20260105_000003_create_module_paragraph_table::Migration),
            Box::new(m20260106_000004_create_student_progress_table::Migration),
            Box::new(m20260106_000005_create_paragraph_submission_table::Migration),
            Box::new(m20260112_000006_create_refresh_token_table::Migration),
            Box::new(m20260120_000007_create_subscription_plan_table::Migration),
            Box::new(m20260120_000008_create_subscription_table::Migration),
            Box::new(m20260120_000009_create_payment_table::Migration),
        ]
    }
}
