use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Add entity tables, then call `build()` to create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Profile, RefreshToken};
///
/// let test = TestBuilder::new()
///     .with_table(Profile)
///     .with_table(RefreshToken)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. Tables with foreign keys must be added after their referenced tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait` to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the profile and refresh token tables.
    pub fn with_auth_tables(self) -> Self {
        self.with_table(Profile).with_table(RefreshToken)
    }

    /// Adds all tables required for reading module operations.
    ///
    /// - Profile
    /// - ReadingModule
    /// - ModuleParagraph
    pub fn with_module_tables(self) -> Self {
        self.with_table(Profile)
            .with_table(ReadingModule)
            .with_table(ModuleParagraph)
    }

    /// Adds all tables required for progress tracking.
    ///
    /// Equivalent to `with_module_tables()` followed by StudentProgress and
    /// ParagraphSubmission.
    pub fn with_progress_tables(self) -> Self {
        self.with_module_tables()
            .with_table(StudentProgress)
            .with_table(ParagraphSubmission)
    }

    /// Adds the billing tables on top of the profile table.
    ///
    /// - Profile
    /// - SubscriptionPlan
    /// - Subscription
    /// - Payment
    pub fn with_billing_tables(self) -> Self {
        self.with_table(Profile)
            .with_table(SubscriptionPlan)
            .with_table(Subscription)
            .with_table(Payment)
    }

    /// Adds every table in the schema in dependency order.
    ///
    /// Use this for router-level tests that exercise several services at once.
    pub fn with_all_tables(self) -> Self {
        self.with_progress_tables()
            .with_table(RefreshToken)
            .with_table(SubscriptionPlan)
            .with_table(Subscription)
            .with_table(Payment)
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
