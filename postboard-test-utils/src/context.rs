//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. Every context owns its
//! own in-memory SQLite database, so scenarios never share state and everything a scenario
//! inserted disappears when its context is dropped, whether the test passed, failed an
//! assertion, or returned early with an error.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new().with_message_tables().build().await?;
///
/// // Access the database
/// let db = &test.db;
///
/// // Access fixture helpers
/// test.user().insert_mock_user().await?;
/// test.message().insert_mock_message().await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main postboard crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }
}

impl TestContext {
    /// Create a new test context backed by an empty in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with no tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Create database tables from schema statements.
    ///
    /// # Arguments
    /// - `stmts` - Vector of CREATE TABLE statements to execute, parents before children
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::DbErr)` - Table creation failed
    pub async fn with_tables(&self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Delete every user and message inserted during the test.
    ///
    /// Removes all messages with a non-empty title, then all users with a non-empty username.
    /// Messages go first so no message is left pointing at a deleted author.
    ///
    /// Dropping the context already discards its database, use this when a test needs to
    /// check the state after cleanup or reuse the context for a second scenario.
    ///
    /// # Returns
    /// - `Ok(())` - All fixture rows deleted
    /// - `Err(TestError::DbErr)` - A delete failed, e.g. because tables were never created
    pub async fn teardown(&mut self) -> Result<(), TestError> {
        self.message().delete_all().await?;
        self.user().delete_all().await?;

        Ok(())
    }
}
