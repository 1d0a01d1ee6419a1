//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{
    constant::{
        TEST_AUTHOR_ID, TEST_BODY_1, TEST_MESSAGE_ID_1, TEST_PASSWORD, TEST_TITLE_1,
        TEST_USERNAME,
    },
    error::TestError,
    TestContext,
};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up an isolated database with tables and fixture rows.
/// Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_message_tables: bool,

    // Database fixtures to insert
    users: Vec<(String, String, String)>, // (id, username, password)
    messages: Vec<(String, String, String, String)>, // (id, title, body, author_id)
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_message_tables: false,
            users: Vec::new(),
            messages: Vec::new(),
        }
    }

    /// Add the user & message tables to the test database.
    pub fn with_message_tables(mut self) -> Self {
        self.include_message_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`
    /// after the message tables. Chain multiple calls to add multiple tables.
    ///
    /// # Arguments
    /// - `entity` - Entity type implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user into the database.
    ///
    /// # Arguments
    /// - `id` - 24 character hex user ID
    /// - `username` - Unique username
    /// - `password` - Password stored as given
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_user(mut self, id: &str, username: &str, password: &str) -> Self {
        self.users
            .push((id.to_string(), username.to_string(), password.to_string()));
        self
    }

    /// Insert the standard test author ([`TEST_AUTHOR_ID`], `usernametest`).
    pub fn with_mock_user(self) -> Self {
        self.with_user(TEST_AUTHOR_ID, TEST_USERNAME, TEST_PASSWORD)
    }

    /// Insert a message into the database.
    ///
    /// Messages are inserted after all users, so the author may be queued with `with_user`
    /// in any order relative to this call.
    ///
    /// # Arguments
    /// - `id` - 24 character hex message ID
    /// - `title` - Message title
    /// - `body` - Message body
    /// - `author_id` - ID of an existing or queued user
    ///
    /// # Returns
    /// - `Self` - The builder instance for method chaining
    pub fn with_message(mut self, id: &str, title: &str, body: &str, author_id: &str) -> Self {
        self.messages.push((
            id.to_string(),
            title.to_string(),
            body.to_string(),
            author_id.to_string(),
        ));
        self
    }

    /// Insert the standard test message ([`TEST_MESSAGE_ID_1`], `titletest1`, `bodytest1`)
    /// written by [`TEST_AUTHOR_ID`].
    pub fn with_mock_message(self) -> Self {
        self.with_message(TEST_MESSAGE_ID_1, TEST_TITLE_1, TEST_BODY_1, TEST_AUTHOR_ID)
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (message tables if specified, then custom tables)
    /// 2. Inserts users
    /// 3. Inserts messages
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_message_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::PostboardUser),
                schema.create_table_from_entity(entity::prelude::Message),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures, authors before the messages referencing them
        for (id, username, password) in self.users {
            setup.user().insert_user(&id, &username, &password).await?;
        }

        for (id, title, body, author_id) in self.messages {
            setup
                .message()
                .insert_message(&id, &title, &body, &author_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
