//! Factory functions for generating mock database models.
//!
//! Pure functions returning model instances with the standard test values. These don't
//! touch the database, use them for unit tests of conversions and response formatting.

use chrono::Utc;

use crate::constant::{TEST_AUTHOR_ID, TEST_BODY_1, TEST_MESSAGE_ID_1, TEST_TITLE_1};

/// Create a mock message database model for testing.
///
/// # Arguments
/// - `id` - The message ID
///
/// # Returns
/// - `entity::message::Model` - Message written by [`TEST_AUTHOR_ID`] with the standard
///   title & body
pub fn mock_message_model(id: &str) -> entity::message::Model {
    let now = Utc::now().naive_utc();
    entity::message::Model {
        id: id.to_string(),
        title: TEST_TITLE_1.to_string(),
        body: TEST_BODY_1.to_string(),
        author_id: TEST_AUTHOR_ID.to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Create the standard mock message model ([`TEST_MESSAGE_ID_1`])
pub fn mock_message() -> entity::message::Model {
    mock_message_model(TEST_MESSAGE_ID_1)
}
