//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the server, so
//! repositories and services don't import from the `entity` crate directly.

use crate::model::message::MessageDto;

/// Type alias for Postboard user database model.
///
/// # Fields (from `entity::postboard_user::Model`)
/// - `id` - Primary key, 24 character hex identifier
/// - `username` - Unique username
/// - `password` - Password as provided at creation
/// - `created_at` - Timestamp when the user was created
pub type UserModel = entity::postboard_user::Model;

/// Type alias for message database model.
///
/// # Fields (from `entity::message::Model`)
/// - `id` - Primary key, 24 character hex identifier
/// - `title` - Message title
/// - `body` - Message body
/// - `author_id` - Foreign key to the user who wrote the message
/// - `created_at` - Timestamp when the message was created
/// - `updated_at` - Timestamp of the last message update
pub type MessageModel = entity::message::Model;

impl From<MessageModel> for MessageDto {
    fn from(model: MessageModel) -> Self {
        Self {
            id: model.id,
            title: model.title,
            body: model.body,
            author: model.author_id,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
