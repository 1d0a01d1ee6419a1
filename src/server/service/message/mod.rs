//! Message service layer.
//!
//! Business logic for the message resource: identifier validation, the requirement that
//! every message references an existing author, and partial updates.


use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::message::{
        CreateMessageDto, DeletedMessageDto, MessageDto, UpdateMessageDto, MESSAGE_DELETED,
    },
    server::{
        data::{message::MessageRepository, user::UserRepository},
        error::{message::MessageError, Error},
        util::id::{generate_id, parse_id},
    },
};

/// Service for managing messages.
pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    /// Creates a new instance of MessageService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    ///
    /// # Returns
    /// - `MessageService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves all messages, oldest first.
    pub async fn list_messages(&self) -> Result<Vec<MessageDto>, Error> {
        let message_repo = MessageRepository::new(self.db);

        let messages = message_repo.get_all().await?;

        Ok(messages.into_iter().map(MessageDto::from).collect())
    }

    /// Retrieves a single message.
    ///
    /// # Arguments
    /// - `message_id` - ID of the message to retrieve
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - Message found
    /// - `Err(MessageError::InvalidId)` - ID is not 24 hex characters
    /// - `Err(MessageError::NotFound)` - No message with that ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_message(&self, message_id: &str) -> Result<MessageDto, Error> {
        let message_id = validate_id(message_id)?;
        let message_repo = MessageRepository::new(self.db);

        match message_repo.get_by_id(&message_id).await? {
            Some(message) => Ok(message.into()),
            None => Err(MessageError::NotFound(message_id).into()),
        }
    }

    /// Creates a new message.
    ///
    /// Uses the ID from the payload when provided, otherwise generates one. The author check,
    /// duplicate ID check and insert run in a single transaction.
    ///
    /// # Arguments
    /// - `payload` - Title, body, author ID and optional message ID
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - The message as stored
    /// - `Err(MessageError::InvalidId)` - Message or author ID is not 24 hex characters
    /// - `Err(MessageError::EmptyField)` - Title or body is empty
    /// - `Err(MessageError::AuthorNotFound)` - Author does not exist
    /// - `Err(MessageError::AlreadyExists)` - Message ID is already taken
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_message(&self, payload: CreateMessageDto) -> Result<MessageDto, Error> {
        let CreateMessageDto {
            id,
            title,
            body,
            author,
        } = payload;

        let message_id = match id {
            Some(id) => validate_id(&id)?,
            None => generate_id(),
        };
        require_non_empty("title", &title)?;
        require_non_empty("body", &body)?;
        require_non_empty("author", &author)?;
        let author_id = validate_id(&author)?;

        let txn = self.db.begin().await?;

        if UserRepository::new(&txn).get_by_id(&author_id).await?.is_none() {
            return Err(MessageError::AuthorNotFound(author_id).into());
        }

        let message_repo = MessageRepository::new(&txn);
        if message_repo.get_by_id(&message_id).await?.is_some() {
            return Err(MessageError::AlreadyExists(message_id).into());
        }

        let message = message_repo
            .create(message_id, title, body, author_id)
            .await?;

        txn.commit().await?;

        Ok(message.into())
    }

    /// Applies a partial update to a message.
    ///
    /// # Arguments
    /// - `message_id` - ID of the message to update
    /// - `payload` - New title and/or body, omitted fields are left unchanged
    ///
    /// # Returns
    /// - `Ok(MessageDto)` - The message after the update
    /// - `Err(MessageError::InvalidId)` - ID is not 24 hex characters
    /// - `Err(MessageError::EmptyField)` - A provided field is empty
    /// - `Err(MessageError::NotFound)` - No message with that ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_message(
        &self,
        message_id: &str,
        payload: UpdateMessageDto,
    ) -> Result<MessageDto, Error> {
        let message_id = validate_id(message_id)?;
        if let Some(title) = &payload.title {
            require_non_empty("title", title)?;
        }
        if let Some(body) = &payload.body {
            require_non_empty("body", body)?;
        }

        let message_repo = MessageRepository::new(self.db);

        match message_repo
            .update(&message_id, payload.title, payload.body)
            .await?
        {
            Some(message) => Ok(message.into()),
            None => Err(MessageError::NotFound(message_id).into()),
        }
    }

    /// Deletes a message.
    ///
    /// # Returns
    /// - `Ok(DeletedMessageDto)` - Message deleted, contains the confirmation and its ID
    /// - `Err(MessageError::InvalidId)` - ID is not 24 hex characters
    /// - `Err(MessageError::NotFound)` - No message with that ID
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn delete_message(&self, message_id: &str) -> Result<DeletedMessageDto, Error> {
        let message_id = validate_id(message_id)?;
        let message_repo = MessageRepository::new(self.db);

        let result = message_repo.delete(&message_id).await?;
        if result.rows_affected == 0 {
            return Err(MessageError::NotFound(message_id).into());
        }

        Ok(DeletedMessageDto {
            message: MESSAGE_DELETED.to_string(),
            id: message_id,
        })
    }
}

fn validate_id(id: &str) -> Result<String, MessageError> {
    parse_id(id).ok_or_else(|| MessageError::InvalidId(id.to_string()))
}

fn require_non_empty(field: &'static str, value: &str) -> Result<(), MessageError> {
    if value.trim().is_empty() {
        return Err(MessageError::EmptyField(field));
    }

    Ok(())
}
