use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    IntoActiveModel, QueryOrder,
};

use crate::server::model::db::MessageModel;

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    /// Creates a new instance of [`MessageRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new message
    ///
    /// Fails if the ID is already taken or the author does not exist in the database.
    pub async fn create(
        &self,
        id: String,
        title: String,
        body: String,
        author_id: String,
    ) -> Result<MessageModel, DbErr> {
        let now = Utc::now().naive_utc();
        let message = entity::message::ActiveModel {
            id: ActiveValue::Set(id),
            title: ActiveValue::Set(title),
            body: ActiveValue::Set(body),
            author_id: ActiveValue::Set(author_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        message.insert(self.db).await
    }

    /// Gets all messages, oldest first
    pub async fn get_all(&self) -> Result<Vec<MessageModel>, DbErr> {
        entity::prelude::Message::find()
            .order_by_asc(entity::message::Column::CreatedAt)
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get_by_id(&self, message_id: &str) -> Result<Option<MessageModel>, DbErr> {
        entity::prelude::Message::find_by_id(message_id)
            .one(self.db)
            .await
    }

    /// Updates the title and/or body of a message
    ///
    /// Fields passed as `None` keep their stored value, `updated_at` is always refreshed.
    /// Returns `Ok(None)` if the message does not exist.
    pub async fn update(
        &self,
        message_id: &str,
        title: Option<String>,
        body: Option<String>,
    ) -> Result<Option<MessageModel>, DbErr> {
        let message = match entity::prelude::Message::find_by_id(message_id)
            .one(self.db)
            .await?
        {
            Some(message) => message,
            None => return Ok(None),
        };

        let mut message_am = message.into_active_model();
        if let Some(title) = title {
            message_am.title = ActiveValue::Set(title);
        }
        if let Some(body) = body {
            message_am.body = ActiveValue::Set(body);
        }
        message_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let message = message_am.update(self.db).await?;

        Ok(Some(message))
    }

    /// Deletes a message
    ///
    /// Returns OK regardless of message existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, message_id: &str) -> Result<DeleteResult, DbErr> {
        entity::prelude::Message::delete_by_id(message_id)
            .exec(self.db)
            .await
    }
}
