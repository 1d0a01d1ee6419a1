use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{
    constant::{TEST_AUTHOR_ID, TEST_BODY_1, TEST_MESSAGE_ID_1, TEST_TITLE_1},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn message<'a>(&'a mut self) -> MessageFixtures<'a> {
        MessageFixtures { setup: self }
    }
}

pub struct MessageFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> MessageFixtures<'a> {
    /// Insert a message, the author must already exist
    pub async fn insert_message(
        &self,
        id: &str,
        title: &str,
        body: &str,
        author_id: &str,
    ) -> Result<entity::message::Model, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Message::insert(entity::message::ActiveModel {
                id: ActiveValue::Set(id.to_string()),
                title: ActiveValue::Set(title.to_string()),
                body: ActiveValue::Set(body.to_string()),
                author_id: ActiveValue::Set(author_id.to_string()),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert the standard test message ([`TEST_MESSAGE_ID_1`]) written by [`TEST_AUTHOR_ID`]
    ///
    /// The author must already exist, see `UserFixtures::insert_mock_user`.
    pub async fn insert_mock_message(&self) -> Result<entity::message::Model, TestError> {
        self.insert_message(TEST_MESSAGE_ID_1, TEST_TITLE_1, TEST_BODY_1, TEST_AUTHOR_ID)
            .await
    }

    /// Read a message straight from the database, bypassing the API under test
    pub async fn get(&self, id: &str) -> Result<Option<entity::message::Model>, TestError> {
        Ok(entity::prelude::Message::find_by_id(id)
            .one(&self.setup.db)
            .await?)
    }

    pub async fn count(&self) -> Result<u64, TestError> {
        Ok(entity::prelude::Message::find()
            .count(&self.setup.db)
            .await?)
    }

    /// Delete every message with a non-empty title, returning how many were removed
    pub async fn delete_all(&self) -> Result<u64, TestError> {
        let result = entity::prelude::Message::delete_many()
            .filter(entity::message::Column::Title.ne(""))
            .exec(&self.setup.db)
            .await?;

        Ok(result.rows_affected)
    }
}
