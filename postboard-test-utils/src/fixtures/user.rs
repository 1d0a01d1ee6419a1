use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    constant::{TEST_AUTHOR_ID, TEST_PASSWORD, TEST_USERNAME},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(
        &self,
        id: &str,
        username: &str,
        password: &str,
    ) -> Result<entity::postboard_user::Model, TestError> {
        Ok(
            entity::prelude::PostboardUser::insert(entity::postboard_user::ActiveModel {
                id: ActiveValue::Set(id.to_string()),
                username: ActiveValue::Set(username.to_string()),
                password: ActiveValue::Set(password.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert the standard test author ([`TEST_AUTHOR_ID`])
    pub async fn insert_mock_user(&self) -> Result<entity::postboard_user::Model, TestError> {
        self.insert_user(TEST_AUTHOR_ID, TEST_USERNAME, TEST_PASSWORD)
            .await
    }

    pub async fn get(
        &self,
        id: &str,
    ) -> Result<Option<entity::postboard_user::Model>, TestError> {
        Ok(entity::prelude::PostboardUser::find_by_id(id)
            .one(&self.setup.db)
            .await?)
    }

    /// Delete every user with a non-empty username, returning how many were removed
    pub async fn delete_all(&self) -> Result<u64, TestError> {
        let result = entity::prelude::PostboardUser::delete_many()
            .filter(entity::postboard_user::Column::Username.ne(""))
            .exec(&self.setup.db)
            .await?;

        Ok(result.rows_affected)
    }
}
