use sea_orm::{ConnectionTrait, DbErr, EntityTrait};

use crate::server::model::db::UserModel;

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a user by ID
    pub async fn get_by_id(&self, user_id: &str) -> Result<Option<UserModel>, DbErr> {
        entity::prelude::PostboardUser::find_by_id(user_id)
            .one(self.db)
            .await
    }
}
