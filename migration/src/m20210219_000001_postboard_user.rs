use sea_orm_migration::{prelude::*, schema::*};

/// Length of a hex-encoded 12 byte identifier
pub const ID_LENGTH: u32 = 24;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostboardUser::Table)
                    .if_not_exists()
                    .col(string_len(PostboardUser::Id, ID_LENGTH).primary_key())
                    .col(string_uniq(PostboardUser::Username))
                    .col(string(PostboardUser::Password))
                    .col(timestamp(PostboardUser::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PostboardUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostboardUser {
    Table,
    Id,
    Username,
    Password,
    CreatedAt,
}
