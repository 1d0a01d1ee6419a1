use sea_orm_migration::{prelude::*, schema::*};

use crate::m20210219_000001_postboard_user::{PostboardUser, ID_LENGTH};

static IDX_MESSAGE_AUTHOR_ID: &str = "idx_message_author_id";
static FK_MESSAGE_AUTHOR_ID: &str = "fk_message_author_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(string_len(Message::Id, ID_LENGTH).primary_key())
                    .col(string(Message::Title))
                    .col(text(Message::Body))
                    .col(string_len(Message::AuthorId, ID_LENGTH))
                    .col(timestamp(Message::CreatedAt))
                    .col(timestamp(Message::UpdatedAt))
                    // SQLite cannot add a foreign key after the table exists
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MESSAGE_AUTHOR_ID)
                            .from(Message::Table, Message::AuthorId)
                            .to(PostboardUser::Table, PostboardUser::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_MESSAGE_AUTHOR_ID)
                    .table(Message::Table)
                    .col(Message::AuthorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_MESSAGE_AUTHOR_ID)
                    .table(Message::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Message::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Message {
    Table,
    Id,
    Title,
    Body,
    AuthorId,
    CreatedAt,
    UpdatedAt,
}
