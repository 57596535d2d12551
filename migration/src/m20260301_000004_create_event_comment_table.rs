use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_comment_table::Comment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventComment::Table)
                    .if_not_exists()
                    .col(integer(EventComment::EventId).primary_key())
                    .col(integer_uniq(EventComment::CommentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_comment_comment_id")
                            .from(EventComment::Table, EventComment::CommentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum EventComment {
    Table,
    EventId,
    CommentId,
}
