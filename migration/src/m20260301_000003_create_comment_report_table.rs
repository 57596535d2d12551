use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260301_000001_create_user_table::User, m20260301_000002_create_comment_table::Comment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommentReport::Table)
                    .if_not_exists()
                    .col(pk_auto(CommentReport::Id))
                    .col(integer(CommentReport::CommentId))
                    .col(integer(CommentReport::UserId))
                    .col(text(CommentReport::Reason))
                    .col(string(CommentReport::Status))
                    .col(
                        timestamp_with_time_zone(CommentReport::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(timestamp_with_time_zone_null(CommentReport::ResolvedAt))
                    .col(integer_null(CommentReport::ResolvedBy))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_report_comment_id")
                            .from(CommentReport::Table, CommentReport::CommentId)
                            .to(Comment::Table, Comment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_report_user_id")
                            .from(CommentReport::Table, CommentReport::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One report per user and comment, closes the check-then-insert race
        manager
            .create_index(
                Index::create()
                    .name("idx_comment_report_user_comment")
                    .table(CommentReport::Table)
                    .col(CommentReport::UserId)
                    .col(CommentReport::CommentId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommentReport::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommentReport {
    Table,
    Id,
    CommentId,
    UserId,
    Reason,
    Status,
    CreatedAt,
    ResolvedAt,
    ResolvedBy,
}
