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
                    .table(PageComment::Table)
                    .if_not_exists()
                    .col(integer(PageComment::PageId).primary_key())
                    .col(integer_uniq(PageComment::CommentId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_page_comment_comment_id")
                            .from(PageComment::Table, PageComment::CommentId)
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
            .drop_table(Table::drop().table(PageComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PageComment {
    Table,
    PageId,
    CommentId,
}
