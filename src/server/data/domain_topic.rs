//! Links between domain entities (events, pages) and their topic comments.

use sea_orm::{ActiveValue, ConnectionTrait, DbErr, EntityTrait, QuerySelect};

use crate::model::topic::DomainKind;

pub struct DomainTopicRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DomainTopicRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Stores the link from a domain entity to its topic comment.
    ///
    /// Fails with a unique violation if the entity already has a topic.
    pub async fn create_link(
        &self,
        domain: DomainKind,
        domain_id: i32,
        comment_id: i32,
    ) -> Result<(), DbErr> {
        match domain {
            DomainKind::Event => {
                entity::prelude::EventComment::insert(entity::event_comment::ActiveModel {
                    event_id: ActiveValue::Set(domain_id),
                    comment_id: ActiveValue::Set(comment_id),
                })
                .exec_without_returning(self.db)
                .await?;
            }
            DomainKind::Page => {
                entity::prelude::PageComment::insert(entity::page_comment::ActiveModel {
                    page_id: ActiveValue::Set(domain_id),
                    comment_id: ActiveValue::Set(comment_id),
                })
                .exec_without_returning(self.db)
                .await?;
            }
        }

        Ok(())
    }

    /// Gets the topic comment id linked to a domain entity.
    ///
    /// # Returns
    /// - `Ok(Some(comment_id))` - The entity has a topic
    /// - `Ok(None)` - No topic was created for the entity
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_topic_id(
        &self,
        domain: DomainKind,
        domain_id: i32,
    ) -> Result<Option<i32>, DbErr> {
        match domain {
            DomainKind::Event => {
                entity::prelude::EventComment::find_by_id(domain_id)
                    .select_only()
                    .column(entity::event_comment::Column::CommentId)
                    .into_tuple()
                    .one(self.db)
                    .await
            }
            DomainKind::Page => {
                entity::prelude::PageComment::find_by_id(domain_id)
                    .select_only()
                    .column(entity::page_comment::Column::CommentId)
                    .into_tuple()
                    .one(self.db)
                    .await
            }
        }
    }
}
