//! Root topic registry.
//!
//! Seeds the reserved root comments and anchors one topic comment per domain entity
//! (event or page) beneath the matching root.

use sea_orm::{DatabaseConnection, DbErr, SqlErr, TransactionTrait};

use crate::{
    model::{comment::CommentType, topic::DomainKind},
    server::{
        data::{
            comment::CommentRepository, domain_topic::DomainTopicRepository,
            user::UserRepository,
        },
        error::{internal::InternalError, AppError},
        model::{
            comment::{Comment, CreateCommentParams},
            topic::RootTopic,
        },
    },
};

pub struct DomainTopicService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DomainTopicService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts any reserved root topic that is missing.
    ///
    /// Safe to call on every startup. Fails if a reserved id already belongs to a
    /// regular comment, since the tree can't be anchored correctly in that case.
    ///
    /// # Returns
    /// - `Ok(())` - Every root exists
    /// - `Err(AppError::InternalErr(RootTopicConflict))` - A reserved id holds a non-root comment
    /// - `Err(AppError::DbErr)` - Database error, no root was written
    pub async fn ensure_root_topics(&self) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let comment_repo = CommentRepository::new(&txn);

        for root in RootTopic::ALL {
            match comment_repo.get_by_id(root.id()).await? {
                Some(existing) if existing.parent_comment_id.is_none() => {}
                Some(_) => return Err(InternalError::RootTopicConflict(root.id()).into()),
                None => {
                    comment_repo.create_root(root).await?;
                    tracing::info!("Seeded root topic {:?} with id {}", root, root.id());
                }
            }
        }

        txn.commit().await?;

        Ok(())
    }

    /// Creates the topic comment for a domain entity and links it, atomically.
    ///
    /// # Arguments
    /// - `domain` - Kind of entity the topic belongs to
    /// - `domain_id` - Id of the entity in its own domain
    /// - `author_user_id` - User recorded as the topic's author
    ///
    /// # Returns
    /// - `Ok(Comment)` - The new topic comment
    /// - `Err(AppError::NotFound)` - Author or the domain's root topic does not exist
    /// - `Err(AppError::Conflict)` - The entity already has a topic
    /// - `Err(AppError::DbErr)` - Database error, neither the comment nor the link was written
    pub async fn create_domain_topic(
        &self,
        domain: DomainKind,
        domain_id: i32,
        author_user_id: i32,
    ) -> Result<Comment, AppError> {
        let txn = self.db.begin().await?;
        let link_repo = DomainTopicRepository::new(&txn);
        let comment_repo = CommentRepository::new(&txn);

        if UserRepository::new(&txn)
            .find_by_id(author_user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                author_user_id
            )));
        }

        if link_repo.find_topic_id(domain, domain_id).await?.is_some() {
            return Err(topic_exists(domain, domain_id));
        }

        let root = domain.root();
        if comment_repo.get_by_id(root.id()).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "Root topic {} for {} is missing",
                root.id(),
                domain.as_str()
            )));
        }

        let comment = comment_repo
            .create(CreateCommentParams {
                user_id: author_user_id,
                parent_comment_id: root.id(),
                title: domain.topic_title(domain_id),
                body: domain.topic_body(domain_id),
                comment_type: CommentType::Topic,
            })
            .await?;

        link_repo
            .create_link(domain, domain_id, comment.id)
            .await
            .map_err(|err| map_link_error(err, domain, domain_id))?;

        txn.commit().await?;

        tracing::info!(
            "Created topic comment {} for {} {}",
            comment.id,
            domain.as_str(),
            domain_id
        );

        Ok(comment)
    }

    /// Gets the id of the topic comment linked to a domain entity.
    ///
    /// # Returns
    /// - `Ok(i32)` - Topic comment id
    /// - `Err(AppError::NotFound)` - The entity has no topic
    pub async fn resolve_domain_topic_id(
        &self,
        domain: DomainKind,
        domain_id: i32,
    ) -> Result<i32, AppError> {
        DomainTopicRepository::new(self.db)
            .find_topic_id(domain, domain_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!(
                    "No topic found for {} {}",
                    domain.as_str(),
                    domain_id
                ))
            })
    }
}

fn topic_exists(domain: DomainKind, domain_id: i32) -> AppError {
    AppError::Conflict(format!(
        "A topic already exists for {} {}",
        domain.as_str(),
        domain_id
    ))
}

/// A concurrent creation for the same entity surfaces as a unique violation on the link.
pub(super) fn map_link_error(err: DbErr, domain: DomainKind, domain_id: i32) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => topic_exists(domain, domain_id),
        _ => err.into(),
    }
}
