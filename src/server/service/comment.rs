//! Comment lifecycle service.
//!
//! Creation and the two mutually exclusive update paths: an author edits content,
//! a non-author admin moderates status. Each runs in its own transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::comment::CommentStatus,
    server::{
        data::{comment::CommentRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::{
            comment::{
                Comment, CommentNode, ContentEdit, CreateCommentParams, StatusEdit,
                UpdateCommentParams,
            },
            user::{Role, User},
        },
        service::user::UserService,
    },
};

pub const MAX_TITLE_CHARS: usize = 200;
pub const MAX_BODY_CHARS: usize = 10_000;

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a published comment under an existing parent.
    ///
    /// # Arguments
    /// - `params` - Author, parent, content and type of the new comment
    ///
    /// # Returns
    /// - `Ok(Comment)` - The stored comment
    /// - `Err(AppError::BadRequest)` - Title or body outside the allowed length
    /// - `Err(AppError::NotFound)` - Author or parent does not exist
    /// - `Err(AppError::DbErr)` - Database error, nothing was written
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        validate_content(&params.title, &params.body)?;

        let txn = self.db.begin().await?;

        if UserRepository::new(&txn)
            .find_by_id(params.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                params.user_id
            )));
        }

        let comment_repo = CommentRepository::new(&txn);
        if comment_repo
            .get_by_id(params.parent_comment_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Parent comment {} not found",
                params.parent_comment_id
            )));
        }

        let comment = comment_repo.create(params).await?;
        txn.commit().await?;

        tracing::info!(
            "User {:?} created comment {} under {:?}",
            comment.user_id,
            comment.id,
            comment.parent_comment_id
        );

        Ok(comment)
    }

    /// Applies an update through the path the actor qualifies for.
    ///
    /// The author may change title and body only; any requested status is ignored.
    /// A non-author holding `Admin` may change status and cancel reason only; any
    /// requested content is ignored. Everyone else is rejected without a write.
    ///
    /// # Arguments
    /// - `actor` - The authenticated user performing the update
    /// - `params` - Requested changes
    ///
    /// # Returns
    /// - `Ok(Comment)` - The updated comment
    /// - `Err(AppError::NotFound)` - Comment does not exist
    /// - `Err(AppError::AuthErr(AccessDenied))` - Actor is neither author nor admin
    /// - `Err(AppError::BadRequest)` - Invalid content, missing status, or cancellation without reason
    /// - `Err(AppError::InvalidState)` - Comment is a reserved root topic
    pub async fn update(
        &self,
        actor: &User,
        params: UpdateCommentParams,
    ) -> Result<Comment, AppError> {
        let txn = self.db.begin().await?;
        let comment_repo = CommentRepository::new(&txn);

        let Some(comment) = comment_repo.get_by_id(params.id).await? else {
            return Err(AppError::NotFound(format!(
                "Comment {} not found",
                params.id
            )));
        };

        if let Some(root) = comment.root_topic() {
            return Err(AppError::InvalidState(format!(
                "Root topic '{}' cannot be modified",
                root.title()
            )));
        }

        let updated = if comment.is_authored_by(actor.id) {
            let edit = ContentEdit {
                title: params.title.unwrap_or(comment.title),
                body: params.body.unwrap_or(comment.body),
            };
            validate_content(&edit.title, &edit.body)?;

            comment_repo.update_content(comment.id, edit).await?
        } else if actor.has_role(Role::Admin) {
            let Some(comment_status) = params.comment_status else {
                return Err(AppError::BadRequest(
                    "comment_status is required for moderation".to_string(),
                ));
            };
            let cancel_reason = params
                .cancel_reason
                .map(|reason| reason.trim().to_string())
                .filter(|reason| !reason.is_empty());
            if comment_status == CommentStatus::Cancelled && cancel_reason.is_none() {
                return Err(AppError::BadRequest(
                    "A cancel reason is required to cancel a comment".to_string(),
                ));
            }

            let edit = StatusEdit {
                comment_status,
                cancel_reason,
            };
            let updated = comment_repo.update_status(comment.id, edit).await?;

            tracing::info!(
                "Admin {} moved comment {} from {} to {}",
                actor.id,
                comment.id,
                comment.comment_status,
                updated.comment_status
            );

            updated
        } else {
            return Err(AuthError::AccessDenied(
                actor.id,
                format!(
                    "User attempted to update comment {} without being its author or an admin",
                    comment.id
                ),
            )
            .into());
        };

        txn.commit().await?;

        Ok(updated)
    }

    /// Gets a single comment with its author name and descendant count.
    ///
    /// Works for any status; the descendant count includes cancelled subtrees.
    ///
    /// # Returns
    /// - `Ok(CommentNode)` - Comment without loaded children
    /// - `Err(AppError::NotFound)` - Comment does not exist
    pub async fn get_comment(&self, id: i32) -> Result<CommentNode, AppError> {
        let comment_repo = CommentRepository::new(self.db);

        let Some(comment) = comment_repo.get_by_id(id).await? else {
            return Err(AppError::NotFound(format!("Comment {} not found", id)));
        };

        let names = UserService::new(self.db)
            .author_names([comment.user_id])
            .await?;
        let descendants = comment_repo.count_descendants(comment.id).await?;
        let author_name = names.name_for(comment.user_id);

        Ok(CommentNode::leaf(comment, author_name, Some(descendants)))
    }

    /// Gets every comment a user wrote, in all statuses, oldest first.
    ///
    /// # Returns
    /// - `Ok(Vec<CommentNode>)` - Comments with descendant counts
    /// - `Err(AppError::NotFound)` - User does not exist
    pub async fn get_comments_by_author(&self, user_id: i32) -> Result<Vec<CommentNode>, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        };

        let comment_repo = CommentRepository::new(self.db);
        let comments = comment_repo.find_by_author(user.id).await?;

        let mut nodes = Vec::with_capacity(comments.len());
        for comment in comments {
            let descendants = comment_repo.count_descendants(comment.id).await?;
            nodes.push(CommentNode::leaf(comment, user.name.clone(), Some(descendants)));
        }

        Ok(nodes)
    }
}

/// Checks title and body lengths, counted in characters.
pub(crate) fn validate_content(title: &str, body: &str) -> Result<(), AppError> {
    let title_len = title.trim().chars().count();
    if title_len == 0 || title.chars().count() > MAX_TITLE_CHARS {
        return Err(AppError::BadRequest(format!(
            "Title must be between 1 and {} characters",
            MAX_TITLE_CHARS
        )));
    }

    let body_len = body.trim().chars().count();
    if body_len == 0 || body.chars().count() > MAX_BODY_CHARS {
        return Err(AppError::BadRequest(format!(
            "Body must be between 1 and {} characters",
            MAX_BODY_CHARS
        )));
    }

    Ok(())
}
