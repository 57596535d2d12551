//! Comment store.
//!
//! Persists comments and their self-referential parent links and answers the
//! structural queries the thread engine and lifecycle service are built on.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::{
    model::comment::{CommentStatus, CommentType},
    server::{
        data::MAX_IDS_PER_QUERY,
        error::{internal::InternalError, AppError},
        model::{
            comment::{Comment, ContentEdit, CreateCommentParams, StatusEdit},
            topic::RootTopic,
        },
    },
};

/// Hops after which an ancestor walk is treated as a corrupted tree.
const MAX_ANCESTOR_HOPS: usize = 10_000;

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new published comment under an existing parent.
    ///
    /// The parent must already exist; the foreign key rejects dangling parents.
    pub async fn create(&self, params: CreateCommentParams) -> Result<Comment, AppError> {
        let entity = entity::comment::ActiveModel {
            title: ActiveValue::Set(params.title),
            body: ActiveValue::Set(params.body),
            user_id: ActiveValue::Set(Some(params.user_id)),
            parent_comment_id: ActiveValue::Set(Some(params.parent_comment_id)),
            comment_type: ActiveValue::Set(params.comment_type.as_str().to_string()),
            comment_status: ActiveValue::Set(CommentStatus::Published.as_str().to_string()),
            cancel_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            modified_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Comment::from_entity(entity)
    }

    /// Inserts a reserved root topic with its fixed id.
    pub async fn create_root(&self, root: RootTopic) -> Result<Comment, AppError> {
        let entity = entity::comment::ActiveModel {
            id: ActiveValue::Set(root.id()),
            title: ActiveValue::Set(root.title().to_string()),
            body: ActiveValue::Set(root.title().to_string()),
            user_id: ActiveValue::Set(None),
            parent_comment_id: ActiveValue::Set(None),
            comment_type: ActiveValue::Set(CommentType::Topic.as_str().to_string()),
            comment_status: ActiveValue::Set(CommentStatus::Published.as_str().to_string()),
            cancel_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            modified_at: ActiveValue::Set(None),
        }
        .insert(self.db)
        .await?;

        Comment::from_entity(entity)
    }

    /// Gets a comment by id.
    ///
    /// # Returns
    /// - `Ok(Some(Comment))` - Comment found
    /// - `Ok(None)` - No comment with that id
    /// - `Err(AppError)` - Database error or unreadable row
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Comment>, AppError> {
        entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?
            .map(Comment::from_entity)
            .transpose()
    }

    /// Gets every direct child of a comment regardless of status, oldest first.
    pub async fn find_children(&self, parent_id: i32) -> Result<Vec<Comment>, AppError> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::ParentCommentId.eq(parent_id))
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Comment::from_entity)
            .collect()
    }

    /// Gets the comments with the given ids in any status, ordered by id.
    ///
    /// Ids with no stored comment are skipped.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Comment>, AppError> {
        let mut comments = Vec::with_capacity(ids.len());

        for chunk in ids.chunks(MAX_IDS_PER_QUERY) {
            let entities = entity::prelude::Comment::find()
                .filter(entity::comment::Column::Id.is_in(chunk.to_vec()))
                .order_by_asc(entity::comment::Column::Id)
                .all(self.db)
                .await?;

            for entity in entities {
                comments.push(Comment::from_entity(entity)?);
            }
        }

        comments.sort_by_key(|comment| comment.id);

        Ok(comments)
    }

    /// Gets the published children of all given parents, ordered by id.
    ///
    /// Used by the thread engine to expand one level of the tree per query.
    pub async fn find_published_children(
        &self,
        parent_ids: &[i32],
    ) -> Result<Vec<Comment>, AppError> {
        let mut children = Vec::new();

        for chunk in parent_ids.chunks(MAX_IDS_PER_QUERY) {
            let entities = entity::prelude::Comment::find()
                .filter(entity::comment::Column::ParentCommentId.is_in(chunk.to_vec()))
                .filter(
                    entity::comment::Column::CommentStatus.eq(CommentStatus::Published.as_str()),
                )
                .order_by_asc(entity::comment::Column::Id)
                .all(self.db)
                .await?;

            for entity in entities {
                children.push(Comment::from_entity(entity)?);
            }
        }

        // Chunks are individually ordered; restore a global creation order
        children.sort_by_key(|comment| comment.id);

        Ok(children)
    }

    /// Gets every comment written by a user regardless of status, oldest first.
    pub async fn find_by_author(&self, user_id: i32) -> Result<Vec<Comment>, AppError> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::UserId.eq(user_id))
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Comment::from_entity)
            .collect()
    }

    /// Counts all comments transitively parented by `id`, excluding `id` itself.
    ///
    /// Walks the tree one level per query and counts every status, so cancelled
    /// replies and their subtrees are included.
    pub async fn count_descendants(&self, id: i32) -> Result<u64, DbErr> {
        let mut total = 0u64;
        let mut frontier = vec![id];

        while !frontier.is_empty() {
            let mut next = Vec::new();

            for chunk in frontier.chunks(MAX_IDS_PER_QUERY) {
                let ids: Vec<i32> = entity::prelude::Comment::find()
                    .select_only()
                    .column(entity::comment::Column::Id)
                    .filter(entity::comment::Column::ParentCommentId.is_in(chunk.to_vec()))
                    .into_tuple()
                    .all(self.db)
                    .await?;
                next.extend(ids);
            }

            total += next.len() as u64;
            frontier = next;
        }

        Ok(total)
    }

    /// Ids of every ancestor of `id`, nearest parent first, ending at a root.
    ///
    /// # Returns
    /// - `Ok(Vec<i32>)` - Ancestor chain (empty for a root or unknown id)
    /// - `Err(DbErr::Custom)` - The chain exceeded the hop limit, meaning the tree is corrupt
    pub async fn ancestor_chain(&self, id: i32) -> Result<Vec<i32>, DbErr> {
        let mut chain = Vec::new();
        let mut current = id;

        loop {
            let parent: Option<Option<i32>> = entity::prelude::Comment::find_by_id(current)
                .select_only()
                .column(entity::comment::Column::ParentCommentId)
                .into_tuple()
                .one(self.db)
                .await?;

            let Some(Some(parent_id)) = parent else {
                return Ok(chain);
            };

            chain.push(parent_id);
            if chain.len() > MAX_ANCESTOR_HOPS {
                return Err(DbErr::Custom(format!(
                    "Ancestor chain of comment {} exceeds {} hops",
                    id, MAX_ANCESTOR_HOPS
                )));
            }
            current = parent_id;
        }
    }

    /// Applies an author edit: title, body and modification time only.
    pub async fn update_content(&self, id: i32, edit: ContentEdit) -> Result<Comment, AppError> {
        let mut active_model = self.find_active(id).await?;
        active_model.title = ActiveValue::Set(edit.title);
        active_model.body = ActiveValue::Set(edit.body);
        active_model.modified_at = ActiveValue::Set(Some(Utc::now()));

        Comment::from_entity(active_model.update(self.db).await?)
    }

    /// Applies a moderator edit: status, cancel reason and modification time only.
    ///
    /// The cancel reason is kept only when the new status is `Cancelled`.
    pub async fn update_status(&self, id: i32, edit: StatusEdit) -> Result<Comment, AppError> {
        let cancel_reason = match edit.comment_status {
            CommentStatus::Cancelled => edit.cancel_reason,
            _ => None,
        };

        let mut active_model = self.find_active(id).await?;
        active_model.comment_status = ActiveValue::Set(edit.comment_status.as_str().to_string());
        active_model.cancel_reason = ActiveValue::Set(cancel_reason);
        active_model.modified_at = ActiveValue::Set(Some(Utc::now()));

        Comment::from_entity(active_model.update(self.db).await?)
    }

    async fn find_active(&self, id: i32) -> Result<entity::comment::ActiveModel, AppError> {
        let entity = entity::prelude::Comment::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(InternalError::MissingAfterWrite {
                entity: "Comment",
                id,
            })?;

        Ok(entity.into())
    }
}
