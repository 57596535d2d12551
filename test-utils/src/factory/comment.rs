//! Comment factory for creating test comments and trees.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Reserved root topic ids and titles, in id order.
pub const ROOT_TOPICS: [(i32, &str); 4] = [
    (1, "Event topics"),
    (2, "Page topics"),
    (3, "Forum topics"),
    (4, "Legacy topics"),
];

/// Factory for creating test comments with customizable fields.
///
/// Defaults to a published reply.
///
/// # Example
///
/// ```rust,ignore
/// let comment = CommentFactory::new(&db, user.id, parent.id)
///     .title("Hello")
///     .status("CANCELLED")
///     .cancel_reason("off topic")
///     .build()
///     .await?;
/// ```
pub struct CommentFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    parent_comment_id: i32,
    title: String,
    body: String,
    comment_type: String,
    comment_status: String,
    cancel_reason: Option<String>,
}

impl<'a> CommentFactory<'a> {
    /// Creates a new CommentFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - Author of the comment
    /// - `parent_comment_id` - Existing parent comment
    pub fn new(db: &'a DatabaseConnection, user_id: i32, parent_comment_id: i32) -> Self {
        let n = next_id();
        Self {
            db,
            user_id,
            parent_comment_id,
            title: format!("Comment {}", n),
            body: format!("Body of comment {}", n),
            comment_type: "REPLY".to_string(),
            comment_status: "PUBLISHED".to_string(),
            cancel_reason: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Sets the stored type, e.g. `"TOPIC"` or `"REPLY"`.
    pub fn comment_type(mut self, comment_type: impl Into<String>) -> Self {
        self.comment_type = comment_type.into();
        self
    }

    /// Sets the stored status, e.g. `"PUBLISHED"`, `"CANCELLED"` or `"PENDING_MODERATION"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.comment_status = status.into();
        self
    }

    pub fn cancel_reason(mut self, reason: impl Into<String>) -> Self {
        self.cancel_reason = Some(reason.into());
        self
    }

    /// Builds and inserts the comment entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::comment::Model)` - Created comment entity
    /// - `Err(DbErr)` - Database error during insert, e.g. a missing parent
    pub async fn build(self) -> Result<entity::comment::Model, DbErr> {
        entity::comment::ActiveModel {
            title: ActiveValue::Set(self.title),
            body: ActiveValue::Set(self.body),
            user_id: ActiveValue::Set(Some(self.user_id)),
            parent_comment_id: ActiveValue::Set(Some(self.parent_comment_id)),
            comment_type: ActiveValue::Set(self.comment_type),
            comment_status: ActiveValue::Set(self.comment_status),
            cancel_reason: ActiveValue::Set(self.cancel_reason),
            created_at: ActiveValue::Set(Utc::now()),
            modified_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Inserts the four reserved root topics with their fixed ids.
///
/// # Returns
/// - `Ok(Vec<entity::comment::Model>)` - The roots in id order
/// - `Err(DbErr)` - Database error, e.g. roots already present
pub async fn seed_root_topics(
    db: &DatabaseConnection,
) -> Result<Vec<entity::comment::Model>, DbErr> {
    let mut roots = Vec::with_capacity(ROOT_TOPICS.len());

    for (id, title) in ROOT_TOPICS {
        let root = entity::comment::ActiveModel {
            id: ActiveValue::Set(id),
            title: ActiveValue::Set(title.to_string()),
            body: ActiveValue::Set(title.to_string()),
            user_id: ActiveValue::Set(None),
            parent_comment_id: ActiveValue::Set(None),
            comment_type: ActiveValue::Set("TOPIC".to_string()),
            comment_status: ActiveValue::Set("PUBLISHED".to_string()),
            cancel_reason: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            modified_at: ActiveValue::Set(None),
        }
        .insert(db)
        .await?;
        roots.push(root);
    }

    Ok(roots)
}

/// Creates a published reply with default values.
pub async fn create_reply(
    db: &DatabaseConnection,
    user_id: i32,
    parent_comment_id: i32,
) -> Result<entity::comment::Model, DbErr> {
    CommentFactory::new(db, user_id, parent_comment_id)
        .build()
        .await
}

/// Creates a linear chain of `length` published replies starting under `parent_comment_id`.
///
/// # Returns
/// - `Ok(Vec<entity::comment::Model>)` - Replies from shallowest to deepest
/// - `Err(DbErr)` - Database error during insert
pub async fn create_chain(
    db: &DatabaseConnection,
    user_id: i32,
    parent_comment_id: i32,
    length: usize,
) -> Result<Vec<entity::comment::Model>, DbErr> {
    let mut chain = Vec::with_capacity(length);
    let mut parent = parent_comment_id;

    for _ in 0..length {
        let reply = create_reply(db, user_id, parent).await?;
        parent = reply.id;
        chain.push(reply);
    }

    Ok(chain)
}
