//! Thread retrieval.
//!
//! A thread is expanded one tree level per query: every published child of the
//! current frontier is fetched in a single batch, then the tree is assembled in
//! memory once descent stops. Each level is its own await point, so a dropped
//! request stops before the next level is loaded.

use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::comment::CommentRepository,
    error::AppError,
    model::{
        comment::{Comment, CommentNode, ThreadDepth},
        user::AuthorNames,
    },
    service::user::UserService,
};

pub struct ThreadService<'a> {
    db: &'a DatabaseConnection,
    max_depth: u32,
}

impl<'a> ThreadService<'a> {
    /// Creates a new ThreadService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `max_depth` - Hard ceiling on expanded levels, applied to every request
    pub fn new(db: &'a DatabaseConnection, max_depth: u32) -> Self {
        Self { db, max_depth }
    }

    /// Gets a comment and its published descendants down to `depth` levels.
    ///
    /// The requested comment is always included. Children that are not published are
    /// left out together with their whole subtree. Siblings are ordered by id.
    ///
    /// # Arguments
    /// - `parent_id` - Id of the comment the thread starts at
    /// - `depth` - Number of levels below `parent_id` to expand
    ///
    /// # Returns
    /// - `Ok(CommentNode)` - The requested comment with its loaded subtree
    /// - `Err(AppError::NotFound)` - No comment with that id
    /// - `Err(AppError::InvalidState)` - The requested comment is not published
    pub async fn get_thread(
        &self,
        parent_id: i32,
        depth: ThreadDepth,
    ) -> Result<CommentNode, AppError> {
        let comment_repo = CommentRepository::new(self.db);

        let Some(root) = comment_repo.get_by_id(parent_id).await? else {
            return Err(AppError::NotFound(format!(
                "Comment {} not found",
                parent_id
            )));
        };

        if !root.is_published() {
            return Err(AppError::InvalidState(format!(
                "Comment {} is {} and cannot be viewed as a thread",
                root.id, root.comment_status
            )));
        }

        let levels = depth.levels(self.max_depth);
        let mut descendants = Vec::new();
        let mut frontier = vec![root.id];

        for _ in 0..levels {
            if frontier.is_empty() {
                break;
            }

            let children = comment_repo.find_published_children(&frontier).await?;
            frontier = children.iter().map(|child| child.id).collect();
            descendants.extend(children);
        }

        tracing::debug!(
            "Loaded thread {} with {} descendants across at most {} levels",
            root.id,
            descendants.len(),
            levels
        );

        let names = UserService::new(self.db)
            .author_names(
                std::iter::once(root.user_id)
                    .chain(descendants.iter().map(|comment| comment.user_id)),
            )
            .await?;

        let mut children_by_parent: HashMap<i32, Vec<Comment>> = HashMap::new();
        for comment in descendants {
            if let Some(parent) = comment.parent_comment_id {
                children_by_parent.entry(parent).or_default().push(comment);
            }
        }

        Ok(assemble(root, &mut children_by_parent, &names))
    }
}

/// Builds the node for `comment`, taking its children out of `children_by_parent`.
fn assemble(
    comment: Comment,
    children_by_parent: &mut HashMap<i32, Vec<Comment>>,
    names: &AuthorNames,
) -> CommentNode {
    let children = children_by_parent.remove(&comment.id).unwrap_or_default();
    let author_name = names.name_for(comment.user_id);

    let mut node = CommentNode::leaf(comment, author_name, None);
    node.children = children
        .into_iter()
        .map(|child| assemble(child, children_by_parent, names))
        .collect();

    node
}
