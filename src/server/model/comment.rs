//! Comment domain models and parameters.
//!
//! Comments form a forest stored as an adjacency list: every row carries the id of
//! its parent and the tree is rebuilt in memory by `CommentNode` when a thread is
//! requested.

use chrono::{DateTime, Utc};

use crate::{
    model::comment::{
        CommentDto, CommentStatus, CommentType, CreateCommentDto, UpdateCommentDto,
    },
    server::{
        error::AppError,
        model::{parse_column, topic::RootTopic},
    },
};

/// A single stored comment.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub title: String,
    pub body: String,
    /// Author id, `None` only for reserved root topics.
    pub user_id: Option<i32>,
    /// Parent id, `None` only for reserved root topics.
    pub parent_comment_id: Option<i32>,
    pub comment_type: CommentType,
    pub comment_status: CommentStatus,
    /// Set only while the comment is cancelled.
    pub cancel_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    /// `None` until the first edit.
    pub modified_at: Option<DateTime<Utc>>,
}

impl Comment {
    /// Converts an entity model to a comment domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Comment)` - The converted comment
    /// - `Err(AppError::InternalErr(UnknownEnumValue))` - Stored type or status is unknown
    pub fn from_entity(entity: entity::comment::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            title: entity.title,
            body: entity.body,
            user_id: entity.user_id,
            parent_comment_id: entity.parent_comment_id,
            comment_type: parse_column("comment.comment_type", &entity.comment_type)?,
            comment_status: parse_column("comment.comment_status", &entity.comment_status)?,
            cancel_reason: entity.cancel_reason,
            created_at: entity.created_at,
            modified_at: entity.modified_at,
        })
    }

    pub fn is_published(&self) -> bool {
        self.comment_status == CommentStatus::Published
    }

    pub fn is_authored_by(&self, user_id: i32) -> bool {
        self.user_id == Some(user_id)
    }

    /// Whether this is one of the reserved parentless root topics.
    pub fn root_topic(&self) -> Option<RootTopic> {
        match self.parent_comment_id {
            None => RootTopic::from_id(self.id),
            Some(_) => None,
        }
    }
}

/// A comment enriched for presentation, with its loaded subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    pub comment: Comment,
    /// Display name of the author resolved through the user directory.
    pub author_name: String,
    /// Number of descendants, only computed for single-comment fetches.
    pub child_count: Option<u64>,
    /// Published children in creation order.
    pub children: Vec<CommentNode>,
}

impl CommentNode {
    pub fn leaf(comment: Comment, author_name: String, child_count: Option<u64>) -> Self {
        Self {
            comment,
            author_name,
            child_count,
            children: Vec::new(),
        }
    }

    /// Distance from this node to its deepest loaded descendant.
    pub fn height(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.height() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in the loaded subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(CommentNode::node_count).sum::<usize>()
    }

    pub fn into_dto(self) -> CommentDto {
        CommentDto {
            id: self.comment.id,
            title: self.comment.title,
            body: self.comment.body,
            user_id: self.comment.user_id,
            author_name: self.author_name,
            parent_comment_id: self.comment.parent_comment_id,
            comment_type: self.comment.comment_type,
            comment_status: self.comment.comment_status,
            cancel_reason: self.comment.cancel_reason,
            created_at: self.comment.created_at,
            modified_at: self.comment.modified_at,
            child_count: self.child_count,
            children: self
                .children
                .into_iter()
                .map(CommentNode::into_dto)
                .collect(),
        }
    }
}

/// How far below the requested comment a thread is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadDepth {
    /// Expand as deep as the configured ceiling allows.
    Unbounded,
    /// Expand at most this many levels; `Limited(0)` returns only the root.
    Limited(u32),
}

impl ThreadDepth {
    /// Interprets a depth received over HTTP, where `0` means unbounded.
    pub fn from_request(depth: u32) -> Self {
        if depth == 0 {
            Self::Unbounded
        } else {
            Self::Limited(depth)
        }
    }

    /// Effective number of levels to expand, never above `ceiling`.
    pub fn levels(self, ceiling: u32) -> u32 {
        match self {
            Self::Unbounded => ceiling,
            Self::Limited(depth) => depth.min(ceiling),
        }
    }
}

/// Parameters for creating a comment.
#[derive(Debug, Clone)]
pub struct CreateCommentParams {
    pub user_id: i32,
    pub parent_comment_id: i32,
    pub title: String,
    pub body: String,
    pub comment_type: CommentType,
}

impl CreateCommentParams {
    pub fn from_dto(user_id: i32, dto: CreateCommentDto) -> Self {
        Self {
            user_id,
            parent_comment_id: dto.parent_comment_id,
            title: dto.title,
            body: dto.body,
            comment_type: dto.comment_type,
        }
    }
}

/// Parameters for an update request before the owner/moderator path is chosen.
#[derive(Debug, Clone, Default)]
pub struct UpdateCommentParams {
    pub id: i32,
    pub title: Option<String>,
    pub body: Option<String>,
    pub comment_status: Option<CommentStatus>,
    pub cancel_reason: Option<String>,
}

impl UpdateCommentParams {
    pub fn from_dto(dto: UpdateCommentDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            body: dto.body,
            comment_status: dto.comment_status,
            cancel_reason: dto.cancel_reason,
        }
    }
}

/// Mutation applied by the comment's author.
#[derive(Debug, Clone)]
pub struct ContentEdit {
    pub title: String,
    pub body: String,
}

/// Mutation applied by a moderator.
#[derive(Debug, Clone)]
pub struct StatusEdit {
    pub comment_status: CommentStatus,
    pub cancel_reason: Option<String>,
}
