use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use utoipa::ToSchema;

/// Distinguishes thread-starting comments from ordinary replies.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentType {
    Topic,
    Reply,
}

impl CommentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Topic => "TOPIC",
            Self::Reply => "REPLY",
        }
    }
}

impl FromStr for CommentType {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "TOPIC" => Ok(Self::Topic),
            "REPLY" => Ok(Self::Reply),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for CommentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visibility gate of a comment. Only `Published` comments appear in threads.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommentStatus {
    Published,
    Cancelled,
    PendingModeration,
}

impl CommentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Published => "PUBLISHED",
            Self::Cancelled => "CANCELLED",
            Self::PendingModeration => "PENDING_MODERATION",
        }
    }
}

impl FromStr for CommentStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PUBLISHED" => Ok(Self::Published),
            "CANCELLED" => Ok(Self::Cancelled),
            "PENDING_MODERATION" => Ok(Self::PendingModeration),
            other => Err(other.to_string()),
        }
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A comment as returned by the API, optionally with its published subtree.
///
/// `child_count` is only populated by single-comment fetches; thread
/// responses leave it `null` on every node.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CommentDto {
    pub id: i32,
    pub title: String,
    pub body: String,
    pub user_id: Option<i32>,
    pub author_name: String,
    pub parent_comment_id: Option<i32>,
    pub comment_type: CommentType,
    pub comment_status: CommentStatus,
    pub cancel_reason: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: Option<DateTime<Utc>>,
    pub child_count: Option<u64>,
    #[schema(no_recursion)]
    pub children: Vec<CommentDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct CreateCommentDto {
    pub title: String,
    pub body: String,
    pub parent_comment_id: i32,
    pub comment_type: CommentType,
}

/// Update request shared by the owner and moderator paths.
///
/// Authors may only change `title` and `body`; moderators may only change
/// `comment_status` and `cancel_reason`. Fields outside the caller's path
/// are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UpdateCommentDto {
    pub id: i32,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub comment_status: Option<CommentStatus>,
    #[serde(default)]
    pub cancel_reason: Option<String>,
}
