use crate::{
    model::comment::{CommentStatus, CommentType},
    server::{
        error::{auth::AuthError, AppError},
        model::{
            comment::{CreateCommentParams, ThreadDepth, UpdateCommentParams},
            topic::RootTopic,
            user::User,
        },
        service::{
            comment::{CommentService, MAX_BODY_CHARS, MAX_TITLE_CHARS},
            thread::ThreadService,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get;
mod update;

fn reply(user_id: i32, parent_comment_id: i32, title: &str, body: &str) -> CreateCommentParams {
    CreateCommentParams {
        user_id,
        parent_comment_id,
        title: title.to_string(),
        body: body.to_string(),
        comment_type: CommentType::Reply,
    }
}

fn status_change(id: i32, status: CommentStatus, reason: Option<&str>) -> UpdateCommentParams {
    UpdateCommentParams {
        id,
        title: None,
        body: None,
        comment_status: Some(status),
        cancel_reason: reason.map(str::to_string),
    }
}
