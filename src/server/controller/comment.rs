use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CreateCommentDto, UpdateCommentDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::comment::{
            CommentNode, CreateCommentParams, ThreadDepth, UpdateCommentParams,
        },
        service::{comment::CommentService, thread::ThreadService},
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// Get the full published thread below a comment.
///
/// Expansion is capped by the server's maximum thread depth.
///
/// # Access Control
/// - Any logged-in user
///
/// # Returns
/// - `200 OK` - The comment with its nested published replies
/// - `401 Unauthorized` - User not logged in
/// - `404 Not Found` - Comment does not exist
/// - `409 Conflict` - Comment is not published
#[utoipa::path(
    get,
    path = "/api/comments/{parent_id}",
    tag = COMMENT_TAG,
    params(
        ("parent_id" = i32, Path, description = "Id of the comment the thread starts at")
    ),
    responses(
        (status = 200, description = "Thread retrieved", body = CommentDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 409, description = "Comment is not published", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_thread(
    State(state): State<AppState>,
    session: Session,
    Path(parent_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let thread = ThreadService::new(&state.db, state.max_thread_depth)
        .get_thread(parent_id, ThreadDepth::Unbounded)
        .await?;

    Ok((StatusCode::OK, Json(thread.into_dto())))
}

/// Get the published thread below a comment down to a number of levels.
///
/// A depth of `0` is treated as unbounded.
#[utoipa::path(
    get,
    path = "/api/comments/{parent_id}/{depth}",
    tag = COMMENT_TAG,
    params(
        ("parent_id" = i32, Path, description = "Id of the comment the thread starts at"),
        ("depth" = u32, Path, description = "Levels of replies to include, 0 for unbounded")
    ),
    responses(
        (status = 200, description = "Thread retrieved", body = CommentDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 409, description = "Comment is not published", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_thread_with_depth(
    State(state): State<AppState>,
    session: Session,
    Path((parent_id, depth)): Path<(i32, u32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let thread = ThreadService::new(&state.db, state.max_thread_depth)
        .get_thread(parent_id, ThreadDepth::from_request(depth))
        .await?;

    Ok((StatusCode::OK, Json(thread.into_dto())))
}

/// Get a single comment with its descendant count.
///
/// Returns the comment in any status, without replies.
#[utoipa::path(
    get,
    path = "/api/comments/comment/{comment_id}",
    tag = COMMENT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Comment id")
    ),
    responses(
        (status = 200, description = "Comment retrieved", body = CommentDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comment(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comment = CommentService::new(&state.db)
        .get_comment(comment_id)
        .await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}

/// Get every comment written by a user.
#[utoipa::path(
    get,
    path = "/api/comments/user/{user_id}",
    tag = COMMENT_TAG,
    params(
        ("user_id" = i32, Path, description = "Author's user id")
    ),
    responses(
        (status = 200, description = "Comments retrieved", body = Vec<CommentDto>),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_comments_by_user(
    State(state): State<AppState>,
    session: Session,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comments = CommentService::new(&state.db)
        .get_comments_by_author(user_id)
        .await?;

    let comments_dto: Vec<CommentDto> = comments.into_iter().map(CommentNode::into_dto).collect();

    Ok((StatusCode::OK, Json(comments_dto)))
}

/// Create a comment as the logged-in user.
///
/// # Returns
/// - `201 Created` - The new comment
/// - `400 Bad Request` - Title or body has an invalid length
/// - `404 Not Found` - Parent comment does not exist
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Comment created", body = CommentDto),
        (status = 400, description = "Invalid comment content", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Parent comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let params = CreateCommentParams::from_dto(user.id, payload);
    let comment = CommentService::new(&state.db).create(params).await?;

    let dto = CommentNode::leaf(comment, user.name, Some(0)).into_dto();

    Ok((StatusCode::CREATED, Json(dto)))
}

/// Update a comment.
///
/// The author may change the title and body. An admin who is not the author may
/// change the status and cancel reason. Fields outside the caller's path are ignored.
///
/// # Returns
/// - `200 OK` - The updated comment
/// - `400 Bad Request` - Invalid content or cancellation without a reason
/// - `403 Forbidden` - Caller is neither the author nor an admin
/// - `404 Not Found` - Comment does not exist
#[utoipa::path(
    put,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = UpdateCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = CommentDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "Not the author or an admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_comment(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpdateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let service = CommentService::new(&state.db);
    let updated = service
        .update(&user, UpdateCommentParams::from_dto(payload))
        .await?;

    let comment = service.get_comment(updated.id).await?;

    Ok((StatusCode::OK, Json(comment.into_dto())))
}
