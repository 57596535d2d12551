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
        report::{
            CommentReportDto, CreateReportDto, ModerationQueueItemDto, ModerationViewDto,
            UpdateReportDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::report::{CreateReportParams, ModerationQueueItem},
        service::{comment_report::CommentReportService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping report endpoints in OpenAPI documentation
pub static REPORT_TAG: &str = "report";

/// Report a published comment.
///
/// Each user may report a comment once.
///
/// # Returns
/// - `201 Created` - The new report
/// - `400 Bad Request` - Reason too short or too long
/// - `404 Not Found` - Comment does not exist
/// - `409 Conflict` - Already reported by this user, or comment not published
#[utoipa::path(
    post,
    path = "/api/reports",
    tag = REPORT_TAG,
    request_body = CreateReportDto,
    responses(
        (status = 201, description = "Report filed", body = CommentReportDto),
        (status = 400, description = "Invalid report reason", body = ErrorDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 409, description = "Duplicate report or comment not published", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_report(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let report = CommentReportService::new(&state.db)
        .report_comment(CreateReportParams {
            user_id: user.id,
            comment_id: payload.comment_id,
            reason: payload.report_reason,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(report.into_dto(user.name))))
}

/// Get a comment with every report filed against it.
///
/// # Access Control
/// - `Admin` - Only admins can view reports
#[utoipa::path(
    get,
    path = "/api/reports/comment/{comment_id}",
    tag = REPORT_TAG,
    params(
        ("comment_id" = i32, Path, description = "Reported comment id")
    ),
    responses(
        (status = 200, description = "Moderation view retrieved", body = ModerationViewDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_moderation_view(
    State(state): State<AppState>,
    session: Session,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let view = CommentReportService::new(&state.db)
        .get_moderation_view(comment_id)
        .await?;

    Ok((StatusCode::OK, Json(view.into_dto())))
}

/// Get every comment with open reports, most reported first.
///
/// # Access Control
/// - `Admin` - Only admins can view the moderation queue
#[utoipa::path(
    get,
    path = "/api/reports/queue",
    tag = REPORT_TAG,
    responses(
        (status = 200, description = "Moderation queue retrieved", body = Vec<ModerationQueueItemDto>),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_moderation_queue(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let queue = CommentReportService::new(&state.db)
        .get_moderation_queue()
        .await?;

    let queue_dto: Vec<ModerationQueueItemDto> = queue
        .into_iter()
        .map(ModerationQueueItem::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(queue_dto)))
}

/// Resolve or dismiss an open report.
///
/// # Access Control
/// - `Admin` - Only admins can close reports
///
/// # Returns
/// - `200 OK` - The closed report
/// - `404 Not Found` - Report does not exist
/// - `409 Conflict` - Report is not open, or the requested status is `OPEN`
#[utoipa::path(
    put,
    path = "/api/reports/{report_id}",
    tag = REPORT_TAG,
    params(
        ("report_id" = i32, Path, description = "Report id")
    ),
    request_body = UpdateReportDto,
    responses(
        (status = 200, description = "Report closed", body = CommentReportDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Report not found", body = ErrorDto),
        (status = 409, description = "Report cannot move to that status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_report(
    State(state): State<AppState>,
    session: Session,
    Path(report_id): Path<i32>,
    Json(payload): Json<UpdateReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let moderator = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let report = CommentReportService::new(&state.db)
        .resolve_report(report_id, payload.status, moderator.id)
        .await?;

    let reporter_name = UserService::new(&state.db)
        .author_names([Some(report.user_id)])
        .await?
        .name_for(Some(report.user_id));

    Ok((StatusCode::OK, Json(report.into_dto(reporter_name))))
}
