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
        topic::{DomainKind, DomainTopicDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::topic::DomainTopic,
        service::domain_topic::DomainTopicService,
        state::AppState,
    },
};

/// Tag for grouping topic endpoints in OpenAPI documentation
pub static TOPIC_TAG: &str = "topic";

/// Create the discussion topic for an event or page.
///
/// The topic comment is created under the domain's root and linked to the
/// entity in a single transaction.
///
/// # Access Control
/// - `Admin` - Only admins can anchor topics
///
/// # Returns
/// - `201 Created` - The new link
/// - `409 Conflict` - The entity already has a topic
#[utoipa::path(
    post,
    path = "/api/topics/{domain}/{domain_id}",
    tag = TOPIC_TAG,
    params(
        ("domain" = DomainKind, Path, description = "Kind of entity, `event` or `page`"),
        ("domain_id" = i32, Path, description = "Entity id within its domain")
    ),
    responses(
        (status = 201, description = "Topic created", body = DomainTopicDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Topic already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_topic(
    State(state): State<AppState>,
    session: Session,
    Path((domain, domain_id)): Path<(DomainKind, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let comment = DomainTopicService::new(&state.db)
        .create_domain_topic(domain, domain_id, user.id)
        .await?;

    let topic = DomainTopic {
        domain,
        domain_id,
        comment_id: comment.id,
    };

    Ok((StatusCode::CREATED, Json(topic.into_dto())))
}

/// Resolve the topic comment id of an event or page.
#[utoipa::path(
    get,
    path = "/api/topics/{domain}/{domain_id}",
    tag = TOPIC_TAG,
    params(
        ("domain" = DomainKind, Path, description = "Kind of entity, `event` or `page`"),
        ("domain_id" = i32, Path, description = "Entity id within its domain")
    ),
    responses(
        (status = 200, description = "Topic found", body = DomainTopicDto),
        (status = 401, description = "User not logged in", body = ErrorDto),
        (status = 404, description = "Entity has no topic", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_topic(
    State(state): State<AppState>,
    session: Session,
    Path((domain, domain_id)): Path<(DomainKind, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let comment_id = DomainTopicService::new(&state.db)
        .resolve_domain_topic_id(domain, domain_id)
        .await?;

    let topic = DomainTopic {
        domain,
        domain_id,
        comment_id,
    };

    Ok((StatusCode::OK, Json(topic.into_dto())))
}
