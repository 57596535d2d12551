use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        admin::{self, ADMIN_TAG},
        auth::{self, AUTH_TAG},
        comment::{self, COMMENT_TAG},
        report::{self, REPORT_TAG},
        topic::{self, TOPIC_TAG},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Clubhouse API", description = "Threaded comments and moderation"),
    tags(
        (name = COMMENT_TAG, description = "Comment threads and lifecycle"),
        (name = REPORT_TAG, description = "Reports and the moderation queue"),
        (name = TOPIC_TAG, description = "Topics anchoring events and pages"),
        (name = AUTH_TAG, description = "Login through the identity provider"),
        (name = ADMIN_TAG, description = "User administration")
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(comment::create_comment, comment::update_comment))
        .routes(routes!(comment::get_thread))
        .routes(routes!(comment::get_thread_with_depth))
        .routes(routes!(comment::get_comment))
        .routes(routes!(comment::get_comments_by_user))
        .routes(routes!(report::create_report))
        .routes(routes!(report::get_moderation_queue))
        .routes(routes!(report::get_moderation_view))
        .routes(routes!(report::resolve_report))
        .routes(routes!(topic::create_topic, topic::get_topic))
        .routes(routes!(admin::set_admin))
        .routes(routes!(auth::login))
        .routes(routes!(auth::callback))
        .routes(routes!(auth::logout))
        .routes(routes!(auth::get_user))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
