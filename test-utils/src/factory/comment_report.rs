//! Comment report factory for creating test reports.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reports with customizable fields.
///
/// Defaults to an open report with a generic reason.
pub struct CommentReportFactory<'a> {
    db: &'a DatabaseConnection,
    comment_id: i32,
    user_id: i32,
    reason: String,
    status: String,
}

impl<'a> CommentReportFactory<'a> {
    /// Creates a new CommentReportFactory.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `comment_id` - Reported comment
    /// - `user_id` - Reporting user
    pub fn new(db: &'a DatabaseConnection, comment_id: i32, user_id: i32) -> Self {
        Self {
            db,
            comment_id,
            user_id,
            reason: "Inappropriate content".to_string(),
            status: "OPEN".to_string(),
        }
    }

    pub fn reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Sets the stored status, e.g. `"OPEN"`, `"RESOLVED"` or `"DISMISSED"`.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::comment_report::Model, DbErr> {
        entity::comment_report::ActiveModel {
            comment_id: ActiveValue::Set(self.comment_id),
            user_id: ActiveValue::Set(self.user_id),
            reason: ActiveValue::Set(self.reason),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            resolved_at: ActiveValue::Set(None),
            resolved_by: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an open report with default values.
pub async fn create_report(
    db: &DatabaseConnection,
    comment_id: i32,
    user_id: i32,
) -> Result<entity::comment_report::Model, DbErr> {
    CommentReportFactory::new(db, comment_id, user_id)
        .build()
        .await
}
