//! Comment report repository.
//!
//! Reports are unique per (reporter, comment); the unique index enforces this even
//! when two submissions race past the service-level existence check.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::{
    model::report::ReportStatus,
    server::{
        error::AppError,
        model::report::{CommentReport, CreateReportParams},
    },
};

pub struct CommentReportRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentReportRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new open report.
    ///
    /// # Returns
    /// - `Ok(CommentReport)` - The stored report
    /// - `Err(AppError::DbErr)` - Includes the unique violation for a repeated (reporter, comment) pair
    pub async fn create(&self, params: CreateReportParams) -> Result<CommentReport, AppError> {
        let entity = entity::comment_report::ActiveModel {
            comment_id: ActiveValue::Set(params.comment_id),
            user_id: ActiveValue::Set(params.user_id),
            reason: ActiveValue::Set(params.reason),
            status: ActiveValue::Set(ReportStatus::Open.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            resolved_at: ActiveValue::Set(None),
            resolved_by: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        CommentReport::from_entity(entity)
    }

    /// Checks whether a user has already reported a comment, in any status.
    pub async fn exists(&self, user_id: i32, comment_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::CommentReport::find()
            .filter(entity::comment_report::Column::UserId.eq(user_id))
            .filter(entity::comment_report::Column::CommentId.eq(comment_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Counts every report filed against a comment, in any status.
    pub async fn count_by_comment(&self, comment_id: i32) -> Result<u64, DbErr> {
        entity::prelude::CommentReport::find()
            .filter(entity::comment_report::Column::CommentId.eq(comment_id))
            .count(self.db)
            .await
    }

    /// Gets every report filed against a comment, oldest first.
    pub async fn get_by_comment(&self, comment_id: i32) -> Result<Vec<CommentReport>, AppError> {
        entity::prelude::CommentReport::find()
            .filter(entity::comment_report::Column::CommentId.eq(comment_id))
            .order_by_asc(entity::comment_report::Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(CommentReport::from_entity)
            .collect()
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<CommentReport>, AppError> {
        entity::prelude::CommentReport::find_by_id(id)
            .one(self.db)
            .await?
            .map(CommentReport::from_entity)
            .transpose()
    }

    /// Closes a report with a final status and stamps who closed it.
    ///
    /// Closed reports never return to `Open`.
    ///
    /// # Returns
    /// - `Ok(Some(CommentReport))` - The closed report
    /// - `Ok(None)` - No report with that id
    /// - `Err(AppError::InvalidState)` - `status` is `Open`
    /// - `Err(AppError)` - Database error
    pub async fn close(
        &self,
        id: i32,
        status: ReportStatus,
        moderator_id: i32,
    ) -> Result<Option<CommentReport>, AppError> {
        if status == ReportStatus::Open {
            return Err(AppError::InvalidState(format!(
                "Report {} cannot be closed as {}",
                id, status
            )));
        }

        let Some(entity) = entity::prelude::CommentReport::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::comment_report::ActiveModel = entity.into();
        active_model.status = ActiveValue::Set(status.as_str().to_string());
        active_model.resolved_at = ActiveValue::Set(Some(Utc::now()));
        active_model.resolved_by = ActiveValue::Set(Some(moderator_id));

        let entity = active_model.update(self.db).await?;
        CommentReport::from_entity(entity).map(Some)
    }

    /// Open report counts per reported comment.
    ///
    /// Aggregated in a single grouped query.
    ///
    /// # Returns
    /// - `Ok(Vec<(comment_id, open_reports)>)` - Highest count first, ties by comment id
    /// - `Err(DbErr)` - Database error during query
    pub async fn count_open_by_comment(&self) -> Result<Vec<(i32, u64)>, DbErr> {
        let open_reports = || Func::count(Expr::col(entity::comment_report::Column::Id));

        let counts: Vec<(i32, i64)> = entity::prelude::CommentReport::find()
            .select_only()
            .column(entity::comment_report::Column::CommentId)
            .column_as(Expr::from(open_reports()), "open_reports")
            .filter(entity::comment_report::Column::Status.eq(ReportStatus::Open.as_str()))
            .group_by(entity::comment_report::Column::CommentId)
            .order_by_desc(open_reports())
            .order_by_asc(entity::comment_report::Column::CommentId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(counts
            .into_iter()
            .map(|(comment_id, count)| (comment_id, count.max(0) as u64))
            .collect())
    }
}
