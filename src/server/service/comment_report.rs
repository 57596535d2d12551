//! Reporting and moderation queue service.

use std::collections::HashMap;

use sea_orm::{DatabaseConnection, SqlErr, TransactionTrait};

use crate::{
    model::report::ReportStatus,
    server::{
        data::{
            comment::CommentRepository, comment_report::CommentReportRepository,
            user::UserRepository,
        },
        error::AppError,
        model::{
            comment::{Comment, CommentNode},
            report::{
                CommentReport, CreateReportParams, ModerationQueueItem, ModerationView,
                ReportWithReporter,
            },
        },
        service::{comment::CommentService, user::UserService},
    },
};

pub const MIN_REASON_CHARS: usize = 3;
pub const MAX_REASON_CHARS: usize = 1_000;

pub struct CommentReportService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentReportService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Files a report against a published comment.
    ///
    /// A user can report a given comment once. A duplicate is rejected up front, and a
    /// concurrent duplicate that slips past the check is caught by the unique index.
    ///
    /// # Arguments
    /// - `params` - Reporter, comment and reason; the reason is stored trimmed
    ///
    /// # Returns
    /// - `Ok(CommentReport)` - The new open report
    /// - `Err(AppError::BadRequest)` - Reason too short or too long
    /// - `Err(AppError::NotFound)` - Reporter or comment does not exist
    /// - `Err(AppError::InvalidState)` - The comment is not published
    /// - `Err(AppError::Conflict)` - The user already reported this comment
    pub async fn report_comment(
        &self,
        params: CreateReportParams,
    ) -> Result<CommentReport, AppError> {
        let reason = params.reason.trim().to_string();
        let reason_len = reason.chars().count();
        if !(MIN_REASON_CHARS..=MAX_REASON_CHARS).contains(&reason_len) {
            return Err(AppError::BadRequest(format!(
                "Report reason must be between {} and {} characters",
                MIN_REASON_CHARS, MAX_REASON_CHARS
            )));
        }

        let txn = self.db.begin().await?;
        let report_repo = CommentReportRepository::new(&txn);

        if UserRepository::new(&txn)
            .find_by_id(params.user_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                params.user_id
            )));
        }

        let Some(comment) = CommentRepository::new(&txn)
            .get_by_id(params.comment_id)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Comment {} not found",
                params.comment_id
            )));
        };

        if !comment.is_published() {
            return Err(AppError::InvalidState(format!(
                "Comment {} is {} and cannot be reported",
                comment.id, comment.comment_status
            )));
        }

        if report_repo.exists(params.user_id, comment.id).await? {
            return Err(already_reported(comment.id));
        }

        let report = report_repo
            .create(CreateReportParams { reason, ..params })
            .await
            .map_err(|err| map_report_error(err, comment.id))?;

        txn.commit().await?;

        tracing::info!(
            "User {} reported comment {} (report {})",
            report.user_id,
            report.comment_id,
            report.id
        );

        Ok(report)
    }

    /// Counts all reports filed against a comment.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of reports in any status
    /// - `Err(AppError::NotFound)` - Comment does not exist
    pub async fn count_reports(&self, comment_id: i32) -> Result<u64, AppError> {
        self.require_comment(comment_id).await?;

        Ok(CommentReportRepository::new(self.db)
            .count_by_comment(comment_id)
            .await?)
    }

    /// Gets every report filed against a comment with reporter names, oldest first.
    pub async fn get_reports_by_comment(
        &self,
        comment_id: i32,
    ) -> Result<Vec<ReportWithReporter>, AppError> {
        self.require_comment(comment_id).await?;

        let reports = CommentReportRepository::new(self.db)
            .get_by_comment(comment_id)
            .await?;

        let names = UserService::new(self.db)
            .author_names(reports.iter().map(|report| Some(report.user_id)))
            .await?;

        Ok(reports
            .into_iter()
            .map(|report| ReportWithReporter {
                reporter_name: names.name_for(Some(report.user_id)),
                report,
            })
            .collect())
    }

    /// Gets a comment together with all of its reports and their total.
    ///
    /// # Returns
    /// - `Ok(ModerationView)` - Comment with descendant count, reports and total
    /// - `Err(AppError::NotFound)` - Comment does not exist
    pub async fn get_moderation_view(&self, comment_id: i32) -> Result<ModerationView, AppError> {
        let comment = CommentService::new(self.db).get_comment(comment_id).await?;
        let reports = self.get_reports_by_comment(comment_id).await?;
        let total_reports = CommentReportRepository::new(self.db)
            .count_by_comment(comment_id)
            .await?;

        Ok(ModerationView {
            comment,
            reports,
            total_reports,
        })
    }

    /// Gets every comment with at least one open report, most reported first.
    pub async fn get_moderation_queue(&self) -> Result<Vec<ModerationQueueItem>, AppError> {
        let open_counts = CommentReportRepository::new(self.db)
            .count_open_by_comment()
            .await?;

        let comment_repo = CommentRepository::new(self.db);
        let ids: Vec<i32> = open_counts.iter().map(|(comment_id, _)| *comment_id).collect();
        let mut comments: HashMap<i32, Comment> = comment_repo
            .find_by_ids(&ids)
            .await?
            .into_iter()
            .map(|comment| (comment.id, comment))
            .collect();

        let names = UserService::new(self.db)
            .author_names(comments.values().map(|comment| comment.user_id))
            .await?;

        let mut queue = Vec::with_capacity(open_counts.len());
        for (comment_id, open_reports) in open_counts {
            let Some(comment) = comments.remove(&comment_id) else {
                continue;
            };
            let descendants = comment_repo.count_descendants(comment.id).await?;
            let author_name = names.name_for(comment.user_id);
            queue.push(ModerationQueueItem {
                comment: CommentNode::leaf(comment, author_name, Some(descendants)),
                open_reports,
            });
        }

        Ok(queue)
    }

    /// Closes an open report as resolved or dismissed.
    ///
    /// # Arguments
    /// - `report_id` - Report to close
    /// - `status` - `Resolved` or `Dismissed`
    /// - `moderator_id` - Admin closing the report
    ///
    /// # Returns
    /// - `Ok(CommentReport)` - The closed report
    /// - `Err(AppError::NotFound)` - Report does not exist
    /// - `Err(AppError::InvalidState)` - Report is already closed, or `status` is `Open`
    pub async fn resolve_report(
        &self,
        report_id: i32,
        status: ReportStatus,
        moderator_id: i32,
    ) -> Result<CommentReport, AppError> {
        let txn = self.db.begin().await?;
        let report_repo = CommentReportRepository::new(&txn);

        let Some(report) = report_repo.get_by_id(report_id).await? else {
            return Err(AppError::NotFound(format!(
                "Report {} not found",
                report_id
            )));
        };

        if report.status != ReportStatus::Open || status == ReportStatus::Open {
            return Err(AppError::InvalidState(format!(
                "Report {} cannot move from {} to {}",
                report.id, report.status, status
            )));
        }

        let updated = report_repo
            .close(report.id, status, moderator_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Report {} not found", report_id)))?;

        txn.commit().await?;

        tracing::info!(
            "Admin {} marked report {} as {}",
            moderator_id,
            updated.id,
            updated.status
        );

        Ok(updated)
    }

    async fn require_comment(&self, comment_id: i32) -> Result<(), AppError> {
        if CommentRepository::new(self.db)
            .get_by_id(comment_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Comment {} not found",
                comment_id
            )));
        }

        Ok(())
    }
}

fn already_reported(comment_id: i32) -> AppError {
    AppError::Conflict(format!("You have already reported comment {}", comment_id))
}

/// Maps a unique violation on the (reporter, comment) index to `Conflict`.
pub(super) fn map_report_error(err: AppError, comment_id: i32) -> AppError {
    match err {
        AppError::DbErr(err)
            if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) =>
        {
            already_reported(comment_id)
        }
        err => err,
    }
}
