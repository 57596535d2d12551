//! Comment report domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::report::{
        CommentReportDto, ModerationQueueItemDto, ModerationViewDto, ReportStatus,
    },
    server::{
        error::AppError,
        model::{comment::CommentNode, parse_column},
    },
};

/// A user-submitted report against a comment.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentReport {
    pub id: i32,
    pub comment_id: i32,
    /// Reporting user.
    pub user_id: i32,
    pub reason: String,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    /// Moderator who resolved or dismissed the report.
    pub resolved_by: Option<i32>,
}

impl CommentReport {
    pub fn from_entity(entity: entity::comment_report::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            comment_id: entity.comment_id,
            user_id: entity.user_id,
            reason: entity.reason,
            status: parse_column("comment_report.status", &entity.status)?,
            created_at: entity.created_at,
            resolved_at: entity.resolved_at,
            resolved_by: entity.resolved_by,
        })
    }

    pub fn into_dto(self, reporter_name: String) -> CommentReportDto {
        CommentReportDto {
            id: self.id,
            comment_id: self.comment_id,
            user_id: self.user_id,
            reporter_name,
            reason: self.reason,
            status: self.status,
            created_at: self.created_at,
            resolved_at: self.resolved_at,
            resolved_by: self.resolved_by,
        }
    }
}

/// Report together with the reporter's display name.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportWithReporter {
    pub report: CommentReport,
    pub reporter_name: String,
}

impl ReportWithReporter {
    pub fn into_dto(self) -> CommentReportDto {
        self.report.into_dto(self.reporter_name)
    }
}

/// Parameters for filing a report.
#[derive(Debug, Clone)]
pub struct CreateReportParams {
    pub user_id: i32,
    pub comment_id: i32,
    pub reason: String,
}

/// A comment and its full report list, assembled at read time.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationView {
    pub comment: CommentNode,
    pub reports: Vec<ReportWithReporter>,
    pub total_reports: u64,
}

impl ModerationView {
    pub fn into_dto(self) -> ModerationViewDto {
        ModerationViewDto {
            comment: self.comment.into_dto(),
            reports: self
                .reports
                .into_iter()
                .map(ReportWithReporter::into_dto)
                .collect(),
            total_reports: self.total_reports,
        }
    }
}

/// Entry of the moderation queue: a reported comment and its open report count.
#[derive(Debug, Clone, PartialEq)]
pub struct ModerationQueueItem {
    pub comment: CommentNode,
    pub open_reports: u64,
}

impl ModerationQueueItem {
    pub fn into_dto(self) -> ModerationQueueItemDto {
        ModerationQueueItemDto {
            comment: self.comment.into_dto(),
            open_reports: self.open_reports,
        }
    }
}
