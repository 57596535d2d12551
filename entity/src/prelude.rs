pub use super::comment::Entity as Comment;
pub use super::comment_report::Entity as CommentReport;
pub use super::event_comment::Entity as EventComment;
pub use super::page_comment::Entity as PageComment;
pub use super::user::Entity as User;
