//! SeaORM entity models for the clubhouse database schema.
//!
//! Each module mirrors one table created by the `migration` crate. The `prelude`
//! re-exports the entity types under their table-derived names so callers can
//! write `entity::prelude::Comment::find()`.

pub mod prelude;

pub mod comment;
pub mod comment_report;
pub mod event_comment;
pub mod page_comment;
pub mod user;
