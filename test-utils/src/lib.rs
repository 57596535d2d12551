//! Clubhouse Test Utils
//!
//! Shared testing utilities for the clubhouse server. Tests build an in-memory SQLite
//! database containing only the tables they need, then seed it through factories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring the test schema
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders inserting users, comments and reports with sensible defaults
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn replies_to_topic() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_comment_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::comment::seed_root_topics(db).await?;
//!     let user = factory::create_user(db).await?;
//!     let reply = factory::comment::CommentFactory::new(db, user.id, 1).build().await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
