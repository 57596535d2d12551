//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` convenience
//! function for default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! factory::seed_root_topics(db).await?;
//! let user = factory::create_user(db).await?;
//! let reply = factory::create_reply(db, user.id, 1).await?;
//! let report = factory::create_report(db, reply.id, user.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let admin = factory::user::UserFactory::new(db)
//!     .name("Moderator")
//!     .admin(true)
//!     .build()
//!     .await?;
//!
//! let cancelled = factory::comment::CommentFactory::new(db, admin.id, 1)
//!     .status("CANCELLED")
//!     .cancel_reason("spam")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Users
//! - `comment` - Comments, the reserved root topics and reply chains
//! - `comment_report` - Reports against comments
//! - `helpers` - Unique id generation

pub mod comment;
pub mod comment_report;
pub mod helpers;
pub mod user;

pub use comment::{create_chain, create_reply, seed_root_topics};
pub use comment_report::create_report;
pub use user::{create_admin, create_user};
