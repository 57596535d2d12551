use entity::prelude::*;
use sea_orm::{
    sea_query::{Index, IndexCreateStatement, TableCreateStatement},
    EntityTrait, Schema,
};

use crate::{context::TestContext, error::TestError};

/// Name of the unique index allowing one report per user and comment.
pub const REPORT_UNIQUE_INDEX: &str = "idx_comment_report_user_comment";

/// Builder for creating test contexts with customizable database schemas.
///
/// Tables are created in the order they were added, followed by indexes.
///
/// # Example
///
/// ```rust,ignore
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Comment)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    indexes: Vec<IndexCreateStatement>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            indexes: Vec::new(),
        }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables with foreign keys should be added after the tables they reference.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds an index created after all tables.
    pub fn with_index(mut self, index: IndexCreateStatement) -> Self {
        self.indexes.push(index);
        self
    }

    /// Adds the unique (user_id, comment_id) index on reports.
    pub fn with_report_unique_index(self) -> Self {
        self.with_index(
            Index::create()
                .name(REPORT_UNIQUE_INDEX)
                .table(CommentReport)
                .col(entity::comment_report::Column::UserId)
                .col(entity::comment_report::Column::CommentId)
                .unique()
                .to_owned(),
        )
    }

    /// Adds every table used by comment operations:
    /// - User
    /// - Comment
    /// - CommentReport (with its unique index)
    /// - EventComment
    /// - PageComment
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_comment_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_comment_tables(self) -> Self {
        self.with_table(User)
            .with_table(Comment)
            .with_table(CommentReport)
            .with_table(EventComment)
            .with_table(PageComment)
            .with_report_unique_index()
    }

    /// Builds the test context and creates the configured schema.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with database and schema ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create the schema
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.create_schema(self.tables, self.indexes).await?;

        Ok(context)
    }
}
