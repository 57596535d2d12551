//! User service for business logic.
//!
//! This module provides the `UserService` for user lookups, admin management and the
//! display-name resolution shared by every read path that renders comments.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{AuthorNames, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn get_user(&self, user_id: i32) -> Result<Option<User>, AppError> {
        let user_repo = UserRepository::new(self.db);
        Ok(user_repo.find_by_id(user_id).await?)
    }

    /// Resolves display names for the authors of a batch of comments in one lookup.
    ///
    /// # Arguments
    /// - `user_ids` - Author ids as stored on the comments, `None` for authorless roots
    ///
    /// # Returns
    /// - `Ok(AuthorNames)` - Names keyed by user id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn author_names(
        &self,
        user_ids: impl IntoIterator<Item = Option<i32>>,
    ) -> Result<AuthorNames, AppError> {
        let ids: Vec<i32> = user_ids.into_iter().flatten().collect();
        if ids.is_empty() {
            return Ok(AuthorNames::default());
        }

        let user_repo = UserRepository::new(self.db);
        let names = user_repo.get_display_names(&ids).await?;

        Ok(AuthorNames::new(names))
    }

    /// Grants or revokes admin privileges.
    ///
    /// # Arguments
    /// - `user_id` - Id of the target user
    /// - `is_admin` - New admin status
    ///
    /// # Returns
    /// - `Ok(User)` - The user with the new admin status
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during query or update
    pub async fn set_admin(&self, user_id: i32, is_admin: bool) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.set_admin(user_id, is_admin).await? {
            return Err(AppError::NotFound(format!("User {} not found", user_id)));
        }

        user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", user_id)))
    }
}
