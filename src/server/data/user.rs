//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles upserts from identity provider logins, lookups, admin status management
//! and the batched display-name resolution used when rendering comment threads.

use std::collections::HashMap;

use crate::server::{
    data::MAX_IDS_PER_QUERY,
    model::user::{UpsertUserParam, User},
};
use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and querying user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or an open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Upserts a user from parameter model.
    ///
    /// Inserts a new user or updates an existing user's name and optionally their admin status.
    /// The admin status is only updated if explicitly provided (Some value), preventing
    /// accidental removal of admin privileges during regular login operations.
    ///
    /// # Arguments
    /// - `param` - User upsert parameters including subject, name, and optional admin status
    ///
    /// # Returns
    /// - `Ok(User)` - The created or updated user
    /// - `Err(DbErr)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<User, DbErr> {
        let mut update_columns = vec![entity::user::Column::Name];

        if param.is_admin.is_some() {
            update_columns.push(entity::user::Column::Admin);
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            subject: ActiveValue::Set(param.subject),
            name: ActiveValue::Set(param.name),
            admin: ActiveValue::Set(param.is_admin.unwrap_or(false)),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Subject)
                .update_columns(update_columns)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by the subject identifier issued by the identity provider.
    pub async fn find_by_subject(&self, subject: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Subject.eq(subject))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets display names for a set of user ids.
    ///
    /// Ids without a matching user are absent from the returned map; callers decide
    /// what to show for them.
    ///
    /// # Arguments
    /// - `user_ids` - User ids to resolve, duplicates are fine
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, String>)` - Map of user id to display name
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_display_names(&self, user_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        let mut ids = user_ids.to_vec();
        ids.sort_unstable();
        ids.dedup();

        let mut names = HashMap::with_capacity(ids.len());
        for chunk in ids.chunks(MAX_IDS_PER_QUERY) {
            let rows: Vec<(i32, String)> = entity::prelude::User::find()
                .select_only()
                .column(entity::user::Column::Id)
                .column(entity::user::Column::Name)
                .filter(entity::user::Column::Id.is_in(chunk.to_vec()))
                .into_tuple()
                .all(self.db)
                .await?;
            names.extend(rows);
        }

        Ok(names)
    }

    /// Sets admin status for a user.
    ///
    /// # Arguments
    /// - `user_id` - Id of the user
    /// - `is_admin` - Whether the user should have admin privileges
    ///
    /// # Returns
    /// - `Ok(true)` - Admin status updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(DbErr)` - Database error during update operation
    pub async fn set_admin(&self, user_id: i32, is_admin: bool) -> Result<bool, DbErr> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id))
            .col_expr(
                entity::user::Column::Admin,
                sea_orm::sea_query::Expr::value(is_admin),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
