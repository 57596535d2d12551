//! User domain models and parameters.
//!
//! Users are owned by the identity collaborator: they are upserted on login and
//! looked up to resolve display names and role sets for comment operations.

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

use crate::model::user::UserDto;

/// Display name shown for comments without an author (the reserved roots).
pub const SYSTEM_AUTHOR_NAME: &str = "System";

/// Display name shown when an author id no longer resolves to a user.
pub const UNKNOWN_AUTHOR_NAME: &str = "Unknown user";

/// Role granted to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// Every authenticated user.
    Member,
    /// May moderate comments, resolve reports and anchor domain topics.
    Admin,
}

/// Application user with display name and role information.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Subject identifier issued by the identity provider.
    pub subject: String,
    /// Display name of the user.
    pub name: String,
    /// Whether the user has admin privileges.
    pub admin: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            subject: entity.subject,
            name: entity.name,
            admin: entity.admin,
            created_at: entity.created_at,
        }
    }

    /// Role set of the user. Every user is a `Member`; admins also hold `Admin`.
    pub fn roles(&self) -> HashSet<Role> {
        let mut roles = HashSet::from([Role::Member]);
        if self.admin {
            roles.insert(Role::Admin);
        }
        roles
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.roles().contains(&role)
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            name: self.name,
            admin: self.admin,
        }
    }
}

/// Parameters for upserting a user after an identity provider login.
///
/// The optional `is_admin` field preserves existing admin status when None, allowing
/// updates to name without modifying permissions.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub subject: String,
    pub name: String,
    /// Optional admin status (None preserves existing admin status, Some updates it).
    pub is_admin: Option<bool>,
}

/// Display names resolved for a batch of comment authors.
#[derive(Debug, Clone, Default)]
pub struct AuthorNames {
    names: HashMap<i32, String>,
}

impl AuthorNames {
    pub fn new(names: HashMap<i32, String>) -> Self {
        Self { names }
    }

    /// Name to display for a comment's `user_id`.
    ///
    /// Authorless comments show as the system; ids that no longer resolve fall back to a
    /// placeholder rather than failing the whole read.
    pub fn name_for(&self, user_id: Option<i32>) -> String {
        match user_id {
            None => SYSTEM_AUTHOR_NAME.to_string(),
            Some(id) => self
                .names
                .get(&id)
                .cloned()
                .unwrap_or_else(|| UNKNOWN_AUTHOR_NAME.to_string()),
        }
    }
}
