//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait` so the service layer can run several of
//! them against one `DatabaseTransaction` when an operation must be atomic.

pub mod comment;
pub mod comment_report;
pub mod domain_topic;
pub mod user;

#[cfg(test)]
mod test;

/// Upper bound on ids bound into a single `IN (...)` clause.
pub(crate) const MAX_IDS_PER_QUERY: usize = 500;
