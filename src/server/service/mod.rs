//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing validation and the comment lifecycle rules
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Running multi-write operations in one transaction

pub mod auth;
pub mod comment;
pub mod comment_report;
pub mod domain_topic;
pub mod thread;
pub mod user;

#[cfg(test)]
mod test;
