//! HTTP request handlers.
//!
//! Controllers authenticate the caller with `AuthGuard`, convert DTOs into
//! service parameters and convert domain results back into DTOs.

pub mod admin;
pub mod auth;
pub mod comment;
pub mod report;
pub mod topic;
