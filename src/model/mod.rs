//! Request and response DTOs exchanged over the HTTP API.
//!
//! These types are the wire contract of the server. Domain models in
//! `server::model` convert into them at the controller boundary.

pub mod api;
pub mod comment;
pub mod report;
pub mod topic;
pub mod user;
