//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.

pub mod comment;
pub mod report;
pub mod topic;
pub mod user;

use std::str::FromStr;

use crate::server::error::{internal::InternalError, AppError};

/// Parses a stored enum column into its domain type.
///
/// # Arguments
/// - `column` - Column name, used in the error message
/// - `value` - The raw stored string
///
/// # Returns
/// - `Ok(T)` - Parsed value
/// - `Err(AppError::InternalErr(UnknownEnumValue))` - The stored value is not a known variant
pub(crate) fn parse_column<T: FromStr>(column: &'static str, value: &str) -> Result<T, AppError> {
    value.parse::<T>().map_err(|_| {
        InternalError::UnknownEnumValue {
            column,
            value: value.to_string(),
        }
        .into()
    })
}
