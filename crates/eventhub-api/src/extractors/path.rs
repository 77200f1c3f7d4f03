//! Typed path parameter helpers.

use std::str::FromStr;

use eventhub_core::error::AppError;

/// Parses an id from a path segment. A malformed id cannot name an
/// existing record, so it is reported as `not_found`.
pub fn parse_id<T: FromStr>(raw: &str, not_found: &str) -> Result<T, AppError> {
    raw.parse().map_err(|_| AppError::not_found(not_found))
}
