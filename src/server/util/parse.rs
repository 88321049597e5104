use crate::server::error::AppError;

/// Parses a collection number from a path segment.
///
/// A segment that is not an `i32` cannot name any stored servant, so it is reported the
/// same way as an absent one.
///
/// # Arguments
/// - `value` - The raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed collection number
/// - `Err(AppError::NotFound)` - The segment is not an integer in `i32` range
pub fn parse_collection_no(value: &str) -> Result<i32, AppError> {
    value
        .parse::<i32>()
        .map_err(|_| AppError::NotFound("Servant not found".to_string()))
}
