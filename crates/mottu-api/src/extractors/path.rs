//! Typed path parameter helpers.

use mottu_core::error::AppError;

/// Parses a numeric id from a path segment.
///
/// Anything that is not an integer cannot name a row, so it is reported
/// as not found.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::not_found(format!("No row with id '{s}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(parse_id("abc").unwrap_err().is_not_found());
        assert!(parse_id("").unwrap_err().is_not_found());
    }
}
