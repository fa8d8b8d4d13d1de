//! Pure functions for mapping store errors to HTTP status codes.

use super::StoreError;

/// Maps a [`StoreError`] to an HTTP status code.
///
/// - `InvalidName` -> 400 (Bad Request)
/// - `NoTarget` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `SystemFailure` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use armory_core::storage::{store_error_to_status_code, StoreError};
///
/// let error = StoreError::NotFound("cat.png".to_string());
/// assert_eq!(store_error_to_status_code(&error), 404);
/// ```
pub fn store_error_to_status_code(error: &StoreError) -> u16 {
    match error {
        StoreError::InvalidName(_) => 400,
        StoreError::NoTarget => 400,
        StoreError::NotFound(_) => 404,
        StoreError::SystemFailure(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_maps_to_400() {
        let error = StoreError::InvalidName("/".to_string());
        assert_eq!(store_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_no_target_maps_to_400() {
        assert_eq!(store_error_to_status_code(&StoreError::NoTarget), 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = StoreError::NotFound("ghost.gif".to_string());
        assert_eq!(store_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_system_failure_maps_to_500() {
        let error = StoreError::SystemFailure("disk full".to_string());
        assert_eq!(store_error_to_status_code(&error), 500);
    }
}
