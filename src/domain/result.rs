//! Result type alias for Lectern

use super::errors::LecternError;

/// Result type alias for Lectern operations
///
/// # Examples
///
/// ```
/// use lectern::domain::result::Result;
/// use lectern::domain::errors::LecternError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(LecternError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, LecternError>;
