//! Result type alias for Vitals
//!
//! This module provides a convenient Result type alias that uses VitalsError
//! as the error type.

use super::errors::VitalsError;

/// Result type alias for Vitals operations
///
/// This is a convenience type alias that uses `VitalsError` as the error type.
/// Use this throughout the codebase for fallible operations.
///
/// # Examples
///
/// ```
/// use vitals::domain::result::Result;
/// use vitals::domain::errors::VitalsError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(VitalsError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, VitalsError>;
