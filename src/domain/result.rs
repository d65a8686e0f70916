//! Result type alias for altnames

use super::errors::AltNamesError;

/// Result type alias for altnames operations
///
/// Use this throughout the codebase for fallible operations.
pub type Result<T> = std::result::Result<T, AltNamesError>;
