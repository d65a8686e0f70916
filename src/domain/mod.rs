//! Domain models and types for altnames.
//!
//! The domain layer provides:
//! - **Records** ([`Record`]) - ordered column→value mappings read from CSV rows
//! - **Error types** ([`AltNamesError`])
//! - **Result type alias** ([`Result`])

pub mod errors;
pub mod record;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::AltNamesError;
pub use record::Record;
pub use result::Result;
