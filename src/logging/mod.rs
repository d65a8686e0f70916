//! Structured logging and observability
//!
//! Console logging is always enabled; an optional rolling JSON log file can
//! be turned on from the `[logging]` section of the configuration.

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
