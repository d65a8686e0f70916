//! Configuration management for altnames.
//!
//! TOML-based configuration loading, parsing, and validation. The file is
//! optional; every setting has a default and command-line flags take
//! precedence over the file.
//!
//! # Example configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [engine]
//! seed = "safenames"
//! tokenize = true
//! default_columns = ["First Name", "Last Name", "Preferred Name", "Camper"]
//!
//! [output]
//! prefix = "renamed"
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_config, load_or_default};
pub use schema::{
    AltNamesConfig, ApplicationConfig, EngineConfig, LoggingConfig, OutputConfig,
};
