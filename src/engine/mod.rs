//! Name-substitution engine
//!
//! This module contains the core of altnames: a deterministic,
//! collision-avoiding mapping from original name tokens to generated
//! pseudonyms, and the tokenization policy for compound names.
//!
//! # Components
//!
//! - [`generator`] - Deterministic pseudonym source over the `fake` corpus
//! - [`registry`] - Original→pseudonym mapping with uniqueness tracking
//! - [`tokenizer`] - Compound-name split/join with separator preservation
//! - [`transform`] - Per-record application of the engine to target columns
//!
//! # Example
//!
//! ```
//! use altnames::domain::Record;
//! use altnames::engine::{NameRegistry, RowTransformer};
//! use std::collections::BTreeSet;
//!
//! let registry = NameRegistry::new("safenames");
//! let mut transformer = RowTransformer::new(registry, true);
//!
//! let mut record = Record::new();
//! record.push("First Name".to_string(), "Maria".to_string());
//! record.push("Age".to_string(), "10".to_string());
//!
//! let targets: BTreeSet<String> = ["First Name".to_string()].into();
//! transformer.transform(&mut record, &targets);
//!
//! assert_ne!(record.get("First Name"), Some("Maria"));
//! assert_eq!(record.get("Age"), Some("10"));
//! ```

pub mod generator;
pub mod registry;
pub mod tokenizer;
pub mod transform;

pub use generator::{FirstNameSource, PseudonymSource};
pub use registry::{NameRegistry, GENERATION_ATTEMPT_LIMIT};
pub use tokenizer::{Segment, SEPARATORS};
pub use transform::RowTransformer;
