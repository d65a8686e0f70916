// altnames - CSV Name Anonymization Tool
// Copyright (c) 2025 Altnames Contributors
// Licensed under the MIT License

//! # altnames - CSV Name Anonymization
//!
//! altnames replaces personally-identifying name values in CSV files with
//! consistent, deterministic pseudonyms. The same original name always maps
//! to the same replacement within a run, across every file processed, and
//! the same seed reproduces the same renaming on another run.
//!
//! ## Architecture
//!
//! altnames follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`engine`] - The name-substitution core (generator, registry, tokenizer, transform)
//! - [`adapters`] - CSV row source and sink
//! - [`domain`] - Core domain types and errors
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```
//! use altnames::domain::Record;
//! use altnames::engine::{NameRegistry, RowTransformer};
//! use std::collections::BTreeSet;
//!
//! // One registry per run keeps renaming consistent across files
//! let registry = NameRegistry::new("safenames");
//! let mut transformer = RowTransformer::new(registry, true);
//!
//! let mut record = Record::new();
//! record.push("Camper".to_string(), "Smith-Jones, Maria".to_string());
//!
//! let targets: BTreeSet<String> = ["Camper".to_string()].into();
//! transformer.transform(&mut record, &targets);
//! ```
//!
//! ## Determinism
//!
//! The pseudonym source is keyed by a string seed: identical seeds produce
//! identical candidate sequences across runs and processes, so a run can be
//! reproduced exactly. Mappings are not persisted; a new process with the
//! same seed and the same inputs rebuilds the same mapping instead.
//!
//! ## Error Handling
//!
//! Library code returns [`domain::Result`] with [`domain::AltNamesError`];
//! the CLI layer maps failures to exit codes.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod engine;
pub mod logging;
