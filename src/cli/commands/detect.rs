//! Detect command implementation
//!
//! This module implements the `detect` command, which previews the columns
//! the name-column detection rule would select for the given files without
//! renaming anything.

use crate::adapters::csv::detect_name_columns;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the detect command
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// CSV files to inspect
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

impl DetectArgs {
    /// Execute the detect command
    pub fn execute(&self) -> anyhow::Result<i32> {
        println!("🔍 Detecting name columns");
        println!();

        for file in &self.files {
            match detect_name_columns(file) {
                Ok(columns) if columns.is_empty() => {
                    println!("{}: no name-like columns found", file.display());
                }
                Ok(columns) => {
                    println!("{}: {}", file.display(), columns.join(", "));
                }
                Err(e) => {
                    println!("❌ {}: {}", file.display(), e);
                    return Ok(5);
                }
            }
        }

        Ok(0)
    }
}
