//! Run command implementation
//!
//! This module implements the `run` command: the anonymization pass over
//! one or more CSV files. One registry is shared across all files so that
//! renaming stays consistent between them.

use crate::adapters::csv::{detect_name_columns, process_file};
use crate::config::AltNamesConfig;
use crate::engine::{NameRegistry, RowTransformer};
use clap::Args;
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input CSV file to process (repeatable)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Input CSV files given without a flag
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Column to rename (repeatable)
    #[arg(short = 'c', long = "column", value_name = "COLUMN")]
    pub columns: Vec<String>,

    /// Prefix for output file names
    #[arg(short = 'p', long)]
    pub prefix: Option<String>,

    /// Seed for deterministic pseudonym generation
    #[arg(long)]
    pub seed: Option<String>,

    /// Also rename the built-in default name columns
    #[arg(long)]
    pub default_columns: bool,

    /// Also rename columns whose header contains "name"
    #[arg(long)]
    pub auto_columns: bool,

    /// Treat each cell as one name instead of splitting on separators
    #[arg(long)]
    pub no_tokenize: bool,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
}

impl RunArgs {
    /// Execute the run command
    pub fn execute(&self, config: &AltNamesConfig) -> anyhow::Result<i32> {
        let files = dedup_paths(self.files.iter().chain(&self.inputs));
        if files.is_empty() {
            println!("❌ No input files specified. Use -f <file> to add files.");
            return Ok(2);
        }

        let mut targets: BTreeSet<String> = self.columns.iter().cloned().collect();

        if self.auto_columns {
            for file in &files {
                let detected = detect_name_columns(file)?;
                tracing::debug!(file = %file.display(), columns = ?detected, "Auto-detected name columns");
                targets.extend(detected);
            }
        }
        if self.default_columns {
            targets.extend(config.engine.default_columns.iter().cloned());
        }
        if targets.is_empty() {
            // Same fallback the tool has always had: no columns means the
            // built-in default name columns
            println!("No target columns specified - using default name columns as fallback");
            targets.extend(config.engine.default_columns.iter().cloned());
        }
        if targets.is_empty() {
            println!("❌ No target columns specified. Use -c <column> to add columns.");
            return Ok(2);
        }

        let seed = self.seed.as_deref().unwrap_or(&config.engine.seed);
        let prefix = self.prefix.as_deref().unwrap_or(&config.output.prefix);
        let tokenize = !self.no_tokenize && config.engine.tokenize;

        println!("Ready to rename with the following configuration:");
        println!("  Files:    {}", display_paths(&files));
        println!("  Columns:  {}", targets.iter().cloned().collect::<Vec<_>>().join(", "));
        println!("  Prefix:   {prefix}");
        println!("  Tokenize: {tokenize}");
        println!();

        if !self.yes && !confirm(std::io::stdin().lock(), std::io::stdout())? {
            println!("Operation cancelled by user.");
            return Ok(1);
        }

        tracing::info!(
            files = files.len(),
            columns = targets.len(),
            tokenize,
            "Starting anonymization run"
        );

        let registry = NameRegistry::new(seed).with_warn_exhausted(config.engine.warn_exhausted);
        let mut transformer = RowTransformer::new(registry, tokenize);

        let start = Instant::now();
        let mut total_rows = 0;

        for input in &files {
            let output = output_path(input, prefix).ok_or_else(|| {
                anyhow::anyhow!("Invalid input path: {}", input.display())
            })?;

            let summary = process_file(input, &output, &mut transformer, &targets)?;
            total_rows += summary.rows;

            tracing::info!(
                input = %input.display(),
                output = %output.display(),
                rows = summary.rows,
                renamed_cells = summary.renamed_cells,
                "Processed file"
            );
            println!(
                "✅ Processed {} -> {} ({} rows, {} cells renamed)",
                input.display(),
                output.display(),
                summary.rows,
                summary.renamed_cells
            );
        }

        let elapsed = start.elapsed();
        println!();
        println!(
            "Finished {} file(s), {} rows, {} distinct names in {:.3}s",
            files.len(),
            total_rows,
            transformer.registry().mapping_count(),
            elapsed.as_secs_f64()
        );

        Ok(0)
    }
}

/// Deduplicate input paths, preserving first-seen order
fn dedup_paths<'a>(paths: impl Iterator<Item = &'a PathBuf>) -> Vec<PathBuf> {
    let mut unique = Vec::new();
    for path in paths {
        if !unique.contains(path) {
            unique.push(path.clone());
        }
    }
    unique
}

/// Output path for an input file: `<prefix>-<file name>` in the same directory
fn output_path(input: &Path, prefix: &str) -> Option<PathBuf> {
    let name = input.file_name()?.to_string_lossy();
    let renamed = format!("{prefix}-{name}");
    Some(match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(renamed),
        _ => PathBuf::from(renamed),
    })
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Prompt for confirmation; anything typed before ENTER cancels
fn confirm(mut input: impl BufRead, mut output: impl Write) -> std::io::Result<bool> {
    write!(output, "Press ENTER to continue, or any key then ENTER to cancel: ")?;
    output.flush()?;

    let mut response = String::new();
    input.read_line(&mut response)?;
    Ok(response.trim().is_empty())
}
