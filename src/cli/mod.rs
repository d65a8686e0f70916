//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for altnames using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// altnames - CSV name anonymization tool
#[derive(Parser, Debug)]
#[command(name = "altnames")]
#[command(version, about, long_about = None)]
#[command(author = "Altnames Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short = 'C', long, default_value = "altnames.toml", env = "ALTNAMES_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ALTNAMES_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace name columns in CSV files with consistent pseudonyms
    Run(commands::run::RunArgs),

    /// Preview which columns of the given files look like name columns
    Detect(commands::detect::DetectArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
