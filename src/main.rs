// altnames - CSV Name Anonymization Tool
// Copyright (c) 2025 Altnames Contributors
// Licensed under the MIT License

use altnames::cli::{Cli, Commands};
use altnames::config::{load_or_default, AltNamesConfig};
use altnames::logging::init_logging;
use clap::Parser;
use std::process;

fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration before logging so the [logging] section applies
    let config = match load_or_default(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(2);
        }
    };

    // CLI log level takes precedence over the configuration file
    let log_level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.application.log_level);
    let _guard = match init_logging(log_level, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config,
        "altnames - CSV name anonymization tool"
    );

    // Execute command and get exit code
    let exit_code = match execute_command(&cli, &config) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "Command execution failed");
            eprintln!("Error: {e}");
            5 // Fatal error exit code
        }
    };

    process::exit(exit_code);
}

/// Execute the CLI command
fn execute_command(cli: &Cli, config: &AltNamesConfig) -> anyhow::Result<i32> {
    match &cli.command {
        Commands::Run(args) => args.execute(config),
        Commands::Detect(args) => args.execute(),
        Commands::Init(args) => args.execute(),
    }
}
