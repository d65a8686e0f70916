//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "altnames.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing altnames configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, Self::sample_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Run: altnames run -f <file.csv> -c <column>");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5)
            }
        }
    }

    /// Sample configuration matching the built-in defaults
    fn sample_config() -> &'static str {
        r#"# altnames configuration file
# Every setting is optional; command-line flags take precedence.

[application]
name = "altnames"
log_level = "info"

[engine]
# Seed for deterministic pseudonym generation. The same seed and the same
# inputs always produce the same renaming.
seed = "safenames"
# Split compound names ("Smith-Jones, Maria") on separators before renaming
tokenize = true
# Columns renamed when none are given on the command line
default_columns = ["First Name", "Last Name", "Preferred Name", "Camper"]
# Warn when pseudonym generation falls back to a numbered name
warn_exhausted = true

[output]
# Output files are written next to their inputs as <prefix>-<file name>
prefix = "renamed"

[logging]
file_enabled = false
file_path = "./logs"
rotation = "daily"  # daily | hourly
"#
    }
}
