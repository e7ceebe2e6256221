//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use super::{EXIT_CONFIG, EXIT_FATAL, EXIT_OK};
use crate::config::DEFAULT_CONFIG_PATH;
use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Lectern configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(EXIT_CONFIG);
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Validate configuration: lectern validate-config");
                println!("  3. Import lesson plans: lectern import *.json");
                println!("  4. Export: lectern export \"<name>.json\"");
                println!();
                Ok(EXIT_OK)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(EXIT_FATAL)
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# Lectern Configuration File

[application]
log_level = "warn"

[library]
path = "jsons"

[export]
output_dir = "exports"
archive_prefix = "export"

[printing]
two_sided = true
copies = 1
extensions = ["pdf"]

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r#"# Lectern Configuration File
#
# Every key is optional; the values below are the defaults unless noted.
# ${VAR} references are replaced from the environment, and LECTERN_<SECTION>_<KEY>
# variables override file values (e.g. LECTERN_LIBRARY_PATH).

# ============================================================================
# Application Settings
# ============================================================================
[application]
# Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
log_level = "warn"

# ============================================================================
# Record Library
# ============================================================================
[library]
# Directory holding the lesson-plan JSON files
path = "jsons"

# ============================================================================
# Export
# ============================================================================
[export]
# Where rendered documents and bundles are written
output_dir = "exports"

# Bundle archives are named <archive_prefix>_<format>_<YYYYmmdd_HHMMSS>.zip
archive_prefix = "export"

# ============================================================================
# Printing (CUPS command-line tools)
# ============================================================================
[printing]
lp_path = "lp"
lpstat_path = "lpstat"
lpoptions_path = "lpoptions"

# Queue used when --printer is not given (system default otherwise)
# default_printer = "Office_HP"

# Long-edge duplex
two_sided = true

# Copies per file (1-999)
copies = 1

# Extensions picked up when printing a directory
extensions = ["pdf"]

# ============================================================================
# Logging
# ============================================================================
[logging]
# JSON log files
local_enabled = false
local_path = "./logs"

# Rotation: daily | hourly | never
local_rotation = "daily"
"#
        .to_string()
    }
}
