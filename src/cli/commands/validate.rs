//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Lectern configuration file.

use super::{EXIT_CONFIG, EXIT_OK};
use crate::config::{load_config, LecternConfig};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // load_config validates after applying overrides
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration validation failed");
                println!("   Error: {e}");
                println!();
                return Ok(EXIT_CONFIG);
            }
        };

        println!("✅ Configuration is valid");
        println!();
        for line in summary_lines(&config) {
            println!("{line}");
        }
        println!();
        Ok(EXIT_OK)
    }
}

fn summary_lines(config: &LecternConfig) -> Vec<String> {
    let printing = &config.printing;
    let mut lines = vec![
        "Configuration Summary:".to_string(),
        format!("  Log Level: {}", config.application.log_level),
        format!("  Library: {}", config.library.path.display()),
        format!("  Output Directory: {}", config.export.output_dir.display()),
        format!("  Archive Prefix: {}", config.export.archive_prefix),
        format!(
            "  Default Printer: {}",
            printing.default_printer.as_deref().unwrap_or("(system default)")
        ),
        format!("  Two-sided: {}", printing.two_sided),
        format!("  Copies: {}", printing.copies),
        format!("  Print Extensions: {:?}", printing.extensions),
    ];
    if config.logging.local_enabled {
        lines.push(format!(
            "  Log Files: {} ({})",
            config.logging.local_path, config.logging.local_rotation
        ));
    }
    lines
}
