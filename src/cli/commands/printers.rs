//! Printers command implementation

use super::{settings, EXIT_CONFIG, EXIT_OK};
use crate::adapters::printing::{list_printers, SystemRunner};
use clap::Args;

/// Arguments for the printers command
#[derive(Args, Debug)]
pub struct PrintersArgs {}

impl PrintersArgs {
    /// Execute the printers command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        crate::log_command_start!("printers");

        let Some(config) = settings(config_path) else {
            return Ok(EXIT_CONFIG);
        };

        let printers = list_printers(&SystemRunner, &config.printing);
        if printers.is_empty() {
            println!("⚠️  No print queues found");
            return Ok(EXIT_OK);
        }

        println!("🖨️  Print queues:");
        for name in &printers.names {
            let marker = if printers.default.as_deref() == Some(name.as_str()) {
                " (default)"
            } else {
                ""
            };
            println!("  {name}{marker}");
        }

        Ok(EXIT_OK)
    }
}
