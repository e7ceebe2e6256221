//! Bundle command implementation
//!
//! Exports several records into one ZIP archive. Records that cannot be
//! exported are reported and left out; the rest are still bundled.

use super::{fail, open_library, settings, EXIT_CONFIG, EXIT_OK, EXIT_PARTIAL};
use crate::core::export::{write_output, BundleFormat, ExportCoordinator, ExportSummary};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the bundle command
#[derive(Args, Debug)]
pub struct BundleArgs {
    /// Record names, in archive order
    #[arg(required_unless_present = "all")]
    pub names: Vec<String>,

    /// Bundle every record in the library
    #[arg(long, conflicts_with = "names")]
    pub all: bool,

    /// Entry format: docx (rendered) or json (stored files)
    #[arg(short, long, default_value = "docx")]
    pub format: String,

    /// Output directory (overrides export.output_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl BundleArgs {
    /// Execute the bundle command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        crate::log_command_start!("bundle", selected = self.names.len(), format = %self.format);

        let format: BundleFormat = match self.format.parse() {
            Ok(format) => format,
            Err(e) => return Ok(fail(&e, "Invalid bundle format")),
        };
        let Some(config) = settings(config_path) else {
            return Ok(EXIT_CONFIG);
        };
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| config.export.output_dir.clone());

        let store = match open_library(&config) {
            Ok(store) => store,
            Err(e) => return Ok(fail(&e, "Failed to open library")),
        };
        let names = if self.all {
            match store.list() {
                Ok(entries) => entries.into_iter().map(|e| e.name.into_inner()).collect(),
                Err(e) => return Ok(fail(&e, "Failed to read library")),
            }
        } else {
            self.names.clone()
        };

        println!("📦 Bundling {} record(s) as {format}", names.len());

        let coordinator = ExportCoordinator::new(store, &config.export);
        let bundle = match coordinator.export_batch(&names, format) {
            Ok(bundle) => bundle,
            Err(e) => return Ok(fail(&e, "Bundle export failed")),
        };
        let path = match write_output(&output_dir, &bundle.file_name, &bundle.bytes) {
            Ok(path) => path,
            Err(e) => return Ok(fail(&e, "Failed to write bundle")),
        };

        print_summary(&bundle.summary);
        println!("✅ Wrote {}", path.display());

        Ok(if bundle.summary.is_successful() {
            EXIT_OK
        } else {
            EXIT_PARTIAL
        })
    }
}

fn print_summary(summary: &ExportSummary) {
    println!();
    for entry in &summary.exported {
        println!("  ✅ {} -> {}", entry.name, entry.entry);
    }
    for skipped in &summary.skipped {
        println!("  ⚠️  {} skipped ({}): {}", skipped.name, skipped.kind, skipped.message);
    }
    println!();
    println!(
        "Exported {}/{} in {:.2}s",
        summary.exported.len(),
        summary.requested,
        summary.duration.as_secs_f64()
    );
}
