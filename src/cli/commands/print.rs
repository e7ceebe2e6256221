//! Print command implementation
//!
//! Sends a file, or every matching file in a directory, to a print queue
//! through `lp`. Each file is its own job; a failed job does not stop the
//! rest.

use super::{fail, settings, EXIT_CONFIG, EXIT_FATAL, EXIT_OK, EXIT_PARTIAL};
use crate::adapters::printing::{
    collect_files, list_printers, submit, PrintOptions, PrinterList, SystemRunner,
};
use crate::config::PrintingConfig;
use crate::domain::{LecternError, Result};
use clap::Args;
use std::path::{Path, PathBuf};

/// Arguments for the print command
#[derive(Args, Debug)]
pub struct PrintArgs {
    /// File or directory to print
    pub path: PathBuf,

    /// Queue name (defaults to printing.default_printer, then the system default)
    #[arg(short, long)]
    pub printer: Option<String>,

    /// Copies per file (overrides printing.copies)
    #[arg(short = 'n', long)]
    pub copies: Option<u32>,

    /// Print single-sided
    #[arg(long)]
    pub one_sided: bool,
}

impl PrintArgs {
    /// Execute the print command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        crate::log_command_start!("print", path = %self.path.display());

        let Some(config) = settings(config_path) else {
            return Ok(EXIT_CONFIG);
        };
        let printing = &config.printing;

        let files = match collect_files(&self.path, &printing.extensions) {
            Ok(files) => files,
            Err(e) => return Ok(fail(&e, "Failed to collect files")),
        };
        if files.is_empty() {
            println!(
                "⚠️  No {} files under {}",
                printing.extensions.join("/"),
                self.path.display()
            );
            return Ok(EXIT_OK);
        }

        let printers = list_printers(&SystemRunner, printing);
        let options = match self.options(&printers, printing) {
            Ok(options) => options,
            Err(e) => return Ok(fail(&e, "No printer available")),
        };

        println!(
            "🖨️  Printing {} file(s) on {} ({} cop{}, {})",
            files.len(),
            options.printer,
            options.copies,
            if options.copies == 1 { "y" } else { "ies" },
            if options.two_sided { "two-sided" } else { "one-sided" }
        );

        let outcomes = submit(&SystemRunner, Path::new(&printing.lp_path), &options, &files);
        let mut failed = 0;
        for outcome in &outcomes {
            if outcome.success {
                println!("  ✅ {}: {}", outcome.file.display(), outcome.message);
            } else {
                failed += 1;
                println!("  ❌ {}: {}", outcome.file.display(), outcome.message);
            }
        }
        tracing::info!(submitted = outcomes.len(), failed, "Print jobs submitted");

        Ok(match failed {
            0 => EXIT_OK,
            n if n == outcomes.len() => EXIT_FATAL,
            _ => EXIT_PARTIAL,
        })
    }

    /// Job options from the arguments, the configuration and the queues
    fn options(&self, printers: &PrinterList, config: &PrintingConfig) -> Result<PrintOptions> {
        let preferred = self
            .printer
            .as_deref()
            .or(config.default_printer.as_deref());
        let printer = printers
            .choose(preferred)
            .ok_or_else(|| LecternError::Configuration("No print queue found".to_string()))?;

        let copies = self.copies.unwrap_or(config.copies);
        if copies == 0 {
            return Err(LecternError::Validation("Copies must be at least 1".to_string()));
        }

        Ok(PrintOptions {
            printer,
            copies,
            two_sided: config.two_sided && !self.one_sided,
        })
    }
}
