//! Export command implementation
//!
//! Renders a single record to DOCX. With `--text-file` the JSON text is
//! rendered directly, without saving it to the library first.

use super::{fail, open_library, read_text, settings, EXIT_CONFIG, EXIT_OK};
use crate::core::export::{write_output, ExportCoordinator, RenderedDocument};
use crate::domain::{LecternError, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Record name in the library
    #[arg(required_unless_present = "text_file", conflicts_with = "text_file")]
    pub name: Option<String>,

    /// Render unsaved JSON text from this file ("-" for stdin)
    #[arg(long)]
    pub text_file: Option<String>,

    /// Name the output after this record name (with --text-file)
    #[arg(long = "name", requires = "text_file")]
    pub hint: Option<String>,

    /// Output directory (overrides export.output_dir)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        crate::log_command_start!("export", from_text = self.text_file.is_some());

        let Some(config) = settings(config_path) else {
            return Ok(EXIT_CONFIG);
        };
        let output_dir = self
            .output
            .clone()
            .unwrap_or_else(|| config.export.output_dir.clone());

        let result = open_library(&config)
            .map(|store| ExportCoordinator::new(store, &config.export))
            .and_then(|coordinator| self.render(&coordinator))
            .and_then(|document| {
                let path = write_output(&output_dir, &document.file_name, &document.bytes)?;
                Ok((document, path))
            });

        match result {
            Ok((document, path)) => {
                println!("✅ Exported {}", path.display());
                println!("   Fingerprint: {}", document.fingerprint);
                Ok(EXIT_OK)
            }
            Err(e) => Ok(fail(&e, "Export failed")),
        }
    }

    fn render(&self, coordinator: &ExportCoordinator) -> Result<RenderedDocument> {
        match (&self.name, &self.text_file) {
            (_, Some(source)) => {
                let text = read_text(source)?;
                coordinator.export_from_text(&text, self.hint.as_deref())
            }
            (Some(name), None) => coordinator.export_one(name),
            (None, None) => Err(LecternError::Validation(
                "Give a record name or --text-file".to_string(),
            )),
        }
    }
}
