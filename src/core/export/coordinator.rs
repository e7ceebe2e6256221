//! Export coordinator
//!
//! Ties the library to the canonicalizer and the layout engine. Single
//! exports fail outright; bundles skip what they cannot export and keep
//! going.

use super::archive::{ArchiveBuilder, BundleFormat};
use super::summary::ExportSummary;
use crate::adapters::library::naming::upload_file_name;
use crate::adapters::library::LibraryStore;
use crate::config::ExportConfig;
use crate::core::canonical::canonicalize_record;
use crate::core::layout::{self, DOCUMENT_EXTENSION};
use crate::core::verification::{fingerprint_bytes, fingerprint_record};
use crate::domain::{LecternError, LibraryError, RecordName, Result};
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Name used for text exports without a source file
pub const DEFAULT_EDITED_NAME: &str = "edited.json";

/// Format of the timestamp in bundle names
pub const STAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// A rendered document ready to be written
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub fingerprint: String,
}

/// A finished bundle and what went into it
#[derive(Debug, Clone)]
pub struct Bundle {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub summary: ExportSummary,
}

/// Export coordinator
pub struct ExportCoordinator {
    store: LibraryStore,
    archive_prefix: String,
}

impl ExportCoordinator {
    pub fn new(store: LibraryStore, config: &ExportConfig) -> Self {
        Self {
            store,
            archive_prefix: config.archive_prefix.clone(),
        }
    }

    pub fn store(&self) -> &LibraryStore {
        &self.store
    }

    /// Renders one stored record to `<base>.docx`
    pub fn export_one(&self, name: &str) -> Result<RenderedDocument> {
        let (record_name, _) = self.store.locate(name)?;
        let record = self.store.read_record(record_name.as_str())?;

        let bytes = layout::render(&record)?;
        tracing::info!(name = %record_name, bytes = bytes.len(), "Rendered record");

        Ok(RenderedDocument {
            file_name: record_name.with_extension(DOCUMENT_EXTENSION),
            bytes,
            fingerprint: fingerprint_record(&record)?,
        })
    }

    /// Renders edited JSON text that has not been saved
    ///
    /// The output is named after `name_hint`, or `edited.docx` without one.
    pub fn export_from_text(&self, text: &str, name_hint: Option<&str>) -> Result<RenderedDocument> {
        let hint = name_hint
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_EDITED_NAME);

        let text = text.trim();
        if text.is_empty() {
            return Err(LecternError::Validation("No JSON content received".to_string()));
        }
        let raw: serde_json::Value =
            serde_json::from_str(text).map_err(|e| LibraryError::Parse {
                name: hint.to_string(),
                message: e.to_string(),
            })?;

        let record = canonicalize_record(&raw);
        let bytes = layout::render(&record)?;

        Ok(RenderedDocument {
            file_name: format!("{}.{DOCUMENT_EXTENSION}", stem(hint)),
            bytes,
            fingerprint: fingerprint_record(&record)?,
        })
    }

    /// Bundles the selected records into one ZIP archive
    ///
    /// Selection order is kept. Records that cannot be exported are listed
    /// in the summary and left out of the archive.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty selection. Per-record
    /// failures never fail the bundle.
    pub fn export_batch(&self, names: &[String], format: BundleFormat) -> Result<Bundle> {
        if names.is_empty() {
            return Err(LecternError::Validation(
                "Select at least one record to export".to_string(),
            ));
        }

        let start_time = Instant::now();
        let mut summary = ExportSummary::new(format, names.len());
        let mut archive = ArchiveBuilder::new();

        tracing::info!(format = %format, selected = names.len(), "Starting bundle export");

        for name in names {
            let entry = match self.bundle_entry(name, format) {
                Ok(entry) => entry,
                Err(e) => {
                    summary.add_skipped(name, &e);
                    continue;
                }
            };

            let (record_name, entry_name, bytes, fingerprint) = entry;
            if let Err(e) = archive.add(&entry_name, &bytes) {
                summary.add_skipped(name, &e);
                continue;
            }
            summary.add_exported(record_name, entry_name, fingerprint);
        }

        let bytes = archive.finish()?;
        let summary = summary.with_duration(start_time.elapsed());
        summary.log_summary();

        Ok(Bundle {
            file_name: bundle_name(&self.archive_prefix, format, Local::now()),
            bytes,
            summary,
        })
    }

    fn bundle_entry(
        &self,
        name: &str,
        format: BundleFormat,
    ) -> Result<(RecordName, String, Vec<u8>, String)> {
        let (record_name, _) = self.store.locate(name)?;

        match format {
            BundleFormat::Json => {
                let bytes = self.store.read_bytes(record_name.as_str())?;
                let fingerprint = fingerprint_bytes(&bytes);
                let entry = record_name.as_str().to_string();
                Ok((record_name, entry, bytes, fingerprint))
            }
            BundleFormat::Docx => {
                let document = self.export_one(record_name.as_str())?;
                Ok((record_name, document.file_name, document.bytes, document.fingerprint))
            }
        }
    }
}

/// `<prefix>_<format>_<YYYYmmdd_HHMMSS>.zip`
pub fn bundle_name(prefix: &str, format: BundleFormat, at: DateTime<Local>) -> String {
    format!("{prefix}_{format}_{}.zip", at.format(STAMP_FORMAT))
}

/// Writes `bytes` to `dir/file_name`, creating `dir` if needed
pub fn write_output(dir: &Path, file_name: &str, bytes: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| {
        LecternError::Export(format!(
            "Failed to create output directory {}: {e}",
            dir.display()
        ))
    })?;

    let path = dir.join(file_name);
    fs::write(&path, bytes)
        .map_err(|e| LecternError::Export(format!("Failed to write {}: {e}", path.display())))?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Wrote export output");
    Ok(path)
}

fn stem(hint: &str) -> &str {
    let file = upload_file_name(hint);
    match file.rfind('.') {
        Some(dot) if dot > 0 => &file[..dot],
        _ => file,
    }
}
