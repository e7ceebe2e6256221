//! Export summary and reporting
//!
//! Bundles hold only what succeeded. The summary is where skipped records
//! become visible to the caller.

use super::archive::BundleFormat;
use crate::domain::{LecternError, RecordName};
use std::time::Duration;

/// A record that made it into the bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedEntry {
    pub name: RecordName,
    /// Archive entry name
    pub entry: String,
    /// Canonical record fingerprint (DOCX) or file bytes fingerprint (JSON)
    pub fingerprint: String,
}

/// A selected record that was left out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// The name as selected, which may not be a valid record name
    pub name: String,
    /// Short reason kind, e.g. `not_found`
    pub kind: &'static str,
    pub message: String,
}

/// Summary of a batch export
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub format: BundleFormat,

    /// Number of selected names
    pub requested: usize,

    pub exported: Vec<ExportedEntry>,

    pub skipped: Vec<SkippedEntry>,

    pub duration: Duration,
}

impl ExportSummary {
    pub fn new(format: BundleFormat, requested: usize) -> Self {
        Self {
            format,
            requested,
            exported: Vec::new(),
            skipped: Vec::new(),
            duration: Duration::from_secs(0),
        }
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn add_exported(&mut self, name: RecordName, entry: String, fingerprint: String) {
        self.exported.push(ExportedEntry {
            name,
            entry,
            fingerprint,
        });
    }

    pub fn add_skipped(&mut self, name: &str, error: &LecternError) {
        tracing::warn!(
            name,
            kind = error.kind(),
            error = %error,
            "Skipping record in bundle"
        );
        self.skipped.push(SkippedEntry {
            name: name.to_string(),
            kind: error.kind(),
            message: error.to_string(),
        });
    }

    /// Every selected record was exported
    pub fn is_successful(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Get success rate as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.requested == 0 {
            return 100.0;
        }
        (self.exported.len() as f64 / self.requested as f64) * 100.0
    }

    pub fn log_summary(&self) {
        tracing::info!(
            format = %self.format,
            requested = self.requested,
            exported = self.exported.len(),
            skipped = self.skipped.len(),
            duration_ms = self.duration.as_millis() as u64,
            success_rate = format!("{:.2}%", self.success_rate()),
            "Bundle export completed"
        );
    }
}
