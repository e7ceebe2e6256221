//! In-memory ZIP assembly for bundles

use crate::domain::{LecternError, Result};
use std::collections::HashSet;
use std::fmt;
use std::io::{Cursor, Write};
use std::str::FromStr;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// What a bundle holds per record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BundleFormat {
    /// Rendered documents, `<base>.docx`
    #[default]
    Docx,
    /// The stored files as they are, `<name>.json`
    Json,
}

impl BundleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            BundleFormat::Docx => "docx",
            BundleFormat::Json => "json",
        }
    }
}

impl fmt::Display for BundleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BundleFormat {
    type Err = LecternError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "docx" => Ok(BundleFormat::Docx),
            "json" => Ok(BundleFormat::Json),
            other => Err(LecternError::Validation(format!(
                "Unknown bundle format '{other}'. Use 'docx' or 'json'"
            ))),
        }
    }
}

/// Flat ZIP archive built in memory, deflate-compressed
pub struct ArchiveBuilder {
    writer: ZipWriter<Cursor<Vec<u8>>>,
    entries: HashSet<String>,
}

impl ArchiveBuilder {
    pub fn new() -> Self {
        Self {
            writer: ZipWriter::new(Cursor::new(Vec::new())),
            entries: HashSet::new(),
        }
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds one top-level entry
    pub fn add(&mut self, entry: &str, bytes: &[u8]) -> Result<()> {
        if self.contains(entry) {
            return Err(LecternError::Export(format!("Duplicate archive entry: {entry}")));
        }

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.writer.start_file(entry, options)?;
        self.writer.write_all(bytes)?;
        self.entries.insert(entry.to_string());
        Ok(())
    }

    /// Finishes the central directory and returns the archive bytes
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.writer.finish()?.into_inner())
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}
