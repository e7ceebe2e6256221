//! Directory-backed record store

use super::naming::{conflict_name, human_size, upload_file_name};
use crate::core::canonical::canonicalize_record;
use crate::domain::{LecternError, LessonRecord, LibraryError, RecordName, Result};
use chrono::{DateTime, Local};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Format of [`RecordEntry::modified_display`]
pub const MODIFIED_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One listed record
#[derive(Debug, Clone)]
pub struct RecordEntry {
    pub name: RecordName,
    /// Size in bytes
    pub size: u64,
    pub modified: DateTime<Local>,
}

impl RecordEntry {
    pub fn human_size(&self) -> String {
        human_size(self.size)
    }

    pub fn modified_display(&self) -> String {
        self.modified.format(MODIFIED_FORMAT).to_string()
    }
}

/// A directory of named JSON records
///
/// Every name is validated as a [`RecordName`] before it touches the file
/// system, so no operation can reach outside the directory. Writes are
/// last-write-wins.
#[derive(Debug, Clone)]
pub struct LibraryStore {
    root: PathBuf,
}

impl LibraryStore {
    /// Opens the store at `dir`, creating the directory if missing
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let root = dir.as_ref().to_path_buf();
        fs::create_dir_all(&root).map_err(|e| {
            LecternError::Io(format!(
                "Failed to create library directory {}: {e}",
                root.display()
            ))
        })?;

        tracing::debug!(path = %root.display(), "Opened library store");
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validates `name` and returns it with its path inside the store
    pub fn resolve(&self, name: &str) -> Result<(RecordName, PathBuf)> {
        let record = RecordName::new(name).map_err(|reason| {
            tracing::debug!(name, reason = %reason, "Rejected record name");
            LibraryError::IllegalName(name.to_string())
        })?;
        let path = self.root.join(record.as_str());
        Ok((record, path))
    }

    /// Like [`resolve`](Self::resolve), but the record must exist
    pub fn locate(&self, name: &str) -> Result<(RecordName, PathBuf)> {
        let (record, path) = self.resolve(name)?;
        if !path.is_file() {
            return Err(LibraryError::NotFound(record.into_inner()).into());
        }
        Ok((record, path))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.locate(name).is_ok()
    }

    /// Lists `.json` files sorted by name
    pub fn list(&self) -> Result<Vec<RecordEntry>> {
        let mut entries = Vec::new();

        for dir_entry in fs::read_dir(&self.root)? {
            let dir_entry = dir_entry?;
            let Some(file_name) = dir_entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            // Non-record files are not part of the library
            let Ok(name) = RecordName::new(file_name) else {
                continue;
            };

            let metadata = dir_entry.metadata()?;
            if !metadata.is_file() {
                continue;
            }

            entries.push(RecordEntry {
                name,
                size: metadata.len(),
                modified: DateTime::<Local>::from(metadata.modified()?),
            });
        }

        entries.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(entries)
    }

    /// Raw file bytes
    pub fn read_bytes(&self, name: &str) -> Result<Vec<u8>> {
        let (record, path) = self.locate(name)?;
        fs::read(&path).map_err(|e| io_error(&record, e))
    }

    /// Parsed JSON, in whatever shape the file holds
    pub fn read_value(&self, name: &str) -> Result<Value> {
        let (record, path) = self.locate(name)?;
        let text = fs::read_to_string(&path).map_err(|e| io_error(&record, e))?;
        parse(&record, &text)
    }

    /// Canonical record; a malformed shape degrades, only parsing can fail
    pub fn read_record(&self, name: &str) -> Result<LessonRecord> {
        Ok(canonicalize_record(&self.read_value(name)?))
    }

    /// Replaces an existing record with `text`
    ///
    /// The text must parse as JSON; the file is left untouched otherwise.
    /// The stored form is pretty-printed with non-ASCII kept as is.
    pub fn save_text(&self, name: &str, text: &str) -> Result<RecordName> {
        let (record, path) = self.locate(name)?;

        let text = text.trim();
        if text.is_empty() {
            return Err(LibraryError::EmptyContent(record.into_inner()).into());
        }
        let value = parse(&record, text)?;

        write_pretty(&record, &path, &value)?;
        tracing::info!(name = %record, "Saved record");
        Ok(record)
    }

    /// Replaces an existing record with `value`
    pub fn save_value(&self, name: &str, value: &Value) -> Result<RecordName> {
        let (record, path) = self.locate(name)?;
        write_pretty(&record, &path, value)?;
        tracing::info!(name = %record, "Saved record");
        Ok(record)
    }

    /// Stores an uploaded file, renaming it on collision
    ///
    /// Only the last component of `file_name` is used. Returns the name the
    /// record was stored under.
    pub fn import(&self, file_name: &str, bytes: &[u8]) -> Result<RecordName> {
        let (mut record, mut path) = self.resolve(upload_file_name(file_name))?;

        if path.exists() {
            let renamed = conflict_name(&record, |candidate| self.root.join(candidate).exists())?;
            tracing::info!(
                original = %record,
                renamed = %renamed,
                "Record name taken, storing under a numbered name"
            );
            path = self.root.join(renamed.as_str());
            record = renamed;
        }

        fs::write(&path, bytes).map_err(|e| io_error(&record, e))?;
        tracing::info!(name = %record, bytes = bytes.len(), "Imported record");
        Ok(record)
    }
}

fn parse(record: &RecordName, text: &str) -> Result<Value> {
    serde_json::from_str(text).map_err(|e| {
        LibraryError::Parse {
            name: record.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

fn write_pretty(record: &RecordName, path: &Path, value: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).map_err(|e| io_error(record, e))
}

fn io_error(record: &RecordName, err: std::io::Error) -> LecternError {
    LibraryError::Io {
        name: record.to_string(),
        message: err.to_string(),
    }
    .into()
}
