//! Import command implementation
//!
//! Copies JSON files into the library. A name already in use gets a
//! numbered variant instead of being overwritten.

use super::{fail, open_library, settings, EXIT_CONFIG, EXIT_LIBRARY, EXIT_OK, EXIT_PARTIAL};
use crate::adapters::library::LibraryStore;
use crate::domain::{LecternError, RecordName};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the import command
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Files to import
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Result of importing one file
#[derive(Debug)]
enum Imported {
    Stored(RecordName),
    Failed(LecternError),
}

impl ImportArgs {
    /// Execute the import command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        crate::log_command_start!("import", files = self.files.len());

        let Some(config) = settings(config_path) else {
            return Ok(EXIT_CONFIG);
        };
        let store = match open_library(&config) {
            Ok(store) => store,
            Err(e) => return Ok(fail(&e, "Failed to open library")),
        };

        println!("📥 Importing into {}", store.root().display());

        let mut stored = 0;
        let mut failed = 0;
        for file in &self.files {
            match import_file(&store, file) {
                Imported::Stored(name) => {
                    stored += 1;
                    println!("✅ {} -> {name}", file.display());
                }
                Imported::Failed(e) => {
                    failed += 1;
                    tracing::warn!(file = %file.display(), error = %e, "Import failed");
                    println!("❌ {}: {e}", file.display());
                }
            }
        }

        println!();
        println!("Imported {stored} file(s), {failed} failed");

        Ok(match (stored, failed) {
            (_, 0) => EXIT_OK,
            (0, _) => EXIT_LIBRARY,
            _ => EXIT_PARTIAL,
        })
    }
}

fn import_file(store: &LibraryStore, file: &Path) -> Imported {
    let file_name = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let result = fs::read(file)
        .map_err(LecternError::from)
        .and_then(|bytes| store.import(&file_name, &bytes));

    match result {
        Ok(name) => Imported::Stored(name),
        Err(e) => Imported::Failed(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_import_file_renames_on_conflict() {
        let library = TempDir::new().unwrap();
        let source = TempDir::new().unwrap();
        let store = LibraryStore::open(library.path()).unwrap();
        let file = source.path().join("Unit 1.json");
        fs::write(&file, "{}").unwrap();

        let first = import_file(&store, &file);
        let second = import_file(&store, &file);
        assert!(matches!(first, Imported::Stored(ref n) if n.as_str() == "Unit 1.json"));
        assert!(matches!(second, Imported::Stored(ref n) if n.as_str() == "Unit 1（1）.json"));
    }

    #[test]
    fn test_import_file_rejects_non_json() {
        let library = TempDir::new().unwrap();
        let source = TempDir::new().unwrap();
        let store = LibraryStore::open(library.path()).unwrap();
        let file = source.path().join("notes.txt");
        fs::write(&file, "hello").unwrap();

        assert!(matches!(import_file(&store, &file), Imported::Failed(_)));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_import_file_missing_source() {
        let library = TempDir::new().unwrap();
        let store = LibraryStore::open(library.path()).unwrap();
        let missing = library.path().join("nope.json");
        assert!(matches!(import_file(&store, &missing), Imported::Failed(_)));
    }
}
