//! CLI command implementations
//!
//! Each command returns its process exit code:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | Success |
//! | 1 | Partial success (some records or jobs skipped) |
//! | 2 | Configuration or usage error |
//! | 3 | Library error (illegal name, missing record, bad JSON) |
//! | 5 | Fatal error |

pub mod activity;
pub mod bundle;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod print;
pub mod printers;
pub mod save;
pub mod show;
pub mod validate;

use crate::adapters::library::LibraryStore;
use crate::config::{load_config, load_config_or_default, LecternConfig, DEFAULT_CONFIG_PATH};
use crate::domain::LecternError;
use std::io::Read;

pub const EXIT_OK: i32 = 0;
pub const EXIT_PARTIAL: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;
pub const EXIT_LIBRARY: i32 = 3;
pub const EXIT_FATAL: i32 = 5;

/// Loads the configuration for a command
///
/// The default path may be absent, in which case defaults apply. An
/// explicitly given path must exist.
pub fn load_settings(config_path: &str) -> crate::domain::Result<LecternConfig> {
    if config_path == DEFAULT_CONFIG_PATH {
        load_config_or_default(config_path)
    } else {
        load_config(config_path)
    }
}

/// Loads configuration, printing the failure
pub(crate) fn settings(config_path: &str) -> Option<LecternConfig> {
    match load_settings(config_path) {
        Ok(config) => Some(config),
        Err(e) => {
            crate::log_error_with_context!(&e, "Failed to load configuration");
            println!("❌ Failed to load configuration file: {config_path}");
            println!("   Error: {e}");
            None
        }
    }
}

/// Opens the configured library
pub(crate) fn open_library(config: &LecternConfig) -> crate::domain::Result<LibraryStore> {
    LibraryStore::open(&config.library.path)
}

/// Exit code for an error
pub fn exit_code(error: &LecternError) -> i32 {
    match error {
        LecternError::Configuration(_) | LecternError::Validation(_) => EXIT_CONFIG,
        LecternError::Library(_) => EXIT_LIBRARY,
        _ => EXIT_FATAL,
    }
}

/// Prints and logs a command failure, returning its exit code
pub(crate) fn fail(error: &LecternError, context: &str) -> i32 {
    crate::log_error_with_context!(error, context);
    println!("❌ {context}");
    println!("   Error: {error}");
    exit_code(error)
}

/// Reads text from a file, or from stdin when `source` is `-`
pub(crate) fn read_text(source: &str) -> crate::domain::Result<String> {
    if source == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        Ok(text)
    } else {
        Ok(std::fs::read_to_string(source)?)
    }
}
