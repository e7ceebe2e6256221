//! Show command implementation
//!
//! Prints a record as an editor would load it: the stored document with its
//! flow rewritten into the five fixed sections.

use super::{fail, open_library, settings, EXIT_CONFIG, EXIT_OK};
use crate::core::canonical::canonical_document;
use clap::Args;

/// Arguments for the show command
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Record name, e.g. "Unit 1.json"
    pub name: String,

    /// Print the stored file unchanged
    #[arg(long)]
    pub raw: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        crate::log_command_start!("show", name = %self.name);

        let Some(config) = settings(config_path) else {
            return Ok(EXIT_CONFIG);
        };
        let store = match open_library(&config) {
            Ok(store) => store,
            Err(e) => return Ok(fail(&e, "Failed to open library")),
        };

        if self.raw {
            return match store.read_bytes(&self.name) {
                Ok(bytes) => {
                    println!("{}", String::from_utf8_lossy(&bytes));
                    Ok(EXIT_OK)
                }
                Err(e) => Ok(fail(&e, "Failed to read record")),
            };
        }

        let document = match store.read_value(&self.name) {
            Ok(raw) => canonical_document(&raw),
            Err(e) => return Ok(fail(&e, "Failed to read record")),
        };
        println!("{}", serde_json::to_string_pretty(&document)?);

        Ok(EXIT_OK)
    }
}
