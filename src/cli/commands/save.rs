//! Save command implementation
//!
//! Replaces an existing record with edited JSON text. Invalid JSON leaves
//! the stored file untouched.

use super::{fail, open_library, read_text, settings, EXIT_CONFIG, EXIT_OK};
use clap::Args;

/// Arguments for the save command
#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Record name to overwrite
    pub name: String,

    /// File holding the new JSON text ("-" for stdin)
    #[arg(short, long, default_value = "-")]
    pub input: String,
}

impl SaveArgs {
    /// Execute the save command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        crate::log_command_start!("save", name = %self.name);

        let Some(config) = settings(config_path) else {
            return Ok(EXIT_CONFIG);
        };

        let result = read_text(&self.input).and_then(|text| {
            let store = open_library(&config)?;
            store.save_text(&self.name, &text)
        });

        match result {
            Ok(name) => {
                println!("✅ Saved {name}");
                Ok(EXIT_OK)
            }
            Err(e) => Ok(fail(&e, "Failed to save record")),
        }
    }
}
