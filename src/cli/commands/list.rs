//! List command implementation
//!
//! Shows the records in the library with size and modification time.

use super::{fail, open_library, settings, EXIT_CONFIG, EXIT_OK};
use crate::adapters::library::RecordEntry;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Print names only
    #[arg(short, long)]
    pub quiet: bool,
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        crate::log_command_start!("list");

        let Some(config) = settings(config_path) else {
            return Ok(EXIT_CONFIG);
        };

        let entries = match open_library(&config).and_then(|store| store.list()) {
            Ok(entries) => entries,
            Err(e) => return Ok(fail(&e, "Failed to read library")),
        };

        if self.quiet {
            for entry in &entries {
                println!("{}", entry.name);
            }
            return Ok(EXIT_OK);
        }

        println!("📚 Library: {}", config.library.path.display());
        println!();
        if entries.is_empty() {
            println!("   (no records)");
        } else {
            for line in format_entries(&entries) {
                println!("{line}");
            }
        }
        println!();
        println!("{} record(s)", entries.len());

        Ok(EXIT_OK)
    }
}

/// One aligned line per entry
fn format_entries(entries: &[RecordEntry]) -> Vec<String> {
    let width = entries
        .iter()
        .map(|e| e.name.as_str().chars().count())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|e| {
            let name = e.name.as_str();
            let pad = width - name.chars().count();
            format!(
                "  {name}{}  {:>9}  {}",
                " ".repeat(pad),
                e.human_size(),
                e.modified_display()
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RecordName;
    use chrono::{Local, TimeZone};

    fn entry(name: &str, size: u64) -> RecordEntry {
        RecordEntry {
            name: RecordName::new(name).unwrap(),
            size,
            modified: Local.with_ymd_and_hms(2025, 3, 9, 7, 5, 0).unwrap(),
        }
    }

    #[test]
    fn test_format_entries_aligns_names() {
        let lines = format_entries(&[entry("a.json", 10), entry("longer.json", 2048)]);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  a.json     "));
        assert!(lines[0].ends_with("2025-03-09 07:05"));
        assert!(lines[1].contains("2.0 KB"));
    }

    #[test]
    fn test_format_entries_empty() {
        assert!(format_entries(&[]).is_empty());
    }
}
