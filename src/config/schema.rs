//! Configuration schema types
//!
//! Every field has a default, so an empty file (or no file) is a valid
//! configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main Lectern configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LecternConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Record library location
    #[serde(default)]
    pub library: LibraryConfig,

    /// Export output settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Print queue tools and job options
    #[serde(default)]
    pub printing: PrintingConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl LecternConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.library.validate()?;
        self.export.validate()?;
        self.printing.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LibraryConfig {
    /// Directory holding the `.json` records; created on first use
    #[serde(default = "default_library_path")]
    pub path: PathBuf,
}

impl LibraryConfig {
    fn validate(&self) -> Result<(), String> {
        if self.path.as_os_str().is_empty() {
            return Err("library.path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for LibraryConfig {
    fn default() -> Self {
        Self {
            path: default_library_path(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory rendered documents and bundles are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// First part of bundle names: `<prefix>_<docx|json>_<stamp>.zip`
    #[serde(default = "default_archive_prefix")]
    pub archive_prefix: String,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.output_dir.as_os_str().is_empty() {
            return Err("export.output_dir cannot be empty".to_string());
        }

        let prefix = self.archive_prefix.trim();
        if prefix.is_empty() {
            return Err("export.archive_prefix cannot be empty".to_string());
        }
        if prefix.contains(['/', '\\']) {
            return Err(format!(
                "export.archive_prefix '{}' must not contain path separators",
                self.archive_prefix
            ));
        }
        Ok(())
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            archive_prefix: default_archive_prefix(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrintingConfig {
    /// `lp` executable
    #[serde(default = "default_lp_path")]
    pub lp_path: String,

    /// `lpstat` executable
    #[serde(default = "default_lpstat_path")]
    pub lpstat_path: String,

    /// `lpoptions` executable
    #[serde(default = "default_lpoptions_path")]
    pub lpoptions_path: String,

    /// Queue used when none is given on the command line
    #[serde(default)]
    pub default_printer: Option<String>,

    /// Long-edge duplex
    #[serde(default = "default_true")]
    pub two_sided: bool,

    /// Copies per file
    #[serde(default = "default_copies")]
    pub copies: u32,

    /// Extensions picked up when printing a directory
    #[serde(default = "default_print_extensions")]
    pub extensions: Vec<String>,
}

impl PrintingConfig {
    fn validate(&self) -> Result<(), String> {
        for (key, value) in [
            ("lp_path", &self.lp_path),
            ("lpstat_path", &self.lpstat_path),
            ("lpoptions_path", &self.lpoptions_path),
        ] {
            if value.trim().is_empty() {
                return Err(format!("printing.{key} cannot be empty"));
            }
        }

        if self.copies == 0 || self.copies > 999 {
            return Err(format!(
                "printing.copies must be between 1 and 999, got {}",
                self.copies
            ));
        }

        if self.extensions.is_empty() {
            return Err("printing.extensions must name at least one extension".to_string());
        }
        Ok(())
    }
}

impl Default for PrintingConfig {
    fn default() -> Self {
        Self {
            lp_path: default_lp_path(),
            lpstat_path: default_lpstat_path(),
            lpoptions_path: default_lpoptions_path(),
            default_printer: None,
            two_sided: true,
            copies: default_copies(),
            extensions: default_print_extensions(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable JSON file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy (daily, hourly, never)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err("logging.local_path cannot be empty when file logging is enabled".to_string());
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

fn default_library_path() -> PathBuf {
    PathBuf::from("jsons")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("exports")
}

fn default_archive_prefix() -> String {
    "export".to_string()
}

fn default_lp_path() -> String {
    "lp".to_string()
}

fn default_lpstat_path() -> String {
    "lpstat".to_string()
}

fn default_lpoptions_path() -> String {
    "lpoptions".to_string()
}

fn default_copies() -> u32 {
    1
}

fn default_print_extensions() -> Vec<String> {
    vec!["pdf".to_string()]
}

fn default_local_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LecternConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.library.path, PathBuf::from("jsons"));
        assert_eq!(config.export.archive_prefix, "export");
        assert!(config.printing.two_sided);
        assert_eq!(config.printing.extensions, vec!["pdf"]);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: LecternConfig = toml::from_str("").unwrap();
        assert_eq!(config, LecternConfig::default());
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let config: LecternConfig = toml::from_str("[printing]\ncopies = 2\n").unwrap();
        assert_eq!(config.printing.copies, 2);
        assert_eq!(config.printing.lp_path, "lp");
    }

    #[test]
    fn test_application_config_validation() {
        let mut config = ApplicationConfig {
            log_level: "info".to_string(),
        };
        assert!(config.validate().is_ok());

        config.log_level = "invalid".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_export_config_validation() {
        let mut config = ExportConfig::default();
        config.archive_prefix = "  ".to_string();
        assert!(config.validate().is_err());

        config.archive_prefix = "a/b".to_string();
        assert!(config.validate().is_err());

        config.archive_prefix = "教案".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_printing_config_validation() {
        let mut config = PrintingConfig::default();
        config.copies = 0;
        assert!(config.validate().is_err());

        config.copies = 3;
        config.extensions.clear();
        assert!(config.validate().is_err());

        config.extensions = vec!["pdf".to_string()];
        config.lp_path = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_logging_config_validation() {
        let mut config = LoggingConfig::default();
        assert!(config.validate().is_ok());

        config.local_rotation = "size".to_string();
        assert!(config.validate().is_err());

        config.local_rotation = "hourly".to_string();
        config.local_enabled = true;
        config.local_path = " ".to_string();
        assert!(config.validate().is_err());
    }
}
