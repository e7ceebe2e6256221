//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::LecternConfig;
use crate::domain::errors::LecternError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Path used when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "lectern.toml";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into LecternConfig
/// 4. Applies environment variable overrides (LECTERN_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use lectern::config::loader::load_config;
///
/// let config = load_config("lectern.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LecternConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LecternError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LecternError::Configuration(format!(
            "Failed to read configuration file {}: {e}",
            path.display()
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let config: LecternConfig = toml::from_str(&contents)
        .map_err(|e| LecternError::Configuration(format!("Failed to parse TOML: {e}")))?;

    finish(config)
}

/// Loads `path`, or the defaults when it does not exist
///
/// Environment overrides and validation apply either way. Used for the
/// default path only; an explicitly named file must exist.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<LecternConfig> {
    let path = path.as_ref();
    if path.exists() {
        return load_config(path);
    }

    tracing::debug!(path = %path.display(), "No configuration file, using defaults");
    finish(LecternConfig::default())
}

fn finish(mut config: LecternConfig) -> Result<LecternConfig> {
    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        LecternError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied unchanged.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| LecternError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = re.replace_all(line, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(LecternError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using LECTERN_* prefix
///
/// Environment variables follow the pattern: LECTERN_<SECTION>_<KEY>
/// For example: LECTERN_LIBRARY_PATH, LECTERN_PRINTING_COPIES
fn apply_env_overrides(config: &mut LecternConfig) -> Result<()> {
    // Application overrides
    if let Ok(val) = std::env::var("LECTERN_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // Library overrides
    if let Ok(val) = std::env::var("LECTERN_LIBRARY_PATH") {
        config.library.path = PathBuf::from(val);
    }

    // Export overrides
    if let Ok(val) = std::env::var("LECTERN_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = PathBuf::from(val);
    }
    if let Ok(val) = std::env::var("LECTERN_EXPORT_ARCHIVE_PREFIX") {
        config.export.archive_prefix = val;
    }

    // Printing overrides
    if let Ok(val) = std::env::var("LECTERN_PRINTING_LP_PATH") {
        config.printing.lp_path = val;
    }
    if let Ok(val) = std::env::var("LECTERN_PRINTING_LPSTAT_PATH") {
        config.printing.lpstat_path = val;
    }
    if let Ok(val) = std::env::var("LECTERN_PRINTING_LPOPTIONS_PATH") {
        config.printing.lpoptions_path = val;
    }
    if let Ok(val) = std::env::var("LECTERN_PRINTING_DEFAULT_PRINTER") {
        config.printing.default_printer = Some(val).filter(|p| !p.trim().is_empty());
    }
    if let Ok(val) = std::env::var("LECTERN_PRINTING_TWO_SIDED") {
        config.printing.two_sided = val.parse().unwrap_or(true);
    }
    if let Ok(val) = std::env::var("LECTERN_PRINTING_COPIES") {
        if let Ok(copies) = val.parse() {
            config.printing.copies = copies;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("LECTERN_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("LECTERN_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
    if let Ok(val) = std::env::var("LECTERN_LOGGING_LOCAL_ROTATION") {
        config.logging.local_rotation = val;
    }

    Ok(())
}
