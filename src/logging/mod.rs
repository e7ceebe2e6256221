//! Logging
//!
//! Structured logging through `tracing`:
//! - Human-readable console output on stderr
//! - Optional JSON log files with rotation
//! - `RUST_LOG` takes precedence over the configured level
//!
//! # Example
//!
//! ```no_run
//! use lectern::logging::init_logging;
//! use lectern::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(name = "Unit 1.json", "Saved record");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the start of a CLI command
///
/// # Example
///
/// ```no_run
/// use lectern::log_command_start;
///
/// log_command_start!("bundle", selected = 3);
/// ```
#[macro_export]
macro_rules! log_command_start {
    ($command:expr) => {
        tracing::info!(command = $command, "Starting command");
    };
    ($command:expr, $($field:tt)+) => {
        tracing::info!(command = $command, $($field)+, "Starting command");
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use lectern::log_error_with_context;
/// use lectern::domain::LecternError;
///
/// let error = LecternError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}

#[cfg(test)]
mod tests {
    use crate::domain::LecternError;

    #[test]
    fn test_macros_expand_without_subscriber() {
        let error = LecternError::Export("disk full".to_string());
        crate::log_command_start!("export");
        crate::log_command_start!("bundle", selected = 2, format = "docx");
        crate::log_error_with_context!(&error, "Failed to write bundle");
    }
}
