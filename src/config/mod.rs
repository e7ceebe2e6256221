//! Configuration management for Lectern.
//!
//! TOML-based configuration loading, parsing, and validation.
//!
//! # Overview
//!
//! Lectern reads `lectern.toml` with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `LECTERN_<SECTION>_<KEY>` environment overrides
//! - Default values for every setting; a missing default file is not an error
//! - Validation on load
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lectern::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("lectern.toml")?;
//!
//! println!("Library: {}", config.library.path.display());
//! println!("Exports: {}", config.export.output_dir.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration Structure
//!
//! - [`ApplicationConfig`] - Log level
//! - [`LibraryConfig`] - Record directory
//! - [`ExportConfig`] - Output directory and bundle naming
//! - [`PrintingConfig`] - Queue tools and job options
//! - [`LoggingConfig`] - JSON file logging
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [library]
//! path = "${HOME}/lessons/jsons"
//!
//! [export]
//! output_dir = "exports"
//! archive_prefix = "export"
//!
//! [printing]
//! default_printer = "Office_HP"
//! two_sided = true
//! copies = 1
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_or_default, DEFAULT_CONFIG_PATH};
pub use schema::{
    ApplicationConfig, ExportConfig, LecternConfig, LibraryConfig, LoggingConfig, PrintingConfig,
};
