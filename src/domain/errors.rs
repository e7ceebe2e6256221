//! Domain error types
//!
//! This module defines the error hierarchy for Lectern.
//! All errors are domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Lectern error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum LecternError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Library store errors
    #[error("Library error: {0}")]
    Library(#[from] LibraryError),

    /// Document construction errors
    #[error("Render error: {0}")]
    Render(String),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Print queue errors
    #[error("Print error: {0}")]
    Print(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Library store errors
///
/// Failures surfaced at the store boundary. Malformed record *shapes* are
/// never errors; only names, missing files and unparseable text are.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// Name is not a plain `.json` file name inside the library
    #[error("Illegal record name: {0}")]
    IllegalName(String),

    /// No record with this name exists
    #[error("Record not found: {0}")]
    NotFound(String),

    /// Record text is not valid JSON
    #[error("JSON parse error in {name}: {message}")]
    Parse { name: String, message: String },

    /// Nothing to save
    #[error("No JSON content supplied for {0}")]
    EmptyContent(String),

    /// Underlying file system failure
    #[error("Failed to access {name}: {message}")]
    Io { name: String, message: String },
}

impl LecternError {
    /// Short machine-friendly kind, used in export summaries
    pub fn kind(&self) -> &'static str {
        match self {
            LecternError::Configuration(_) => "configuration",
            LecternError::Library(err) => err.kind(),
            LecternError::Render(_) => "render",
            LecternError::Export(_) => "export",
            LecternError::Validation(_) => "validation",
            LecternError::Print(_) => "print",
            LecternError::Serialization(_) => "serialization",
            LecternError::Io(_) => "io",
        }
    }
}

impl LibraryError {
    pub fn kind(&self) -> &'static str {
        match self {
            LibraryError::IllegalName(_) => "illegal_name",
            LibraryError::NotFound(_) => "not_found",
            LibraryError::Parse { .. } => "parse",
            LibraryError::EmptyContent(_) => "empty_content",
            LibraryError::Io { .. } => "io",
        }
    }
}

// Conversion from std::io::Error
impl From<std::io::Error> for LecternError {
    fn from(err: std::io::Error) -> Self {
        LecternError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for LecternError {
    fn from(err: serde_json::Error) -> Self {
        LecternError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for LecternError {
    fn from(err: toml::de::Error) -> Self {
        LecternError::Configuration(format!("TOML parse error: {err}"))
    }
}

// Conversion from zip errors (archive assembly)
impl From<zip::result::ZipError> for LecternError {
    fn from(err: zip::result::ZipError) -> Self {
        LecternError::Export(format!("Archive error: {err}"))
    }
}
