//! Record name type with validation
//!
//! Record names are plain `.json` file names that must stay inside the
//! library directory. Validation happens once, at construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path};
use std::str::FromStr;

/// File extension every library record carries
pub const RECORD_EXTENSION: &str = "json";

/// Library record name newtype wrapper
///
/// A valid name is a single path component (no separators, no `..`, not
/// absolute) ending in `.json`, compared case-insensitively.
///
/// # Examples
///
/// ```
/// use lectern::domain::names::RecordName;
/// use std::str::FromStr;
///
/// let name = RecordName::from_str("Unit 3 课时1.json").unwrap();
/// assert_eq!(name.base_name(), "Unit 3 课时1");
/// assert_eq!(name.with_extension("docx"), "Unit 3 课时1.docx");
///
/// assert!(RecordName::from_str("../escape.json").is_err());
/// assert!(RecordName::from_str("notes.txt").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct RecordName(String);

impl RecordName {
    /// Creates a new RecordName from a string
    ///
    /// # Returns
    ///
    /// Returns `Ok(RecordName)` if the name is valid, `Err` otherwise
    pub fn new(name: impl Into<String>) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("Record name cannot be empty".to_string());
        }

        if !has_record_extension(&name) {
            return Err(format!("Record name must end with .{RECORD_EXTENSION}: {name}"));
        }

        if name.contains('/') || name.contains('\\') {
            return Err(format!("Record name must not contain path separators: {name}"));
        }

        let mut components = Path::new(&name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => return Err(format!("Record name escapes the library: {name}")),
        }

        Ok(Self(name))
    }

    /// Returns the record name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name without its `.json` extension
    pub fn base_name(&self) -> &str {
        &self.0[..self.0.len() - RECORD_EXTENSION.len() - 1]
    }

    /// `<base-name>.<ext>`, used to name exported files and archive entries
    pub fn with_extension(&self, ext: &str) -> String {
        format!("{}.{}", self.base_name(), ext)
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn has_record_extension(name: &str) -> bool {
    let suffix_len = RECORD_EXTENSION.len() + 1;
    name.len() > suffix_len
        && name.is_char_boundary(name.len() - suffix_len)
        && name[name.len() - suffix_len..].eq_ignore_ascii_case(".json")
}

impl fmt::Display for RecordName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RecordName {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl AsRef<str> for RecordName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
