//! Core logic for Lectern.
//!
//! # Modules
//!
//! - [`canonical`] - Coercion of arbitrary JSON into the fixed five-section record
//! - [`layout`] - The fixed-layout lesson table and its DOCX serialization
//! - [`export`] - Single, text and bundle exports over the library
//! - [`verification`] - Fingerprints over canonical JSON
//!
//! # Export Workflow
//!
//! 1. **Load**: Read the raw JSON from the library
//! 2. **Canonicalize**: Coerce it into five sections with fixed titles
//! 3. **Lay out**: Build the table model (rows, merges, borders)
//! 4. **Serialize**: Write the model as DOCX bytes
//! 5. **Bundle** (optional): Collect documents or raw records into a ZIP
//!
//! # Example
//!
//! ```rust,no_run
//! use lectern::adapters::library::LibraryStore;
//! use lectern::config::ExportConfig;
//! use lectern::core::export::{BundleFormat, ExportCoordinator};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = LibraryStore::open("jsons")?;
//! let coordinator = ExportCoordinator::new(store, &ExportConfig::default());
//!
//! let names = vec!["Unit 1.json".to_string(), "Unit 2.json".to_string()];
//! let bundle = coordinator.export_batch(&names, BundleFormat::Docx)?;
//!
//! println!("Exported: {}", bundle.summary.exported.len());
//! println!("Skipped: {}", bundle.summary.skipped.len());
//! # Ok(())
//! # }
//! ```

pub mod canonical;
pub mod export;
pub mod layout;
pub mod verification;
