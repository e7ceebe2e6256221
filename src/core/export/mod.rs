//! Export orchestration
//!
//! - Single record export to a DOCX document
//! - Export of unsaved editor text
//! - Bundles of rendered documents or raw records in one ZIP archive

pub mod archive;
pub mod coordinator;
pub mod summary;

pub use archive::{ArchiveBuilder, BundleFormat};
pub use coordinator::{bundle_name, write_output, Bundle, ExportCoordinator, RenderedDocument};
pub use summary::{ExportSummary, ExportedEntry, SkippedEntry};
