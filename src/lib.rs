// Lectern - Lesson-plan library and fixed-layout DOCX export
// Copyright (c) 2025 Lectern Contributors
// Licensed under the MIT License

//! # Lectern - Lesson-plan library and DOCX export
//!
//! Lectern keeps a directory of lesson-plan JSON records and renders any of
//! them to a fixed one-page table layout in DOCX.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Canonicalizing** loosely shaped records into five fixed flow sections
//! - **Rendering** a canonical record to a deterministic DOCX table
//! - **Bundling** several records (rendered or raw) into one ZIP archive
//! - **Managing** the record library: listing, importing, editing, saving
//! - **Printing** output files through the CUPS command-line tools
//!
//! ## Architecture
//!
//! Lectern follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (canonicalization, layout, export, fingerprints)
//! - [`adapters`] - External integrations (record directory, print queues)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lectern::adapters::library::LibraryStore;
//! use lectern::config::LecternConfig;
//! use lectern::core::export::{write_output, ExportCoordinator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = LecternConfig::default();
//!     let store = LibraryStore::open(&config.library.path)?;
//!     let coordinator = ExportCoordinator::new(store, &config.export);
//!
//!     let document = coordinator.export_one("Unit 1.json")?;
//!     write_output(&config.export.output_dir, &document.file_name, &document.bytes)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Canonical Form
//!
//! Any JSON value canonicalizes without error. Missing or malformed parts
//! become empty text and empty sections:
//!
//! ```rust
//! use lectern::core::canonical::canonicalize_record;
//! use serde_json::json;
//!
//! let record = canonicalize_record(&json!("not even an object"));
//! assert_eq!(record.topic, "");
//! assert_eq!(record.flow().len(), 5);
//! assert_eq!(record.activity_count(), 0);
//! ```
//!
//! ## Error Handling
//!
//! Lectern uses the [`domain::LecternError`] type for all errors:
//!
//! ```rust,no_run
//! use lectern::domain::LecternError;
//!
//! fn example() -> Result<(), LecternError> {
//!     let config = lectern::config::load_config("lectern.toml")?;
//!     println!("{}", config.library.path.display());
//!     Ok(())
//! }
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
