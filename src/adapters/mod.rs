//! Integrations with the local machine.
//!
//! - [`library`] - The directory of JSON lesson records
//! - [`printing`] - CUPS queue discovery and job submission
//!
//! # Library
//!
//! ```rust,no_run
//! use lectern::adapters::library::LibraryStore;
//!
//! # fn example() -> lectern::domain::Result<()> {
//! let store = LibraryStore::open("jsons")?;
//! for entry in store.list()? {
//!     println!("{}  {}  {}", entry.name, entry.human_size(), entry.modified_display());
//! }
//!
//! let stored = store.import("Unit 3.json", r#"{"教学课题": "Unit 3"}"#.as_bytes())?;
//! let record = store.read_record(stored.as_str())?;
//! assert_eq!(record.topic, "Unit 3");
//! # Ok(())
//! # }
//! ```
//!
//! # Printing
//!
//! ```rust,no_run
//! use lectern::adapters::printing::{list_printers, SystemRunner};
//! use lectern::config::PrintingConfig;
//!
//! let printers = list_printers(&SystemRunner, &PrintingConfig::default());
//! println!("{:?} (default {:?})", printers.names, printers.default);
//! ```

pub mod library;
pub mod printing;
