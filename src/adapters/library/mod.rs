//! Local record library
//!
//! A flat directory of `.json` lesson records. Names are validated before
//! any file access; imports that collide with an existing name are stored
//! as `base（n）.json`.

pub mod naming;
pub mod store;

pub use naming::human_size;
pub use store::{LibraryStore, RecordEntry};
