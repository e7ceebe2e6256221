//! Domain models and types for Lectern.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Validated record names** ([`RecordName`])
//! - **The lesson-plan model** ([`LessonRecord`], [`FlowSection`], [`Activity`])
//! - **Error types** ([`LecternError`], [`LibraryError`])
//! - **Result type alias** ([`Result`])
//!
//! # Fixed structure
//!
//! Every record has exactly five flow sections with fixed titles. Edits can
//! add, remove, reorder or rewrite activities but never touch sections:
//!
//! ```rust
//! use lectern::domain::{Activity, LessonRecord, MoveDirection, FIXED_TITLES};
//!
//! # fn example() -> lectern::domain::Result<()> {
//! let mut record = LessonRecord::default();
//! record.add_activity(0, Activity::new("Greet the class", "Greet the teacher"))?;
//! record.add_activity(0, Activity::new("Review words", "Read aloud"))?;
//! record.move_activity(0, 1, MoveDirection::Up)?;
//!
//! assert_eq!(record.flow()[0].title(), FIXED_TITLES[0]);
//! assert_eq!(record.flow()[0].activities()[0].teacher_action, "Review words");
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod lesson;
pub mod names;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{LecternError, LibraryError};
pub use lesson::{
    Activity, FlowSection, LessonRecord, MoveDirection, FIXED_TITLES, SECTION_COUNT,
};
pub use names::RecordName;
pub use result::Result;
