//! Print queue integration
//!
//! Lists local CUPS queues and submits files with `lp`. All process
//! execution goes through [`CommandRunner`], so parsing and argument
//! building are tested against canned tool output.

pub mod queues;
pub mod runner;
pub mod submit;

pub use queues::{clean_printer_name, list_printers, PrinterList};
pub use runner::{CommandOutput, CommandRunner, SystemRunner};
pub use submit::{collect_files, lp_args, submit, JobOutcome, PrintOptions};
