//! Fingerprints for canonical records
//!
//! A fingerprint is the hex SHA-256 of a value's sorted-key JSON. Export
//! summaries carry one per entry, and tests use them to compare records
//! whose key order differs.

pub mod fingerprint;

pub use fingerprint::{fingerprint, fingerprint_bytes, fingerprint_record};
