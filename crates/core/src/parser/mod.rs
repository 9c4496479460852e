//! Parsers for the checker's output formats.
//!
//! Flow's output is an external, versioned contract rather than a
//! stable grammar, so every parser here is lenient: lines or documents
//! that do not match are skipped, never surfaced as errors. An empty
//! diagnostic list is the normal no-issues outcome.

pub mod coverage;
pub mod json;
pub mod text;
