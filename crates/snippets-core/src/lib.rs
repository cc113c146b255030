//! Snippets Core - domain model, error facility and logging facility
//!
//! This crate provides the pieces shared by the store and the CLI:
//! - `Snippet` and the `Lookup` result used for expected misses
//! - The canonical error facility (`SnipError`, `SnipErrorKind`)
//! - The structured logging facility and its macros

pub mod errors;
pub mod logging_facility;
pub mod model;

// Re-export commonly used types
pub use errors::{Result, SnipError, SnipErrorKind, SnippetError};
pub use model::{Lookup, Snippet};
