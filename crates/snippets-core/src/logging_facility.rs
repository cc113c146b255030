//! Structured logging facility for snippets
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init_to_file(profile, path)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`,
//!   `log_op_not_found!`, `log_op_error!`)
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust,no_run
//! use snippets_core::logging_facility::{init_to_file, Profile};
//! use std::path::Path;
//!
//! // Initialize once at application startup
//! init_to_file(Profile::Development, Path::new("snippets.log"))?;
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init_to_file, Profile};
pub use test_capture::{init_test_capture, CapturedEvent, TestCapture};
