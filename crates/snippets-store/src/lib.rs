//! Snippets Store - SQLite persistence for named snippets
//!
//! Provides:
//! - Connection management (`db`)
//! - Schema bootstrap and shape checks for the `snippets` table (`schema`)
//! - `SnippetStore`, the put/get/catalog/search/remove operations

pub mod db;
pub mod errors;
pub mod schema;
pub mod store;

// Re-export key types
pub use errors::Result;
pub use store::{InsertAttempt, SnippetStore};
