//! Error handling for snippets-store
//!
//! Wraps snippets-core SnipError with store-specific helpers

use rusqlite::ffi;
use rusqlite::ErrorCode;
use snippets_core::errors::{SnipError, SnipErrorKind};

/// Result type alias using SnipError
pub type Result<T> = std::result::Result<T, SnipError>;

/// Create a database error from rusqlite::Error
pub fn from_rusqlite(err: rusqlite::Error) -> SnipError {
    SnipError::new(SnipErrorKind::Persistence)
        .with_op("sqlite")
        .with_message(err.to_string())
}

/// Like `from_rusqlite`, tagged with the store operation that failed
pub fn persistence_in(op: &'static str) -> impl Fn(rusqlite::Error) -> SnipError {
    move |err| from_rusqlite(err).with_op(op)
}

/// Create an IO error
pub fn io_error(operation: &str, err: std::io::Error) -> SnipError {
    SnipError::new(SnipErrorKind::Io)
        .with_op(operation.to_string())
        .with_message(err.to_string())
}

/// True when the error is a primary key or unique index violation
///
/// Other constraint failures (NOT NULL, CHECK) are not conflicts between
/// rows and must not be treated as "already exists".
pub fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.code == ErrorCode::ConstraintViolation
                && matches!(
                    e.extended_code,
                    ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE
                )
        }
        _ => false,
    }
}
