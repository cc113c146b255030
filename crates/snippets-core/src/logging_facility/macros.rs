//! Canonical logging macros
//!
//! These macros give every store operation the same event shape:
//! `start` on entry, then exactly one of `end`, `not_found` or `end_error`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use snippets_core::log_op_start;
/// log_op_start!("get");
/// log_op_start!("get", keyword = "greeting");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = snippets_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = snippets_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use snippets_core::log_op_end;
/// log_op_end!("put", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = snippets_core_types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = snippets_core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation that completed but matched nothing
///
/// # Example
///
/// ```
/// # use snippets_core::log_op_not_found;
/// log_op_not_found!("get", duration_ms = 1, keyword = "missing");
/// ```
#[macro_export]
macro_rules! log_op_not_found {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = snippets_core_types::schema::EVENT_NOT_FOUND,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = snippets_core_types::schema::EVENT_NOT_FOUND,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// The error expression is consumed and converted into `SnipError`.
///
/// # Example
///
/// ```
/// # use snippets_core::{log_op_error, SnippetError};
/// let err = SnippetError::RemoveUnimplemented { keyword: "k".to_string() };
/// log_op_error!("remove", err, duration_ms = 0);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        use $crate::errors::SnipError;
        let snip_err: SnipError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = snippets_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?snip_err.kind(),
            err.code = snip_err.code(),
            error = %snip_err,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        use $crate::errors::SnipError;
        let snip_err: SnipError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = snippets_core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?snip_err.kind(),
            err.code = snip_err.code(),
            error = %snip_err,
            $($field)*
        );
    }};
}
