use thiserror::Error;

/// Result type alias using SnipError
pub type Result<T> = std::result::Result<T, SnipError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers can match on without
/// parsing messages. A miss on a read is not an error: reads report it
/// through `Lookup::NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnipErrorKind {
    /// A write the table's constraints would not accept
    ConstraintViolation,

    /// A documented operation that has no implementation in this build
    NotImplemented,

    // Integration/IO
    Io,
    Persistence,
}

impl SnipErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            SnipErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            SnipErrorKind::NotImplemented => "ERR_NOT_IMPLEMENTED",
            SnipErrorKind::Io => "ERR_IO",
            SnipErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the operation
/// and keyword the failure happened under.
#[derive(Debug, Clone)]
pub struct SnipError {
    kind: SnipErrorKind,
    op: Option<String>,
    keyword: Option<String>,
    message: String,
}

impl SnipError {
    /// Create a new error with the specified kind
    pub fn new(kind: SnipErrorKind) -> Self {
        Self {
            kind,
            op: None,
            keyword: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add snippet keyword context
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn kind(&self) -> SnipErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for SnipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(keyword) = &self.keyword {
            write!(f, " (keyword: {})", keyword)?;
        }
        Ok(())
    }
}

impl std::error::Error for SnipError {}

// ========== End Error Facility ==========

/// Domain errors raised by snippet operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnippetError {
    /// Removal is documented but has never been implemented
    #[error("Removing snippets is not implemented; '{keyword}' was left in place")]
    RemoveUnimplemented { keyword: String },

    /// The update half of an upsert matched no row
    ///
    /// Happens only when another writer deleted the row between the failed
    /// insert and the update.
    #[error("Snippet '{keyword}' disappeared while being updated")]
    UpsertLostRow { keyword: String },

    /// The existing snippets table does not have the expected shape
    #[error("Snippets table has an unexpected schema: {reason}")]
    Schema { reason: String },
}

impl From<SnippetError> for SnipError {
    fn from(err: SnippetError) -> Self {
        let message = err.to_string();
        match err {
            SnippetError::RemoveUnimplemented { keyword } => {
                SnipError::new(SnipErrorKind::NotImplemented)
                    .with_op("remove")
                    .with_keyword(keyword)
                    .with_message(message)
            }
            SnippetError::UpsertLostRow { keyword } => {
                SnipError::new(SnipErrorKind::ConstraintViolation)
                    .with_op("put")
                    .with_keyword(keyword)
                    .with_message(message)
            }
            SnippetError::Schema { .. } => SnipError::new(SnipErrorKind::Persistence)
                .with_op("ensure_schema")
                .with_message(message),
        }
    }
}
