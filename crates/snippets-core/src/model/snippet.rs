use serde::Serialize;

/// Snippet - a named piece of text
///
/// The keyword is the primary key of the backing table; storing a snippet
/// under an existing keyword replaces its message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snippet {
    /// Unique name the snippet is stored under
    pub keyword: String,

    /// Stored text body
    pub message: String,
}

impl Snippet {
    /// Create a new Snippet from a keyword and message
    pub fn new(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            message: message.into(),
        }
    }
}
