use serde::Serialize;

/// Outcome of a read that may legitimately find nothing
///
/// A miss is an expected result, not an error. Keeping it out of band means
/// a stored message can never be mistaken for an absence, whatever its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum Lookup<T> {
    /// At least one matching row was found
    Found(T),
    /// No matching row exists
    NotFound,
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

impl<T> Lookup<Vec<T>> {
    /// Treat an empty result set as a miss
    pub fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            Lookup::NotFound
        } else {
            Lookup::Found(rows)
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::NotFound,
        }
    }
}
