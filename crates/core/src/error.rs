use crate::validate::FieldIssue;

/// Domain-level error shared across the workspace.
///
/// `NotFound.id` is the raw id string from the request path rather than a
/// parsed [`MovieId`](crate::types::MovieId): a path segment that is not
/// even a UUID still has to be reported as "not found", because no such
/// record can exist.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Validation failed: {} field issue(s)", .0.len())]
    Validation(Vec<FieldIssue>),
}

impl CoreError {
    /// Shorthand for the common "Movie with id X not found" case.
    pub fn movie_not_found(id: impl Into<String>) -> Self {
        CoreError::NotFound {
            entity: "Movie",
            id: id.into(),
        }
    }
}
