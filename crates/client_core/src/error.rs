use shared::domain::CourseId;
use thiserror::Error;

/// Failure of a call to the course backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("network error: {0}")]
    Network(String),
    #[error("rejected by server: {0}")]
    Validation(String),
    #[error("course {0} not found")]
    NotFound(CourseId),
}

impl From<reqwest::Error> for RepositoryError {
    fn from(value: reqwest::Error) -> Self {
        Self::Network(value.to_string())
    }
}
