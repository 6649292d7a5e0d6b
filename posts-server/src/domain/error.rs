use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Post not found: id={0}")]
    PostNotFound(i64),

    #[error("Post already exists: id={0}")]
    PostAlreadyExists(i64),

    #[error("Invalid post identifier: {0:?}")]
    InvalidIdentifier(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Seed error: {0}")]
    SeedError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Malformed ids share the not-found status so clients cannot tell them apart.
    /// Duplicate ids on create are reported as 500, matching what existing clients expect.
    pub fn to_status_code(&self) -> u16 {
        match self {
            Self::PostNotFound(_) | Self::InvalidIdentifier(_) => 404,
            Self::ValidationError(_) => 400,
            Self::PostAlreadyExists(_) | Self::SeedError(_) | Self::InternalError(_) => 500,
        }
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::SeedError(err.to_string())
    }
}
