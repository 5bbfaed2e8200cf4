use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No user found with {0}")]
    NotFound(String),

    #[error("Cannot add or remove yourself: {0}")]
    SelfReference(Uuid),

    #[error("User already exists: {0}")]
    Conflict(String),

    #[error("Failed to access identity provider: {0}")]
    Identity(String),

    #[error("Failed to access user store: {0}")]
    Store(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),
}

impl From<reqwest::Error> for ServiceError {
    fn from(error: reqwest::Error) -> Self {
        ServiceError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(error: serde_json::Error) -> Self {
        ServiceError::Identity(format!("response parse: {error}"))
    }
}
