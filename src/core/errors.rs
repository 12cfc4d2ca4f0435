use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum RegistryError {
    /// Missing or invalid input
    #[error("{message}")]
    Client {
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("{0}")]
    NotFound(String),

    /// Anything not recognized as a known kind. The source never leaves the server.
    #[error("Something went wrong. Please try again")]
    Unhandled(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl RegistryError {
    pub fn client(message: impl Into<String>) -> Self {
        RegistryError::Client {
            message: message.into(),
            details: None,
        }
    }

    pub fn invalid_fields(message: impl Into<String>, errors: Vec<FieldError>) -> Self {
        RegistryError::Client {
            message: message.into(),
            details: serde_json::to_value(errors).ok(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        RegistryError::NotFound(message.into())
    }

    pub fn unhandled(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        RegistryError::Unhandled(Box::new(err))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::Client { .. } => StatusCode::BAD_REQUEST,
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::Unhandled(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn details(&self) -> Option<&serde_json::Value> {
        match self {
            RegistryError::Client { details, .. } => details.as_ref(),
            _ => None,
        }
    }
}

impl From<StorageError> for RegistryError {
    fn from(err: StorageError) -> Self {
        RegistryError::unhandled(err)
    }
}

impl From<reqwest::Error> for RegistryError {
    fn from(err: reqwest::Error) -> Self {
        RegistryError::unhandled(err)
    }
}
