use thiserror::Error;

use crate::domain::status::ClientStatus;
use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;

pub mod client;
pub mod metrics;
pub mod schedule;
pub mod settings;

/// Errors surfaced to the presentation layer by service operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("client not found")]
    NotFound,

    #[error("invalid input: {0}")]
    Validation(String),

    #[error("illegal status transition from {from} to {to}")]
    InvalidTransition {
        from: ClientStatus,
        to: ClientStatus,
    },

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<TypeConstraintError> for ServiceError {
    fn from(err: TypeConstraintError) -> Self {
        ServiceError::Validation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ServiceError {
    fn from(err: validator::ValidationErrors) -> Self {
        ServiceError::Validation(err.to_string())
    }
}
