// src/application/articles/failure.rs
use crate::{application::error::ApplicationError, domain::errors::DomainError};

/// Logs a failed store interaction and converts it for the caller.
pub(super) fn report(operation: &'static str, err: DomainError) -> ApplicationError {
    match &err {
        DomainError::NotFound(_) => {
            tracing::warn!(operation, error = %err, "article not found");
        }
        DomainError::Validation(_) | DomainError::Store(_) => {
            tracing::error!(operation, error = %err, "article store request failed");
        }
    }
    err.into()
}
