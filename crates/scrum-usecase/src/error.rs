//! Error types for the use-case layer

use scrum_domain::{PlanningError, RepositoryError, SprintItemError};
use thiserror::Error;

/// Errors surfaced to whoever drives the services
///
/// NotFound and InvalidState are never retried here; the caller decides
/// how to report them.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// A referenced identifier doesn't resolve
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// The entity is not in a state that allows the operation
    #[error("Invalid state: {reason}")]
    InvalidState { reason: String },

    /// Storage failed underneath us
    #[error(transparent)]
    Repository(RepositoryError),
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: impl core::fmt::Display) -> Self {
        ServiceError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, ServiceError::NotFound { .. })
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, ServiceError::InvalidState { .. })
    }
}

impl From<RepositoryError> for ServiceError {
    fn from(value: RepositoryError) -> Self {
        match value {
            RepositoryError::NotFound { entity, id } => ServiceError::NotFound { entity, id },
            other => ServiceError::Repository(other),
        }
    }
}

impl From<SprintItemError> for ServiceError {
    fn from(value: SprintItemError) -> Self {
        ServiceError::InvalidState {
            reason: value.to_string(),
        }
    }
}

impl From<PlanningError> for ServiceError {
    fn from(value: PlanningError) -> Self {
        ServiceError::InvalidState {
            reason: value.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
