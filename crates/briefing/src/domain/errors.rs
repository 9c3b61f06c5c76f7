//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;

/// Errors raised by ports and their adapters
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: i64) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}

/// The single fatal outcome of assembling a briefing.
///
/// Upstream failures for posts and weather are absorbed by the assembler and
/// never show up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BriefingError {
    #[error("User with ID {0} not found.")]
    UserNotFound(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_not_found_message() {
        assert_eq!(
            BriefingError::UserNotFound(999).to_string(),
            "User with ID 999 not found."
        );
    }

    #[test]
    fn test_not_found_helper() {
        let err = DomainError::not_found("BriefingLog", 42);
        assert_eq!(err.to_string(), "Entity not found: BriefingLog with id 42");
    }
}
