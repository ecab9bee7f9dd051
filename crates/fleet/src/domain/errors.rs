//! Domain Errors
//!
//! Error types for domain operations.

use thiserror::Error;
use uuid::Uuid;

/// Domain layer errors
///
/// All variants except `Store` are client-caused and recoverable by retrying
/// with corrected input. `Store` wraps unanticipated failures from the
/// persistence collaborator and propagates opaquely.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    MissingField(String),

    #[error("{0}")]
    InvalidFormat(String),

    #[error("{0}")]
    InvalidDate(String),

    #[error("{0}")]
    Underage(String),

    #[error("{0}")]
    DuplicateKey(String),

    #[error("{entity_type} not found with id: {id}")]
    NotFound { entity_type: String, id: String },

    #[error("Store error: {0}")]
    Store(String),
}

impl DomainError {
    pub fn not_found<T: AsRef<str>>(entity_type: T, id: Uuid) -> Self {
        Self::NotFound {
            entity_type: entity_type.as_ref().to_string(),
            id: id.to_string(),
        }
    }
}
