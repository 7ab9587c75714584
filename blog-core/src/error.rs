use crate::models::FormField;
use thiserror::Error;

/// Failure of a call to the post store, as seen by the feed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    // Сеть, таймаут, 5xx, ответ не разобран
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    // Хранилище отвергло данные поста
    #[error("Validation rejected: {0}")]
    ValidationRejected(String),
}

impl StoreError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, StoreError::StoreUnavailable(_))
    }

    pub fn is_validation_rejected(&self) -> bool {
        matches!(self, StoreError::ValidationRejected(_))
    }
}

/// A draft that cannot be submitted because required fields are empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Missing required fields: {}", join_fields(.missing))]
pub struct DraftError {
    pub missing: Vec<FormField>,
}

fn join_fields(fields: &[FormField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}
