use blog_core::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlogClientError {
    // HTTP ошибки
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    // Бизнес-логика ошибки
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // Транспортные ошибки
    #[error("Transport error: {0}")]
    TransportError(String),

    // Ошибки сериализации/десериализации
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl BlogClientError {
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, BlogClientError::InvalidRequest(_))
    }
}

impl From<serde_json::Error> for BlogClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Only a rejected payload is the caller's fault; everything else means the
/// store could not be reached or answered nonsense.
impl From<BlogClientError> for StoreError {
    fn from(err: BlogClientError) -> Self {
        match err {
            BlogClientError::InvalidRequest(message) => StoreError::ValidationRejected(message),
            other => StoreError::StoreUnavailable(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_maps_to_validation_rejected() {
        let err: StoreError =
            BlogClientError::InvalidRequest("Title cannot be empty".into()).into();
        assert_eq!(
            err,
            StoreError::ValidationRejected("Title cannot be empty".into())
        );
    }

    #[test]
    fn transport_and_decode_errors_map_to_unavailable() {
        let err: StoreError = BlogClientError::TransportError("HTTP 500".into()).into();
        assert!(err.is_unavailable());

        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: StoreError = BlogClientError::from(json_err).into();
        assert!(err.is_unavailable());
    }
}
