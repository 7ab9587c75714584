use blog_core::{ErrorResponse, NewPost, Post, StoreError};
use gloo_net::http::Request;

const API_BASE: &str = "http://localhost:3000";

/// Browser-side post store client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: API_BASE.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        let response = Request::get(&self.url("/api/posts"))
            .send()
            .await
            .map_err(unavailable)?;

        let status = response.status();
        let text = response.text().await.map_err(unavailable)?;

        if status == 200 {
            serde_json::from_str(&text).map_err(unavailable)
        } else {
            Err(error_for_status(status, &text))
        }
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<(), StoreError> {
        let response = Request::post(&self.url("/api/posts"))
            .json(post)
            .map_err(unavailable)?
            .send()
            .await
            .map_err(unavailable)?;

        let status = response.status();
        if (200..300).contains(&status) {
            return Ok(());
        }

        let text = response.text().await.map_err(unavailable)?;
        Err(error_for_status(status, &text))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn unavailable(err: impl std::fmt::Display) -> StoreError {
    StoreError::StoreUnavailable(err.to_string())
}

fn error_for_status(status: u16, body: &str) -> StoreError {
    // Пытаемся распарсить сообщение об ошибке
    let message = match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) => err.error,
        Err(_) => body.to_string(),
    };

    match status {
        400 | 422 => StoreError::ValidationRejected(message),
        _ => StoreError::StoreUnavailable(format!("HTTP {}: {}", status, message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_payload_keeps_server_message() {
        assert_eq!(
            error_for_status(400, r#"{"error":"Validation error: Body cannot be empty"}"#),
            StoreError::ValidationRejected("Validation error: Body cannot be empty".into())
        );
    }

    #[test]
    fn other_statuses_are_unavailable() {
        assert_eq!(
            error_for_status(503, "maintenance"),
            StoreError::StoreUnavailable("HTTP 503: maintenance".into())
        );
    }
}
