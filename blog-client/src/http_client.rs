use crate::error::BlogClientError;
use blog_core::{ErrorResponse, NewPost, Post};
use reqwest::{Client, StatusCode};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .connect_timeout(Duration::from_secs(5))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, BlogClientError> {
        let url = self.url("/api/posts");
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        match status {
            StatusCode::OK => Ok(serde_json::from_str(&text)?),
            _ => Err(error_for_status(status, &text)),
        }
    }

    pub async fn create_post(&self, post: &NewPost) -> Result<Post, BlogClientError> {
        let url = self.url("/api/posts");
        tracing::debug!("POST {}", url);

        let response = self.client.post(&url).json(post).send().await?;
        let status = response.status();
        let text = response.text().await?;

        match status {
            StatusCode::OK | StatusCode::CREATED => Ok(serde_json::from_str(&text)?),
            _ => Err(error_for_status(status, &text)),
        }
    }
}

/// Turns a non-success response into an error, preferring the server's
/// `{"error": ...}` message over the raw body.
fn error_for_status(status: StatusCode, body: &str) -> BlogClientError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string());

    match status {
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            BlogClientError::InvalidRequest(message)
        }
        _ => BlogClientError::TransportError(format!("HTTP {}: {}", status, message)),
    }
}
