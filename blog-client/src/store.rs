use crate::http_client::HttpClient;
use async_trait::async_trait;
use blog_core::{NewPost, Post, StoreError};

/// The remote store of record for posts.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Every post, in the order the store keeps them.
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    /// Fields must already be non-empty; the created post is not returned.
    async fn create_post(&self, post: &NewPost) -> Result<(), StoreError>;
}

#[async_trait]
impl PostStore for HttpClient {
    async fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(HttpClient::list_posts(self).await?)
    }

    async fn create_post(&self, post: &NewPost) -> Result<(), StoreError> {
        let created = HttpClient::create_post(self, post).await?;
        tracing::info!("Post created: id={}", created.id);
        Ok(())
    }
}
