use crate::data::post_repository::PostRepository;
use crate::domain::post::{CreatePostRequest, PostResponse};
use crate::domain::DomainError;
use std::sync::Arc;

pub struct BlogService {
    post_repo: Arc<dyn PostRepository + Send + Sync>,
}

impl BlogService {
    pub fn new(post_repo: Arc<dyn PostRepository + Send + Sync>) -> Self {
        Self { post_repo }
    }

    pub async fn create_post(&self, req: CreatePostRequest) -> Result<PostResponse, DomainError> {
        // Validate input
        if req.title.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Title cannot be empty".to_string(),
            ));
        }
        if req.body.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Body cannot be empty".to_string(),
            ));
        }
        if req.author.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "Author cannot be empty".to_string(),
            ));
        }

        let post = self.post_repo.create(req).await?;

        tracing::info!("Post created: id={}, author={}", post.id, post.author);

        Ok(PostResponse::from(post))
    }

    pub async fn list_posts(&self) -> Result<Vec<PostResponse>, DomainError> {
        let posts = self.post_repo.list().await?;

        Ok(posts.into_iter().map(PostResponse::from).collect())
    }
}
