use crate::domain::post::CreatePostRequest;
use crate::domain::{DomainError, Post};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, req: CreatePostRequest) -> Result<Post, DomainError>;
    async fn list(&self) -> Result<Vec<Post>, DomainError>;
}

struct PostTable {
    posts: Vec<Post>,
    next_id: u64,
}

/// Posts kept in process memory, in id order. Lost on restart.
pub struct InMemoryPostRepository {
    table: RwLock<PostTable>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(PostTable {
                posts: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let mut table = self.table.write().await;

        // Wall clock may step back; ids and timestamps must not disagree
        let created_at = match table.posts.last() {
            Some(last) => Utc::now().max(last.created_at),
            None => Utc::now(),
        };

        let post = Post {
            id: table.next_id,
            title: req.title,
            body: req.body,
            author: req.author,
            created_at,
        };
        table.next_id += 1;
        table.posts.push(post.clone());

        Ok(post)
    }

    async fn list(&self) -> Result<Vec<Post>, DomainError> {
        let table = self.table.read().await;
        Ok(table.posts.clone())
    }
}
