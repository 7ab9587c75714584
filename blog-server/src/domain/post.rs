use chrono::{DateTime, Utc};

pub use blog_core::NewPost as CreatePostRequest;
pub use blog_core::Post as PostResponse;

#[derive(Debug, Clone)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            author: post.author,
            // Saturates after year 2262
            timestamp: post.created_at.timestamp_nanos_opt().unwrap_or(i64::MAX),
        }
    }
}
