pub mod error;
pub mod http_client;
pub mod session;
pub mod store;

pub use blog_core::{NewPost, Post, PostDraft, StoreError};
pub use error::BlogClientError;
pub use http_client::HttpClient;
pub use session::FeedSession;
pub use store::PostStore;
