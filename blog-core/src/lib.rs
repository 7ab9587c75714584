pub mod error;
pub mod feed;
pub mod models;

pub use error::{DraftError, StoreError};
pub use feed::{Command, FeedController, FeedPhase, FeedView, Msg};
pub use models::{ErrorResponse, FormField, NewPost, Post, PostDraft};
