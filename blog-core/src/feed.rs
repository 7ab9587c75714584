//! Post feed controller.
//!
//! The controller is a plain state machine: every input is a [`Msg`], and
//! [`FeedController::update`] answers with the store calls ([`Command`]s) the
//! driver has to run. The driver runs them however it likes (tokio task,
//! `spawn_local`, inline in a test) and feeds each result back as another
//! `Msg`. Results are applied in arrival order, so when fetches overlap the
//! one that resolves last decides the list.

use crate::error::{DraftError, StoreError};
use crate::models::{FormField, NewPost, Post, PostDraft};

pub enum Msg {
    /// Re-fetch the whole list. Sent once at activation.
    Refresh,
    PostsLoaded(Result<Vec<Post>, StoreError>),
    OpenForm,
    CloseForm,
    EditField(FormField, String),
    Submit(PostDraft),
    PostCreated(Result<(), StoreError>),
}

/// Store call requested by the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchPosts,
    CreatePost(NewPost),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedPhase {
    Idle,
    Loading,
    Loaded,
}

/// Render-ready snapshot for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedView<'a> {
    pub posts: &'a [Post],
    pub loading: bool,
    pub form_open: bool,
}

#[derive(Debug, Default)]
pub struct FeedController {
    posts: Vec<Post>,
    form: PostDraft,
    form_open: bool,
    form_error: Option<DraftError>,
    last_error: Option<StoreError>,
    in_flight: usize,
    started: bool,
}

impl FeedController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the initial fetch.
    pub fn activate(&mut self) -> Vec<Command> {
        self.update(Msg::Refresh)
    }

    pub fn update(&mut self, msg: Msg) -> Vec<Command> {
        match msg {
            Msg::Refresh => vec![self.issue(Command::FetchPosts)],

            Msg::PostsLoaded(result) => {
                self.retire();
                match result {
                    Ok(posts) => {
                        tracing::debug!("Posts loaded: {}", posts.len());
                        self.posts = posts;
                        self.last_error = None;
                    }
                    Err(e) => {
                        tracing::error!("Error fetching posts: {}", e);
                        self.last_error = Some(e);
                    }
                }
                vec![]
            }

            Msg::OpenForm => {
                self.form_open = true;
                vec![]
            }

            Msg::CloseForm => {
                self.form_open = false;
                self.form_error = None;
                vec![]
            }

            Msg::EditField(field, value) => {
                if !value.is_empty() {
                    self.fill_missing(field);
                }
                self.form.set_field(field, value);
                vec![]
            }

            Msg::Submit(draft) => {
                self.form = draft;
                match self.form.validate() {
                    Ok(post) => {
                        self.form_error = None;
                        tracing::debug!("Submitting post '{}' by {}", post.title, post.author);
                        vec![self.issue(Command::CreatePost(post))]
                    }
                    Err(e) => {
                        tracing::debug!("Submit ignored: {}", e);
                        self.form_error = Some(e);
                        vec![]
                    }
                }
            }

            Msg::PostCreated(result) => {
                self.retire();
                match result {
                    Ok(()) => {
                        self.form_open = false;
                        self.form = PostDraft::default();
                    }
                    Err(e) => {
                        tracing::error!("Error creating post: {}", e);
                        self.last_error = Some(e);
                    }
                }
                vec![self.issue(Command::FetchPosts)]
            }
        }
    }

    fn issue(&mut self, command: Command) -> Command {
        self.started = true;
        self.in_flight += 1;
        command
    }

    fn retire(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    fn fill_missing(&mut self, field: FormField) {
        if let Some(error) = self.form_error.as_mut() {
            error.missing.retain(|f| *f != field);
            if error.missing.is_empty() {
                self.form_error = None;
            }
        }
    }

    pub fn view(&self) -> FeedView<'_> {
        FeedView {
            posts: &self.posts,
            loading: self.is_loading(),
            form_open: self.form_open,
        }
    }

    pub fn phase(&self) -> FeedPhase {
        if self.is_loading() {
            FeedPhase::Loading
        } else if self.started {
            FeedPhase::Loaded
        } else {
            FeedPhase::Idle
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn form(&self) -> &PostDraft {
        &self.form
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    /// Why the last submit was refused locally, if it was.
    pub fn form_error(&self) -> Option<&DraftError> {
        self.form_error.as_ref()
    }

    /// Most recent store failure; cleared by the next successful fetch.
    pub fn last_error(&self) -> Option<&StoreError> {
        self.last_error.as_ref()
    }
}
