//! Tokio driver for [`FeedController`].

use crate::store::PostStore;
use blog_core::{
    Command, DraftError, FeedController, FeedPhase, FeedView, Msg, PostDraft, StoreError,
};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Owns one feed controller and runs its store calls.
///
/// Every [`Command`] runs in its own task and posts its result back over a
/// channel; only the session applies results to the controller. Calls are
/// never cancelled, so overlapping requests all land and the last one to
/// resolve decides the list.
pub struct FeedSession<S> {
    store: Arc<S>,
    controller: FeedController,
    tx: mpsc::UnboundedSender<Msg>,
    rx: mpsc::UnboundedReceiver<Msg>,
}

impl<S: PostStore + 'static> FeedSession<S> {
    /// Creates the session and starts the initial fetch.
    pub fn activate(store: Arc<S>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut session = Self {
            store,
            controller: FeedController::new(),
            tx,
            rx,
        };
        let commands = session.controller.activate();
        session.run(commands);
        session
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let commands = self.controller.update(msg);
        self.run(commands);
    }

    fn run(&self, commands: Vec<Command>) {
        for command in commands {
            let store = self.store.clone();
            let tx = self.tx.clone();
            let creating = matches!(command, Command::CreatePost(_));

            let call = tokio::spawn(async move {
                match command {
                    Command::FetchPosts => Msg::PostsLoaded(store.list_posts().await),
                    Command::CreatePost(post) => Msg::PostCreated(store.create_post(&post).await),
                }
            });

            // Every issued command must come back, even if its task died
            tokio::spawn(async move {
                let msg = match call.await {
                    Ok(msg) => msg,
                    Err(e) => {
                        tracing::error!("Store call aborted: {}", e);
                        let err = StoreError::StoreUnavailable(format!("store call aborted: {e}"));
                        if creating {
                            Msg::PostCreated(Err(err))
                        } else {
                            Msg::PostsLoaded(Err(err))
                        }
                    }
                };
                // The session may already be gone; nothing to update then
                let _ = tx.send(msg);
            });
        }
    }

    /// Applies results until no store call is outstanding.
    pub async fn settle(&mut self) {
        while self.controller.is_loading() {
            match self.rx.recv().await {
                Some(msg) => self.dispatch(msg),
                None => break,
            }
        }
    }

    /// Applies the next store result, waiting for it if needed.
    pub async fn step(&mut self) -> bool {
        match self.rx.recv().await {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    pub fn refresh(&mut self) {
        self.dispatch(Msg::Refresh);
    }

    pub fn open_form(&mut self) {
        self.dispatch(Msg::OpenForm);
    }

    pub fn close_form(&mut self) {
        self.dispatch(Msg::CloseForm);
    }

    pub fn submit(&mut self, draft: PostDraft) {
        self.dispatch(Msg::Submit(draft));
    }

    pub fn view(&self) -> FeedView<'_> {
        self.controller.view()
    }

    pub fn phase(&self) -> FeedPhase {
        self.controller.phase()
    }

    pub fn form(&self) -> &PostDraft {
        self.controller.form()
    }

    pub fn form_error(&self) -> Option<&DraftError> {
        self.controller.form_error()
    }

    pub fn last_error(&self) -> Option<&StoreError> {
        self.controller.last_error()
    }
}
